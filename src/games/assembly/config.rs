//=========================================================================
// Assembly Config
//=========================================================================

/// Tunables for [`AssemblyGame`](super::AssemblyGame).
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyConfig {
    /// Fixed seed for part ordering; `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Number of shells to assemble before the run is finished.
    pub shell_count: usize,

    /// Pixels the shell moves per tick while sliding.
    pub slide_speed: f32,

    /// Edge length of a part sprite in the pool.
    pub part_size: f32,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shell_count: 3,
            slide_speed: 50.0,
            part_size: 60.0,
        }
    }
}
