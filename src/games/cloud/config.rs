//=========================================================================
// Cloud Config
//=========================================================================

/// Tunables for [`CloudGame`](super::CloudGame).
#[derive(Debug, Clone, PartialEq)]
pub struct CloudConfig {
    /// Shows the prologue, instructions and credits screens.
    pub story: bool,

    /// Fixed seed for entity placement; `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Pixels moved per axis per tick while an arrow key is held.
    pub step: f32,

    /// Number of malware hazards placed in the maze.
    pub hazard_count: usize,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            story: true,
            seed: None,
            step: 5.0,
            hazard_count: 2,
        }
    }
}
