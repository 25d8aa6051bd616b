//=========================================================================
// Cloud Entities
//=========================================================================
//
// Player, resources, VMs and hazards. Positions are sprite centres.
//
// Resource lifecycle:
// ```text
//   Free ──(player touches)──► Collected ──(player at VM needing kind)──► Placed(vm)
// ```
//
// A placed resource never changes status again until the round resets.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Rect, Vec2};

//=== Sprite Sizes ========================================================

pub const PLAYER_SIZE: (f32, f32) = (40.0, 30.0);
pub const RESOURCE_SIZE: (f32, f32) = (30.0, 30.0);
pub const VM_SIZE: (f32, f32) = (40.0, 40.0);
pub const HAZARD_SIZE: (f32, f32) = (30.0, 30.0);

/// Where the player starts every round.
pub const PLAYER_START: Vec2 = Vec2::new(50.0, 50.0);

//=== ResourceKind ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Cpu,
    Memory,
    Storage,
}

impl ResourceKind {
    /// Label drawn next to the resource.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Memory => "memory",
            Self::Storage => "storage",
        }
    }

    pub fn sprite(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Memory => "ram",
            Self::Storage => "storage",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

//=== VmId ================================================================

/// Index of a VM within its game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VmId(pub usize);

//=== ResourceStatus ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    /// Lying in the maze, waiting to be picked up.
    Free,

    /// Carried by the player.
    Collected,

    /// Installed on a VM; its position is the VM's.
    Placed(VmId),
}

//=== Player ==============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
}

impl Player {
    pub fn new() -> Self {
        Self { position: PLAYER_START }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.position, PLAYER_SIZE.0, PLAYER_SIZE.1)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

//=== Resource ============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub kind: ResourceKind,
    pub position: Vec2,
    pub status: ResourceStatus,
}

impl Resource {
    pub fn new(kind: ResourceKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            status: ResourceStatus::Free,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.position, RESOURCE_SIZE.0, RESOURCE_SIZE.1)
    }

    pub fn is_free(&self) -> bool {
        self.status == ResourceStatus::Free
    }

    pub fn is_collected(&self) -> bool {
        self.status == ResourceStatus::Collected
    }
}

//=== Vm ==================================================================

/// A puzzle target that needs one resource of each required kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Vm {
    pub id: VmId,
    pub name: &'static str,
    pub position: Vec2,
    required: Vec<ResourceKind>,
    placed: Vec<ResourceKind>,
}

impl Vm {
    /// Creates an empty VM; duplicate kinds in `required` collapse to one.
    pub fn new(id: VmId, name: &'static str, position: Vec2, required: &[ResourceKind]) -> Self {
        let mut required = required.to_vec();
        required.sort_unstable();
        required.dedup();

        Self {
            id,
            name,
            position,
            required,
            placed: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.position, VM_SIZE.0, VM_SIZE.1)
    }

    /// Required kinds, sorted.
    pub fn required(&self) -> &[ResourceKind] {
        &self.required
    }

    /// Placed kinds in placement order.
    pub fn placed(&self) -> &[ResourceKind] {
        &self.placed
    }

    pub fn requires(&self, kind: ResourceKind) -> bool {
        self.required.contains(&kind)
    }

    pub fn holds(&self, kind: ResourceKind) -> bool {
        self.placed.contains(&kind)
    }

    /// Returns `true` if `kind` is required here and not yet placed.
    pub fn accepts(&self, kind: ResourceKind) -> bool {
        self.requires(kind) && !self.holds(kind)
    }

    /// Records `kind` as placed; returns `false` if it was not accepted.
    pub(crate) fn place(&mut self, kind: ResourceKind) -> bool {
        if !self.accepts(kind) {
            return false;
        }
        self.placed.push(kind);
        true
    }

    /// Placed kinds equal required kinds.
    pub fn is_solved(&self) -> bool {
        self.placed.len() == self.required.len() && self.required.iter().all(|k| self.holds(*k))
    }
}

//=== Hazard ==============================================================

/// Malware sprite. Purely decorative: touching it has no effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hazard {
    pub position: Vec2,
}

impl Hazard {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.position, HAZARD_SIZE.0, HAZARD_SIZE.1)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
