//=========================================================================
// Parts & Slots
//=========================================================================
//
// Part kinds, the slot layout of a shell, and the random pool order.
//
// Slot layout (fractions of the shell size, from its top-left corner):
// ```text
//   ┌──────────────────────────┐
//   │   [CPU]      [RAM]       │  0.2h
//   │                          │
//   │   [GPU]                  │  0.5h
//   │                          │
//   └──────────────────────────┘
//     0.2w        0.5w
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Rect, Vec2};
use crate::games::GameRng;

//=== Constants ===========================================================

/// Edge length of every slot.
pub const SLOT_SIZE: f32 = 60.0;

//=== PartKind ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartKind {
    Cpu,
    Ram,
    Gpu,
}

impl PartKind {
    /// Every kind; one slot and one part of each per shell.
    pub const ALL: [PartKind; 3] = [PartKind::Cpu, PartKind::Ram, PartKind::Gpu];

    /// Label drawn in an empty slot.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Ram => "RAM",
            Self::Gpu => "GPU",
        }
    }

    pub fn sprite(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Ram => "ram",
            Self::Gpu => "gpu",
        }
    }

    /// Slot rect relative to a shell of the given size.
    pub fn slot_offset(self, shell_size: Vec2) -> Rect {
        let (fx, fy) = match self {
            Self::Cpu => (0.2, 0.2),
            Self::Gpu => (0.2, 0.5),
            Self::Ram => (0.5, 0.2),
        };
        Rect::new(shell_size.x * fx, shell_size.y * fy, SLOT_SIZE, SLOT_SIZE)
    }
}

impl std::fmt::Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

//=== Part ================================================================

/// A draggable component. Lives in the pool or in a slot, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub kind: PartKind,
    pub rect: Rect,
}

impl Part {
    pub fn new(kind: PartKind, size: f32) -> Self {
        Self {
            kind,
            rect: Rect::new(0.0, 0.0, size, size),
        }
    }

    pub fn sprite(&self) -> &'static str {
        self.kind.sprite()
    }
}

//=== Order ===============================================================

/// A random permutation of every part kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    kinds: Vec<PartKind>,
}

impl Order {
    pub fn random(rng: &mut GameRng) -> Self {
        let mut kinds = PartKind::ALL.to_vec();
        rng.shuffle(&mut kinds);
        Self { kinds }
    }

    pub fn kinds(&self) -> &[PartKind] {
        &self.kinds
    }

    /// Fresh parts in this order.
    pub fn parts(&self, size: f32) -> Vec<Part> {
        self.kinds.iter().map(|kind| Part::new(*kind, size)).collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
