//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_arcade::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder};

// Game seam
pub use crate::core::game::Game;
pub use crate::core::globals::GlobalContext;

// Input system
pub use crate::core::input::{Action, InputSystem, KeyCode, MouseButton, StateTracker};

// Message bus
pub use crate::core::message_bus::MessageBus;

// Geometry and drawing
pub use crate::core::geometry::{Rect, Vec2};
pub use crate::core::render::{Color, DrawList};
