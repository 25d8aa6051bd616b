//=========================================================================
// Action Trait
//=========================================================================
//
// Game-defined action identifiers.
//
// Actions are opaque to the engine: it maps presses to them and publishes
// them on the message bus, and the game interprets them.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: cheap passing, binding-table values
/// - `Debug`: logging
/// - `Send + 'static`: published on the message bus of the logic thread
///
/// # Example
///
/// ```
/// use aetheric_arcade::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Confirm, Select }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=========================================================================
// Unit Tests
//=========================================================================
