//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container handed to the game each tick.
//
// Contains state data the game reads:
// - input_state: held keys/buttons, pointer, this tick's transitions
// - message_bus: this tick's mapped actions (and any other messages)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, StateTracker};
use crate::core::message_bus::MessageBus;

//=== GlobalContext =======================================================

/// Shared context data read by the game during [`Game::update`].
///
/// [`Game::update`]: crate::core::game::Game::update
pub struct GlobalContext {
    /// Raw input state for held keys and pointer queries.
    pub input_state: StateTracker,

    /// Type-keyed queues; actions of the game's action type are
    /// republished here every tick.
    pub message_bus: MessageBus,

    /// Input batches collected this tick, consumed by the input system.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl GlobalContext {
    /// Creates a context with no input and empty queues.
    pub fn new() -> Self {
        Self {
            input_state: StateTracker::new(),
            message_bus: MessageBus::new(),
            frame_events: Vec::new(),
        }
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
