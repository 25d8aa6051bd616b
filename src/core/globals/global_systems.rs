//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Systems operate on GlobalContext data before the game's update runs.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputSystem};

//=== GlobalSystems =======================================================

/// Engine-level logic systems owned by the orchestrator.
pub struct GlobalSystems<A: Action> {
    /// Key/button → action bindings, configured by `Game::bind_inputs`.
    pub input: InputSystem<A>,
}

impl<A: Action> GlobalSystems<A> {
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Turns this tick's input into state and published actions.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input Processing**: frame events → `StateTracker` + actions
    /// 2. **Action Publishing**: stale actions cleared, fresh ones pushed
    pub(crate) fn update(&mut self, context: &mut GlobalContext) {
        self.input
            .process_frame(&mut context.input_state, &context.frame_events);
        context.frame_events.clear();

        context.message_bus.clear::<A>();
        for action in self.input.actions() {
            context.message_bus.push(*action);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
