//=========================================================================
// Input System
//=========================================================================
//
// Turns each tick's input batches into tracked state and game actions.
//
// Architecture:
// ```text
//  Vec<Vec<InputEvent>> (batches from platform, in arrival order)
//          │
//          ├──► StateTracker   (held keys/buttons, pointer, tick deltas)
//          │
//          └──► ActionMapper   (presses → A)
//                    │
//                    ▼
//               actions: Vec<A>  ── published on MessageBus by GlobalSystems
// ```
//
// Tick lifecycle: process_frame() clears deltas, applies every batch, and
// rebuilds the action list. Queries are valid until the next call.
//
//=========================================================================

//=== Module Declarations =================================================

mod action;
mod action_mapper;
pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::Action;
pub use event::{InputEvent, KeyCode, MouseButton};
pub use state_tracker::StateTracker;

//=== Internal Dependencies ===============================================

use action_mapper::ActionMapper;

//=== InputSystem =========================================================

/// Action bindings plus the current tick's mapped actions.
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
    actions: Vec<A>,
}

impl<A: Action> InputSystem<A> {
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
            actions: Vec::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` presses to `action`.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.mapper.bind_key(key, action);
    }

    /// Binds `button` presses to `action`.
    pub fn bind_mouse(&mut self, button: MouseButton, action: A) {
        self.mapper.bind_mouse(button, action);
    }

    //--- Tick Processing --------------------------------------------------

    /// Applies this tick's batches to `state` and maps presses to actions.
    ///
    /// Actions keep event order, so a Space press followed by a click in the
    /// same tick yields `[confirm, select]`. Only UP → DOWN transitions map;
    /// a repeated `KeyDown` for a held key yields nothing.
    pub fn process_frame(&mut self, state: &mut StateTracker, batches: &[Vec<InputEvent>]) {
        state.clear();
        self.actions.clear();

        for event in batches.iter().flatten() {
            if state.process_event(event) {
                self.actions.extend(self.mapper.map_event(event));
            }
        }
    }

    /// Actions mapped during the last [`process_frame`](Self::process_frame).
    pub fn actions(&self) -> &[A] {
        &self.actions
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Confirm,
        Select,
    }

    impl Action for TestAction {}

    fn bound_system() -> InputSystem<TestAction> {
        let mut input = InputSystem::new();
        input.bind_key(KeyCode::Space, TestAction::Confirm);
        input.bind_mouse(MouseButton::Left, TestAction::Select);
        input
    }

    #[test]
    fn actions_follow_event_order_across_batches() {
        let mut input = bound_system();
        let mut state = StateTracker::new();

        input.process_frame(
            &mut state,
            &[
                vec![InputEvent::KeyDown(KeyCode::Space)],
                vec![InputEvent::MouseButtonDown(MouseButton::Left)],
            ],
        );

        assert_eq!(input.actions(), &[TestAction::Confirm, TestAction::Select]);
        assert!(state.is_key_down(KeyCode::Space));
        assert!(state.is_button_down(MouseButton::Left));
    }

    #[test]
    fn actions_reset_each_tick() {
        let mut input = bound_system();
        let mut state = StateTracker::new();

        input.process_frame(&mut state, &[vec![InputEvent::KeyDown(KeyCode::Space)]]);
        assert_eq!(input.actions().len(), 1);

        input.process_frame(&mut state, &[]);
        assert!(input.actions().is_empty());
        assert!(state.is_key_down(KeyCode::Space));
    }

    #[test]
    fn repeated_key_down_while_held_maps_nothing() {
        let mut input = bound_system();
        let mut state = StateTracker::new();

        input.process_frame(&mut state, &[vec![InputEvent::KeyDown(KeyCode::Space)]]);
        assert_eq!(input.actions(), &[TestAction::Confirm]);

        input.process_frame(&mut state, &[vec![InputEvent::KeyDown(KeyCode::Space)]]);
        assert!(input.actions().is_empty(), "Held key must not repeat its action");

        input.process_frame(
            &mut state,
            &[vec![InputEvent::KeyUp(KeyCode::Space)], vec![InputEvent::KeyDown(KeyCode::Space)]],
        );
        assert_eq!(input.actions(), &[TestAction::Confirm], "Release then press maps again");
    }

    #[test]
    fn repeat_within_one_tick_maps_once() {
        let mut input = bound_system();
        let mut state = StateTracker::new();

        input.process_frame(
            &mut state,
            &[
                vec![InputEvent::KeyDown(KeyCode::Space)],
                vec![InputEvent::KeyDown(KeyCode::Space)],
            ],
        );
        assert_eq!(input.actions().len(), 1);
    }

    #[test]
    fn unbound_input_updates_state_only() {
        let mut input = bound_system();
        let mut state = StateTracker::new();

        input.process_frame(&mut state, &[vec![InputEvent::KeyDown(KeyCode::ArrowUp)]]);

        assert!(input.actions().is_empty());
        assert!(state.is_key_down(KeyCode::ArrowUp));
    }
}
