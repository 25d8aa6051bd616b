//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking with per-tick deltas.
//
// Architecture:
//   InputEvent → process_event() → HashSet (keys/buttons held) → query
//
// Tick lifecycle: clear() → process_event() → query
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};
use crate::core::geometry::Vec2;

//=== StateTracker ========================================================

/// Tracks persistent state (keys held, pointer) and per-tick deltas
/// (keys pressed/released, pointer motion).
pub struct StateTracker {
    //--- Persistent State (survives tick boundary) -----------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: Vec2,

    //--- Tick Deltas (reset via clear()) ---------------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    mouse_moved: bool,
}

impl StateTracker {
    /// Creates a tracker with nothing held and the pointer at the origin.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
            mouse_position: Vec2::ZERO,
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            buttons_pressed: HashSet::new(),
            buttons_released: HashSet::new(),
            mouse_moved: false,
        }
    }

    //--- Tick Processing --------------------------------------------------

    /// Clears tick-specific deltas.
    pub(super) fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.mouse_moved = false;
    }

    /// Applies events in order.
    #[cfg(test)]
    pub(super) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Applies one event; returns `true` if it changed held state.
    ///
    /// A `KeyDown` for a key already held (OS auto-repeat) returns `false`.
    pub(super) fn process_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown(key) => {
                let pressed = self.keys_down.insert(key);
                if pressed {
                    self.keys_pressed.insert(key);
                }
                pressed
            }

            InputEvent::KeyUp(key) => {
                let released = self.keys_down.remove(&key);
                if released {
                    self.keys_released.insert(key);
                }
                released
            }

            InputEvent::MouseButtonDown(button) => {
                let pressed = self.buttons_down.insert(button);
                if pressed {
                    self.buttons_pressed.insert(button);
                }
                pressed
            }

            InputEvent::MouseButtonUp(button) => {
                let released = self.buttons_down.remove(&button);
                if released {
                    self.buttons_released.insert(button);
                }
                released
            }

            InputEvent::MouseMoved { x, y } => {
                let position = Vec2::new(x, y);
                let moved = position != self.mouse_position;
                if moved {
                    self.mouse_position = position;
                    self.mouse_moved = true;
                }
                moved
            }
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this tick.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this tick.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Pointer position in logical pixels.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Returns `true` if the pointer moved this tick.
    pub fn mouse_moved(&self) -> bool {
        self.mouse_moved
    }
}

impl Default for StateTracker {
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

    fn tick(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
    }

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    #[test]
    fn key_pressed_only_on_transition_tick() {
        let mut tracker = StateTracker::new();

        tick(&mut tracker, &[InputEvent::KeyDown(KeyCode::Space)]);
        assert!(tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));

        tick(&mut tracker, &[]);
        assert!(!tracker.is_key_pressed(KeyCode::Space), "Held key is not re-pressed");
        assert!(tracker.is_key_down(KeyCode::Space));

        tick(&mut tracker, &[InputEvent::KeyUp(KeyCode::Space)]);
        assert!(!tracker.is_key_down(KeyCode::Space));
        assert!(tracker.is_key_released(KeyCode::Space));
    }

    #[test]
    fn auto_repeat_does_not_re_press() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[InputEvent::KeyDown(KeyCode::ArrowLeft)]);
        tick(&mut tracker, &[InputEvent::KeyDown(KeyCode::ArrowLeft)]);

        assert!(!tracker.is_key_pressed(KeyCode::ArrowLeft));
        assert!(tracker.is_key_down(KeyCode::ArrowLeft));
    }

    #[test]
    fn process_event_reports_transitions_only() {
        let mut tracker = StateTracker::new();
        assert!(tracker.process_event(&InputEvent::KeyDown(KeyCode::Space)));
        assert!(!tracker.process_event(&InputEvent::KeyDown(KeyCode::Space)), "Repeat is not a press");
        assert!(tracker.process_event(&InputEvent::KeyUp(KeyCode::Space)));
        assert!(!tracker.process_event(&InputEvent::KeyUp(KeyCode::Space)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[InputEvent::KeyUp(KeyCode::Enter)]);
        assert!(!tracker.is_key_released(KeyCode::Enter));
    }

    #[test]
    fn press_and_release_in_one_tick() {
        let mut tracker = StateTracker::new();
        tick(
            &mut tracker,
            &[InputEvent::KeyDown(KeyCode::Space), InputEvent::KeyUp(KeyCode::Space)],
        );

        assert!(tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_released(KeyCode::Space));
        assert!(!tracker.is_key_down(KeyCode::Space));
    }

    //=====================================================================
    // Mouse Tests
    //=====================================================================

    #[test]
    fn button_lifecycle() {
        let mut tracker = StateTracker::new();

        tick(&mut tracker, &[InputEvent::MouseButtonDown(MouseButton::Left)]);
        assert!(tracker.is_button_pressed(MouseButton::Left));
        assert!(tracker.is_button_down(MouseButton::Left));

        tick(&mut tracker, &[InputEvent::MouseButtonUp(MouseButton::Left)]);
        assert!(tracker.is_button_released(MouseButton::Left));
        assert!(!tracker.is_button_down(MouseButton::Left));
    }

    #[test]
    fn last_motion_wins_and_flags_movement() {
        let mut tracker = StateTracker::new();
        tick(
            &mut tracker,
            &[
                InputEvent::MouseMoved { x: 10.0, y: 10.0 },
                InputEvent::MouseMoved { x: 20.0, y: 30.0 },
            ],
        );
        assert_eq!(tracker.mouse_position(), Vec2::new(20.0, 30.0));
        assert!(tracker.mouse_moved());

        tick(&mut tracker, &[]);
        assert!(!tracker.mouse_moved(), "Motion flag resets each tick");
        assert_eq!(tracker.mouse_position(), Vec2::new(20.0, 30.0), "Position persists");
    }

    #[test]
    fn motion_to_same_position_is_not_movement() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[InputEvent::MouseMoved { x: 0.0, y: 0.0 }]);
        assert!(!tracker.mouse_moved());
    }
}
