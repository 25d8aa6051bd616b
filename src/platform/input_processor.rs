//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit events into engine InputEvents.
//
// Architecture:
//   winit events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Stateful viewport tracking: the cursor arrives in physical pixels of
// the current window size and leaves in the logical coordinates games
// draw in, so DPI scaling and window resizes are invisible past this
// point. Keys the engine does not name are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

/// Converts winit events to engine InputEvents with viewport tracking.
pub(crate) struct InputProcessor {
    logical: (f32, f32),
    physical: (f32, f32),
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    /// Starts with the physical viewport equal to the logical one.
    pub(crate) fn new(logical_width: u32, logical_height: u32) -> Self {
        let logical = (logical_width as f32, logical_height as f32);
        Self {
            logical,
            physical: logical,
        }
    }

    //--- Viewport State ---------------------------------------------------

    /// Records the window's physical size; zero sizes (minimised) are ignored.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.physical = (width as f32, height as f32);
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a winit KeyEvent (filters unmapped keys and OS auto-repeat).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        Self::key_input(key_event.physical_key, key_event.state, key_event.repeat)
    }

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let mouse_button = MouseButton::from(button);

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown(mouse_button),
            ElementState::Released => InputEvent::MouseButtonUp(mouse_button),
        }
    }

    /// Maps a physical cursor position into logical coordinates.
    pub(crate) fn process_mouse_move(&self, x: f64, y: f64) -> InputEvent {
        InputEvent::MouseMoved {
            x: x as f32 * self.logical.0 / self.physical.0,
            y: y as f32 * self.logical.1 / self.physical.1,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_input(physical_key: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
        if repeat {
            return None;
        }

        let key_code = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if matches!(key_code, KeyCode::Unidentified) {
            return None;
        }

        Some(Self::key_input_event(key_code, state))
    }

    fn key_input_event(key: KeyCode, state: ElementState) -> InputEvent {
        match state {
            ElementState::Pressed => InputEvent::KeyDown(key),
            ElementState::Released => InputEvent::KeyUp(key),
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts winit physical key codes to engine key codes.
///
/// Arrows, Space, Enter and Escape are mapped; everything else returns
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        match code {
            //--- Arrows -------------------------------------------------------
            WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
            WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
            WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
            WinitKeyCode::ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
            WinitKeyCode::Escape => KeyCode::Escape,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts winit mouse buttons to engine buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_transitions_follow_element_state() {
        assert_eq!(
            InputProcessor::key_input_event(KeyCode::Space, ElementState::Pressed),
            InputEvent::KeyDown(KeyCode::Space)
        );
        assert_eq!(
            InputProcessor::key_input_event(KeyCode::Space, ElementState::Released),
            InputEvent::KeyUp(KeyCode::Space)
        );
    }

    #[test]
    fn auto_repeat_is_dropped() {
        let space = PhysicalKey::Code(WinitKeyCode::Space);
        assert_eq!(
            InputProcessor::key_input(space, ElementState::Pressed, false),
            Some(InputEvent::KeyDown(KeyCode::Space))
        );
        assert_eq!(
            InputProcessor::key_input(space, ElementState::Pressed, true),
            None,
            "Held key must not re-send KeyDown"
        );
    }

    #[test]
    fn unmapped_physical_keys_are_dropped() {
        let key_a = PhysicalKey::Code(WinitKeyCode::KeyA);
        assert_eq!(InputProcessor::key_input(key_a, ElementState::Pressed, false), None);
    }

    #[test]
    fn keycode_conversion_filters_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::Unidentified);
    }

    #[test]
    fn keycode_conversion_named_keys() {
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
    }

    #[test]
    fn mouse_button_conversion() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Right), MouseButton::Right);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }

    #[test]
    fn mouse_button_states() {
        let processor = InputProcessor::new(800, 600);
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed),
            InputEvent::MouseButtonDown(MouseButton::Left)
        );
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Released),
            InputEvent::MouseButtonUp(MouseButton::Left)
        );
    }

    //=====================================================================
    // Viewport Tests
    //=====================================================================

    #[test]
    fn cursor_passes_through_at_logical_size() {
        let processor = InputProcessor::new(800, 600);
        assert_eq!(
            processor.process_mouse_move(123.5, 456.0),
            InputEvent::MouseMoved { x: 123.5, y: 456.0 }
        );
    }

    #[test]
    fn cursor_is_scaled_on_high_dpi() {
        let mut processor = InputProcessor::new(800, 600);
        processor.resize(1600, 1200);

        assert_eq!(
            processor.process_mouse_move(400.0, 850.0),
            InputEvent::MouseMoved { x: 200.0, y: 425.0 }
        );
    }

    #[test]
    fn zero_resize_keeps_previous_viewport() {
        let mut processor = InputProcessor::new(800, 600);
        processor.resize(1600, 1200);
        processor.resize(0, 0);

        assert_eq!(
            processor.process_mouse_move(1600.0, 1200.0),
            InputEvent::MouseMoved { x: 800.0, y: 600.0 }
        );
    }
}
