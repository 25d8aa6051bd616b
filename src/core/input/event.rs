//=========================================================================
// Input Event Types
//
// Engine-side representation of low-level input.
//
// The platform layer converts winit events into these types before they
// cross the thread boundary, so nothing past the platform bridge depends
// on winit.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held / pressed / released, pointer)
//         ↓
//    ActionMapper (game actions)
// ```
//
// Coverage is limited to what the games read: arrows, Space, Enter,
// Escape, the pointer and its buttons.
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side, thumb and any other buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,

    /// Any key the engine does not name.
    ///
    /// The platform layer drops these before buffering.
    Unidentified,
}

//=== InputEvent ==========================================================

/// One input occurrence, as delivered by the platform layer.
///
/// - **KeyDown/KeyUp**: discrete keyboard transitions
/// - **MouseButtonDown/MouseButtonUp**: discrete pointer button transitions
/// - **MouseMoved**: pointer position in logical pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),
    MouseMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Returns `true` for button and key transitions, whose order matters.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Self::MouseMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
