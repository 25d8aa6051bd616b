//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps key and button presses to game actions.
//
// Architecture:
//   KeyDown / MouseButtonDown → HashMap lookup → Action
//
// Releases and pointer motion never produce actions; games read those
// from the state tracker.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::Action,
    event::{InputEvent, KeyCode, MouseButton},
};

//=== ActionMapper ========================================================

/// Binding tables for keys and mouse buttons.
pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, A>,
    mouse_bindings: HashMap<MouseButton, A>,
}

impl<A: Action> ActionMapper<A> {
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            mouse_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key; rebinding replaces the previous action.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) {
        self.key_bindings.insert(key, action);
    }

    /// Binds a mouse button; rebinding replaces the previous action.
    pub(crate) fn bind_mouse(&mut self, button: MouseButton, action: A) {
        self.mouse_bindings.insert(button, action);
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps a press event to its bound action.
    pub(crate) fn map_event(&self, event: &InputEvent) -> Option<A> {
        match event {
            InputEvent::KeyDown(key) => self.key_bindings.get(key).copied(),
            InputEvent::MouseButtonDown(button) => self.mouse_bindings.get(button).copied(),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
