//=========================================================================
// Input Buffer
//
// Collects converted input between two redraws, split into discrete and
// continuous events. Acts as a transient aggregator between winit
// callbacks and the channel to the logic thread.
//
// Responsibilities:
// - Keep key/button transitions in arrival order
// - Drop a discrete event identical to the one just buffered (auto-repeat)
// - Coalesce pointer motion to the latest position
// - Hand everything over atomically via `drain()`
//
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    pointer: Option<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 32;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            pointer: None,
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    //
    // The latest pointer position replaces any earlier one.
    //
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.pointer = Some(event);
    }

    //--- Discrete Event Handling -----------------------------------------
    //
    // Duplicate consecutive events are ignored to prevent flooding.
    //
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns `(discrete, continuous)` and empties the buffer, or `None`
    // when nothing was buffered.
    //
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let capacity = self.discrete.capacity();
        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(capacity));
        let continuous = self.pointer.take().into_iter().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + usize::from(self.pointer.is_some())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.pointer.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{KeyCode, MouseButton};

    fn key_down(code: KeyCode) -> InputEvent {
        InputEvent::KeyDown(code)
    }

    fn mouse_move(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::ArrowUp));
        buffer.push_discrete(key_down(KeyCode::ArrowUp));
        buffer.push_discrete(key_down(KeyCode::ArrowLeft));
        buffer.push_discrete(key_down(KeyCode::ArrowUp));

        assert_eq!(buffer.len(), 3, "Only back-to-back repeats are dropped");
    }

    #[test]
    fn pointer_motion_is_coalesced() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(mouse_move(10.0, 10.0));
        buffer.push_continuous(mouse_move(20.0, 30.0));

        let (discrete, continuous) = buffer.drain().unwrap();
        assert!(discrete.is_empty());
        assert_eq!(continuous, vec![mouse_move(20.0, 30.0)]);
    }

    #[test]
    fn drain_keeps_order_and_clears() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(InputEvent::MouseButtonDown(MouseButton::Left));
        buffer.push_discrete(InputEvent::MouseButtonUp(MouseButton::Left));
        buffer.push_continuous(mouse_move(5.0, 5.0));

        let (discrete, continuous) = buffer.drain().unwrap();
        assert_eq!(
            discrete,
            vec![
                InputEvent::MouseButtonDown(MouseButton::Left),
                InputEvent::MouseButtonUp(MouseButton::Left),
            ]
        );
        assert_eq!(continuous.len(), 1);
        assert!(buffer.is_empty());
    }

    #[test]
    fn drain_of_empty_buffer_is_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn drain_keeps_discrete_capacity() {
        let mut buffer = InputBuffer::new();
        for i in 0..64 {
            let key = if i % 2 == 0 { KeyCode::ArrowUp } else { KeyCode::ArrowDown };
            buffer.push_discrete(key_down(key));
        }
        let capacity = buffer.discrete.capacity();

        buffer.drain();

        assert!(buffer.discrete.capacity() >= capacity);
    }
}
