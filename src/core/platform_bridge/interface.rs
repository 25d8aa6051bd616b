//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform thread to the logic thread.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input buffered since the previous redraw.
    ///
    /// - `discrete`: key and button transitions (order significant)
    /// - `continuous`: pointer motion, coalesced to the latest position
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested; the logic thread exits on receipt.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Fatal platform errors returned from [`Engine::run`](crate::Engine::run).
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop terminated with an error.
    EventLoopExecution(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_display_names_phase() {
        let err = PlatformError::EventLoopCreation("no display".into());
        assert_eq!(err.to_string(), "Event loop creation failed: no display");

        let err = PlatformError::EventLoopExecution("lost".into());
        assert_eq!(err.to_string(), "Event loop error: lost");
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error + Send + 'static>() {}
        assert_error::<PlatformError>();
    }
}
