//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform layer (winit, main thread) and the
// logic thread.
//
// Components:
// - `interface`: messages crossing the thread boundary and errors
// - `event_collector`: logic-side draining of platform messages
//
// Data flow:
//   platform ──PlatformEvent──► EventCollector ──batches──► GlobalContext
//   platform ◄────DrawList───── orchestrator (one snapshot per tick)
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
