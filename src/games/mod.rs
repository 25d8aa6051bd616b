//=========================================================================
// Games
//=========================================================================
//
// The two controllers shipped with the arcade.
//
// - `cloud`: maze navigation, resource collection and VM configuration
// - `assembly`: drag-and-drop computer assembly across a run of shells
//
// Neither depends on the other; both only use the engine API.
//
//=========================================================================

pub mod assembly;
pub mod cloud;

mod rng;

pub use rng::GameRng;

//=== Screen ==============================================================

/// Logical width both games lay out against.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Logical height both games lay out against.
pub const SCREEN_HEIGHT: f32 = 600.0;
