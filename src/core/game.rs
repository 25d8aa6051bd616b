//=========================================================================
// Game Trait
//=========================================================================
//
// The seam between the engine and a game controller.
//
// Lifecycle (logic thread):
// ```text
//   bind_inputs()            once, before the first tick
//        │
//        ▼
//   ┌─► update(&GlobalContext)   input state + this tick's actions
//   │        │
//   │        ▼
//   └── draw(&mut DrawList)      snapshot sent to the platform
// ```
//
// The controller is moved onto the logic thread and never shared, so it
// only needs `Send`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::globals::GlobalContext;
use super::input::{Action, InputSystem};
use super::render::DrawList;

//=== Game ================================================================

/// A game driven by the engine's fixed-rate tick.
pub trait Game: Send + 'static {
    /// Actions this game binds keys and buttons to.
    type Action: Action;

    /// Installs key and button bindings.
    fn bind_inputs(&self, input: &mut InputSystem<Self::Action>);

    /// Advances the game by one tick.
    ///
    /// Actions mapped this tick are on `ctx.message_bus` under
    /// `Self::Action`; held keys and the pointer are on `ctx.input_state`.
    fn update(&mut self, ctx: &GlobalContext);

    /// Records the current frame into `frame` (already cleared).
    fn draw(&self, frame: &mut DrawList);
}
