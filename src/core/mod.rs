//=========================================================================
// Core
//
// Everything that runs on the logic thread, plus the contract with the
// platform layer.
//
// Layout:
// - `game`: the trait each game controller implements
// - `geometry`: Vec2 / Rect and their overlap tests
// - `input`: events, state tracking, action mapping
// - `message_bus`: type-keyed per-tick queues
// - `globals`: GlobalContext (data) and GlobalSystems (logic)
// - `render`: draw lists and the software canvas
// - `platform_bridge`: cross-thread messages and the event collector
// - `orchestrator`: the fixed-rate logic loop
//
//=========================================================================

pub mod game;
pub mod geometry;
pub mod globals;
pub mod input;
pub mod message_bus;
pub mod platform_bridge;
pub mod render;

pub(crate) mod orchestrator;

//=== Re-exports ==========================================================

pub use game::Game;
pub use input::Action;
pub(crate) use orchestrator::CoreSystemsOrchestrator;
