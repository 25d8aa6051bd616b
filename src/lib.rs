//=========================================================================
// Aetheric Arcade: Library Root
//
// Two small educational games on a minimal fixed-tick engine.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the game controllers so binaries and tests can drive them
// - Keep the winit/softbuffer platform layer private
//
// Typical usage:
// ```no_run
// use aetheric_arcade::prelude::*;
// use aetheric_arcade::games::cloud::{CloudConfig, CloudGame};
//
// EngineBuilder::new()
//     .build(CloudGame::new(CloudConfig::default()))
//     .run()
//     .expect("platform failed");
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the logic-thread systems: input, message bus, geometry,
// rendering primitives and the `Game` trait.
//
// `games` holds the two controllers built on top of it.
//
pub mod core;
pub mod games;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the OS window, winit event loop and softbuffer surface,
// and stays private.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
pub use platform::PresentError;
