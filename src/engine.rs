//=========================================================================
// Aetheric Arcade Engine
//
// Main entry point and coordinator for a game run.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(game)──>  Engine  ──run()──>  [Runtime]
//         │                               │
//         ├─ with_tps()                   └─ spawns logic thread
//         ├─ with_channel_capacity()         runs platform
//         ├─ with_title()                    blocks until exit
//         └─ with_window_size()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::render::DrawList;
use crate::core::{CoreSystemsOrchestrator, Game};
use crate::platform::{Platform, WindowConfig};

/// Frames in flight between logic and platform; older ones are dropped.
const FRAME_CHANNEL_CAPACITY: usize = 2;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 platform messages
/// - **Title**: "Aetheric Arcade"
/// - **Window size**: 800×600 logical pixels
///
/// # Examples
///
/// ```no_run
/// use aetheric_arcade::prelude::*;
/// use aetheric_arcade::games::assembly::{AssemblyConfig, AssemblyGame};
///
/// EngineBuilder::new()
///     .with_tps(60.0)
///     .with_title("Isaias' Computer Shop")
///     .build(AssemblyGame::new(AssemblyConfig::default()))
///     .run()
///     .expect("platform failed");
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowConfig::default(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.window.title = title.to_owned();
        self
    }

    /// Sets the logical window size games draw into.
    ///
    /// Default: 800×600
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive");
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Builds the engine around `game`.
    ///
    /// The game's input bindings are installed here, before any tick.
    pub fn build<G: Game>(self, game: G) -> Engine<G> {
        info!(
            "Building engine (TPS: {}, channel: {}, window: {}x{})",
            self.tps, self.channel_capacity, self.window.width, self.window.height
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(game),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// A configured game run.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → Game::update → Game::draw
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling, Presentation
///
/// Channels: PlatformEvent (platform → core), DrawList (core → platform)
/// ```
pub struct Engine<G: Game> {
    orchestrator: CoreSystemsOrchestrator<G>,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl<G: Game> Engine<G> {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the input and frame channels
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform sends `WindowClosed` → logic thread exits
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// terminates abnormally. The logic thread is joined either way.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (frame_tx, frame_rx): (Sender<DrawList>, Receiver<DrawList>) =
            bounded(FRAME_CHANNEL_CAPACITY);

        info!("Channels created (input: {}, frames: {})", self.channel_capacity, FRAME_CHANNEL_CAPACITY);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, frame_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx.clone(), frame_rx, self.window);
        info!("Platform initialized, entering event loop");

        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
            // Core may still be waiting on a live sender
            let _ = tx.send(PlatformEvent::WindowClosed);
        }
        drop(tx);

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::globals::GlobalContext;
    use crate::core::input::{Action, InputSystem};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    struct Idle;

    impl Game for Idle {
        type Action = TestAction;
        fn bind_inputs(&self, _input: &mut InputSystem<TestAction>) {}
        fn update(&mut self, _ctx: &GlobalContext) {}
        fn draw(&self, _frame: &mut DrawList) {}
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.window.title, "Aetheric Arcade");
        assert_eq!((builder.window.width, builder.window.height), (800, 600));
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_window_size_panics_on_zero() {
        EngineBuilder::new().with_window_size(0, 600);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_title("Shop")
            .with_window_size(640, 480)
            .build(Idle);

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.window.title, "Shop");
        assert_eq!((engine.window.width, engine.window.height), (640, 480));
    }
}
