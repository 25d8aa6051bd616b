//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events, window surface) with the engine's logic
// thread via crossbeam channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputSystem     │
//  │   ├─ Converts winit      │    │  ↓               │
//  │   └─ Tracks viewport     │    │  Game::update    │
//  │   ↓                      │    │  ↓               │
//  │  InputBuffer             │    │  Game::draw      │
//  │   ├─ discrete: Vec<>     │    │                  │
//  │   └─ continuous: latest  │    └──────────────────┘
//  │   ↓                      │          ↑      │
//  │  RedrawRequested         │          │      │
//  │   ├─ flush ──────────────┼──────────┘      │
//  │   │         PlatformEvent│                 │
//  │   └─ present ◄───────────┼─────────────────┘
//  │      (softbuffer)        │    DrawList
//  └──────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Newest DrawList rasterised and presented
//    → Core processes at fixed TPS (independent of refresh rate)
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input is batched per redraw so
//   the logic thread sees events in arrival order
// - **Logical coordinates**: the cursor is converted to the game's
//   logical size before it leaves this module
// - **Graceful channel disconnect**: if the core thread dies, the platform
//   logs a warning but keeps running so the window can still be closed
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod present;

pub use present::PresentError;

//=== External Crates =====================================================

use std::rc::Rc;

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::render::DrawList;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;
use present::Presenter;

//=== WindowConfig ========================================================

/// Window title and logical size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Aetheric Arcade".to_owned(),
            width: 800,
            height: 600,
        }
    }
}

//=== Platform ============================================================

/// Window manager, input aggregator and frame presenter.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)` - no window yet
/// 2. **Execution**: `platform.run()` - blocks in the winit event loop
/// 3. **Event processing**: winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: user closes window → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// Holds `Rc<Window>` and is NOT Send; it must stay on the main thread.
pub(crate) struct Platform {
    /// Window surface (None until `resumed()` called).
    presenter: Option<Presenter>,

    /// Buffers discrete/continuous input until frame boundary.
    buffer: InputBuffer,

    /// Channel to send events to core thread.
    event_sender: Sender<PlatformEvent>,

    /// Snapshots published by the core thread.
    frame_receiver: Receiver<DrawList>,

    /// Newest snapshot; redrawn until a newer one arrives.
    frame: DrawList,

    /// Converts winit events to engine InputEvents.
    input_processor: InputProcessor,

    config: WindowConfig,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        frame_receiver: Receiver<DrawList>,
        config: WindowConfig,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            presenter: None,
            buffer: InputBuffer::new(),
            event_sender,
            frame_receiver,
            frame: DrawList::new(),
            input_processor: InputProcessor::new(config.width, config.height),
            config,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// exits with an error.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS winit requirement).
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events to the core thread.
    ///
    /// On a disconnected channel the events are dropped with a warning so
    /// the window stays closable.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self
                .event_sender
                .send(PlatformEvent::Inputs { discrete, continuous })
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    /// Keeps only the newest snapshot the core thread has published.
    fn pull_latest_frame(&mut self) {
        if let Some(frame) = self.frame_receiver.try_iter().last() {
            self.frame = frame;
        }
    }

    fn request_close(&self, event_loop: &ActiveEventLoop) {
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn has_window(&self) -> bool {
        self.presenter.is_some()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window and its surface on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.request_close(event_loop);
                return;
            }
        };

        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );
        self.input_processor.resize(size.width, size.height);

        match Presenter::new(window, self.config.width, self.config.height) {
            Ok(presenter) => {
                presenter.window().request_redraw();
                self.presenter = Some(presenter);
            }
            Err(e) => {
                error!(target: "platform", "{}", e);
                self.request_close(event_loop);
            }
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.request_close(event_loop);
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Resized to {}x{}", size.width, size.height);
                self.input_processor.resize(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position.x, position.y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, then show the newest snapshot
                self.flush_input_buffer();
                self.pull_latest_frame();

                if let Some(presenter) = &mut self.presenter {
                    if let Err(e) = presenter.present(&self.frame) {
                        error!(target: "platform", "{}", e);
                    }
                    presenter.window().request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
