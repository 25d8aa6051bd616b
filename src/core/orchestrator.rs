//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for everything running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Own the game controller and the engine systems feeding it
// - Receive platform events via the crossbeam channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Publish one DrawList snapshot per tick back to the platform
//
// Notes:
// The orchestrator never shares the game. Communication with the platform
// occurs only through the two bounded channels, so no locks are needed.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info, trace};

//=== Internal Modules ====================================================

use super::game::Game;
use super::globals::{GlobalContext, GlobalSystems};
use super::input::InputEvent;
use super::platform_bridge::{EventCollector, PlatformEvent, TickControl};
use super::render::DrawList;

//=== CoreSystemsOrchestrator =============================================

/// Owns the game, its input systems and the shared context.
pub(crate) struct CoreSystemsOrchestrator<G: Game> {
    game: G,
    systems: GlobalSystems<G::Action>,
    context: GlobalContext,
}

impl<G: Game> CoreSystemsOrchestrator<G> {
    //--- Construction -----------------------------------------------------

    /// Takes ownership of `game` and lets it install its bindings.
    pub(crate) fn new(game: G) -> Self {
        let mut systems = GlobalSystems::new();
        game.bind_inputs(&mut systems.input);

        Self {
            game,
            systems,
            context: GlobalContext::new(),
        }
    }

    //--- tick() -----------------------------------------------------------
    //
    // One logic step: input → actions → game update → draw.
    //
    pub(crate) fn tick(&mut self, batches: Vec<Vec<InputEvent>>) -> DrawList {
        self.context.frame_events = batches;
        self.systems.update(&mut self.context);
        self.game.update(&self.context);

        let mut frame = DrawList::new();
        self.game.draw(&mut frame);
        frame
    }

    #[cfg(test)]
    pub(crate) fn game(&self) -> &G {
        &self.game
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Each tick:
    //  1. Collects platform events (exit on close or disconnect)
    //  2. Runs tick() and offers the frame to the platform
    //  3. Sleeps to maintain fixed pacing
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        frame_sender: Sender<DrawList>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let tick_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            let mut ticks: u64 = 0;

            loop {
                let tick_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting after {} ticks", ticks);
                    break;
                }

                //--- Step 2: Update and publish ----------------------------
                let frame = self.tick(collector.take_batches());
                match frame_sender.try_send(frame) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        trace!("Platform behind, frame dropped");
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        debug!("Frame channel closed");
                    }
                }
                ticks += 1;

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = tick_start.elapsed();
                if elapsed < tick_duration {
                    thread::sleep(tick_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
