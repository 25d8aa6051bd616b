//=========================================================================
// Assembly Controller
//=========================================================================
//
// State machine, drag-and-drop and shell sliding for the computer shop.
//
// State flow:
// ```text
//   Start ─click─► SlidingIn ─(shell at rest)─► Playing
//                      ▲                          │
//                      │                 all slots filled
//                      │                          ▼
//                      └──(off screen, next)── SlidingOut
// ```
//
// On the last shell, filling every slot leaves the game in Playing with
// `is_finished()` set; further drags are ignored.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::config::AssemblyConfig;
use super::parts::{Order, Part, PartKind};
use crate::core::geometry::{Rect, Vec2};
use crate::games::{GameRng, SCREEN_HEIGHT, SCREEN_WIDTH};

//=== Constants ===========================================================

/// Start button on the title screen.
pub const START_BUTTON: Rect = Rect::new(350.0, 275.0, 100.0, 50.0);

/// Black strip along the bottom where the pool lives.
pub const ASSEMBLY_AREA: Rect = Rect::new(0.0, 450.0, 800.0, 150.0);

pub const SHELL_SIZE: Vec2 = Vec2::new(400.0, 400.0);

/// Where a shell's right edge starts before sliding in.
const SLIDE_IN_RIGHT_EDGE: f32 = -100.0;

const POOL_GAP: f32 = 10.0;
const POOL_BOTTOM_MARGIN: f32 = 20.0;

//=== AssemblyState =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssemblyState {
    Start,
    SlidingIn,
    Playing,
    SlidingOut,
}

//=== Drag ================================================================

/// A pool part following the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    index: usize,
    offset: Vec2,
}

//=== AssemblyGame ========================================================

/// The drag-and-drop assembly game.
pub struct AssemblyGame {
    config: AssemblyConfig,
    rng: GameRng,
    state: AssemblyState,
    shell_index: usize,
    shell_rect: Rect,
    order: Order,
    pool: Vec<Part>,
    assembled: HashMap<PartKind, Part>,
    drag: Option<Drag>,
    finished: bool,
}

impl AssemblyGame {
    //--- Construction -----------------------------------------------------

    pub fn new(config: AssemblyConfig) -> Self {
        let mut rng = GameRng::from_seed_or_entropy(config.seed);
        let order = Order::random(&mut rng);
        let pool = order.parts(config.part_size);

        let mut game = Self {
            config,
            rng,
            state: AssemblyState::Start,
            shell_index: 0,
            shell_rect: Self::offscreen_shell(),
            order,
            pool,
            assembled: HashMap::new(),
            drag: None,
            finished: false,
        };
        game.layout_pool();
        game
    }

    //--- Commands ---------------------------------------------------------

    /// Handles a left click on the title screen.
    pub fn click(&mut self, pos: Vec2) {
        if self.state != AssemblyState::Start {
            return;
        }

        if START_BUTTON.contains(pos) {
            self.transition(AssemblyState::SlidingIn);
        } else {
            debug!(target: "arcade::assembly", "Click at ({}, {}) missed the start button", pos.x, pos.y);
        }
    }

    /// Starts dragging the topmost pool part under `pos`.
    pub fn press(&mut self, pos: Vec2) {
        if !self.accepts_drags() || self.drag.is_some() {
            return;
        }

        if let Some(index) = self.pool.iter().rposition(|part| part.rect.contains(pos)) {
            let offset = pos - self.pool[index].rect.top_left();
            debug!(target: "arcade::assembly", "Picked up {}", self.pool[index].kind);
            self.drag = Some(Drag { index, offset });
        }
    }

    /// Moves the dragged part so the grab point stays under `pos`.
    pub fn drag_to(&mut self, pos: Vec2) {
        if let Some(drag) = self.drag {
            let part = &mut self.pool[drag.index];
            part.rect = part.rect.with_top_left(pos - drag.offset);
        }
    }

    /// Drops the dragged part at `pos`.
    ///
    /// Snaps into the slot under `pos` if it is this part's kind and
    /// empty; otherwise the part returns to the pool.
    pub fn release(&mut self, pos: Vec2) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        let kind = self.pool[drag.index].kind;
        let target = PartKind::ALL
            .into_iter()
            .find(|slot| self.slot_rect(*slot).contains(pos));

        match target {
            Some(slot) if slot == kind && !self.assembled.contains_key(&slot) => {
                let mut part = self.pool.remove(drag.index);
                part.rect = self.slot_rect(slot);
                self.assembled.insert(slot, part);
                info!(target: "arcade::assembly", "Installed {}", kind);
            }
            Some(slot) => {
                debug!(target: "arcade::assembly", "{} does not fit the {} slot", kind, slot);
            }
            None => {
                debug!(target: "arcade::assembly", "{} dropped outside any slot", kind);
            }
        }

        self.layout_pool();

        if self.assembled.len() == PartKind::ALL.len() {
            self.complete_shell();
        }
    }

    /// Advances the slide animations by one tick.
    pub fn tick(&mut self) {
        match self.state {
            AssemblyState::SlidingIn => {
                let rest_x = Self::resting_shell().x;
                self.shell_rect.x += self.config.slide_speed;
                if self.shell_rect.x >= rest_x {
                    self.shell_rect.x = rest_x;
                    self.transition(AssemblyState::Playing);
                }
            }
            AssemblyState::SlidingOut => {
                self.shell_rect.x += self.config.slide_speed;
                if self.shell_rect.x >= SCREEN_WIDTH {
                    self.next_shell();
                }
            }
            AssemblyState::Start | AssemblyState::Playing => {}
        }
    }

    //--- Query API --------------------------------------------------------

    pub fn state(&self) -> AssemblyState {
        self.state
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Parts waiting to be installed, in layout order.
    pub fn pool(&self) -> &[Part] {
        &self.pool
    }

    pub fn assembled(&self) -> &HashMap<PartKind, Part> {
        &self.assembled
    }

    /// Zero-based index of the current shell.
    pub fn shell_index(&self) -> usize {
        self.shell_index
    }

    pub fn shell_rect(&self) -> Rect {
        self.shell_rect
    }

    /// On-screen rect of the `kind` slot on the current shell.
    pub fn slot_rect(&self, kind: PartKind) -> Rect {
        kind.slot_offset(SHELL_SIZE).translate(self.shell_rect.top_left())
    }

    /// The pool part being dragged, if any.
    pub fn dragging(&self) -> Option<&Part> {
        self.drag.map(|drag| &self.pool[drag.index])
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Every slot of the last shell is filled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    //--- Internal Helpers -------------------------------------------------

    fn transition(&mut self, next: AssemblyState) {
        debug!(target: "arcade::assembly", "{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn accepts_drags(&self) -> bool {
        self.state == AssemblyState::Playing && !self.finished
    }

    fn resting_shell() -> Rect {
        Rect::from_center(
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            SHELL_SIZE.x,
            SHELL_SIZE.y,
        )
    }

    fn offscreen_shell() -> Rect {
        let rest = Self::resting_shell();
        Rect::new(SLIDE_IN_RIGHT_EDGE - rest.w, rest.y, rest.w, rest.h)
    }

    fn complete_shell(&mut self) {
        info!(target: "arcade::assembly", "Good job! All pieces are correctly placed.");

        if self.shell_index + 1 < self.config.shell_count {
            self.transition(AssemblyState::SlidingOut);
        } else {
            self.finished = true;
            info!(target: "arcade::assembly", "Congratulations! You've completed all shells!");
        }
    }

    fn next_shell(&mut self) {
        self.shell_index += 1;
        self.assembled.clear();
        self.order = Order::random(&mut self.rng);
        self.pool = self.order.parts(self.config.part_size);
        self.layout_pool();
        self.shell_rect = Self::offscreen_shell();

        info!(target: "arcade::assembly", "Moving to shell {}", self.shell_index + 1);
        self.transition(AssemblyState::SlidingIn);
    }

    /// Lines pool parts up, centred along the bottom, skipping the dragged one.
    fn layout_pool(&mut self) {
        let count = self.pool.len() as f32;
        let total_width: f32 =
            self.pool.iter().map(|part| part.rect.w).sum::<f32>() + POOL_GAP * (count - 1.0).max(0.0);
        let bottom = SCREEN_HEIGHT - POOL_BOTTOM_MARGIN;
        let dragged = self.drag.map(|drag| drag.index);

        let mut x = ((SCREEN_WIDTH - total_width) / 2.0).floor();
        for (index, part) in self.pool.iter_mut().enumerate() {
            if Some(index) != dragged {
                part.rect = part.rect.with_top_left(Vec2::new(x, bottom - part.rect.h));
            }
            x += part.rect.w + POOL_GAP;
        }
    }

    #[cfg(test)]
    pub(crate) fn state_for_test(&mut self, state: AssemblyState) {
        self.state = state;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AssemblyGame {
        AssemblyGame::new(AssemblyConfig {
            seed: Some(21),
            ..AssemblyConfig::default()
        })
    }

    /// Clicks start and ticks until the shell is at rest.
    fn playing() -> AssemblyGame {
        let mut game = seeded();
        game.click(START_BUTTON.center());
        run_until(&mut game, AssemblyState::Playing);
        game
    }

    fn run_until(game: &mut AssemblyGame, state: AssemblyState) {
        for _ in 0..100 {
            if game.state() == state {
                return;
            }
            game.tick();
        }
        panic!("never reached {:?}", state);
    }

    fn pool_center(game: &AssemblyGame, kind: PartKind) -> Vec2 {
        game.pool()
            .iter()
            .find(|part| part.kind == kind)
            .map(|part| part.rect.center())
            .unwrap()
    }

    fn drop_on(game: &mut AssemblyGame, kind: PartKind, slot: PartKind) {
        let grab = pool_center(game, kind);
        let target = game.slot_rect(slot).center();
        game.press(grab);
        game.drag_to(target);
        game.release(target);
    }

    fn fill_shell(game: &mut AssemblyGame) {
        for kind in PartKind::ALL {
            drop_on(game, kind, kind);
        }
    }

    //=====================================================================
    // Start & Slide Tests
    //=====================================================================

    #[test]
    fn starts_on_title_with_full_pool() {
        let game = seeded();
        assert_eq!(game.state(), AssemblyState::Start);
        assert_eq!(game.pool().len(), 3);
        assert!(game.assembled().is_empty());
        assert_eq!(game.shell_rect().right(), -100.0);
    }

    #[test]
    fn click_outside_start_is_ignored() {
        let mut game = seeded();
        game.click(Vec2::new(10.0, 10.0));
        assert_eq!(game.state(), AssemblyState::Start);

        game.tick();
        assert_eq!(game.shell_rect().right(), -100.0, "Shell waits on the title screen");
    }

    #[test]
    fn shell_slides_in_and_snaps_to_centre() {
        let mut game = seeded();
        game.click(START_BUTTON.center());
        assert_eq!(game.state(), AssemblyState::SlidingIn);

        game.tick();
        assert_eq!(game.shell_rect().x, -450.0);

        run_until(&mut game, AssemblyState::Playing);
        assert_eq!(game.shell_rect(), Rect::new(200.0, 100.0, 400.0, 400.0));
    }

    #[test]
    fn pool_is_centred_along_bottom() {
        let game = seeded();
        let xs: Vec<f32> = game.pool().iter().map(|p| p.rect.x).collect();
        assert_eq!(xs, vec![300.0, 370.0, 440.0]);
        assert!(game.pool().iter().all(|p| p.rect.bottom() == 580.0));
    }

    //=====================================================================
    // Drag Tests
    //=====================================================================

    #[test]
    fn drag_keeps_grab_offset() {
        let mut game = playing();
        let part = game.pool()[0].rect;
        let grab = part.top_left() + Vec2::new(5.0, 7.0);

        game.press(grab);
        game.drag_to(Vec2::new(100.0, 100.0));

        let dragged = game.dragging().unwrap();
        assert_eq!(dragged.rect.top_left(), Vec2::new(95.0, 93.0));
    }

    #[test]
    fn press_on_empty_space_drags_nothing() {
        let mut game = playing();
        game.press(Vec2::new(5.0, 5.0));
        assert!(game.dragging().is_none());
    }

    #[test]
    fn no_drags_while_sliding() {
        let mut game = seeded();
        game.click(START_BUTTON.center());
        game.press(game.pool()[0].rect.center());
        assert!(game.dragging().is_none());
    }

    #[test]
    fn gpu_on_cpu_slot_returns_to_pool() {
        let mut game = playing();
        let home = game.pool().iter().find(|p| p.kind == PartKind::Gpu).unwrap().rect;

        drop_on(&mut game, PartKind::Gpu, PartKind::Cpu);

        assert!(game.assembled().is_empty());
        assert_eq!(game.pool().len(), 3);
        let gpu = game.pool().iter().find(|p| p.kind == PartKind::Gpu).unwrap();
        assert_eq!(gpu.rect, home, "Rejected part goes back to its pool spot");
    }

    #[test]
    fn gpu_on_gpu_slot_snaps() {
        let mut game = playing();

        drop_on(&mut game, PartKind::Gpu, PartKind::Gpu);

        let installed = &game.assembled()[&PartKind::Gpu];
        assert_eq!(installed.rect, game.slot_rect(PartKind::Gpu));
        assert!(game.pool().iter().all(|p| p.kind != PartKind::Gpu));
        assert_eq!(game.pool().len(), 2);
    }

    #[test]
    fn drop_outside_slots_is_ignored() {
        let mut game = playing();
        let grab = pool_center(&game, PartKind::Ram);
        game.press(grab);
        game.release(Vec2::new(20.0, 20.0));

        assert!(game.assembled().is_empty());
        assert!(game.dragging().is_none());
    }

    #[test]
    fn remaining_pool_recentres_after_snap() {
        let mut game = playing();
        drop_on(&mut game, PartKind::Cpu, PartKind::Cpu);

        let xs: Vec<f32> = game.pool().iter().map(|p| p.rect.x).collect();
        assert_eq!(xs, vec![335.0, 405.0]);
    }

    //=====================================================================
    // Shell Progression Tests
    //=====================================================================

    #[test]
    fn filled_shell_slides_out_and_next_arrives() {
        let mut game = playing();
        fill_shell(&mut game);
        assert_eq!(game.state(), AssemblyState::SlidingOut);
        assert_eq!(game.assembled().len(), 3);
        assert_eq!(game.shell_index(), 0, "Index advances only once off screen");

        run_until(&mut game, AssemblyState::SlidingIn);
        assert_eq!(game.shell_index(), 1);
        assert!(game.assembled().is_empty());
        assert_eq!(game.pool().len(), 3);
        assert_eq!(game.shell_rect().right(), -100.0);

        run_until(&mut game, AssemblyState::Playing);
        assert_eq!(game.shell_rect().x, 200.0);
    }

    #[test]
    fn last_shell_finishes_in_place() {
        let mut game = playing();
        for _ in 0..2 {
            fill_shell(&mut game);
            run_until(&mut game, AssemblyState::SlidingIn);
            run_until(&mut game, AssemblyState::Playing);
        }
        assert_eq!(game.shell_index(), 2);

        fill_shell(&mut game);

        assert!(game.is_finished());
        assert_eq!(game.state(), AssemblyState::Playing);
        assert_eq!(game.assembled().len(), 3);
        game.tick();
        assert_eq!(game.shell_rect().x, 200.0, "Finished shell stays put");
    }

    #[test]
    fn single_shell_run_finishes_immediately() {
        let mut game = AssemblyGame::new(AssemblyConfig {
            seed: Some(4),
            shell_count: 1,
            ..AssemblyConfig::default()
        });
        game.click(START_BUTTON.center());
        run_until(&mut game, AssemblyState::Playing);

        fill_shell(&mut game);
        assert!(game.is_finished());
    }

    #[test]
    fn assembled_count_matches_filled_slots() {
        let mut game = playing();
        drop_on(&mut game, PartKind::Ram, PartKind::Ram);
        drop_on(&mut game, PartKind::Cpu, PartKind::Gpu);

        assert_eq!(game.assembled().len(), 1);
        assert_eq!(game.pool().len() + game.assembled().len(), 3);
    }

    #[test]
    fn state_override_is_test_only_shortcut() {
        let mut game = seeded();
        game.state_for_test(AssemblyState::Playing);
        assert!(game.accepts_drags());
    }
}
