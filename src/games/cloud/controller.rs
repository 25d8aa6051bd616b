//=========================================================================
// Cloud Controller
//=========================================================================
//
// State machine and tick logic for the resource-collection game.
//
// State flow (story on):
// ```text
//   Start ─click─► Prologue ─Space─► Instructions ─Space─► Playing
//     ▲                                                       │
//     │                                              all VMs solved
//     │                                                       ▼
//     └──────Space (reset)────── Credits ◄─────Space───── Completed
// ```
//
// With the story off, Start goes straight to Playing and Completed +
// Space resets to Start.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::config::CloudConfig;
use super::entities::{
    Hazard, Player, Resource, ResourceKind, ResourceStatus, Vm, VmId, PLAYER_START,
};
use super::maze::Maze;
use crate::core::geometry::{Rect, Vec2};
use crate::core::input::{KeyCode, StateTracker};
use crate::games::GameRng;

//=== Constants ===========================================================

/// Start button on the title screen.
pub const START_BUTTON: Rect = Rect::new(300.0, 425.0, 200.0, 50.0);

/// VM names and required kinds. One resource is spawned per requirement.
const VM_SPECS: [(&str, &[ResourceKind]); 2] = [
    ("VM1", &[ResourceKind::Cpu, ResourceKind::Memory]),
    ("VM2", &[ResourceKind::Storage, ResourceKind::Cpu]),
];

//=== CloudState ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudState {
    Start,
    Prologue,
    Instructions,
    Playing,
    Completed,
    Credits,
}

//=== Heading =============================================================

/// Arrow keys held this tick. Opposite keys cancel out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Heading {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Heading {
    pub const NONE: Self = Self::new(false, false, false, false);
    pub const LEFT: Self = Self::new(true, false, false, false);
    pub const RIGHT: Self = Self::new(false, true, false, false);
    pub const UP: Self = Self::new(false, false, true, false);
    pub const DOWN: Self = Self::new(false, false, false, true);

    pub const fn new(left: bool, right: bool, up: bool, down: bool) -> Self {
        Self { left, right, up, down }
    }

    /// Reads the held arrow keys.
    pub fn from_input(input: &StateTracker) -> Self {
        Self::new(
            input.is_key_down(KeyCode::ArrowLeft),
            input.is_key_down(KeyCode::ArrowRight),
            input.is_key_down(KeyCode::ArrowUp),
            input.is_key_down(KeyCode::ArrowDown),
        )
    }

    /// Offset for a move of `step` pixels per axis.
    fn offset(self, step: f32) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32 * step;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

//=== CloudGame ===========================================================

/// The resource-collection game.
pub struct CloudGame {
    config: CloudConfig,
    rng: GameRng,
    maze: Maze,
    state: CloudState,
    player: Player,
    resources: Vec<Resource>,
    vms: Vec<Vm>,
    hazards: Vec<Hazard>,
    completion_fired: bool,
}

impl CloudGame {
    //--- Construction -----------------------------------------------------

    /// Creates a game on the built-in maze.
    pub fn new(config: CloudConfig) -> Self {
        Self::with_maze(config, Maze::default())
    }

    /// Creates a game on `maze`, with entities placed on random path cells.
    pub fn with_maze(config: CloudConfig, maze: Maze) -> Self {
        let rng = GameRng::from_seed_or_entropy(config.seed);
        let mut game = Self {
            config,
            rng,
            maze,
            state: CloudState::Start,
            player: Player::new(),
            resources: Vec::new(),
            vms: Vec::new(),
            hazards: Vec::new(),
            completion_fired: false,
        };
        game.spawn_entities();
        game
    }

    //--- Commands ---------------------------------------------------------

    /// Handles a left click at `pos`. Only the start button reacts.
    pub fn click(&mut self, pos: Vec2) {
        if self.state != CloudState::Start {
            return;
        }

        if START_BUTTON.contains(pos) {
            let next = if self.config.story {
                CloudState::Prologue
            } else {
                CloudState::Playing
            };
            self.transition(next);
        } else {
            debug!(target: "arcade::cloud", "Click at ({}, {}) missed the start button", pos.x, pos.y);
        }
    }

    /// Handles the advance key (Space) on the text screens.
    pub fn press_advance(&mut self) {
        match self.state {
            CloudState::Prologue => self.transition(CloudState::Instructions),
            CloudState::Instructions => self.transition(CloudState::Playing),
            CloudState::Completed if self.config.story => self.transition(CloudState::Credits),
            CloudState::Completed | CloudState::Credits => self.reset(),
            CloudState::Start | CloudState::Playing => {}
        }
    }

    /// One play tick: move, collect, place, check completion.
    ///
    /// Does nothing outside [`CloudState::Playing`].
    pub fn step(&mut self, heading: Heading) {
        if self.state != CloudState::Playing {
            return;
        }

        self.move_player(heading);
        self.collect_resources();
        self.place_resources();

        if !self.completion_fired && self.all_vms_solved() {
            self.completion_fired = true;
            info!(target: "arcade::cloud", "Good job! All VMs are correctly configured.");
            self.transition(CloudState::Completed);
        }
    }

    /// Starts a new round: player home, entities respawned, back to Start.
    pub fn reset(&mut self) {
        self.player = Player::new();
        self.spawn_entities();
        self.completion_fired = false;
        self.transition(CloudState::Start);
    }

    //--- Query API --------------------------------------------------------

    pub fn state(&self) -> CloudState {
        self.state
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn vms(&self) -> &[Vm] {
        &self.vms
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Every VM holds exactly its required kinds.
    pub fn all_vms_solved(&self) -> bool {
        self.vms.iter().all(Vm::is_solved)
    }

    #[cfg(test)]
    pub(crate) fn state_for_test(&mut self, state: CloudState) {
        self.state = state;
    }

    //--- Internal Helpers -------------------------------------------------

    fn transition(&mut self, next: CloudState) {
        debug!(target: "arcade::cloud", "{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn random_path_position(&mut self) -> Vec2 {
        // Maze guarantees at least one path cell
        self.rng
            .choose(self.maze.path_positions())
            .copied()
            .unwrap_or(PLAYER_START)
    }

    fn spawn_entities(&mut self) {
        self.resources.clear();
        for (_, required) in VM_SPECS {
            for &kind in required {
                let position = self.random_path_position();
                self.resources.push(Resource::new(kind, position));
            }
        }

        self.vms.clear();
        for (index, (name, required)) in VM_SPECS.into_iter().enumerate() {
            let position = self.random_path_position();
            self.vms.push(Vm::new(VmId(index), name, position, required));
        }

        self.hazards.clear();
        for _ in 0..self.config.hazard_count {
            let position = self.random_path_position();
            self.hazards.push(Hazard { position });
        }
    }

    /// Accepts the move only if the destination cell is a path.
    fn move_player(&mut self, heading: Heading) {
        let target = self.player.position + heading.offset(self.config.step);
        if self.maze.is_walkable(target) {
            self.player.position = target;
        }
    }

    fn collect_resources(&mut self) {
        let player = self.player.rect();
        for resource in &mut self.resources {
            if resource.is_free() && player.overlaps(&resource.rect()) {
                resource.status = ResourceStatus::Collected;
                info!(target: "arcade::cloud", "Collected {}", resource.kind);
            }
        }
    }

    fn place_resources(&mut self) {
        let player = self.player.rect();
        for vm in &mut self.vms {
            if !player.overlaps(&vm.rect()) {
                continue;
            }

            for resource in &mut self.resources {
                if resource.is_collected() && vm.place(resource.kind) {
                    resource.status = ResourceStatus::Placed(vm.id);
                    resource.position = vm.position;
                    info!(target: "arcade::cloud", "Placed {} on {}", resource.kind, vm.name);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
