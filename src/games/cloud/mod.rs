//=========================================================================
// Cloud Resource Manager
//=========================================================================
//
// Steer a cloud through a maze, pick up CPU, memory and storage, and
// install them on the VMs that need them.
//
// Layout:
// - `maze`: grid parsing and walkability
// - `entities`: player, resources, VMs, hazards
// - `controller`: state machine and tick logic
// - `view`: per-state drawing
//
// Input: Space advances text screens, left click presses the start
// button, held arrow keys move the cloud.
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod controller;
mod entities;
mod maze;
mod view;

//=== Public API ==========================================================

pub use config::CloudConfig;
pub use controller::{CloudGame, CloudState, Heading, START_BUTTON};
pub use entities::{
    Hazard, Player, Resource, ResourceKind, ResourceStatus, Vm, VmId, PLAYER_START,
};
pub use maze::{Cell, Maze, MazeError, CELL_SIZE};

//=== Internal Dependencies ===============================================

use crate::core::game::Game;
use crate::core::globals::GlobalContext;
use crate::core::input::{Action, InputSystem, KeyCode, MouseButton};
use crate::core::render::DrawList;

//=== CloudAction =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudAction {
    /// Space: move on from a text screen.
    Advance,

    /// Left click: press a button.
    Select,
}

impl Action for CloudAction {}

//=== Game Integration ====================================================

impl Game for CloudGame {
    type Action = CloudAction;

    fn bind_inputs(&self, input: &mut InputSystem<CloudAction>) {
        input.bind_key(KeyCode::Space, CloudAction::Advance);
        input.bind_mouse(MouseButton::Left, CloudAction::Select);
    }

    fn update(&mut self, ctx: &GlobalContext) {
        for action in ctx.message_bus.read::<CloudAction>() {
            match action {
                CloudAction::Advance => self.press_advance(),
                CloudAction::Select => self.click(ctx.input_state.mouse_position()),
            }
        }

        self.step(Heading::from_input(&ctx.input_state));
    }

    fn draw(&self, frame: &mut DrawList) {
        view::draw(self, frame);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
