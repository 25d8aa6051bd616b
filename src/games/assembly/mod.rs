//=========================================================================
// Computer Shop
//=========================================================================
//
// Drag CPU, RAM and GPU parts from the pool into the matching slots of
// each computer shell as it slides onto the bench.
//
// Layout:
// - `parts`: part kinds, slot geometry, random orders
// - `controller`: state machine, drag-and-drop, shell sliding
// - `view`: title and bench drawing
//
// Input: left click presses the start button or picks up a part,
// pointer motion drags it, releasing the button drops it.
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod controller;
mod parts;
mod view;

//=== Public API ==========================================================

pub use config::AssemblyConfig;
pub use controller::{AssemblyGame, AssemblyState, ASSEMBLY_AREA, SHELL_SIZE, START_BUTTON};
pub use parts::{Order, Part, PartKind, SLOT_SIZE};
pub use view::TITLE;

//=== Internal Dependencies ===============================================

use crate::core::game::Game;
use crate::core::globals::GlobalContext;
use crate::core::input::{Action, InputSystem, MouseButton};
use crate::core::render::DrawList;

//=== AssemblyAction ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssemblyAction {
    /// Left click: press the start button or pick up a part.
    Select,
}

impl Action for AssemblyAction {}

//=== Game Integration ====================================================

impl Game for AssemblyGame {
    type Action = AssemblyAction;

    fn bind_inputs(&self, input: &mut InputSystem<AssemblyAction>) {
        input.bind_mouse(MouseButton::Left, AssemblyAction::Select);
    }

    fn update(&mut self, ctx: &GlobalContext) {
        let input = &ctx.input_state;
        let pointer = input.mouse_position();

        for action in ctx.message_bus.read::<AssemblyAction>() {
            match action {
                AssemblyAction::Select if self.state() == AssemblyState::Start => {
                    self.click(pointer)
                }
                AssemblyAction::Select => self.press(pointer),
            }
        }

        if input.mouse_moved() {
            self.drag_to(pointer);
        }
        if input.is_button_released(MouseButton::Left) {
            self.release(pointer);
        }

        self.tick();
    }

    fn draw(&self, frame: &mut DrawList) {
        view::draw(self, frame);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
