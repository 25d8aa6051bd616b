//=========================================================================
// Cloud View
//=========================================================================
//
// Per-state screens for the resource-collection game.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::controller::{CloudGame, CloudState, START_BUTTON};
use super::entities::{ResourceKind, ResourceStatus, HAZARD_SIZE, PLAYER_SIZE, RESOURCE_SIZE, VM_SIZE};
use crate::core::geometry::{Rect, Vec2};
use crate::core::render::{Color, DrawList};
use crate::games::{SCREEN_HEIGHT, SCREEN_WIDTH};

//=== Text ================================================================

const TITLE: &str = "Welcome to Cloud Resource Manager";
const TAGLINE: &str = "Navigate the maze, collect resources, and configure VMs!";

const PROLOGUE_TITLE: &str = "Introduction to Cloud Computing";
const PROLOGUE: [&str; 12] = [
    "Cloud computing is like renting a powerful computer over the internet.",
    "Instead of owning physical hardware, you can use virtual resources",
    "such as processing power, memory, and storage.",
    "",
    "In this game, you'll manage cloud resources:",
    "- Collect CPU, RAM, and Storage",
    "- Configure Virtual Machines (VMs) with these resources",
    "- So that they can run your applications smoothly",
    "- And users can access them from anywhere in the world",
    "- Avoid malware that can harm your cloud infrastructure",
    "",
    "Press SPACE to continue to instructions",
];

const INSTRUCTIONS: [&str; 3] = [
    "1. Use arrow keys to move the cloud.",
    "2. Collect resources and configure VMs.",
    "3. Avoid malware.",
];

const CREDITS: [&str; 13] = [
    "Cloud Resource Manager",
    "",
    "Developed by:",
    "Isaias Rodriguez",
    "",
    "Graphics:",
    "Isaias Rodriguez",
    "",
    "Special Thanks:",
    "PLC,",
    "and all the creators of the tools that made this possible",
    "",
    "Press SPACE to restart",
];

//--- Font sizes ----------------------------------------------------------

const HEADING: f32 = 40.0;
const BODY: f32 = 30.0;
const SMALL: f32 = 20.0;
const LABEL: f32 = 12.0;

//--- Sprite tints --------------------------------------------------------

const CLOUD_TINT: Color = Color::rgb(220, 235, 255);
const VM_TINT: Color = Color::rgb(106, 90, 205);
const MALWARE_TINT: Color = Color::rgb(220, 20, 60);

fn resource_tint(kind: ResourceKind) -> Color {
    match kind {
        ResourceKind::Cpu => Color::rgb(70, 130, 180),
        ResourceKind::Memory => Color::rgb(60, 179, 113),
        ResourceKind::Storage => Color::rgb(218, 165, 32),
    }
}

//=== Entry Point =========================================================

pub(crate) fn draw(game: &CloudGame, frame: &mut DrawList) {
    frame.clear(Color::BLACK);

    match game.state() {
        CloudState::Start => draw_start(frame),
        CloudState::Prologue => draw_prologue(frame),
        CloudState::Instructions => draw_instructions(frame),
        CloudState::Playing => draw_playing(game, frame),
        CloudState::Completed => draw_completed(game.config().story, frame),
        CloudState::Credits => draw_credits(frame),
    }
}

//=== Screens =============================================================

fn center_x(y: f32) -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, y)
}

fn draw_start(frame: &mut DrawList) {
    frame.text_centered(TITLE, center_x(SCREEN_HEIGHT / 4.0), HEADING, Color::WHITE);
    frame.text_centered(TAGLINE, center_x(SCREEN_HEIGHT / 2.0), BODY, Color::WHITE);

    frame.fill_rect(START_BUTTON, Color::LIGHT_BLUE);
    frame.stroke_rect(START_BUTTON, Color::NAVY, 2.0);
    frame.text_centered("Start", START_BUTTON.center(), BODY, Color::NAVY);
}

fn draw_prologue(frame: &mut DrawList) {
    frame.text_centered(PROLOGUE_TITLE, center_x(SCREEN_HEIGHT / 6.0), HEADING, Color::WHITE);
    for (i, line) in PROLOGUE.iter().enumerate() {
        let y = SCREEN_HEIGHT / 3.0 + i as f32 * 30.0;
        frame.text_centered(*line, center_x(y), SMALL, Color::WHITE);
    }
}

fn draw_instructions(frame: &mut DrawList) {
    frame.text_centered("Instructions", center_x(SCREEN_HEIGHT / 4.0), HEADING, Color::WHITE);
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        let y = SCREEN_HEIGHT / 2.0 + (i as f32 - 1.0) * 30.0;
        frame.text_centered(*line, center_x(y), BODY, Color::WHITE);
    }
    frame.text_centered(
        "Press SPACE to start playing",
        center_x(SCREEN_HEIGHT * 3.0 / 4.0),
        BODY,
        Color::WHITE,
    );
}

fn draw_playing(game: &CloudGame, frame: &mut DrawList) {
    for wall in game.maze().wall_rects() {
        frame.fill_rect(wall, Color::GRAY);
    }

    let player = game.player();
    frame.sprite("cloud", Rect::from_center(player.position, PLAYER_SIZE.0, PLAYER_SIZE.1), CLOUD_TINT);

    // Carried resources are hidden; placed ones sit on their VM
    for resource in game.resources() {
        if resource.status == ResourceStatus::Collected {
            continue;
        }
        let rect = Rect::from_center(resource.position, RESOURCE_SIZE.0, RESOURCE_SIZE.1);
        frame.sprite(resource.kind.sprite(), rect, resource_tint(resource.kind));
        if resource.is_free() {
            frame.text(resource.kind.label(), resource.position, LABEL, Color::WHITE);
        }
    }

    for vm in game.vms() {
        frame.sprite("vm", Rect::from_center(vm.position, VM_SIZE.0, VM_SIZE.1), VM_TINT);
        frame.text(vm.name, vm.position, LABEL, Color::WHITE);
        for (i, kind) in vm.placed().iter().enumerate() {
            let pos = vm.position + Vec2::new(0.0, 30.0 + i as f32 * 30.0);
            frame.text(kind.label(), pos, LABEL, Color::WHITE);
        }
    }

    for hazard in game.hazards() {
        let rect = Rect::from_center(hazard.position, HAZARD_SIZE.0, HAZARD_SIZE.1);
        frame.sprite("malware", rect, MALWARE_TINT);
        frame.text("Malware", hazard.position, LABEL, Color::WHITE);
    }
}

fn draw_completed(story: bool, frame: &mut DrawList) {
    frame.text_centered("Congratulations!", center_x(SCREEN_HEIGHT / 3.0), 60.0, Color::WHITE);
    frame.text_centered(
        "You've completed the game!",
        center_x(SCREEN_HEIGHT / 2.0),
        HEADING,
        Color::WHITE,
    );

    let prompt = if story {
        "Press SPACE to view credits"
    } else {
        "Press SPACE to play again"
    };
    frame.text_centered(prompt, center_x(SCREEN_HEIGHT * 2.0 / 3.0), BODY, Color::WHITE);
}

fn draw_credits(frame: &mut DrawList) {
    for (i, line) in CREDITS.iter().enumerate() {
        frame.text_centered(*line, center_x(50.0 + i as f32 * 30.0), BODY, Color::WHITE);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
