//=========================================================================
// Assembly View
//=========================================================================
//
// Title screen, shell with its slots, and the parts pool.
//
// Paint order while playing: shell, assembly area, slots (empty outline
// or installed part), pool, then the dragged part on top.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::controller::{AssemblyGame, AssemblyState, ASSEMBLY_AREA, START_BUTTON};
use super::parts::{Part, PartKind};
use crate::core::geometry::{Rect, Vec2};
use crate::core::render::{text_size, Color, DrawList};
use crate::games::{SCREEN_HEIGHT, SCREEN_WIDTH};

//=== Constants ===========================================================

pub const TITLE: &str = "Isaias' Computer Shop";

const TITLE_SIZE: f32 = 64.0;
const BUTTON_SIZE: f32 = 36.0;
const SLOT_LABEL_SIZE: f32 = 24.0;

const SHELL_SPRITES: [&str; 3] = ["pc_shell_1", "pc_shell_2", "pc_shell_3"];

const BACKGROUND_TINT: Color = Color::rgb(70, 80, 100);
const SHELL_TINT: Color = Color::rgb(150, 150, 160);

fn part_tint(kind: PartKind) -> Color {
    match kind {
        PartKind::Cpu => Color::rgb(70, 130, 180),
        PartKind::Ram => Color::rgb(60, 179, 113),
        PartKind::Gpu => Color::rgb(178, 34, 34),
    }
}

//=== Entry Point =========================================================

pub(crate) fn draw(game: &AssemblyGame, frame: &mut DrawList) {
    frame.clear(Color::BLACK);
    frame.sprite(
        "background",
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        BACKGROUND_TINT,
    );

    match game.state() {
        AssemblyState::Start => draw_title(frame),
        AssemblyState::SlidingIn | AssemblyState::Playing | AssemblyState::SlidingOut => {
            draw_bench(game, frame)
        }
    }
}

//=== Screens =============================================================

fn draw_title(frame: &mut DrawList) {
    let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 4.0);
    let (w, h) = text_size(TITLE, TITLE_SIZE);
    frame.fill_rect(Rect::from_center(center, w, h).inflate(20.0, 10.0), Color::BLACK);
    frame.text_centered(TITLE, center, TITLE_SIZE, Color::WHITE);

    frame.fill_rect(START_BUTTON, Color::GREEN);
    frame.text_centered("Start", START_BUTTON.center(), BUTTON_SIZE, Color::WHITE);
}

fn draw_bench(game: &AssemblyGame, frame: &mut DrawList) {
    let shell = SHELL_SPRITES[game.shell_index() % SHELL_SPRITES.len()];
    frame.sprite(shell, game.shell_rect(), SHELL_TINT);

    frame.fill_rect(ASSEMBLY_AREA, Color::BLACK);

    for kind in PartKind::ALL {
        let slot = game.slot_rect(kind);
        match game.assembled().get(&kind) {
            Some(part) => frame.sprite(part.sprite(), slot, part_tint(part.kind)),
            None => {
                frame.stroke_rect(slot, Color::YELLOW, 3.0);
                frame.text_centered(kind.label(), slot.center(), SLOT_LABEL_SIZE, Color::YELLOW);
            }
        }
    }

    let dragging = game.dragging();
    for part in game.pool() {
        if dragging.is_some_and(|d| std::ptr::eq(d, part)) {
            continue;
        }
        draw_part(part, frame);
    }

    if let Some(part) = dragging {
        draw_part(part, frame);
    }
}

fn draw_part(part: &Part, frame: &mut DrawList) {
    frame.sprite(part.sprite(), part.rect, part_tint(part.kind));
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::assembly::AssemblyConfig;

    fn frame_of(game: &AssemblyGame) -> DrawList {
        let mut frame = DrawList::new();
        draw(game, &mut frame);
        frame
    }

    fn playing() -> AssemblyGame {
        let mut game = AssemblyGame::new(AssemblyConfig {
            seed: Some(3),
            ..AssemblyConfig::default()
        });
        game.click(START_BUTTON.center());
        while game.state() != AssemblyState::Playing {
            game.tick();
        }
        game
    }

    #[test]
    fn title_screen_shows_title_and_start() {
        let game = AssemblyGame::new(AssemblyConfig::default());
        let frame = frame_of(&game);

        let texts: Vec<_> = frame.texts().collect();
        assert_eq!(texts, vec![TITLE, "Start"]);
        assert_eq!(frame.sprites().count(), 1, "Only the background on the title screen");
    }

    #[test]
    fn title_fits_on_screen() {
        let (w, _) = text_size(TITLE, TITLE_SIZE);
        assert!(w + 20.0 <= SCREEN_WIDTH);
    }

    #[test]
    fn empty_shell_shows_labelled_slots() {
        let game = playing();
        let frame = frame_of(&game);

        let mut labels: Vec<_> = frame.texts().collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!["CPU", "GPU", "RAM"]);

        let sprites: Vec<_> = frame.sprites().map(|(name, _)| name).collect();
        assert_eq!(sprites[..2], ["background", "pc_shell_1"]);
        assert_eq!(sprites.len(), 2 + 3, "Background, shell, three pool parts");
    }

    #[test]
    fn dragged_part_is_drawn_last() {
        let mut game = playing();
        let grabbed = game.pool()[1].clone();
        game.press(grabbed.rect.center());
        game.drag_to(Vec2::new(50.0, 50.0));

        let frame = frame_of(&game);
        let (name, rect) = frame.sprites().last().unwrap();
        assert_eq!(name, grabbed.sprite());
        assert_eq!(rect.center(), Vec2::new(50.0, 50.0));
        assert_eq!(frame.sprites().count(), 5, "Dragged part is not drawn twice");
    }

    #[test]
    fn installed_part_replaces_slot_outline() {
        let mut game = playing();
        let cpu = game
            .pool()
            .iter()
            .find(|p| p.kind == PartKind::Cpu)
            .map(|p| p.rect.center())
            .unwrap();
        let slot = game.slot_rect(PartKind::Cpu).center();
        game.press(cpu);
        game.drag_to(slot);
        game.release(slot);

        let frame = frame_of(&game);
        assert!(frame.texts().all(|t| t != "CPU"));
        assert!(frame
            .sprites()
            .any(|(name, rect)| name == PartKind::Cpu.sprite() && rect == game.slot_rect(PartKind::Cpu)));
    }

    #[test]
    fn installed_parts_slide_out_with_shell() {
        let mut game = playing();
        for kind in PartKind::ALL {
            let from = game
                .pool()
                .iter()
                .find(|p| p.kind == kind)
                .map(|p| p.rect.center())
                .unwrap();
            let to = game.slot_rect(kind).center();
            game.press(from);
            game.release(to);
        }
        assert_eq!(game.state(), AssemblyState::SlidingOut);
        game.tick();

        let frame = frame_of(&game);
        for kind in PartKind::ALL {
            let drawn = frame.sprites().find(|(name, _)| *name == kind.sprite()).map(|(_, r)| r);
            assert_eq!(drawn, Some(game.slot_rect(kind)));
        }
    }
}
