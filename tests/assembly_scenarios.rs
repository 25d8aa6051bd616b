//=========================================================================
// Computer Shop Scenarios
//=========================================================================
//
// Full runs through the public assembly controller.
//
//=========================================================================

use aetheric_arcade::games::assembly::{
    AssemblyConfig, AssemblyGame, AssemblyState, PartKind, START_BUTTON,
};
use aetheric_arcade::prelude::{Rect, Vec2};

fn started(seed: u64) -> AssemblyGame {
    let mut game = AssemblyGame::new(AssemblyConfig {
        seed: Some(seed),
        ..AssemblyConfig::default()
    });
    game.click(START_BUTTON.center());
    settle(&mut game);
    game
}

/// Ticks until the shell is at rest.
fn settle(game: &mut AssemblyGame) {
    for _ in 0..200 {
        if game.state() == AssemblyState::Playing {
            return;
        }
        game.tick();
    }
    panic!("shell never came to rest");
}

fn pool_rect(game: &AssemblyGame, kind: PartKind) -> Rect {
    game.pool()
        .iter()
        .find(|p| p.kind == kind)
        .map(|p| p.rect)
        .unwrap()
}

fn drag(game: &mut AssemblyGame, from: Vec2, to: Vec2) {
    game.press(from);
    game.drag_to(Vec2::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0));
    game.drag_to(to);
    game.release(to);
}

fn install_all(game: &mut AssemblyGame) {
    for kind in PartKind::ALL {
        let from = pool_rect(game, kind).center();
        let to = game.slot_rect(kind).center();
        drag(game, from, to);
    }
}

//=========================================================================
// Slot Matching
//=========================================================================

#[test]
fn gpu_rejected_by_cpu_slot_then_accepted_by_gpu_slot() {
    let mut game = started(10);
    let gpu = pool_rect(&game, PartKind::Gpu);

    let cpu_slot = game.slot_rect(PartKind::Cpu).center();
    drag(&mut game, gpu.center(), cpu_slot);
    assert!(game.assembled().is_empty());
    assert_eq!(pool_rect(&game, PartKind::Gpu), gpu);

    let gpu_slot = game.slot_rect(PartKind::Gpu).center();
    drag(&mut game, gpu.center(), gpu_slot);
    assert_eq!(game.assembled()[&PartKind::Gpu].rect, game.slot_rect(PartKind::Gpu));
    assert_eq!(game.pool().len(), 2);
}

#[test]
fn drop_on_slot_edge_still_counts() {
    let mut game = started(10);
    let slot = game.slot_rect(PartKind::Ram);
    let from = pool_rect(&game, PartKind::Ram).center();

    drag(&mut game, from, Vec2::new(slot.x + 1.0, slot.y + 1.0));
    assert!(game.assembled().contains_key(&PartKind::Ram));
}

#[test]
fn slots_follow_the_shell() {
    let mut game = started(10);
    let from = pool_rect(&game, PartKind::Cpu).center();
    let to = game.slot_rect(PartKind::Cpu).center();
    drag(&mut game, from, to);
    let installed = game.assembled()[&PartKind::Cpu].rect;

    for kind in [PartKind::Ram, PartKind::Gpu] {
        let from = pool_rect(&game, kind).center();
        let to = game.slot_rect(kind).center();
        drag(&mut game, from, to);
    }
    assert_eq!(game.state(), AssemblyState::SlidingOut);
    assert_eq!(installed, game.slot_rect(PartKind::Cpu));

    game.tick();
    assert_eq!(
        game.slot_rect(PartKind::Cpu).x,
        installed.x + game.config().slide_speed,
        "Slots are relative to the shell"
    );
}

//=========================================================================
// Shell Progression
//=========================================================================

#[test]
fn full_shell_advances_to_next_with_fresh_pool() {
    let mut game = started(5);
    install_all(&mut game);
    assert_eq!(game.state(), AssemblyState::SlidingOut);

    while game.state() == AssemblyState::SlidingOut {
        game.tick();
    }

    assert_eq!(game.state(), AssemblyState::SlidingIn);
    assert_eq!(game.shell_index(), 1);
    assert!(game.assembled().is_empty());

    let mut kinds: Vec<_> = game.pool().iter().map(|p| p.kind).collect();
    kinds.sort_unstable();
    assert_eq!(kinds, PartKind::ALL.to_vec());
}

#[test]
fn three_shells_finish_the_run() {
    let mut game = started(6);

    for shell in 0..3 {
        assert_eq!(game.shell_index(), shell);
        install_all(&mut game);
        if shell < 2 {
            while game.state() == AssemblyState::SlidingOut {
                game.tick();
            }
            settle(&mut game);
        }
    }

    assert!(game.is_finished());
    assert_eq!(game.state(), AssemblyState::Playing);

    let from = Vec2::new(10.0, 10.0);
    game.press(from);
    assert!(game.dragging().is_none(), "Finished run ignores further drags");
}

#[test]
fn orders_are_reproducible_per_seed() {
    let mut a = started(99);
    let mut b = started(99);

    for _ in 0..2 {
        assert_eq!(a.order(), b.order());
        install_all(&mut a);
        install_all(&mut b);
        while a.state() == AssemblyState::SlidingOut {
            a.tick();
            b.tick();
        }
        settle(&mut a);
        settle(&mut b);
    }
    assert_eq!(a.order(), b.order());
}
