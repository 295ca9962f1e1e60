use block_blast::core::tray::slot_anchor;
use block_blast::core::{
    DropOutcome, GameConfig, GameState, Grid, Piece, StuckPolicy, Tray, TrayError,
};
use block_blast::types::{BlockColor, PieceState, PlayerAction, ShapeKind, TRAY_SIZE};

fn tray_of(kinds: &[ShapeKind]) -> Tray {
    let pieces: Vec<Piece> = kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| Piece::new(kind, BlockColor::Blue, slot_anchor(i)))
        .collect();
    Tray::from_pieces(&pieces)
}

/// Every cell with an even coordinate sum filled: no full line, no two
/// adjacent holes.
fn checkerboard() -> Grid {
    let mut grid = Grid::new();
    for y in 0..8i8 {
        for x in 0..8i8 {
            if (x + y) % 2 == 0 {
                grid.set_cell(x, y, BlockColor::Purple);
            }
        }
    }
    grid
}

fn config(policy: StuckPolicy, max_refill_attempts: Option<u32>) -> GameConfig {
    GameConfig {
        seed: 99,
        stuck_policy: policy,
        max_refill_attempts,
    }
}

#[test]
fn horizontal_five_completes_row_zero() {
    let mut grid = Grid::new();
    for x in 5..8 {
        grid.set_cell(x, 0, BlockColor::Red);
    }
    let mut game = GameState::with_position(
        GameConfig::with_seed(7),
        grid,
        tray_of(&[ShapeKind::Horizontal5, ShapeKind::Single, ShapeKind::Single]),
    );

    game.pick_up(0).unwrap();
    let outcome = game.drop_piece(0, (2, 0)).unwrap();

    let DropOutcome::Committed {
        score_delta,
        rows_cleared,
        columns_cleared,
    } = outcome
    else {
        panic!("drop was rejected");
    };
    assert!((51..=149).contains(&score_delta), "{score_delta}");
    assert_eq!((rows_cleared, columns_cleared), (1, 0));
    assert_eq!(game.score(), score_delta);
    assert_eq!(game.lines_cleared(), 1);
    for x in 0..8 {
        assert_eq!(game.cell(x, 0), Some(None));
    }
    assert_eq!(game.grid().occupied_count(), 0);
}

#[test]
fn rejected_drop_leaves_everything_untouched() {
    let mut game = GameState::with_position(
        GameConfig::with_seed(3),
        checkerboard(),
        tray_of(&[ShapeKind::Single, ShapeKind::Square2]),
    );
    let before = game.grid().clone();

    game.pick_up(0).unwrap();
    // (0, 0) is filled on a checkerboard.
    assert_eq!(game.can_drop_at((0, 0)), Some(false));
    assert_eq!(game.drop_piece(0, (0, 0)), Ok(DropOutcome::Rejected));

    assert_eq!(game.grid(), &before);
    assert_eq!(game.held_slot(), None);
    assert_eq!(game.tray().slot(0).map(|p| p.state), Some(PieceState::InTray));
    assert_eq!(game.score(), 0);
    assert_eq!(game.pieces_placed(), 0);
}

#[test]
fn protocol_errors_are_reported() {
    let mut game = GameState::new(12);
    assert_eq!(game.pick_up(3), Err(TrayError::SlotOutOfRange));
    assert_eq!(game.drop_piece(1, (4, 4)), Err(TrayError::NotHeld));

    game.pick_up(1).unwrap();
    assert_eq!(game.pick_up(2), Err(TrayError::AlreadyHolding));
    assert_eq!(game.drop_piece(2, (4, 4)), Err(TrayError::NotHeld));
    assert_eq!(TrayError::AlreadyHolding.code(), "invalid_hold");
}

#[test]
fn report_policy_ends_the_game_when_stuck() {
    let mut game = GameState::with_position(
        config(StuckPolicy::ReportStuck, None),
        checkerboard(),
        tray_of(&[ShapeKind::Single, ShapeKind::Square2, ShapeKind::Square2]),
    );
    assert!(!game.game_over());

    game.pick_up(0).unwrap();
    let outcome = game.drop_piece(0, (1, 0)).unwrap();
    assert!(outcome.is_committed());

    assert!(game.is_board_stuck());
    assert!(game.game_over());
    assert!(!game.snapshot().playable());
    assert_eq!(game.pick_up(1), Err(TrayError::NotPlayable));
    assert_eq!(game.reset_tray(), Err(TrayError::NotPlayable));
}

#[test]
fn refill_policy_redraws_until_something_fits() {
    let mut game = GameState::with_position(
        config(StuckPolicy::Refill, None),
        checkerboard(),
        tray_of(&[ShapeKind::Single, ShapeKind::Square2, ShapeKind::Square2]),
    );

    game.pick_up(0).unwrap();
    game.drop_piece(0, (1, 0)).unwrap();

    assert!(!game.game_over());
    assert!(!game.is_board_stuck());
    assert!(game.tray_refills() >= 1);
    assert_eq!(game.tray().live_count(), TRAY_SIZE);
}

#[test]
fn exhausted_refill_budget_ends_the_game() {
    let mut game = GameState::with_position(
        config(StuckPolicy::Refill, Some(0)),
        checkerboard(),
        tray_of(&[ShapeKind::Single, ShapeKind::Square2, ShapeKind::Square2]),
    );

    game.pick_up(0).unwrap();
    game.drop_piece(0, (1, 0)).unwrap();
    assert!(game.game_over());
}

#[test]
fn reset_tray_draws_three_new_pieces() {
    let mut game = GameState::new(55);
    game.pick_up(0).unwrap();
    game.reset_tray().unwrap();

    assert_eq!(game.held_slot(), None);
    assert_eq!(game.tray().live_count(), TRAY_SIZE);
    assert!(game.tray_refills() >= 1);
    assert_eq!(game.grid().occupied_count(), 0);
}

#[test]
fn restart_recovers_from_game_over() {
    let mut game = GameState::with_position(
        config(StuckPolicy::ReportStuck, None),
        checkerboard(),
        tray_of(&[ShapeKind::Single, ShapeKind::Square2]),
    );
    game.pick_up(0).unwrap();
    game.drop_piece(0, (1, 0)).unwrap();
    assert!(game.game_over());

    assert!(game.apply_action(PlayerAction::Restart, (0, 0)));
    assert!(!game.game_over());
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.grid().occupied_count(), 0);
    assert_eq!(game.pieces_placed(), 0);
    assert_eq!(game.tray().live_count(), TRAY_SIZE);
}

#[test]
fn apply_action_drives_a_full_turn() {
    let mut game = GameState::new(2025);
    assert!(!game.apply_action(PlayerAction::Drop, (4, 4)));
    assert!(!game.apply_action(PlayerAction::MoveCursor { dx: 1, dy: 0 }, (4, 4)));
    assert!(game.apply_action(PlayerAction::PickSlot(0), (4, 4)));
    assert!(game.apply_action(PlayerAction::Cancel, (4, 4)));
    assert!(!game.apply_action(PlayerAction::Cancel, (4, 4)));

    assert!(game.apply_action(PlayerAction::PickSlot(0), (4, 4)));
    // Empty grid: every catalog shape fits around the center.
    assert!(game.apply_action(PlayerAction::Drop, (4, 4)));
    assert_eq!(game.pieces_placed(), 1);
    assert!(game.tray().slot(0).is_none());
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let mut game = GameState::new(seed);
        for _ in 0..30 {
            let Some(slot) = (0..TRAY_SIZE).find(|&s| game.tray().slot(s).is_some()) else {
                break;
            };
            game.pick_up(slot).unwrap();
            let target = (0..64)
                .map(|i| ((i % 8) as i8, (i / 8) as i8))
                .find(|&t| game.can_drop_at(t) == Some(true));
            match target {
                Some(t) => {
                    game.drop_piece(slot, t).unwrap();
                }
                None => {
                    game.cancel_hold();
                    game.reset_tray().unwrap();
                }
            }
            if game.game_over() {
                break;
            }
        }
        game.snapshot()
    };

    assert_eq!(play(404), play(404));
    assert_ne!(play(404).score + play(404).pieces_placed, 0);
}

#[test]
fn snapshot_matches_queries() {
    let mut game = GameState::new(8080);
    game.pick_up(2).unwrap();
    game.drop_piece(2, (4, 4)).unwrap();
    game.pick_up(0).unwrap();

    let snap = game.snapshot();
    for y in 0..8i8 {
        for x in 0..8i8 {
            assert_eq!(Some(snap.grid[y as usize][x as usize]), game.cell(x, y));
        }
    }
    assert_eq!(snap.tray, game.tray_view());
    assert_eq!(snap.held_slot, Some(0));
    assert_eq!(snap.held().map(|v| v.state), Some(PieceState::Held));
    assert_eq!(snap.tray[2], None);
    assert_eq!(snap.pieces_placed, 1);
    assert_eq!(snap.seed, 8080);

    let mut reused = snap;
    reused.clear();
    game.snapshot_into(&mut reused);
    assert_eq!(reused, snap);
}

#[test]
fn full_grid_position_starts_game_over() {
    let mut grid = Grid::new();
    for y in 0..8 {
        for x in 0..8 {
            grid.set_cell(x, y, BlockColor::Green);
        }
    }
    for policy in [StuckPolicy::Refill, StuckPolicy::ReportStuck] {
        let game = GameState::with_position(
            config(policy, None),
            grid.clone(),
            tray_of(&[ShapeKind::Single]),
        );
        assert!(game.game_over(), "{policy:?}");
        assert!(game.is_board_stuck());
        assert_eq!(game.tray_refills(), 0);
    }
}
