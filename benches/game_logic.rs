use criterion::{black_box, criterion_group, criterion_main, Criterion};
use block_blast::core::{
    can_place, has_any_legal_move, resolve_clears, GameState, Grid, Piece, SimpleRng,
};
use block_blast::types::{BlockColor, ShapeKind};

fn half_full_grid() -> Grid {
    let mut grid = Grid::new();
    for y in 0..8i8 {
        for x in 0..8i8 {
            if (x * 3 + y * 5) % 7 < 3 {
                grid.set_cell(x, y, BlockColor::Green);
            }
        }
    }
    grid
}

fn bench_can_place_scan(c: &mut Criterion) {
    let grid = half_full_grid();
    let piece = Piece::new(ShapeKind::Square3, BlockColor::Red, (2, 2));

    c.bench_function("can_place_all_anchors", |b| {
        b.iter(|| {
            let mut legal = 0;
            for y in 0..8 {
                for x in 0..8 {
                    legal += can_place(black_box(&grid), &piece, (x, y)) as u32;
                }
            }
            legal
        })
    });
}

fn bench_resolve_clears(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("clear_2_rows_3_columns", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for i in 0..8 {
                grid.set_cell(i, 1, BlockColor::Yellow);
                grid.set_cell(i, 6, BlockColor::Yellow);
                grid.set_cell(0, i, BlockColor::Blue);
                grid.set_cell(4, i, BlockColor::Blue);
                grid.set_cell(7, i, BlockColor::Blue);
            }
            resolve_clears(&mut grid, &mut rng).score
        })
    });
}

fn bench_has_any_legal_move(c: &mut Criterion) {
    let grid = half_full_grid();
    let pieces = [
        Piece::new(ShapeKind::Square3, BlockColor::Red, (2, 2)),
        Piece::new(ShapeKind::Horizontal5, BlockColor::Red, (7, 2)),
        Piece::new(ShapeKind::Vertical5, BlockColor::Red, (12, 2)),
    ];

    c.bench_function("has_any_legal_move_stuck_tray", |b| {
        b.iter(|| has_any_legal_move(black_box(&pieces), black_box(&grid)))
    });
}

fn bench_drop_cycle(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("pick_and_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            let Some(slot) = (0..3).find(|&s| state.tray().slot(s).is_some()) else {
                return;
            };
            if state.pick_up(slot).is_err() {
                return;
            }
            let target = (0..64)
                .map(|i| ((i % 8) as i8, (i / 8) as i8))
                .find(|&t| state.can_drop_at(t) == Some(true));
            match target {
                Some(t) => {
                    let _ = state.drop_piece(slot, t);
                }
                None => {
                    state.cancel_hold();
                    state.restart();
                }
            }
        })
    });
}

criterion_group!(
    benches,
    bench_can_place_scan,
    bench_resolve_clears,
    bench_has_any_legal_move,
    bench_drop_cycle
);
criterion_main!(benches);
