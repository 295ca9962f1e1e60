//! Placement module - validating and committing drops onto the grid
//!
//! `can_place` is a pure predicate. `commit` trusts it: callers must validate
//! first, and committing an illegal placement is a programming error.

use crate::grid::Grid;
use crate::piece::Piece;

/// Check whether `piece` fits with its anchor moved onto `target`
///
/// True iff every translated cell is on the grid and currently empty.
pub fn can_place(grid: &Grid, piece: &Piece, target: (i8, i8)) -> bool {
    piece
        .cells_at(target)
        .iter()
        .all(|&(x, y)| grid.is_vacant(x, y))
}

/// Write `piece` into the grid with its anchor on `target`
///
/// Precondition: `can_place(grid, piece, target)`. Violations panic in debug
/// builds and fail fast on out-of-bounds writes in release builds.
pub fn commit(grid: &mut Grid, piece: &Piece, target: (i8, i8)) {
    debug_assert!(
        can_place(grid, piece, target),
        "commit of {:?} at {:?} without a legal placement",
        piece.kind,
        target
    );

    for (x, y) in piece.cells_at(target) {
        grid.set_cell(x, y, piece.color);
    }
}

/// Find every board anchor where `piece` fits
///
/// Every catalog shape contains its own anchor cell, so scanning the 64 board
/// positions covers every legal placement.
pub fn legal_anchors<'g>(grid: &'g Grid, piece: &Piece) -> impl Iterator<Item = (i8, i8)> + 'g {
    let size = grid.size() as i8;
    let piece = *piece;
    (0..size)
        .flat_map(move |y| (0..size).map(move |x| (x, y)))
        .filter(move |&target| can_place(grid, &piece, target))
}

/// Check whether `piece` fits anywhere on the grid
pub fn fits_anywhere(grid: &Grid, piece: &Piece) -> bool {
    legal_anchors(grid, piece).next().is_some()
}
