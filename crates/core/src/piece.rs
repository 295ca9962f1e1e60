//! Piece module - live instances of catalog shapes

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::shapes::{get_shape, DRAW_TABLE};
use crate::types::{BlockColor, PieceState, ShapeKind, MAX_PIECE_CELLS, PALETTE};

/// Absolute cell positions of a piece, stack allocated
pub type PieceCells = ArrayVec<(i8, i8), MAX_PIECE_CELLS>;

/// A piece offered in the tray
///
/// The anchor is the piece's preview position in the tray strip; it carries no
/// gameplay meaning. Placement translates the footprint by `target - anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub color: BlockColor,
    pub anchor: (i8, i8),
    pub state: PieceState,
}

impl Piece {
    /// Create an idle tray piece
    pub fn new(kind: ShapeKind, color: BlockColor, anchor: (i8, i8)) -> Self {
        Self {
            kind,
            color,
            anchor,
            state: PieceState::InTray,
        }
    }

    /// Draw a random piece: shape from the draw table, color from the palette
    pub fn random(rng: &mut SimpleRng, anchor: (i8, i8)) -> Self {
        let kind = rng.choose(&DRAW_TABLE).unwrap_or(ShapeKind::Single);
        let color = rng.choose(&PALETTE).unwrap_or(BlockColor::Yellow);
        Self::new(kind, color, anchor)
    }

    /// Absolute cells at the current anchor (`anchor + offset`)
    pub fn cells(&self) -> PieceCells {
        self.cells_at(self.anchor)
    }

    /// Absolute cells with the anchor moved onto `target` (`target + offset`)
    ///
    /// Coordinates beyond the `i8` range clamp to its edge, far off the grid,
    /// so they can never wrap back onto it.
    pub fn cells_at(&self, target: (i8, i8)) -> PieceCells {
        get_shape(self.kind)
            .iter()
            .map(|&(dx, dy)| {
                (
                    clamp_i8(target.0 as i16 + dx as i16),
                    clamp_i8(target.1 as i16 + dy as i16),
                )
            })
            .collect()
    }

    pub fn is_held(&self) -> bool {
        self.state == PieceState::Held
    }
}

fn clamp_i8(v: i16) -> i8 {
    v.clamp(i8::MIN as i16, i8::MAX as i16) as i8
}
