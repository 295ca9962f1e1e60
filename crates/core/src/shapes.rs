//! Shapes module - the fixed piece catalog
//!
//! Every catalog entry is a list of `(dx, dy)` offsets from the piece anchor,
//! with y growing downward. Every shape contains the anchor itself `(0, 0)`,
//! so any legal placement has its anchor on the grid.
//!
//! This is the single source of truth for piece geometry.

use crate::types::ShapeKind;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

const SINGLE: [CellOffset; 1] = [(0, 0)];

const HORIZONTAL_2: [CellOffset; 2] = [(-1, 0), (0, 0)];
const HORIZONTAL_3: [CellOffset; 3] = [(-1, 0), (0, 0), (1, 0)];
const HORIZONTAL_4: [CellOffset; 4] = [(-2, 0), (-1, 0), (0, 0), (1, 0)];
const HORIZONTAL_5: [CellOffset; 5] = [(-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0)];

const VERTICAL_2: [CellOffset; 2] = [(0, -1), (0, 0)];
const VERTICAL_3: [CellOffset; 3] = [(0, -1), (0, 0), (0, 1)];
const VERTICAL_4: [CellOffset; 4] = [(0, -2), (0, -1), (0, 0), (0, 1)];
const VERTICAL_5: [CellOffset; 5] = [(0, -2), (0, -1), (0, 0), (0, 1), (0, 2)];

// T shapes: the stem points in the named direction
const T_UP: [CellOffset; 4] = [(0, 0), (1, 0), (-1, 0), (0, -1)];
const T_DOWN: [CellOffset; 4] = [(0, 0), (1, 0), (-1, 0), (0, 1)];
const T_LEFT: [CellOffset; 4] = [(0, 0), (-1, 0), (0, -1), (0, 1)];
const T_RIGHT: [CellOffset; 4] = [(0, 0), (1, 0), (0, -1), (0, 1)];

// L shapes: a vertical bar of three with a foot at one corner
const L_NORMAL: [CellOffset; 4] = [(0, 0), (0, 1), (0, -1), (1, -1)];
const L_MIRROR: [CellOffset; 4] = [(0, 0), (0, 1), (0, -1), (-1, -1)];
const L_FLIP: [CellOffset; 4] = [(0, 0), (0, 1), (0, -1), (1, 1)];
const L_MIRROR_FLIP: [CellOffset; 4] = [(0, 0), (0, 1), (0, -1), (-1, 1)];

const SQUARE_2: [CellOffset; 4] = [(-1, -1), (-1, 0), (0, -1), (0, 0)];
const SQUARE_3: [CellOffset; 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Get the cell offsets for a shape kind
pub fn get_shape(kind: ShapeKind) -> &'static [CellOffset] {
    match kind {
        ShapeKind::Single => &SINGLE,
        ShapeKind::Horizontal2 => &HORIZONTAL_2,
        ShapeKind::Horizontal3 => &HORIZONTAL_3,
        ShapeKind::Horizontal4 => &HORIZONTAL_4,
        ShapeKind::Horizontal5 => &HORIZONTAL_5,
        ShapeKind::Vertical2 => &VERTICAL_2,
        ShapeKind::Vertical3 => &VERTICAL_3,
        ShapeKind::Vertical4 => &VERTICAL_4,
        ShapeKind::Vertical5 => &VERTICAL_5,
        ShapeKind::TUp => &T_UP,
        ShapeKind::TDown => &T_DOWN,
        ShapeKind::TLeft => &T_LEFT,
        ShapeKind::TRight => &T_RIGHT,
        ShapeKind::LNormal => &L_NORMAL,
        ShapeKind::LMirror => &L_MIRROR,
        ShapeKind::LFlip => &L_FLIP,
        ShapeKind::LMirrorFlip => &L_MIRROR_FLIP,
        ShapeKind::Square2 => &SQUARE_2,
        ShapeKind::Square3 => &SQUARE_3,
    }
}

/// Weighted draw table for new tray pieces
///
/// One entry per catalog kind, plus a second `LFlip` entry: that L variant is
/// drawn twice as often as any other shape. Each kind has weight 1/20 and
/// `LFlip` has 2/20.
///
/// The desktop game this reproduces drew 19 equally likely outcomes, with
/// `LFlip` on two of them and `LMirror` on none, which left one catalog shape
/// unreachable. This table keeps the doubled `LFlip` and makes `LMirror`
/// drawable.
pub const DRAW_TABLE: [ShapeKind; 20] = [
    ShapeKind::Single,
    ShapeKind::Horizontal2,
    ShapeKind::Horizontal3,
    ShapeKind::Horizontal4,
    ShapeKind::Horizontal5,
    ShapeKind::Vertical2,
    ShapeKind::Vertical3,
    ShapeKind::Vertical4,
    ShapeKind::Vertical5,
    ShapeKind::TUp,
    ShapeKind::TDown,
    ShapeKind::TLeft,
    ShapeKind::TRight,
    ShapeKind::Square2,
    ShapeKind::Square3,
    ShapeKind::LNormal,
    ShapeKind::LFlip,
    ShapeKind::LFlip,
    ShapeKind::LMirror,
    ShapeKind::LMirrorFlip,
];

/// Bounding box of a shape as `(min_dx, min_dy, max_dx, max_dy)`
pub fn shape_bounds(kind: ShapeKind) -> (i8, i8, i8, i8) {
    get_shape(kind).iter().fold(
        (0, 0, 0, 0),
        |(min_x, min_y, max_x, max_y), &(dx, dy)| {
            (min_x.min(dx), min_y.min(dy), max_x.max(dx), max_y.max(dy))
        },
    )
}

/// Extension for reading geometry straight off a kind
pub trait ShapeGeometry {
    fn offsets(self) -> &'static [CellOffset];
    fn cell_count(self) -> usize;
}

impl ShapeGeometry for ShapeKind {
    fn offsets(self) -> &'static [CellOffset] {
        get_shape(self)
    }

    fn cell_count(self) -> usize {
        get_shape(self).len()
    }
}
