//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the core rules, the input layer and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Grid**: 8 columns x 8 rows (indexed 0-7 on both axes)
//! - **Coordinates**: `(x, y)`, x grows to the right, y grows downward
//! - **Tray**: 3 preview slots
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SINGLE_LINE_BONUS_MIN` | 51 | Lower bound of the random single-line bonus |
//! | `SINGLE_LINE_BONUS_MAX` | 149 | Upper bound (inclusive) of the random bonus |
//! | `CROSS_CLEAR_BASE` | 100 | Per row x column factor for crossing clears |
//! | `SINGLE_AXIS_SCORES` | table | `floor(100 * 1.7^(n-1))` for n parallel lines |
//!
//! # Examples
//!
//! ```
//! use block_blast_types::{ShapeKind, BlockColor, PlayerAction, GRID_SIZE, TRAY_SIZE};
//!
//! // Parse a shape kind (case-insensitive)
//! let kind = ShapeKind::from_str("square3").unwrap();
//! assert_eq!(kind, ShapeKind::Square3);
//! assert_eq!(kind.as_str(), "square3");
//!
//! // Parse a player action
//! assert_eq!(PlayerAction::from_str("resetTray"), Some(PlayerAction::ResetTray));
//!
//! assert_eq!(BlockColor::Cyan.as_str(), "cyan");
//! assert_eq!(GRID_SIZE, 8);
//! assert_eq!(TRAY_SIZE, 3);
//! ```

/// Grid width and height in cells (8x8)
pub const GRID_SIZE: u8 = 8;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of pieces offered in the tray at once
pub const TRAY_SIZE: usize = 3;

/// Largest number of cells in any catalog shape (the 3x3 square)
pub const MAX_PIECE_CELLS: usize = 9;

/// Number of distinct catalog shapes
pub const SHAPE_COUNT: usize = 19;

/// Lower bound (inclusive) of the random bonus for a single-line clear
pub const SINGLE_LINE_BONUS_MIN: u32 = 51;

/// Upper bound (inclusive) of the random bonus for a single-line clear
pub const SINGLE_LINE_BONUS_MAX: u32 = 149;

/// Base factor for clears that hit rows and columns at the same time
///
/// The score is `CROSS_CLEAR_BASE * columns * rows` plus a single-line bonus.
pub const CROSS_CLEAR_BASE: u32 = 100;

/// Score for clearing `n >= 2` lines on a single axis, indexed by `n`
///
/// Values are `floor(100 * 1.7^(n-1))`, tabulated so the result never depends on
/// floating point rounding. Entries 0 and 1 are unused (0 scores nothing and a
/// single line uses the random bonus).
pub const SINGLE_AXIS_SCORES: [u32; GRID_SIZE as usize + 1] =
    [0, 0, 170, 288, 491, 835, 1419, 2413, 4103];

/// The 19 catalog shapes
///
/// Offsets are defined relative to an anchor cell. Rotations and mirrors are
/// distinct kinds; pieces never rotate once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Single,
    Horizontal2,
    Horizontal3,
    Horizontal4,
    Horizontal5,
    Vertical2,
    Vertical3,
    Vertical4,
    Vertical5,
    TUp,
    TDown,
    TLeft,
    TRight,
    LNormal,
    LMirror,
    LFlip,
    LMirrorFlip,
    Square2,
    Square3,
}

impl ShapeKind {
    /// Every catalog kind, in catalog order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
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
        ShapeKind::LNormal,
        ShapeKind::LMirror,
        ShapeKind::LFlip,
        ShapeKind::LMirrorFlip,
        ShapeKind::Square2,
        ShapeKind::Square3,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("single"), Some(ShapeKind::Single));
    /// assert_eq!(ShapeKind::from_str("T_UP"), Some(ShapeKind::TUp));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lowered = s.to_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Single => "single",
            ShapeKind::Horizontal2 => "horizontal2",
            ShapeKind::Horizontal3 => "horizontal3",
            ShapeKind::Horizontal4 => "horizontal4",
            ShapeKind::Horizontal5 => "horizontal5",
            ShapeKind::Vertical2 => "vertical2",
            ShapeKind::Vertical3 => "vertical3",
            ShapeKind::Vertical4 => "vertical4",
            ShapeKind::Vertical5 => "vertical5",
            ShapeKind::TUp => "t_up",
            ShapeKind::TDown => "t_down",
            ShapeKind::TLeft => "t_left",
            ShapeKind::TRight => "t_right",
            ShapeKind::LNormal => "l_normal",
            ShapeKind::LMirror => "l_mirror",
            ShapeKind::LFlip => "l_flip",
            ShapeKind::LMirrorFlip => "l_mirror_flip",
            ShapeKind::Square2 => "square2",
            ShapeKind::Square3 => "square3",
        }
    }
}

/// Block colors
///
/// Color is purely cosmetic: clearing never compares colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Yellow,
    Green,
    Blue,
    Red,
    Purple,
    Cyan,
}

impl BlockColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Yellow => "yellow",
            BlockColor::Green => "green",
            BlockColor::Blue => "blue",
            BlockColor::Red => "red",
            BlockColor::Purple => "purple",
            BlockColor::Cyan => "cyan",
        }
    }
}

/// The 8-entry color palette pieces draw from
///
/// Yellow and blue appear twice, so they come up twice as often.
pub const PALETTE: [BlockColor; 8] = [
    BlockColor::Yellow,
    BlockColor::Yellow,
    BlockColor::Green,
    BlockColor::Blue,
    BlockColor::Blue,
    BlockColor::Red,
    BlockColor::Purple,
    BlockColor::Cyan,
];

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(BlockColor)`: Occupied, rendered in that color
pub type Cell = Option<BlockColor>;

/// Placement state of a live piece
///
/// - **InTray**: idle in the preview strip
/// - **Held**: being dragged by the player
/// - **Placed**: committed to the grid; the piece is discarded right after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceState {
    InTray,
    Held,
    Placed,
}

impl PieceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceState::InTray => "in_tray",
            PieceState::Held => "held",
            PieceState::Placed => "placed",
        }
    }
}

/// Player commands produced by the input layer
///
/// Cursor movement is resolved by the input layer itself; every other action
/// maps to a game state operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Pick up the piece in the given tray slot (0-based)
    PickSlot(u8),
    /// Move the drop cursor by one step
    MoveCursor { dx: i8, dy: i8 },
    /// Drop the held piece at the cursor
    Drop,
    /// Put the held piece back into the tray
    Cancel,
    /// Discard the tray and draw three new pieces
    ResetTray,
    /// Start a new game
    Restart,
}

impl PlayerAction {
    /// Parse a parameterless action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("drop"), Some(PlayerAction::Drop));
    /// assert_eq!(PlayerAction::from_str("Restart"), Some(PlayerAction::Restart));
    /// assert_eq!(PlayerAction::from_str("slot2"), Some(PlayerAction::PickSlot(1)));
    /// assert_eq!(PlayerAction::from_str("slot9"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slot1" => Some(PlayerAction::PickSlot(0)),
            "slot2" => Some(PlayerAction::PickSlot(1)),
            "slot3" => Some(PlayerAction::PickSlot(2)),
            "drop" => Some(PlayerAction::Drop),
            "cancel" => Some(PlayerAction::Cancel),
            "resettray" => Some(PlayerAction::ResetTray),
            "restart" => Some(PlayerAction::Restart),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_axis_table_matches_reference_values() {
        assert_eq!(SINGLE_AXIS_SCORES[2], 170);
        assert_eq!(SINGLE_AXIS_SCORES[3], 288);
        assert_eq!(SINGLE_AXIS_SCORES[8], 4103);
    }

    #[test]
    fn shape_names_roundtrip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn palette_has_eight_entries_with_duplicates() {
        assert_eq!(PALETTE.len(), 8);
        let yellow = PALETTE.iter().filter(|&&c| c == BlockColor::Yellow).count();
        assert_eq!(yellow, 2);
    }
}
