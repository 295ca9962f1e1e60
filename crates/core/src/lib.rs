//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the 8x8 placement puzzle. It has no
//! dependency on the terminal or on any I/O, so the same seed replays the same
//! game in a TUI, a headless test, or a benchmark.
//!
//! # Module Structure
//!
//! - [`grid`]: 8x8 field with bounds-checked and fail-fast accessors
//! - [`shapes`]: the 19-shape catalog and the weighted draw table
//! - [`piece`]: tray pieces and their footprints
//! - [`placement`]: legality check, commit, and anchor scan
//! - [`clears`]: row/column detection and simultaneous clearing
//! - [`scoring`]: clear rewards
//! - [`tray`]: the three slots, the pick/drop protocol, and refills
//! - [`game_state`]: one object tying the above together
//!
//! # Game Rules
//!
//! - Pieces never rotate and never fall; they are dropped where the player aims.
//! - After each drop every full row and column clears at once, without gravity.
//! - The tray refills only when all three pieces are used.
//! - When no tray piece fits, the stuck policy redraws the tray or ends the game.
//!
//! # Example
//!
//! ```
//! use block_blast_core::{DropOutcome, GameState};
//!
//! let mut game = GameState::new(12345);
//! game.pick_up(0).unwrap();
//!
//! // Find any anchor where the held piece fits and drop it there.
//! let target = (0..8)
//!     .flat_map(|y| (0..8).map(move |x| (x, y)))
//!     .find(|&t| game.can_drop_at(t) == Some(true))
//!     .unwrap();
//! let outcome = game.drop_piece(0, target).unwrap();
//!
//! assert!(matches!(outcome, DropOutcome::Committed { .. }));
//! assert_eq!(game.pieces_placed(), 1);
//! ```

pub mod clears;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod tray;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use clears::{find_full_lines, resolve_clears, ClearResult};
pub use config::{GameConfig, StuckPolicy};
pub use game_state::{DropOutcome, GameState};
pub use grid::Grid;
pub use piece::Piece;
pub use placement::{can_place, commit, fits_anywhere, legal_anchors};
pub use rng::SimpleRng;
pub use scoring::calculate_clear_score;
pub use shapes::{get_shape, ShapeGeometry, DRAW_TABLE};
pub use snapshot::{GameSnapshot, TraySlotView};
pub use tray::{has_any_legal_move, Tray, TrayError, TrayPhase};
