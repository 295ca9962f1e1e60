//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PlayerAction`] and tracks
//! the drag cursor that stands in for a mouse pointer in the terminal.

pub mod cursor;
pub mod map;

pub use block_blast_types as types;

pub use cursor::DragCursor;
pub use map::{handle_key_event, should_quit};
