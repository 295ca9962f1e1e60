//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a simple framebuffer that is then
//! flushed to the terminal with crossterm. No widget toolkit is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_blast_core as core;
pub use block_blast_types as types;

pub use fb::{block_rgb, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
