//! Block Blast (workspace facade crate).
//!
//! Exposes `block_blast::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use block_blast_core as core;
pub use block_blast_input as input;
pub use block_blast_term as term;
pub use block_blast_types as types;
