//! Arena Tetris (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, the
//! integration tests and the benchmarks share one import path:
//! `arena_tetris::{core, input, term, types}`.

pub mod clock;
pub mod config;

pub use arena_tetris_core as core;
pub use arena_tetris_input as input;
pub use arena_tetris_term as term;
pub use arena_tetris_types as types;
