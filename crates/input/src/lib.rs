//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Command`]. Each key
//! press yields at most one command; the caller queues it for the next tick.

pub mod map;

pub use arena_tetris_types as types;

pub use map::{handle_key_event, should_quit};
