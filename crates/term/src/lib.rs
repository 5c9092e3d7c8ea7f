//! Terminal "game renderer" module.
//!
//! Renders the game into a simple framebuffer of styled glyphs, then
//! flushes it to the terminal through `crossterm`, writing only what changed
//! since the previous frame. Board cells may span several terminal columns
//! and rows to correct for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;
pub mod score_panel;

pub use arena_tetris_core as core;
pub use arena_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use palette::{color_for, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use score_panel::ScorePanel;
