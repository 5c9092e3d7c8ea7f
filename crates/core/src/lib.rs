//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game and the session
//! state that applies them. It does no I/O: a terminal front end, a test
//! or a benchmark drives it by feeding commands and elapsed time.
//!
//! # Module Structure
//!
//! - [`board`]: the arena grid, merging and the line sweep
//! - [`pieces`]: tetromino matrices, rotation and the horizontal kick
//! - [`collision`]: the single overlap test used by every move
//! - [`scoring`]: doubling line-clear points
//! - [`rng`]: piece selection (uniform by default, 7-bag on request)
//! - [`scheduler`]: fixed-interval gravity
//! - [`game_state`]: the session itself
//! - [`controller`]: command queue, tick ordering and score publishing
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn centred on row 0 and fall one row per drop interval.
//! - A piece that cannot fall is merged into the board; full rows below
//!   row 0 are removed and score 10, 20, 40, ... within one sweep.
//! - A new piece that spawns on occupied cells wipes the board and the
//!   score. Play continues; there is no game over.
//!
//! # Example
//!
//! ```
//! use arena_tetris_core::{GameConfig, GameState};
//! use arena_tetris_types::Command;
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! let x = game.active().x;
//!
//! game.apply_command(Command::MoveRight);
//! assert_eq!(game.active().x, x + 1);
//!
//! // Gravity only fires once the interval is exceeded
//! assert_eq!(game.tick(1000), None);
//! assert_eq!(game.active().y, 0);
//! game.tick(1);
//! assert_eq!(game.active().y, 1);
//! ```

pub mod board;
pub mod collision;
pub mod controller;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use arena_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{is_row_full, Board, MIN_COLS, MIN_ROWS};
pub use collision::collides;
pub use controller::{CommandQueue, Controller, NullSink, ScoreSink, TickSummary};
pub use game_state::{GameConfig, GameState, LockEvent};
pub use pieces::{rotate, shape_for, shape_for_tag, try_rotate, Matrix, Piece};
pub use rng::{PieceSource, Randomizer, SimpleRng};
pub use scheduler::DropScheduler;
pub use scoring::{line_clear_score, SweepTally};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
