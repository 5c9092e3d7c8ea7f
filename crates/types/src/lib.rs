//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the input decoder
//! and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! Reference playfield dimensions (a session may choose others):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Cell Encoding
//!
//! Board and piece cells share one encoding: `0` is empty, `1..=7` is the
//! fill id of a tetromino, which doubles as its colour index.
//!
//! | Kind | Id |
//! |------|----|
//! | I | 1 |
//! | L | 2 |
//! | J | 3 |
//! | O | 4 |
//! | Z | 5 |
//! | S | 6 |
//! | T | 7 |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Gravity interval |
//! | `TICK_MS` | 16 | Frame pacing for the terminal loop (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use arena_tetris_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind: PieceKind = "t".parse().unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.id(), 7);
//!
//! assert!("x".parse::<PieceKind>().is_err());
//!
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Gravity interval in milliseconds (one row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Frame pacing interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Points for the first row cleared in a sweep; each further row doubles.
pub const LINE_CLEAR_BASE_POINTS: u32 = 10;

/// Cell value of an empty board or matrix cell.
pub const EMPTY_CELL: u8 = 0;

/// A cell on the board or inside a piece matrix.
///
/// `0` is empty, anything else is the fill id of the piece that put it there.
pub type Cell = u8;

/// Errors raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A piece kind tag that is not one of `I, O, T, S, Z, J, L`.
    #[error("invalid piece kind: {0:?}")]
    InvalidPieceKind(String),

    /// A coordinate outside the board grid.
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// Board dimensions that cannot hold a piece.
    #[error("invalid board dimensions {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    /// A piece matrix that is empty, not square, or too large.
    #[error("invalid piece matrix: {0}")]
    InvalidMatrix(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and fill id:
/// - **I**: 1, four in a line
/// - **L**: 2
/// - **J**: 3, mirror of L
/// - **O**: 4, 2x2 square
/// - **Z**: 5
/// - **S**: 6, mirror of Z
/// - **T**: 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    Z,
    S,
    T,
}

impl PieceKind {
    /// All kinds in spawn-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
    ];

    /// Fill id written into board cells (also the palette index).
    pub fn id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::O => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
            PieceKind::T => 7,
        }
    }

    /// Look a kind up by its fill id.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(4), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::L),
            3 => Some(PieceKind::J),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Uppercase letter for display.
    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::O => 'O',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
        }
    }
}

impl FromStr for PieceKind {
    type Err = Error;

    /// Parse a single-letter tag (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "I" => Ok(PieceKind::I),
            "L" => Ok(PieceKind::L),
            "J" => Ok(PieceKind::J),
            "O" => Ok(PieceKind::O),
            "Z" => Ok(PieceKind::Z),
            "S" => Ok(PieceKind::S),
            "T" => Ok(PieceKind::T),
            _ => Err(Error::InvalidPieceKind(s.to_string())),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Discrete player commands
///
/// Each occurrence triggers exactly one engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell (locks it if it cannot fall)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateClockwise,
}

impl Command {
    /// Parse a command name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("softDrop"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("ROTATECLOCKWISE"), Some(Command::RotateClockwise));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotateclockwise" => Some(Command::RotateClockwise),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateClockwise => "rotateClockwise",
        }
    }
}
