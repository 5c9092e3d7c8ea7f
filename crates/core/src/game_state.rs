//! Game state module - owns the authoritative session state
//!
//! Ties together the board, the active piece, the piece source, score and
//! the drop scheduler. Every mutation of the session goes through a method
//! here; renderers get a read-only [`GameSnapshot`].

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::{try_rotate, Piece};
use crate::rng::{PieceSource, Randomizer};
use crate::scheduler::DropScheduler;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    pub drop_interval_ms: u32,
    pub seed: u32,
    pub randomizer: Randomizer,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_WIDTH,
            rows: BOARD_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            seed: 1,
            randomizer: Randomizer::Uniform,
        }
    }
}

/// Emitted each time a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Kind of the piece that locked
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Points awarded by the sweep
    pub points: u32,
    /// Score after the lock (and after any overflow reset)
    pub score: u32,
    /// The replacement piece spawned into occupied cells and the arena was wiped
    pub overflow: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    source: PieceSource,
    scheduler: DropScheduler,
    score: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a session and spawn its first piece
    pub fn new(config: GameConfig) -> Result<Self> {
        let board = Board::new(config.cols, config.rows)?;
        let mut source = PieceSource::new(config.randomizer, config.seed);
        let active = Piece::spawn(source.next_kind(), board.width());

        debug!(
            cols = config.cols,
            rows = config.rows,
            seed = config.seed,
            randomizer = config.randomizer.as_str(),
            "new game"
        );

        Ok(Self {
            board,
            active,
            source,
            scheduler: DropScheduler::new(config.drop_interval_ms),
            score: 0,
            last_event: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn scheduler(&self) -> &DropScheduler {
        &self.scheduler
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Shift the active piece one column (`dx` of -1 or +1).
    ///
    /// Returns whether the move happened; a blocked move changes nothing.
    pub fn try_move(&mut self, dx: i32) -> bool {
        let moved = self.active.shifted(dx, 0);
        if collides(&self.board, &moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate the active piece, nudging it sideways if needed.
    ///
    /// A rotation with no free position is dropped silently.
    pub fn try_rotate(&mut self, direction: Direction) -> bool {
        let board = &self.board;
        match try_rotate(&self.active, direction, |piece| collides(board, piece)) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => {
                trace!(kind = %self.active.kind, ?direction, "rotation blocked");
                false
            }
        }
    }

    /// Move the active piece down one row, locking it if it cannot fall.
    ///
    /// Resets the drop timer either way.
    pub fn step_drop(&mut self) -> Option<LockEvent> {
        self.scheduler.reset();

        let fallen = self.active.shifted(0, 1);
        if !collides(&self.board, &fallen) {
            self.active = fallen;
            return None;
        }

        Some(self.lock_active())
    }

    /// Merge the active piece, sweep full rows, spawn the next piece
    fn lock_active(&mut self) -> LockEvent {
        let piece = self.active;
        self.board.merge(&piece);

        let tally = self.board.sweep();
        self.score = self.score.saturating_add(tally.points());

        let overflow = self.spawn_next();

        let event = LockEvent {
            kind: piece.kind,
            lines_cleared: tally.lines(),
            points: tally.points(),
            score: self.score,
            overflow,
        };
        debug!(
            kind = %piece.kind,
            x = piece.x,
            y = piece.y,
            lines = event.lines_cleared,
            points = event.points,
            score = event.score,
            "piece locked"
        );
        self.last_event = Some(event);
        event
    }

    /// Spawn a fresh piece centred at the top.
    ///
    /// If it lands on occupied cells the arena overflowed: the board is
    /// wiped, the score drops to zero and play continues with the new piece.
    /// Returns whether that happened.
    pub fn spawn_next(&mut self) -> bool {
        let kind = self.source.next_kind();
        self.active = Piece::spawn(kind, self.board.width());

        if !collides(&self.board, &self.active) {
            return false;
        }

        info!(score = self.score, "arena overflow, clearing board");
        self.board.clear();
        self.score = 0;
        true
    }

    /// Advance gravity by `elapsed_ms`, dropping one row when due
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<LockEvent> {
        if self.scheduler.advance(elapsed_ms) {
            self.step_drop()
        } else {
            None
        }
    }

    /// Apply one player command
    pub fn apply_command(&mut self, command: Command) -> Option<LockEvent> {
        match command {
            Command::MoveLeft => {
                self.try_move(-1);
                None
            }
            Command::MoveRight => {
                self.try_move(1);
                None
            }
            Command::SoftDrop => self.step_drop(),
            Command::RotateClockwise => {
                self.try_rotate(Direction::Clockwise);
                None
            }
        }
    }

    /// Start over: empty board, zero score, new piece
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.scheduler.reset();
        self.last_event = None;
        self.spawn_next();
    }

    /// Copy the observable state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.drop_counter_ms = self.scheduler.counter_ms();
        out.drop_interval_ms = self.scheduler.interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
