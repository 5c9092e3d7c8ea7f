//! Controller - the cooperative game loop driver
//!
//! Commands are queued as they arrive and applied at the start of the next
//! tick, in arrival order, before gravity runs. The score is pushed to a
//! [`ScoreSink`] whenever it changes.

use arrayvec::ArrayVec;
use tracing::warn;

use crate::game_state::{GameConfig, GameState};
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Result};

/// Commands that fit between two ticks
pub const COMMAND_QUEUE_CAPACITY: usize = 32;

/// Receives the score each time it changes.
pub trait ScoreSink {
    fn publish(&mut self, score: u32);
}

/// Discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn publish(&mut self, _score: u32) {}
}

impl<S: ScoreSink + ?Sized> ScoreSink for &mut S {
    fn publish(&mut self, score: u32) {
        (**self).publish(score);
    }
}

/// Bounded FIFO of pending commands
#[derive(Debug, Default, Clone)]
pub struct CommandQueue {
    items: ArrayVec<Command, COMMAND_QUEUE_CAPACITY>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command; `false` when the queue is full.
    pub fn push(&mut self, command: Command) -> bool {
        self.items.try_push(command).is_ok()
    }

    /// Remove and yield every queued command in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.items.drain(..)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What happened during one tick
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    /// Commands applied
    pub applied: usize,
    /// Pieces locked
    pub locks: usize,
    pub lines_cleared: u32,
    /// The arena overflowed and was reset
    pub overflowed: bool,
}

pub struct Controller<S: ScoreSink> {
    state: GameState,
    queue: CommandQueue,
    sink: S,
    published: u32,
}

impl<S: ScoreSink> Controller<S> {
    /// Start a session and publish its initial score.
    pub fn new(config: GameConfig, mut sink: S) -> Result<Self> {
        let state = GameState::new(config)?;
        let published = state.score();
        sink.publish(published);
        Ok(Self {
            state,
            queue: CommandQueue::new(),
            sink,
            published,
        })
    }

    /// Queue a command for the next tick.
    ///
    /// Returns `false` and drops the command if the queue is full.
    pub fn enqueue(&mut self, command: Command) -> bool {
        if self.queue.push(command) {
            return true;
        }
        warn!(command = command.as_str(), "command queue full, dropping");
        false
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Apply queued commands, advance gravity, publish the score.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickSummary {
        let mut summary = TickSummary::default();

        for command in self.queue.drain() {
            summary.applied += 1;
            if let Some(event) = self.state.apply_command(command) {
                summary.locks += 1;
                summary.lines_cleared += event.lines_cleared;
                summary.overflowed |= event.overflow;
            }
        }

        if let Some(event) = self.state.tick(elapsed_ms) {
            summary.locks += 1;
            summary.lines_cleared += event.lines_cleared;
            summary.overflowed |= event.overflow;
        }

        let score = self.state.score();
        if score != self.published {
            self.published = score;
            self.sink.publish(score);
        }

        summary
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
