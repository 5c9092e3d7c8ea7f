//! Frame clock for the terminal loop.
//!
//! Hands out whole elapsed milliseconds. The clock only advances by what it
//! hands out, so the sub-millisecond remainder of one frame is counted in a
//! later one instead of being lost.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Time until a frame of length `frame` is due, measured from `now`.
    pub fn until_next(&self, frame: Duration, now: Instant) -> Duration {
        frame.saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Whole milliseconds elapsed up to `now`; the remainder carries over.
    pub fn elapsed_ms(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        self.last += Duration::from_millis(u64::from(ms));
        ms
    }
}
