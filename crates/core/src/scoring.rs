//! Scoring module - line clear points
//!
//! A single sweep awards 10 points for its first row and doubles the award
//! for every further row it clears, so 1/2/3/4 rows are worth 10/30/70/150.
//! The multiplier lives only for the duration of one sweep.

use crate::types::LINE_CLEAR_BASE_POINTS;

/// Running total for one sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepTally {
    lines: u32,
    points: u32,
    multiplier: u32,
}

impl SweepTally {
    pub fn new() -> Self {
        Self {
            lines: 0,
            points: 0,
            multiplier: 1,
        }
    }

    /// Count one cleared row and double the multiplier for the next
    pub fn record_row(&mut self) {
        self.points = self
            .points
            .saturating_add(self.multiplier.saturating_mul(LINE_CLEAR_BASE_POINTS));
        self.multiplier = self.multiplier.saturating_mul(2);
        self.lines += 1;
    }

    /// Rows cleared so far
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Points earned so far
    pub fn points(&self) -> u32 {
        self.points
    }
}

impl Default for SweepTally {
    fn default() -> Self {
        Self::new()
    }
}

/// Points for clearing `lines` rows in one sweep
pub fn line_clear_score(lines: u32) -> u32 {
    let mut tally = SweepTally::new();
    for _ in 0..lines {
        tally.record_row();
    }
    tally.points()
}
