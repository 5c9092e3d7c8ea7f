//! Drop scheduler - fixed-interval gravity
//!
//! Elapsed time accumulates tick by tick. Once the total is strictly greater
//! than the interval a fall step is due; whoever performs the fall step
//! resets the counter (gravity and manual soft drops alike).

use crate::types::DROP_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropScheduler {
    counter_ms: u32,
    interval_ms: u32,
}

impl DropScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            counter_ms: 0,
            interval_ms,
        }
    }

    /// Add `elapsed_ms` and report whether a fall step is due
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.counter_ms = self.counter_ms.saturating_add(elapsed_ms);
        self.counter_ms > self.interval_ms
    }

    pub fn reset(&mut self) {
        self.counter_ms = 0;
    }

    pub fn counter_ms(&self) -> u32 {
        self.counter_ms
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

impl Default for DropScheduler {
    fn default() -> Self {
        Self::new(DROP_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_only_after_exceeding_interval() {
        let mut scheduler = DropScheduler::new(1000);
        assert!(!scheduler.advance(600));
        assert!(!scheduler.advance(400)); // exactly 1000 is not enough
        assert!(scheduler.advance(1));
        assert_eq!(scheduler.counter_ms(), 1001);
    }

    #[test]
    fn test_reset() {
        let mut scheduler = DropScheduler::default();
        scheduler.advance(900);
        scheduler.reset();
        assert_eq!(scheduler.counter_ms(), 0);
        assert!(!scheduler.advance(900));
    }

    #[test]
    fn test_counter_saturates() {
        let mut scheduler = DropScheduler::new(10);
        scheduler.advance(u32::MAX);
        assert!(scheduler.advance(u32::MAX));
        assert_eq!(scheduler.counter_ms(), u32::MAX);
    }
}
