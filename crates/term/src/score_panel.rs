//! Score readout.

use std::fmt::Write as _;

use crate::core::ScoreSink;
use crate::fb::{CellStyle, FrameBuffer};

/// Holds the latest published score and its rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePanel {
    score: u32,
    text: String,
}

impl ScorePanel {
    pub fn new() -> Self {
        let mut panel = Self {
            score: 0,
            text: String::with_capacity(24),
        };
        panel.set(0);
        panel
    }

    fn set(&mut self, score: u32) {
        self.score = score;
        self.text.clear();
        // Writing into a String cannot fail
        let _ = write!(self.text, "Score: {}", score);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// `"Score: N"`
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn draw(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        fb.put_str(x, y, &self.text, style);
    }
}

impl Default for ScorePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSink for ScorePanel {
    fn publish(&mut self, score: u32) {
        self.set(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_published_score() {
        let mut panel = ScorePanel::new();
        assert_eq!(panel.text(), "Score: 0");

        panel.publish(150);
        assert_eq!(panel.score(), 150);
        assert_eq!(panel.text(), "Score: 150");
    }

    #[test]
    fn draws_text() {
        let mut panel = ScorePanel::new();
        panel.publish(30);
        let mut fb = FrameBuffer::new(12, 1);
        panel.draw(&mut fb, 1, 0, CellStyle::default());
        assert_eq!(fb.row_text(0), " Score: 30  ");
    }
}
