//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it is unit-tested directly.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::palette::color_for;
use crate::score_panel::ScorePanel;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BLOCK: char = '█';
const FIELD_BG: Rgb = Rgb::new(0, 0, 0);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0)).bold();

/// Draws the arena, the active piece and the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs
        Self::new(2, 1)
    }
}

impl GameView {
    /// A zero size is bumped to one so every board cell stays visible.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    /// Size of the bordered play field in terminal cells
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = u16::try_from(snap.width).unwrap_or(u16::MAX).saturating_mul(self.cell_w);
        let h = u16::try_from(snap.height).unwrap_or(u16::MAX).saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        score: &ScorePanel,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        // Leave a row under the frame for the score
        let origin_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                let color = color_for(snap.visible_cell(x, y));
                self.draw_cell(fb, origin_x, origin_y, x as u16, y as u16, color);
            }
        }

        score.draw(
            fb,
            origin_x.saturating_add(1),
            origin_y.saturating_add(frame_h),
            LABEL,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, score: &ScorePanel, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, score, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.fill_rect(x + 1, y, w - 2, 1, Glyph::new('─', BORDER));
        fb.fill_rect(x + 1, bottom, w - 2, 1, Glyph::new('─', BORDER));
        fb.fill_rect(x, y + 1, 1, h - 2, Glyph::new('│', BORDER));
        fb.fill_rect(right, y + 1, 1, h - 2, Glyph::new('│', BORDER));
        fb.set(x, y, Glyph::new('┌', BORDER));
        fb.set(right, y, Glyph::new('┐', BORDER));
        fb.set(x, bottom, Glyph::new('└', BORDER));
        fb.set(right, bottom, Glyph::new('┘', BORDER));
    }

    /// Fill one board cell's `cell_w x cell_h` rectangle
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        color: Option<Rgb>,
    ) {
        let px = origin_x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w));
        let py = origin_y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h));
        let glyph = match color {
            Some(fg) => Glyph::new(BLOCK, CellStyle::new(fg, FIELD_BG)),
            None => Glyph::new(' ', CellStyle::new(FIELD_BG, FIELD_BG)),
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
    }
}
