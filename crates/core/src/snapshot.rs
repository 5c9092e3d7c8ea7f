//! Read-only view of a session for renderers and logs

use serde::Serialize;

use crate::pieces::{Matrix, Piece};
use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    /// Fill id of the piece (also its palette index)
    pub id: u8,
    pub kind: char,
    pub x: i32,
    pub y: i32,
    pub matrix: Matrix,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            id: value.kind.id(),
            kind: value.kind.letter(),
            x: value.x,
            y: value.y,
            matrix: value.matrix,
        }
    }
}

impl ActiveSnapshot {
    /// Filled cells in board coordinates as `(x, y, cell)`
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.matrix
            .filled()
            .map(move |(px, py, cell)| (self.x + px, self.y + py, cell))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major board cells, `width * height` long
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub drop_counter_ms: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Locked cell at (x, y), or `None` outside the board
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.board.get(y as usize * self.width + x as usize).copied()
    }

    /// Board rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.board.chunks_exact(self.width.max(1))
    }

    /// What a renderer shows at (x, y): the active piece over the locked cells
    pub fn visible_cell(&self, x: i32, y: i32) -> Cell {
        let from_active = self.active.as_ref().and_then(|active| {
            active
                .cells()
                .find(|&(ax, ay, _)| ax == x && ay == y)
                .map(|(_, _, cell)| cell)
        });
        from_active.or_else(|| self.cell(x, y)).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::PieceKind;
    use crate::pieces::Piece;
    use super::{ActiveSnapshot, GameSnapshot};

    fn sample() -> GameSnapshot {
        let mut board = vec![0; 4 * 3];
        board[2 * 4 + 1] = 3;
        GameSnapshot {
            width: 4,
            height: 3,
            board,
            active: Some(ActiveSnapshot::from(Piece::new(PieceKind::O, 2, 0))),
            score: 10,
            drop_counter_ms: 48,
            drop_interval_ms: 1000,
        }
    }

    #[test]
    fn cell_lookup_respects_bounds() {
        let snap = sample();
        assert_eq!(snap.cell(1, 2), Some(3));
        assert_eq!(snap.cell(0, 0), Some(0));
        assert_eq!(snap.cell(-1, 0), None);
        assert_eq!(snap.cell(4, 0), None);
        assert_eq!(snap.rows().count(), 3);
    }

    #[test]
    fn active_piece_overlays_board() {
        let snap = sample();
        assert_eq!(snap.visible_cell(2, 0), 4);
        assert_eq!(snap.visible_cell(3, 1), 4);
        assert_eq!(snap.visible_cell(1, 2), 3);
        assert_eq!(snap.visible_cell(0, 0), 0);
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["width"], 4);
        assert_eq!(json["score"], 10);
        assert_eq!(json["board"][9], 3);
        assert_eq!(json["active"]["kind"], "O");
        assert_eq!(json["active"]["matrix"], serde_json::json!([[4, 4], [4, 4]]));
    }
}
