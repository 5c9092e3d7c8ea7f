//! Collision detection - the one test every move, rotation, drop and spawn
//! goes through.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::EMPTY_CELL;

/// Whether `piece` overlaps a wall, the floor, or a locked cell.
///
/// A filled piece cell collides when it falls outside `0..width`
/// horizontally, at or below row `height`, or on a non-empty board cell.
/// Cells above the top edge (negative `y`) never collide, so freshly
/// spawned pieces may poke out of the arena.
pub fn collides(board: &Board, piece: &Piece) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;

    piece.cells().any(|(x, y, _)| {
        if x < 0 || x >= width || y >= height {
            return true;
        }
        if y < 0 {
            return false;
        }
        board.cell_at(x, y).map_or(true, |cell| cell != EMPTY_CELL)
    })
}
