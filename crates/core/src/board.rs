//! Board module - manages the arena grid
//!
//! The board is a `cols x rows` grid (reference 10x20) where each cell is `0`
//! (empty) or the fill id of a locked piece.
//! Uses a flat row-major vector so a row is a contiguous slice and shifting
//! rows down is a single `copy_within`.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! The dimensions are fixed once the board is built. Every mutation keeps
//! exactly `rows` rows of `cols` cells.

use crate::pieces::{Piece, MAX_MATRIX_SIZE};
use crate::scoring::SweepTally;
use crate::types::{Cell, Error, Result, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

/// Narrowest board every spawn orientation fits on
pub const MIN_COLS: usize = 3;

/// Shortest board the upright I piece fits on
pub const MIN_ROWS: usize = MAX_MATRIX_SIZE;

fn check_dimensions(cols: usize, rows: usize) -> Result<()> {
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(Error::InvalidDimensions { cols, rows });
    }
    Ok(())
}

/// The arena - persistent occupancy grid of locked cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

/// A row is full when none of its cells is empty.
pub fn is_row_full(row: &[Cell]) -> bool {
    row.iter().all(|&cell| cell != EMPTY_CELL)
}

impl Board {
    /// Create an empty `cols x rows` board.
    ///
    /// Fails below [`MIN_COLS`] x [`MIN_ROWS`], where spawns would collide at once.
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        check_dimensions(cols, rows)?;
        Ok(Self {
            width: cols,
            height: rows,
            cells: vec![EMPTY_CELL; cols * rows],
        })
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Every row must have the same length, and the size must pass the
    /// same minimum as [`Board::new`].
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidDimensions {
                cols: width,
                rows: height,
            });
        }
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (x, y), or `None` outside the grid
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at (x, y)
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<()> {
        let idx = self.index(x, y).ok_or(Error::OutOfBounds { x, y })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.cell_at(x, y), Some(cell) if cell != EMPTY_CELL)
    }

    /// Row `y`, or `None` past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY_CELL)
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// Copy of the grid as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Write the piece's filled cells into the grid.
    ///
    /// Cells above the top edge are dropped; they have nowhere to go.
    /// Returns the number of cells written.
    pub fn merge(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y, cell) in piece.cells() {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = cell;
                written += 1;
            }
        }
        written
    }

    /// Remove row `y`: everything above shifts down one and a blank row
    /// appears at the top.
    fn remove_row(&mut self, y: usize) {
        let width = self.width;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(EMPTY_CELL);
    }

    /// Clear full rows, scanning from the bottom up to row 1.
    ///
    /// Row 0 is never examined. After a removal the same index is checked
    /// again because the row above has dropped into it.
    pub fn sweep(&mut self) -> SweepTally {
        let mut tally = SweepTally::new();
        let mut y = self.height - 1;
        while y > 0 {
            let full = self.row(y).is_some_and(is_row_full);
            if full {
                self.remove_row(y);
                tally.record_row();
                continue;
            }
            y -= 1;
        }
        tally
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![EMPTY_CELL; BOARD_WIDTH * BOARD_HEIGHT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 20),
            Err(Error::InvalidDimensions { cols: 0, rows: 20 })
        );
        assert!(Board::new(10, 0).is_err());
        assert!(Board::from_rows(vec![]).is_err());
        assert!(Board::from_rows(vec![vec![0, 0, 0], vec![0, 0]]).is_err());
    }

    #[test]
    fn test_boards_too_small_for_a_piece_rejected() {
        assert_eq!(
            Board::new(2, 20),
            Err(Error::InvalidDimensions { cols: 2, rows: 20 })
        );
        assert!(Board::new(10, MIN_ROWS - 1).is_err());
        assert!(Board::from_rows(vec![vec![0, 0]; 20]).is_err());
        assert!(Board::from_rows(vec![vec![0; 10]; 3]).is_err());

        let smallest = Board::new(MIN_COLS, MIN_ROWS).unwrap();
        for kind in crate::types::PieceKind::ALL {
            let piece = Piece::spawn(kind, smallest.width());
            assert!(!crate::collision::collides(&smallest, &piece), "{kind}");
        }
    }

    #[test]
    fn test_remove_row_shifts_down() {
        let mut board = Board::new(3, 4).unwrap();
        board.set(0, 0, 1).unwrap();
        board.set(1, 1, 2).unwrap();
        board.set(2, 2, 3).unwrap();

        board.remove_row(2);

        assert_eq!(
            board.to_rows(),
            vec![vec![0, 0, 0], vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn test_row_zero_never_clears() {
        let mut rows = vec![vec![0, 2, 0]; MIN_ROWS];
        rows[0] = vec![1, 1, 1];
        let mut board = Board::from_rows(rows).unwrap();
        let tally = board.sweep();
        assert_eq!(tally.lines(), 0);
        assert_eq!(board.row(0), Some(&[1, 1, 1][..]));
    }
}
