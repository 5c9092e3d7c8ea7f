//! Pieces module - tetromino catalog, rotation and wall kicks
//!
//! Pieces are square cell matrices (2x2 for O, 4x4 for I, 3x3 otherwise)
//! using the board's cell encoding. Rotation is a transpose followed by a
//! row or column reversal, so the matrix side stays fixed.
//!
//! The wall kick here is a best-effort horizontal nudge, not the SRS kick
//! tables: after rotating, the piece is shifted by a growing, alternating
//! offset until it fits or the offset outgrows the matrix.

use serde::{Serialize, Serializer};

use crate::types::{Cell, Direction, Error, PieceKind, Result, EMPTY_CELL};

/// Largest matrix side in the catalog (the I piece)
pub const MAX_MATRIX_SIZE: usize = 4;

/// A square cell matrix holding one tetromino in one rotation state.
///
/// Stored inline, so every copy is independent of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: usize,
    cells: [[Cell; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE],
}

impl Matrix {
    /// Build a matrix from explicit rows (top row first)
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_MATRIX_SIZE {
            return Err(Error::InvalidMatrix(format!(
                "side {} is outside 1..={}",
                size, MAX_MATRIX_SIZE
            )));
        }

        let mut cells = [[EMPTY_CELL; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(Error::InvalidMatrix(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    size
                )));
            }
            cells[y][..size].copy_from_slice(row);
        }

        Ok(Self { size, cells })
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Width in columns (matrices are square, so this is the side length)
    pub fn width(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells[..self.size].iter().map(move |row| &row[..self.size])
    }

    /// Filled cells as local `(x, y, cell)`
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != EMPTY_CELL)
                .map(move |(x, &cell)| (x as i32, y as i32, cell))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// Canonical matrix for a piece kind.
///
/// Returns a fresh value on every call; filled cells carry the kind's id.
pub fn shape_for(kind: PieceKind) -> Matrix {
    let (size, cells) = match kind {
        PieceKind::I => (
            4,
            [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
        ),
        PieceKind::L => (3, [[0, 2, 0, 0], [0, 2, 0, 0], [0, 2, 2, 0], [0; 4]]),
        PieceKind::J => (3, [[0, 3, 0, 0], [0, 3, 0, 0], [3, 3, 0, 0], [0; 4]]),
        PieceKind::O => (2, [[4, 4, 0, 0], [4, 4, 0, 0], [0; 4], [0; 4]]),
        PieceKind::Z => (3, [[5, 5, 0, 0], [0, 5, 5, 0], [0; 4], [0; 4]]),
        PieceKind::S => (3, [[0, 6, 6, 0], [6, 6, 0, 0], [0; 4], [0; 4]]),
        PieceKind::T => (3, [[0, 7, 0, 0], [7, 7, 7, 0], [0; 4], [0; 4]]),
    };
    Matrix { size, cells }
}

/// Canonical matrix for a kind tag such as `"T"`.
pub fn shape_for_tag(tag: &str) -> Result<Matrix> {
    let kind: PieceKind = tag.parse()?;
    Ok(shape_for(kind))
}

/// Rotate a matrix a quarter turn.
///
/// Transpose, then reverse every row (clockwise) or the row order
/// (counter-clockwise).
pub fn rotate(matrix: &Matrix, direction: Direction) -> Matrix {
    let mut out = *matrix;
    let n = out.size;

    for y in 0..n {
        for x in 0..y {
            let tmp = out.cells[y][x];
            out.cells[y][x] = out.cells[x][y];
            out.cells[x][y] = tmp;
        }
    }

    match direction {
        Direction::Clockwise => {
            for row in &mut out.cells[..n] {
                row[..n].reverse();
            }
        }
        Direction::CounterClockwise => out.cells[..n].reverse(),
    }

    out
}

/// A tetromino placed on the board: matrix plus top-left offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// A piece in its spawn orientation at (x, y)
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            matrix: shape_for(kind),
            x,
            y,
        }
    }

    /// A piece centred horizontally over a board `board_width` wide, at row 0
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let matrix = shape_for(kind);
        let x = (board_width / 2) as i32 - (matrix.width() / 2) as i32;
        Self {
            kind,
            matrix,
            x,
            y: 0,
        }
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Filled cells in board coordinates as `(x, y, cell)`
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.matrix
            .filled()
            .map(move |(px, py, cell)| (self.x + px, self.y + py, cell))
    }
}

/// Rotate a piece and nudge it sideways until `collides` clears.
///
/// Shifts are cumulative: the running offset goes `+1, -2, +3, -4, ...`, so
/// the tested positions are `x, x+1, x-1, x+2, ...`. Once the next offset is
/// larger than the matrix width the rotation is abandoned.
/// Returns the rotated piece, or `None` if no position fits.
pub fn try_rotate(
    piece: &Piece,
    direction: Direction,
    collides: impl Fn(&Piece) -> bool,
) -> Option<Piece> {
    let mut candidate = Piece {
        matrix: rotate(&piece.matrix, direction),
        ..*piece
    };
    let width = candidate.matrix.width() as i32;
    let mut offset: i32 = 1;

    while collides(&candidate) {
        candidate.x += offset;
        offset = -(offset + offset.signum());
        if offset > width {
            return None;
        }
    }

    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells_of_its_id() {
        for kind in PieceKind::ALL {
            let matrix = shape_for(kind);
            assert_eq!(matrix.filled_count(), 4, "{:?}", kind);
            assert!(matrix.filled().all(|(_, _, cell)| cell == kind.id()));
        }
    }

    #[test]
    fn test_matrix_sizes() {
        assert_eq!(shape_for(PieceKind::I).size(), 4);
        assert_eq!(shape_for(PieceKind::O).size(), 2);
        for kind in [PieceKind::L, PieceKind::J, PieceKind::Z, PieceKind::S, PieceKind::T] {
            assert_eq!(shape_for(kind).size(), 3);
        }
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Matrix::from_rows::<[Cell; 0]>(&[]).is_err());
        assert!(Matrix::from_rows(&[vec![1u8, 1], vec![1]]).is_err());
        assert!(Matrix::from_rows(&[[0u8; 5]; 5]).is_err());
    }

    #[test]
    fn test_rotation_does_not_touch_catalog() {
        let mut piece = Piece::new(PieceKind::L, 0, 0);
        piece.matrix = rotate(&piece.matrix, Direction::Clockwise);
        assert_ne!(piece.matrix, shape_for(PieceKind::L));
        assert_eq!(
            shape_for(PieceKind::L).to_rows(),
            vec![vec![0, 2, 0], vec![0, 2, 0], vec![0, 2, 2]]
        );
    }

    #[test]
    fn test_kick_gives_up_for_narrow_matrix() {
        // O is two wide: only x and x+1 are tried
        let piece = Piece::new(PieceKind::O, 4, 0);
        let tried = std::cell::RefCell::new(Vec::new());
        let result = try_rotate(&piece, Direction::Clockwise, |p| {
            tried.borrow_mut().push(p.x);
            true
        });
        assert!(result.is_none());
        assert_eq!(tried.into_inner(), vec![4, 5]);
    }

    #[test]
    fn test_kick_sequence_for_three_wide_matrix() {
        let piece = Piece::new(PieceKind::T, 4, 0);
        let tried = std::cell::RefCell::new(Vec::new());
        let result = try_rotate(&piece, Direction::Clockwise, |p| {
            tried.borrow_mut().push(p.x);
            true
        });
        assert!(result.is_none());
        assert_eq!(tried.into_inner(), vec![4, 5, 3, 6]);
    }
}
