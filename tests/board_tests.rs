//! Board tests - grid access, merging and the line sweep

use arena_tetris::core::{is_row_full, Board, Piece};
use arena_tetris::types::{Error, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i32, value: u8) {
    for x in 0..board.width() as i32 {
        board.set(x, y, value).unwrap();
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert!(board.is_empty());
    assert_eq!(board.rows().count(), 20);
    assert!(board.rows().all(|row| row.len() == 10));
}

#[test]
fn test_custom_dimensions() {
    let board = Board::new(6, 8).unwrap();
    assert_eq!((board.width(), board.height()), (6, 8));
    assert_eq!(board.cells().len(), 48);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();

    assert_eq!(board.cell_at(-1, 0), None);
    assert_eq!(board.cell_at(0, -1), None);
    assert_eq!(board.cell_at(10, 0), None);
    assert_eq!(board.cell_at(0, 20), None);
    assert_eq!(board.cell_at(9, 19), Some(0));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    board.set(5, 10, 7).unwrap();
    assert_eq!(board.cell_at(5, 10), Some(7));
    assert!(board.is_occupied(5, 10));

    board.set(5, 10, 0).unwrap();
    assert!(!board.is_occupied(5, 10));

    assert_eq!(board.set(10, 0, 1), Err(Error::OutOfBounds { x: 10, y: 0 }));
}

#[test]
fn test_is_row_full() {
    assert!(is_row_full(&[1, 2, 3]));
    assert!(!is_row_full(&[1, 0, 3]));
    assert!(!is_row_full(&[0; 10]));
}

#[test]
fn test_merge_writes_piece_ids() {
    let mut board = Board::default();
    // T at (3, 17): [[0,7,0],[7,7,7],[0,0,0]]
    let piece = Piece::new(PieceKind::T, 3, 17);

    assert_eq!(board.merge(&piece), 4);

    assert_eq!(board.cell_at(4, 17), Some(7));
    assert_eq!(board.cell_at(3, 18), Some(7));
    assert_eq!(board.cell_at(4, 18), Some(7));
    assert_eq!(board.cell_at(5, 18), Some(7));
    assert_eq!(board.cell_at(3, 17), Some(0));
}

#[test]
fn test_merge_skips_cells_above_top() {
    let mut board = Board::default();
    // Vertical I in column 5, rows -2..=1
    let piece = Piece::new(PieceKind::I, 4, -2);

    assert_eq!(board.merge(&piece), 2);
    assert_eq!(board.cell_at(5, 0), Some(1));
    assert_eq!(board.cell_at(5, 1), Some(1));
}

#[test]
fn test_sweep_single_line() {
    let mut board = Board::default();
    fill_row(&mut board, 19, 1);
    board.set(0, 18, 3).unwrap();

    let tally = board.sweep();

    assert_eq!(tally.lines(), 1);
    assert_eq!(tally.points(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.cell_at(0, 19), Some(3));
    assert_eq!(board.row(0), Some(&[0u8; 10][..]));
}

#[test]
fn test_sweep_scores_double_per_row() {
    for (rows, expected) in [(1, 10), (2, 30), (3, 70), (4, 150)] {
        let mut board = Board::default();
        for y in 20 - rows..20 {
            fill_row(&mut board, y, 2);
        }
        let tally = board.sweep();
        assert_eq!(tally.lines(), rows as u32);
        assert_eq!(tally.points(), expected, "{} rows", rows);
        assert!(board.is_empty());
    }
}

#[test]
fn test_sweep_non_adjacent_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 19, 1);
    fill_row(&mut board, 17, 1);
    board.set(2, 18, 4).unwrap();
    board.set(6, 16, 5).unwrap();

    let tally = board.sweep();

    assert_eq!(tally.lines(), 2);
    assert_eq!(tally.points(), 30);
    assert_eq!(board.cell_at(2, 19), Some(4));
    assert_eq!(board.cell_at(6, 18), Some(5));
    assert_eq!(board.cells().iter().filter(|&&c| c != 0).count(), 2);
}

#[test]
fn test_sweep_leaves_partial_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 19, 1);
    board.set(9, 19, 0).unwrap();
    let before = board.clone();

    let tally = board.sweep();

    assert_eq!(tally.lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_top_row_is_never_swept() {
    let mut board = Board::default();
    fill_row(&mut board, 0, 6);

    assert_eq!(board.sweep().lines(), 0);
    assert!(is_row_full(board.row(0).unwrap()));
}

#[test]
fn test_clear_keeps_dimensions() {
    let mut board = Board::new(7, 9).unwrap();
    fill_row(&mut board, 8, 1);
    board.clear();
    assert!(board.is_empty());
    assert_eq!((board.width(), board.height()), (7, 9));
}
