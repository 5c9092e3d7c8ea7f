//! GameView rendering through the facade crate

use arena_tetris::core::{GameConfig, GameState};
use arena_tetris::term::{color_for, FrameBuffer, GameView, ScorePanel, Viewport};
use arena_tetris::types::Command;

#[test]
fn test_render_fits_reference_board() {
    let state = GameState::new(GameConfig::default()).unwrap();
    let view = GameView::new(2, 1);
    let fb = view.render(&state.snapshot(), &ScorePanel::new(), Viewport::new(40, 24));

    assert_eq!((fb.width(), fb.height()), (40, 24));
    let (frame_w, frame_h) = view.frame_size(&state.snapshot());
    assert_eq!((frame_w, frame_h), (22, 22));

    // Frame is centred horizontally: (40 - 22) / 2 = 9
    assert_eq!(fb.get(9, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 21).unwrap().ch, '┘');
    assert!(fb.row_text(22).contains("Score: 0"));
}

#[test]
fn test_active_piece_cells_are_drawn() {
    let state = GameState::new(GameConfig::default()).unwrap();
    let snap = state.snapshot();
    let view = GameView::new(1, 1);
    let fb = view.render(&snap, &ScorePanel::new(), Viewport::new(12, 23));

    let active = snap.active.unwrap();
    for (x, y, cell) in active.cells() {
        let glyph = fb.get(1 + x as u16, 1 + y as u16).unwrap();
        assert_eq!(Some(glyph.style.fg), color_for(cell));
    }
}

#[test]
fn test_render_into_reuses_buffer() {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    let view = GameView::default();
    let panel = ScorePanel::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = state.snapshot();

    view.render_into(&snap, &panel, Viewport::new(30, 24), &mut fb);
    let before = fb.clone();

    state.apply_command(Command::SoftDrop);
    state.snapshot_into(&mut snap);
    view.render_into(&snap, &panel, Viewport::new(30, 24), &mut fb);

    assert_eq!((fb.width(), fb.height()), (30, 24));
    assert_ne!(fb, before);
}
