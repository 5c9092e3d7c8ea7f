//! Terminal arena runner (default binary).
//!
//! Reads `ARENA_*` settings, then runs the cooperative loop: keys become
//! queued commands, and once per frame the controller applies them and
//! advances gravity by the real elapsed time before the frame is drawn.

mod logging;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, info};

use arena_tetris::clock::FrameClock;
use arena_tetris::config::AppConfig;
use arena_tetris::core::{Controller, GameSnapshot};
use arena_tetris::input::{handle_key_event, should_quit};
use arena_tetris::term::{FrameBuffer, GameView, ScorePanel, TerminalRenderer, Viewport};
use arena_tetris::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        logging::init(path)?;
    }
    info!(
        cols = config.game.cols,
        rows = config.game.rows,
        drop_ms = config.game.drop_interval_ms,
        seed = config.game.seed,
        randomizer = config.game.randomizer.as_str(),
        "starting session"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let snapshot = result?;
    info!(
        score = snapshot.score,
        snapshot = %serde_json::to_string(&snapshot)?,
        "session ended"
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<GameSnapshot> {
    let mut controller = Controller::new(config.game, ScorePanel::new())?;
    let view = GameView::new(config.cell_width, config.cell_height);

    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut clock = FrameClock::new(Instant::now());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        controller.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, controller.sink(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        let mut timeout = clock.until_next(frame, Instant::now());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if should_quit(key) => return Ok(snapshot),
                Event::Key(key) => {
                    if let Some(command) = handle_key_event(key) {
                        controller.enqueue(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            timeout = clock.until_next(frame, Instant::now());
        }

        let summary = controller.tick(clock.elapsed_ms(Instant::now()));
        if summary.locks > 0 {
            debug!(
                locks = summary.locks,
                lines = summary.lines_cleared,
                overflowed = summary.overflowed,
                score = controller.state().score(),
                "tick"
            );
        }
    }
}
