//! Terminal Sokoban runner (default binary).
//!
//! Runs the game at a fixed frame tick: crossterm key events feed the held
//! button tracker between ticks, and each tick samples one frame of input,
//! updates the session, and redraws the pixel canvas.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use sokoban::core::{GameSession, LevelCatalog};
use sokoban::input::{map_key, should_quit, ButtonTracker, InputSampler};
use sokoban::term::{FrameBuffer, GameView, PixelCanvas, TerminalRenderer, Viewport};
use sokoban::types::TICK_MS;

fn main() -> Result<()> {
    // Logs go to stderr; redirect it while playing.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let catalog = LevelCatalog::builtin()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, catalog);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, catalog: LevelCatalog) -> Result<()> {
    let mut session = GameSession::new(catalog);
    let mut tracker = ButtonTracker::new();
    let mut sampler = InputSampler::new();

    let view = GameView::default();
    let mut canvas = PixelCanvas::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            log::info!("quit after {} frames", session.frame_count());
                            return Ok(());
                        }
                        if let Some(button) = map_key(key) {
                            tracker.press(button);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(button) = map_key(key) {
                            tracker.release(button);
                        }
                    }
                    // Auto-repeat must not count as a new press.
                    KeyEventKind::Repeat => {}
                },
                Event::Resize(..) => term.invalidate(),
                // Releases made in another window never reach us.
                Event::FocusLost => tracker.reset(),
                _ => {}
            }
        }

        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();

        let input = sampler.sample(tracker.take());
        canvas.clear();
        session.update(&input, &mut canvas);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&canvas, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        tracker.update(TICK_MS);
    }
}
