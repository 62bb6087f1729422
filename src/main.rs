//! Terminal blockfall runner (default binary).
//!
//! Wires the engine to its collaborators: crossterm input decoding, the
//! framebuffer renderer, and the best-effort score store. The engine itself
//! never schedules anything; this loop calls `tick` on a fixed cadence.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Session, SessionSnapshot};
use blockfall::input::{decode_key, should_quit};
use blockfall::store::{default_path, JsonScoreStore, ScoreRecord, ScoreStore};
use blockfall::term::{Frame, GameView, Screen, Viewport};
use blockfall::types::{GameStatus, TICK_MS};

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.leave();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|since| since.subsec_nanos())
        .unwrap_or(1);
    let mut session = Session::with_seed(seed);
    let mut store = JsonScoreStore::open(default_path());
    let mut best_score = store.bests().best().map(|record| record.score);

    let view = GameView::default();
    let mut frame = Frame::new(0, 0);
    let mut snapshot = SessionSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut was_over = false;

    loop {
        // Render.
        session.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, best_score, Viewport::new(w, h), &mut frame);
        screen.present(&mut frame)?;

        // Record the finished session once, on the edge into game over.
        let over = snapshot.status == GameStatus::GameOver;
        if over && !was_over {
            let bests = store.record(ScoreRecord {
                score: snapshot.score,
                level: snapshot.level,
                lines: snapshot.lines,
            });
            best_score = bests.best().map(|record| record.score);
        }
        was_over = over;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = decode_key(key) {
                        session.apply(intent);
                    }
                }
                Event::Resize(..) => screen.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
