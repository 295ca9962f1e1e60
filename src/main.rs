//! Terminal Block Blast runner (default binary).
//!
//! Keys: `1`-`3` pick a tray piece, arrows/hjkl/wasd move the drop cursor,
//! Enter/Space drop, Esc cancel, `t` redraw the tray, `r` restart, `q` quit.
//! Configuration comes from `BLOCK_BLAST_*` environment variables and logging
//! from `RUST_LOG` (stderr).

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use block_blast::core::{GameConfig, GameState};
use block_blast::input::{handle_key_event, should_quit, DragCursor};
use block_blast::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Idle redraw interval; the game itself has no clock.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    env_logger::init();
    let config = GameConfig::from_env();
    info!(
        "starting seed={} stuck_policy={} max_refills={:?}",
        config.seed,
        config.stuck_policy.as_str(),
        config.max_refill_attempts
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::with_config(config);
    let mut cursor = DragCursor::new();
    let view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = game.snapshot();
        view.render_into(&snap, Some(cursor.position()), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    info!(
                        "quit score={} pieces={} episode={}",
                        game.score(),
                        game.pieces_placed(),
                        game.episode_id()
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key).and_then(|a| cursor.apply(a)) {
                    game.apply_action(action, cursor.position());
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
