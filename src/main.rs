//! Terminal Memory Puzzle runner (default binary).
//!
//! Fixed-tick loop: poll crossterm input until the next tick, advance the
//! session once per tick, and redraw through the framebuffer renderer when the
//! throttle allows it.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use memory_puzzle::config::GameConfig;
use memory_puzzle::core::{GameSession, GameSnapshot};
use memory_puzzle::input::{handle_key_event, map_mouse_event, should_quit, PointerEvent};
use memory_puzzle::logging;
use memory_puzzle::term::{FrameBuffer, GameView, RenderThrottle, TerminalBell, TerminalRenderer, Viewport};
use memory_puzzle::types::{LoopControl, TICK_MS};

/// Keep-alive redraw interval while nothing animates.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    config.validate()?;
    logging::init(config.log_path.as_deref())?;
    info!(
        grid_size = config.grid_size,
        seed = config.seed,
        sound = config.sound,
        "starting memory puzzle"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(%err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut session = GameSession::new(config.grid_size, config.seed)?;
    if config.sound {
        session = session.with_sound(Box::new(TerminalBell::stdout()));
    }

    let view = GameView::new();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    session.set_layout(view.layout_for(config.grid_size, viewport));

    let mut fb = FrameBuffer::new(w, h);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint(), session.is_animating()) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(score = session.score(), "quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if session.apply_action(action) == LoopControl::Quit {
                            return Ok(());
                        }
                    }
                }
                Event::Mouse(mouse) => match map_mouse_event(mouse) {
                    Some(PointerEvent::Down { x, y }) => {
                        session.on_pointer_down(x, y);
                    }
                    Some(PointerEvent::Moved { x, y }) => session.on_pointer_move(x, y),
                    None => {}
                },
                Event::Resize(w, h) => {
                    debug!(w, h, "terminal resized");
                    viewport = Viewport::new(w, h);
                    session.set_layout(view.layout_for(session.board().grid_size(), viewport));
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
