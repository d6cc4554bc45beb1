//! Terminal tile-word game (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. Word lookups run
//! on a background tokio runtime; the frame loop itself stays synchronous.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tile_words::config::{AppConfig, Invocation, USAGE};
use tile_words::core::GameState;
use tile_words::input::{handle_key_event, should_quit};
use tile_words::lexicon::ValidationRuntime;
use tile_words::logging::init_file_logging;
use tile_words::session::Session;
use tile_words::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tile_words::types::TICK_MS;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match AppConfig::from_env().with_args(&args)? {
        Invocation::Play(config) => config,
        Invocation::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    init_file_logging(&config.log_path)?;

    // Fail before touching the terminal if no lexicon is available.
    let validator = config.lexicon.build_validator()?;
    let runtime = ValidationRuntime::new(validator, config.lexicon.timeout())?;

    let seed = config.seed_or_clock();
    info!(seed, validator = runtime.validator_name(), "starting");
    let mut session = Session::new(GameState::new(seed), runtime);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        score = session.game().score(),
        words = session.game().words_played(),
        "exiting"
    );
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = Viewport::new(0, 0);
    let mut dirty = true;

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render only when something changed.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if (w, h) != (viewport.width, viewport.height) {
            viewport = Viewport::new(w, h);
            term.invalidate();
            dirty = true;
        }
        if dirty {
            view.render_into(session.snapshot(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        dirty |= session.handle_command(command);
                    }
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        // Lookups finished since the last frame.
        dirty |= session.pump();

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            dirty |= session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
