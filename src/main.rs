//! Space Garbage runner (default binary).
//!
//! Loads the sprites, takes over the terminal and runs the tick loop until
//! the player quits with `q` or Ctrl-C.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, warn};

use space_garbage::core::SpriteLibrary;
use space_garbage::engine::{GameConfig, Session};
use space_garbage::input::{map_key_event, should_quit};
use space_garbage::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = GameConfig::from_env();

    if let Some(path) = &config.log_path {
        simple_logging::log_to_file(path, config.log_level)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
    }

    let sprites = SpriteLibrary::load(&config.sprites_dir).with_context(|| {
        format!("failed to load sprites from {}", config.sprites_dir.display())
    })?;
    info!(
        "loaded {} ship frames and {} garbage sprites",
        sprites.ship.len(),
        sprites.garbage.len()
    );

    let seed = config.seed.unwrap_or_else(clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to enter full-screen mode")?;

    let result = run(&mut term, &config, sprites, seed);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {err:#}");
    }
    info!("exiting");
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    sprites: SpriteLibrary,
    seed: u32,
) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut session = Session::new(config, sprites, rows, cols, seed);

    let tick_duration = config.tick_duration();
    let mut last_tick = Instant::now();

    loop {
        // Input until the next tick is due.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    break;
                }
                if let Some(key) = map_key_event(key) {
                    if !session.push_key(key) {
                        warn!("key queue full, dropped {}", key.as_str());
                    }
                }
            }
        }

        // Tick, then render what the tasks drew.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
            term.draw(session.canvas_mut())?;
        }
    }

    info!(
        "quit after {} ticks, game over: {}, {} key presses dropped",
        session.world().stats.ticks,
        session.is_game_over(),
        session.world().input.dropped()
    );
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
