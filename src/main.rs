//! Terminal Pong runner.
//!
//! Exit status: `0` after a finished game, `1` on quit or when the terminal
//! (or configuration) cannot be set up.

use std::process;

use anyhow::{Context, Result};
use tracing::error;

use tui_pong::config::Config;
use tui_pong::core::GameState;
use tui_pong::engine::{GameLoop, LoopOutcome, SleepPacer};
use tui_pong::input::{spawn_listener, CrosstermEvents};
use tui_pong::logging;
use tui_pong::term::{Surface, TerminalSurface};
use tui_pong::types::{FALLBACK_HEIGHT, FALLBACK_WIDTH};

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("tui-pong: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = logging::init(&config) {
        eprintln!("tui-pong: {err:#}");
        process::exit(1);
    }

    let code = match run(&config) {
        Ok(LoopOutcome::Winner(_)) => 0,
        Ok(LoopOutcome::Quit) => 1,
        Err(err) => {
            error!(error = %format!("{err:#}"), "fatal");
            eprintln!("tui-pong: {err:#}");
            1
        }
    };
    process::exit(code);
}

fn run(config: &Config) -> Result<LoopOutcome> {
    let mut surface =
        TerminalSurface::enter((FALLBACK_WIDTH, FALLBACK_HEIGHT)).context("initializing terminal")?;

    let result = play(&mut surface, config);

    // Always try to restore terminal state, even when the game failed.
    let restored = surface.exit().context("restoring terminal");
    let outcome = result?;
    restored?;
    Ok(outcome)
}

fn play(surface: &mut TerminalSurface, config: &Config) -> Result<LoopOutcome> {
    let (width, height) = surface.size();
    let state = GameState::with_config(width, height, &config.game);

    let mut input = spawn_listener(CrosstermEvents).context("starting input listener")?;
    let mut pacer = SleepPacer::new();

    GameLoop::new(state, config.game).run(surface, &mut input, &mut pacer)
}
