//! The fixed-tick game loop.
//!
//! Each tick: drain pending input commands, advance the simulation, render
//! (skipped while paused), then wait for the next tick. The loop ends on
//! `Quit` or when the ball leaves the field.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{GameState, TickOutcome};
use crate::input::{InputQueue, INPUT_QUEUE_DEPTH};
use crate::pacer::Pacer;
use crate::term::{GameView, Surface};
use crate::types::{GameConfig, InputCommand, Phase, Player};

/// Commands applied per tick at most; anything beyond waits for the next tick.
pub const MAX_COMMANDS_PER_TICK: usize = INPUT_QUEUE_DEPTH;

/// Non-blocking supplier of input commands.
pub trait CommandSource {
    fn poll(&mut self) -> Option<InputCommand>;
}

impl CommandSource for InputQueue {
    fn poll(&mut self) -> Option<InputCommand> {
        InputQueue::poll(self)
    }
}

impl CommandSource for VecDeque<InputCommand> {
    fn poll(&mut self) -> Option<InputCommand> {
        self.pop_front()
    }
}

/// How the loop finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    Quit,
    Winner(Player),
}

pub struct GameLoop {
    state: GameState,
    config: GameConfig,
    view: GameView,
}

impl GameLoop {
    pub fn new(state: GameState, config: GameConfig) -> Self {
        Self {
            state,
            config,
            view: GameView::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until quit or game over.
    ///
    /// On game over the result screen is shown and held for
    /// `game_over_hold_ms` before returning.
    pub fn run<S, I, P>(&mut self, surface: &mut S, input: &mut I, pacer: &mut P) -> Result<LoopOutcome>
    where
        S: Surface + ?Sized,
        I: CommandSource + ?Sized,
        P: Pacer + ?Sized,
    {
        info!(
            width = self.state.width(),
            height = self.state.height(),
            tick_ms = self.config.tick_ms,
            "game started"
        );

        self.view.render(&self.state, surface);
        surface.present()?;

        let tick = Duration::from_millis(self.config.tick_ms as u64);
        loop {
            if let Some(outcome) = self.step(surface, input)? {
                if let LoopOutcome::Winner(_) = outcome {
                    pacer.pause(Duration::from_millis(self.config.game_over_hold_ms as u64));
                }
                return Ok(outcome);
            }
            pacer.pause(tick);
        }
    }

    /// One tick without waiting. Returns the outcome once the loop is finished.
    pub fn step<S, I>(&mut self, surface: &mut S, input: &mut I) -> Result<Option<LoopOutcome>>
    where
        S: Surface + ?Sized,
        I: CommandSource + ?Sized,
    {
        for _ in 0..MAX_COMMANDS_PER_TICK {
            let Some(cmd) = input.poll() else {
                break;
            };
            debug!(command = cmd.as_str(), "input");
            if cmd == InputCommand::Quit {
                info!(ticks = self.state.ticks(), "quit requested");
                return Ok(Some(LoopOutcome::Quit));
            }
            self.apply(cmd);
        }

        match self.state.tick() {
            TickOutcome::Paused => Ok(None),
            TickOutcome::Continue => {
                self.view.render(&self.state, surface);
                surface.present()?;
                Ok(None)
            }
            TickOutcome::GameOver(winner) => {
                info!(winner = winner.name(), ticks = self.state.ticks(), "game over");
                self.view.render_game_over(&self.state, surface, winner);
                surface.present()?;
                Ok(Some(LoopOutcome::Winner(winner)))
            }
        }
    }

    fn apply(&mut self, cmd: InputCommand) {
        let before = self.state.phase();
        self.state.apply_command(cmd);
        match (before, self.state.phase()) {
            (Phase::Running, Phase::Paused) => info!("paused"),
            (Phase::Paused, Phase::Running) => info!("resumed"),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacer::NoopPacer;
    use crate::term::FrameBuffer;

    #[test]
    fn quit_ends_loop_before_ticking() {
        let mut game = GameLoop::new(GameState::new(40, 20), GameConfig::default());
        let mut fb = FrameBuffer::new(40, 20);
        let mut input = VecDeque::from(vec![InputCommand::Quit]);
        let mut pacer = NoopPacer::new();

        let outcome = game.run(&mut fb, &mut input, &mut pacer).unwrap();
        assert_eq!(outcome, LoopOutcome::Quit);
        assert_eq!(game.state().ticks(), 0);
        assert!(pacer.pauses.is_empty());
    }

    #[test]
    fn commands_before_quit_are_applied() {
        let mut game = GameLoop::new(GameState::new(40, 20), GameConfig::default());
        let mut fb = FrameBuffer::new(40, 20);
        let mut input = VecDeque::from(vec![
            InputCommand::MoveUp(Player::One),
            InputCommand::MoveUp(Player::One),
            InputCommand::Quit,
            InputCommand::MoveUp(Player::One),
        ]);

        let outcome = game.step(&mut fb, &mut input).unwrap();
        assert_eq!(outcome, Some(LoopOutcome::Quit));
        assert_eq!(game.state().paddle(Player::One).row, 6);
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn paces_every_tick_then_holds_result() {
        let config = GameConfig::default();
        let mut game = GameLoop::new(GameState::new(40, 20), config);
        let mut fb = FrameBuffer::new(40, 20);
        let mut input = VecDeque::<InputCommand>::new();
        let mut pacer = NoopPacer::new();

        let outcome = game.run(&mut fb, &mut input, &mut pacer).unwrap();
        assert_eq!(outcome, LoopOutcome::Winner(Player::One));

        let ticks = game.state().ticks() as usize;
        assert_eq!(pacer.pauses.len(), ticks);
        assert!(pacer.pauses[..ticks - 1]
            .iter()
            .all(|d| *d == Duration::from_millis(config.tick_ms as u64)));
        assert_eq!(
            pacer.pauses.last(),
            Some(&Duration::from_millis(config.game_over_hold_ms as u64))
        );
    }
}
