//! Game state module - owns the field, paddles, ball and loop phase
//!
//! All mutation happens through [`GameState::apply_command`] (input side) and
//! [`GameState::tick`] (simulation side), both called from the game loop thread.

use tracing::debug;

use crate::object::GameObject;
use crate::physics;
use crate::types::{GameConfig, InputCommand, Phase, Player};

/// Result of a single simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The field advanced and play continues.
    Continue,
    /// Nothing moved because the game is paused.
    Paused,
    /// The ball has left the field; the game is finished.
    GameOver(Player),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    width: i32,
    height: i32,
    player1: GameObject,
    player2: GameObject,
    ball: GameObject,
    phase: Phase,
    /// Simulation ticks run so far (paused ticks are not counted).
    ticks: u64,
}

impl GameState {
    /// Create a game for a `width` x `height` field with default parameters.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, &GameConfig::default())
    }

    pub fn with_config(width: u16, height: u16, config: &GameConfig) -> Self {
        let width = width as i32;
        let height = height as i32;
        let paddle_height = config.paddle_height as i32;
        let paddle_start = physics::clamp_paddle_row(
            height / 2 - paddle_height / 2,
            height,
            paddle_height,
        );

        Self {
            width,
            height,
            player1: GameObject::paddle(paddle_start, 0, config.paddle_height),
            player2: GameObject::paddle(paddle_start, (width - 1).max(0), config.paddle_height),
            ball: GameObject::ball(
                height / 2,
                width / 2,
                config.ball_vel_row,
                config.ball_vel_col,
            ),
            phase: Phase::Running,
            ticks: 0,
        }
    }

    /// Replace the ball, e.g. to set up a specific serve.
    pub fn with_ball(mut self, ball: GameObject) -> Self {
        self.ball = ball;
        self
    }

    pub fn width(&self) -> u16 {
        self.width as u16
    }

    pub fn height(&self) -> u16 {
        self.height as u16
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase.is_paused()
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.phase.winner()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn paddle(&self, player: Player) -> &GameObject {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    pub fn ball(&self) -> &GameObject {
        &self.ball
    }

    /// All objects in draw order: player 1, player 2, ball.
    pub fn objects(&self) -> [&GameObject; 3] {
        [&self.player1, &self.player2, &self.ball]
    }

    /// Apply a discrete input command.
    ///
    /// Movement is ignored while paused and everything is ignored once the game
    /// is over. `Quit` is left to the caller.
    pub fn apply_command(&mut self, cmd: InputCommand) {
        match (self.phase, cmd) {
            (Phase::GameOver(_), _) | (_, InputCommand::Quit) => {}
            (Phase::Running, InputCommand::TogglePause) => self.phase = Phase::Paused,
            (Phase::Paused, InputCommand::TogglePause) => self.phase = Phase::Running,
            (Phase::Paused, _) => {}
            (Phase::Running, InputCommand::MoveUp(player)) => self.move_paddle(player, -1),
            (Phase::Running, InputCommand::MoveDown(player)) => self.move_paddle(player, 1),
        }
    }

    fn move_paddle(&mut self, player: Player, delta: i32) {
        let height = self.height;
        let paddle = match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        };
        paddle.row = physics::clamp_paddle_row(paddle.row + delta, height, paddle.height);
    }

    /// Run one simulation tick.
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::Paused => return TickOutcome::Paused,
            Phase::GameOver(winner) => return TickOutcome::GameOver(winner),
            Phase::Running => {}
        }

        self.ticks += 1;
        self.player1.advance();
        self.player2.advance();
        physics::step_ball(&mut self.ball, &self.player1, &self.player2, self.height);

        match physics::exit_side(&self.ball, self.width) {
            Some(side) => {
                let winner = side.winner();
                debug!(?side, winner = winner.name(), ticks = self.ticks, "ball left the field");
                self.phase = Phase::GameOver(winner);
                TickOutcome::GameOver(winner)
            }
            None => TickOutcome::Continue,
        }
    }
}
