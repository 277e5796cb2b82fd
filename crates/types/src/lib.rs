//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Field Geometry
//!
//! The playing field is the terminal itself, captured once at game start:
//!
//! - **Rows** grow downward from 0, **columns** grow rightward from 0
//! - Player 1 paddle sits in column 0, player 2 paddle in the last column
//! - The ball starts in the center cell
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed loop interval (20 ticks per second) |
//! | `GAME_OVER_HOLD_MS` | 2000 | How long the result screen stays up |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{InputCommand, Player, Side};
//!
//! let cmd = InputCommand::MoveUp(Player::One);
//! assert_eq!(cmd.player(), Some(Player::One));
//!
//! // The ball leaving through the left edge means player 2 scored the win.
//! assert_eq!(Side::Left.winner(), Player::Two);
//! assert_eq!(Side::Left.winner().name(), "Player 2");
//! ```

/// Paddle height in rows.
pub const PADDLE_HEIGHT: u16 = 4;

/// Paddle width in columns.
pub const PADDLE_WIDTH: u16 = 1;

/// Glyph used to fill paddles (full block).
pub const PADDLE_GLYPH: char = '\u{2588}';

/// Glyph used for the ball (black circle).
pub const BALL_GLYPH: char = '\u{25CF}';

/// Fixed loop interval in milliseconds.
pub const TICK_MS: u32 = 50;

/// Hold time for the game-over screen before the terminal is released.
pub const GAME_OVER_HOLD_MS: u32 = 2000;

/// Initial ball velocity, rows per tick.
pub const BALL_VEL_ROW: i32 = 1;

/// Initial ball velocity, columns per tick.
pub const BALL_VEL_COL: i32 = 2;

/// Largest configurable ball speed on either axis, cells per tick.
pub const MAX_BALL_SPEED: i32 = 8;

/// Terminal size used when the real size cannot be queried.
pub const FALLBACK_WIDTH: u16 = 80;
pub const FALLBACK_HEIGHT: u16 = 24;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Left paddle, `w`/`s`.
    One,
    /// Right paddle, arrow keys.
    Two,
}

impl Player {
    /// Display name used on the game-over screen.
    pub fn name(&self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Field edge the ball crossed when leaving play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Winner for a ball that left through this side.
    ///
    /// ```
    /// use tui_pong_types::{Player, Side};
    ///
    /// assert_eq!(Side::Left.winner(), Player::Two);
    /// assert_eq!(Side::Right.winner(), Player::One);
    /// ```
    pub fn winner(&self) -> Player {
        match self {
            Side::Left => Player::Two,
            Side::Right => Player::One,
        }
    }
}

/// Discrete commands produced by the input side and consumed once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Move the player's paddle one row up
    MoveUp(Player),
    /// Move the player's paddle one row down
    MoveDown(Player),
    /// Toggle between running and paused
    TogglePause,
    /// Leave the game immediately
    Quit,
}

impl InputCommand {
    /// Player addressed by a movement command.
    pub fn player(&self) -> Option<Player> {
        match self {
            InputCommand::MoveUp(p) | InputCommand::MoveDown(p) => Some(*p),
            InputCommand::TogglePause | InputCommand::Quit => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputCommand::MoveUp(Player::One) => "p1Up",
            InputCommand::MoveDown(Player::One) => "p1Down",
            InputCommand::MoveUp(Player::Two) => "p2Up",
            InputCommand::MoveDown(Player::Two) => "p2Down",
            InputCommand::TogglePause => "pause",
            InputCommand::Quit => "quit",
        }
    }
}

/// Game loop state machine.
///
/// `GameOver` is terminal and carries the winner, so a finished game always has
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver(Player),
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Phase::Paused)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::GameOver(p) => Some(*p),
            _ => None,
        }
    }
}

/// Tunable gameplay parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_ms: u32,
    pub paddle_height: u16,
    pub ball_vel_row: i32,
    pub ball_vel_col: i32,
    pub game_over_hold_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            paddle_height: PADDLE_HEIGHT,
            ball_vel_row: BALL_VEL_ROW,
            ball_vel_col: BALL_VEL_COL,
            game_over_hold_ms: GAME_OVER_HOLD_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.tick_ms, 50);
        assert_eq!(cfg.paddle_height, 4);
        assert_eq!((cfg.ball_vel_row, cfg.ball_vel_col), (1, 2));
        assert_eq!(cfg.game_over_hold_ms, 2000);
    }

    #[test]
    fn side_winner_mapping_is_exhaustive_and_exclusive() {
        assert_ne!(Side::Left.winner(), Side::Right.winner());
        assert_eq!(Side::Left.winner().opponent(), Side::Right.winner());
    }

    #[test]
    fn phase_queries() {
        assert!(Phase::Running.is_running());
        assert!(Phase::Paused.is_paused());
        assert!(Phase::GameOver(Player::One).is_over());
        assert_eq!(Phase::GameOver(Player::Two).winner(), Some(Player::Two));
        assert_eq!(Phase::Paused.winner(), None);
    }

    #[test]
    fn command_player() {
        assert_eq!(InputCommand::MoveDown(Player::Two).player(), Some(Player::Two));
        assert_eq!(InputCommand::TogglePause.player(), None);
        assert_eq!(InputCommand::Quit.as_str(), "quit");
    }
}
