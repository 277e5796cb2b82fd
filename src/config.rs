//! Configuration module - environment variable parsing
//!
//! The game takes no command-line flags. Every knob is optional and falls back
//! to the defaults in [`crate::types`].

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::types::{GameConfig, MAX_BALL_SPEED};

pub const ENV_TICK_MS: &str = "PONG_TICK_MS";
pub const ENV_PADDLE_HEIGHT: &str = "PONG_PADDLE_HEIGHT";
pub const ENV_BALL_VEL_ROW: &str = "PONG_BALL_VEL_ROW";
pub const ENV_BALL_VEL_COL: &str = "PONG_BALL_VEL_COL";
pub const ENV_GAME_OVER_HOLD_MS: &str = "PONG_GAME_OVER_HOLD_MS";
pub const ENV_LOG_FILE: &str = "PONG_LOG_FILE";
pub const ENV_LOG: &str = "PONG_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub game: GameConfig,
    /// Log destination; logging is off when unset because the game owns the terminal.
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = GameConfig::default();

        let tick_ms = parse_var(&lookup, ENV_TICK_MS)?.unwrap_or(defaults.tick_ms);
        if !(1..=1000).contains(&tick_ms) {
            return Err(ConfigError::OutOfRange {
                var: ENV_TICK_MS,
                value: tick_ms as i64,
                expected: "1..=1000",
            });
        }

        let paddle_height = parse_var(&lookup, ENV_PADDLE_HEIGHT)?.unwrap_or(defaults.paddle_height);
        if paddle_height == 0 {
            return Err(ConfigError::OutOfRange {
                var: ENV_PADDLE_HEIGHT,
                value: 0,
                expected: ">= 1",
            });
        }

        let ball_vel_row = parse_var(&lookup, ENV_BALL_VEL_ROW)?.unwrap_or(defaults.ball_vel_row);
        if !(-MAX_BALL_SPEED..=MAX_BALL_SPEED).contains(&ball_vel_row) {
            return Err(ConfigError::OutOfRange {
                var: ENV_BALL_VEL_ROW,
                value: ball_vel_row as i64,
                expected: "-8..=8",
            });
        }

        let ball_vel_col = parse_var(&lookup, ENV_BALL_VEL_COL)?.unwrap_or(defaults.ball_vel_col);
        if ball_vel_col == 0 || !(-MAX_BALL_SPEED..=MAX_BALL_SPEED).contains(&ball_vel_col) {
            return Err(ConfigError::OutOfRange {
                var: ENV_BALL_VEL_COL,
                value: ball_vel_col as i64,
                expected: "-8..=8, non-zero",
            });
        }

        let game_over_hold_ms =
            parse_var(&lookup, ENV_GAME_OVER_HOLD_MS)?.unwrap_or(defaults.game_over_hold_ms);

        let log_file = lookup(ENV_LOG_FILE)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let log_filter = lookup(ENV_LOG)
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            game: GameConfig {
                tick_ms,
                paddle_height,
                ball_vel_row,
                ball_vel_col,
                game_over_hold_ms,
            },
            log_file,
            log_filter,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

/// Configuration errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("{var} out of range: {value} (expected {expected})")]
    OutOfRange {
        var: &'static str,
        value: i64,
        expected: &'static str,
    },
}
