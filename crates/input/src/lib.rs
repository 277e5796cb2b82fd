//! Terminal input module (engine-facing).
//!
//! This module maps `crossterm` key events into [`crate::types::InputCommand`]
//! and runs the background listener that feeds them to the game loop over a
//! channel, so the loop never shares mutable state with the input side.

pub mod listener;
pub mod map;

pub use tui_pong_types as types;

pub use listener::{spawn_listener, CrosstermEvents, EventSource, InputQueue, INPUT_QUEUE_DEPTH};
pub use map::{command_for_key, should_quit};
