//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game object model, the physics/collision step and
//! the game state machine. It has **no dependencies** on the terminal or input
//! plumbing, so every rule can be exercised headless.
//!
//! # Module Structure
//!
//! - [`object`]: paddles and the ball as positioned, sized, glyph-bearing rectangles
//! - [`physics`]: position update, wall and paddle reflection, exit detection
//! - [`game_state`]: field dimensions, objects, phase and command handling
//!
//! # Example
//!
//! ```
//! use tui_pong_core::{GameState, TickOutcome};
//! use tui_pong_types::{InputCommand, Player};
//!
//! let mut game = GameState::new(40, 20);
//! game.apply_command(InputCommand::MoveUp(Player::One));
//! assert_eq!(game.paddle(Player::One).row, 7);
//!
//! let mut outcome = TickOutcome::Continue;
//! while outcome == TickOutcome::Continue {
//!     outcome = game.tick();
//! }
//! assert_eq!(outcome, TickOutcome::GameOver(Player::One));
//! ```

pub mod game_state;
pub mod object;
pub mod physics;

pub use tui_pong_types as types;

pub use game_state::{GameState, TickOutcome};
pub use object::GameObject;
pub use physics::{exit_side, step_ball, Bounce};
