//! Game loop orchestration.
//!
//! Ties the pure core to its collaborators through small seams:
//! [`CommandSource`] for input, [`crate::term::Surface`] for output and
//! [`Pacer`] for time, so the whole loop can run headless in tests.

pub mod game_loop;
pub mod pacer;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;

pub use game_loop::{CommandSource, GameLoop, LoopOutcome, MAX_COMMANDS_PER_TICK};
pub use pacer::{NoopPacer, Pacer, SleepPacer};
