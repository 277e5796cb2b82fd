//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead draws into a simple
//! framebuffer behind the [`Surface`] trait, which is flushed to the terminal
//! with crossterm.
//!
//! - [`Surface`]: clear / set-cell / present over a character grid
//! - [`FrameBuffer`]: in-memory surface, used directly by tests
//! - [`TerminalSurface`]: framebuffer + [`TerminalRenderer`] for the real tty
//! - [`GameView`]: draws game objects and centered messages

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{winner_text, GameView, GAME_OVER_TEXT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSurface};
pub use surface::Surface;
