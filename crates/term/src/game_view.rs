//! GameView: draws a `core::GameState` onto a [`Surface`].
//!
//! This module is pure (no I/O beyond the surface it is handed), so it can be
//! unit-tested against a [`crate::FrameBuffer`].

use crate::core::{GameObject, GameState};
use crate::surface::Surface;
use crate::types::Player;

/// Text shown on the result screen.
pub const GAME_OVER_TEXT: &str = "Game Over";

/// Renders game objects and centered messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Clear the surface and draw every object.
    pub fn render<S: Surface + ?Sized>(&self, state: &GameState, surface: &mut S) {
        surface.clear();
        for obj in state.objects() {
            self.draw_object(surface, obj);
        }
    }

    /// Fill an object's rectangle with its glyph.
    pub fn draw_object<S: Surface + ?Sized>(&self, surface: &mut S, obj: &GameObject) {
        for r in 0..obj.height {
            for c in 0..obj.width {
                surface.set_cell(obj.col + c, obj.row + r, obj.glyph);
            }
        }
    }

    /// Draw `text` on `row` so that it is centered on `center_col`.
    pub fn draw_centered<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        center_col: i32,
        row: i32,
        text: &str,
    ) {
        let len = text.chars().count() as i32;
        let start = center_col - len / 2;
        for (i, ch) in text.chars().enumerate() {
            surface.set_cell(start + i as i32, row, ch);
        }
    }

    /// Final frame: the field, "Game Over" at the middle row and the winner below it.
    pub fn render_game_over<S: Surface + ?Sized>(
        &self,
        state: &GameState,
        surface: &mut S,
        winner: Player,
    ) {
        self.render(state, surface);

        let center_col = state.width() as i32 / 2;
        let mid_row = state.height() as i32 / 2;
        self.draw_centered(surface, center_col, mid_row, GAME_OVER_TEXT);
        self.draw_centered(surface, center_col, mid_row + 1, &winner_text(winner));
    }
}

/// `"Player N wins!"`
pub fn winner_text(winner: Player) -> String {
    format!("{} wins!", winner.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::FrameBuffer;

    #[test]
    fn centered_text_starts_half_length_left_of_center() {
        let mut fb = FrameBuffer::new(20, 1);
        GameView::new().draw_centered(&mut fb, 10, 0, "abcd");
        assert_eq!(fb.row_text(0), "        abcd        ");
    }

    #[test]
    fn centered_text_clips_at_left_edge() {
        let mut fb = FrameBuffer::new(6, 1);
        GameView::new().draw_centered(&mut fb, 1, 0, "abcdef");
        assert_eq!(fb.row_text(0), "cdef  ");
    }

    #[test]
    fn winner_text_uses_player_name() {
        assert_eq!(winner_text(Player::One), "Player 1 wins!");
    }
}
