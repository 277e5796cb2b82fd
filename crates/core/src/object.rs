//! Game object model: positioned, sized, glyph-bearing rectangles.

use std::ops::Range;

use crate::types::{BALL_GLYPH, PADDLE_GLYPH, PADDLE_WIDTH};

/// A paddle or the ball.
///
/// Coordinates are signed so the ball can be observed one step past an edge,
/// which is how the game detects that it left play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameObject {
    pub row: i32,
    pub col: i32,
    pub width: i32,
    pub height: i32,
    pub vel_row: i32,
    pub vel_col: i32,
    pub glyph: char,
}

impl GameObject {
    /// Stationary paddle; only input moves it.
    pub fn paddle(row: i32, col: i32, height: u16) -> Self {
        Self {
            row,
            col,
            width: PADDLE_WIDTH as i32,
            height: height as i32,
            vel_row: 0,
            vel_col: 0,
            glyph: PADDLE_GLYPH,
        }
    }

    /// Single-cell ball with a launch velocity.
    pub fn ball(row: i32, col: i32, vel_row: i32, vel_col: i32) -> Self {
        Self {
            row,
            col,
            width: 1,
            height: 1,
            vel_row,
            vel_col,
            glyph: BALL_GLYPH,
        }
    }

    /// Apply one tick of velocity.
    pub fn advance(&mut self) {
        self.row += self.vel_row;
        self.col += self.vel_col;
    }

    pub fn next_row(&self) -> i32 {
        self.row + self.vel_row
    }

    pub fn next_col(&self) -> i32 {
        self.col + self.vel_col
    }

    /// Rows covered by this object.
    pub fn rows(&self) -> Range<i32> {
        self.row..self.row + self.height
    }

    pub fn contains_row(&self, row: i32) -> bool {
        self.rows().contains(&row)
    }

    /// Last column covered by this object.
    pub fn right_edge(&self) -> i32 {
        self.col + self.width - 1
    }
}
