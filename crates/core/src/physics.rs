//! Position update and collision resolution.
//!
//! All predicates are evaluated against the ball's position at the start of the
//! tick. An axis that reflects does not move on that tick.

use crate::object::GameObject;
use crate::types::Side;

/// Which axes reflected during a ball step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounce {
    pub wall: bool,
    pub paddle: bool,
}

/// Advance the ball one tick, reflecting off the top/bottom walls and paddles.
pub fn step_ball(
    ball: &mut GameObject,
    left: &GameObject,
    right: &GameObject,
    height: i32,
) -> Bounce {
    let bounce = Bounce {
        wall: hits_wall(ball, height),
        paddle: hits_paddle(ball, left, right),
    };

    if bounce.wall {
        ball.vel_row = -ball.vel_row;
    } else {
        ball.row = ball.next_row();
    }

    if bounce.paddle {
        ball.vel_col = -ball.vel_col;
    } else {
        ball.col = ball.next_col();
    }

    bounce
}

/// True if the next row would leave `[0, height)`.
pub fn hits_wall(ball: &GameObject, height: i32) -> bool {
    let next = ball.next_row();
    next < 0 || next >= height
}

/// True if the ball reaches a paddle's column band this tick while inside its row span.
///
/// Reaching is a threshold test rather than an equality, so a ball moving more
/// than one column per tick cannot skip over a paddle.
pub fn hits_paddle(ball: &GameObject, left: &GameObject, right: &GameObject) -> bool {
    let next = ball.next_col();
    if ball.vel_col < 0 {
        let edge = left.right_edge();
        ball.col > edge && next <= edge && left.contains_row(ball.row)
    } else if ball.vel_col > 0 {
        ball.col < right.col && next >= right.col && right.contains_row(ball.row)
    } else {
        false
    }
}

/// Edge the ball has left through, if its column is outside `[0, width)`.
pub fn exit_side(ball: &GameObject, width: i32) -> Option<Side> {
    if ball.col < 0 {
        Some(Side::Left)
    } else if ball.col >= width {
        Some(Side::Right)
    } else {
        None
    }
}

/// Clamp a paddle row to `[0, height - paddle_height]` (or 0 on a field shorter than the paddle).
pub fn clamp_paddle_row(row: i32, height: i32, paddle_height: i32) -> i32 {
    row.clamp(0, (height - paddle_height).max(0))
}
