use tui_pong::core::{GameObject, GameState};
use tui_pong::term::{FrameBuffer, GameView, Surface};
use tui_pong::types::{Player, BALL_GLYPH, PADDLE_GLYPH};

#[test]
fn term_view_draws_paddles_and_ball() {
    let state = GameState::new(40, 20);
    let mut fb = FrameBuffer::new(40, 20);
    GameView::new().render(&state, &mut fb);

    for row in 8..12 {
        assert_eq!(fb.get(0, row).unwrap().ch, PADDLE_GLYPH);
        assert_eq!(fb.get(39, row).unwrap().ch, PADDLE_GLYPH);
    }
    assert_eq!(fb.get(0, 7).unwrap().ch, ' ');
    assert_eq!(fb.get(0, 12).unwrap().ch, ' ');
    assert_eq!(fb.get(20, 10).unwrap().ch, BALL_GLYPH);

    let drawn = fb.cells().iter().filter(|c| c.ch != ' ').count();
    assert_eq!(drawn, 4 + 4 + 1);
}

#[test]
fn term_view_clears_previous_frame() {
    let mut state = GameState::new(40, 20);
    let mut fb = FrameBuffer::new(40, 20);
    let view = GameView::new();

    view.render(&state, &mut fb);
    state.tick();
    view.render(&state, &mut fb);

    assert_eq!(fb.get(20, 10).unwrap().ch, ' ');
    assert_eq!(fb.get(22, 11).unwrap().ch, BALL_GLYPH);
}

#[test]
fn term_view_skips_off_screen_ball() {
    let state = GameState::new(10, 6).with_ball(GameObject::ball(2, -1, 0, -1));
    let mut fb = FrameBuffer::new(10, 6);
    GameView::new().render(&state, &mut fb);
    assert!(fb.cells().iter().all(|c| c.ch != BALL_GLYPH));
}

#[test]
fn term_view_game_over_screen_is_centered() {
    let state = GameState::new(40, 20);
    let mut fb = FrameBuffer::new(40, 20);
    GameView::new().render_game_over(&state, &mut fb, Player::Two);

    // "Game Over" is 9 chars: 20 - 9/2 = 16.
    let row: String = (16..25).map(|x| fb.get(x, 10).unwrap().ch).collect();
    assert_eq!(row, "Game Over");
    // "Player 2 wins!" is 14 chars: 20 - 7 = 13.
    let row: String = (13..27).map(|x| fb.get(x, 11).unwrap().ch).collect();
    assert_eq!(row, "Player 2 wins!");
}

#[test]
fn term_view_handles_surface_smaller_than_field() {
    let state = GameState::new(40, 20);
    let mut fb = FrameBuffer::new(5, 5);
    GameView::new().render_game_over(&state, &mut fb, Player::One);
    assert_eq!(fb.size(), (5, 5));
}
