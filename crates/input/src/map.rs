//! Key mapping from terminal events to game commands.

use crate::types::{InputCommand, Player};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to a game command.
///
/// Release events never map, so terminals that report them do not move a
/// paddle twice per tap.
pub fn command_for_key(key: KeyEvent) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(InputCommand::Quit);
    }

    match key.code {
        // Player 1
        KeyCode::Char('w') | KeyCode::Char('W') => Some(InputCommand::MoveUp(Player::One)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputCommand::MoveDown(Player::One)),

        // Player 2
        KeyCode::Up => Some(InputCommand::MoveUp(Player::Two)),
        KeyCode::Down => Some(InputCommand::MoveDown(Player::Two)),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputCommand::TogglePause),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_player_one_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(InputCommand::MoveUp(Player::One))
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('S'))),
            Some(InputCommand::MoveDown(Player::One))
        );
    }

    #[test]
    fn test_player_two_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Up)),
            Some(InputCommand::MoveUp(Player::Two))
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Down)),
            Some(InputCommand::MoveDown(Player::Two))
        );
    }

    #[test]
    fn test_pause_and_quit_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(InputCommand::TogglePause)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(InputCommand::Quit)
        );
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputCommand::Quit)
        );
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('w'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(command_for_key(release), None);
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}
