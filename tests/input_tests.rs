use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use tui_pong::input::{command_for_key, spawn_listener, EventSource, InputQueue};
use tui_pong::types::{InputCommand, Player};

struct Script(VecDeque<Event>);

impl EventSource for Script {
    fn next_event(&mut self) -> io::Result<Event> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "done"))
    }
}

#[test]
fn test_key_bindings() {
    let cases = [
        (KeyCode::Char('w'), Some(InputCommand::MoveUp(Player::One))),
        (KeyCode::Char('s'), Some(InputCommand::MoveDown(Player::One))),
        (KeyCode::Up, Some(InputCommand::MoveUp(Player::Two))),
        (KeyCode::Down, Some(InputCommand::MoveDown(Player::Two))),
        (KeyCode::Char('p'), Some(InputCommand::TogglePause)),
        (KeyCode::Char('q'), Some(InputCommand::Quit)),
        (KeyCode::Enter, None),
    ];
    for (code, expected) in cases {
        assert_eq!(command_for_key(KeyEvent::from(code)), expected, "{code:?}");
    }
}

#[test]
fn test_listener_forwards_quit() {
    let script = Script(VecDeque::from(vec![
        Event::Resize(80, 24),
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    ]));
    let mut queue = spawn_listener(script).unwrap();
    assert_eq!(poll_until(&mut queue, Duration::from_secs(5)), Some(InputCommand::Quit));
}

#[test]
fn test_listener_queue_is_polled_without_blocking() {
    let script = Script(VecDeque::from(vec![
        Event::Key(KeyEvent::from(KeyCode::Char('w'))),
        Event::Key(KeyEvent::from(KeyCode::Up)),
    ]));
    let mut queue = spawn_listener(script).unwrap();

    assert_eq!(
        poll_until(&mut queue, Duration::from_secs(5)),
        Some(InputCommand::MoveUp(Player::One))
    );
    assert_eq!(
        poll_until(&mut queue, Duration::from_secs(5)),
        Some(InputCommand::MoveUp(Player::Two))
    );

    // Script exhausted: the listener is gone and polling returns at once.
    let start = Instant::now();
    assert_eq!(queue.poll(), None);
    assert!(start.elapsed() < Duration::from_secs(1));
}

/// Poll the way the game loop does, once per short tick, until a command shows up.
fn poll_until(queue: &mut InputQueue, timeout: Duration) -> Option<InputCommand> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(cmd) = queue.poll() {
            return Some(cmd);
        }
        thread::sleep(Duration::from_millis(5));
    }
    None
}
