//! Background key listener.
//!
//! A dedicated thread blocks on terminal events and forwards mapped commands
//! over a bounded channel. The game loop drains that channel without blocking
//! once per tick.

use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::thread;

use crossterm::event::Event;
use tracing::{debug, warn};

use crate::map::command_for_key;
use crate::types::InputCommand;

/// Commands buffered between the listener and the loop.
pub const INPUT_QUEUE_DEPTH: usize = 16;

/// Blocking source of terminal events.
pub trait EventSource: Send + 'static {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }
}

/// Receiving end of the listener channel.
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<InputCommand>,
}

impl InputQueue {
    pub fn from_receiver(rx: Receiver<InputCommand>) -> Self {
        Self { rx }
    }

    /// Next pending command, or `None` if nothing is waiting.
    pub fn poll(&mut self) -> Option<InputCommand> {
        match self.rx.try_recv() {
            Ok(cmd) => Some(cmd),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Spawn the listener thread for `source`.
///
/// The thread runs until the source fails or the returned queue is dropped.
/// It is never joined; process exit reclaims it while it is blocked on a read.
pub fn spawn_listener<S: EventSource>(source: S) -> io::Result<InputQueue> {
    let (tx, rx) = mpsc::sync_channel(INPUT_QUEUE_DEPTH);
    thread::Builder::new()
        .name("pong-input".into())
        .spawn(move || listen(source, tx))?;
    Ok(InputQueue::from_receiver(rx))
}

fn listen<S: EventSource>(mut source: S, tx: SyncSender<InputCommand>) {
    loop {
        let event = match source.next_event() {
            Ok(event) => event,
            Err(err) => {
                warn!(%err, "input source closed, listener stopping");
                return;
            }
        };

        let Event::Key(key) = event else {
            continue;
        };
        let Some(cmd) = command_for_key(key) else {
            continue;
        };

        // Quit must always get through; movement can be shed under load.
        let sent = if cmd == InputCommand::Quit {
            tx.send(cmd).map_err(|_| ())
        } else {
            match tx.try_send(cmd) {
                Ok(()) => Ok(()),
                Err(TrySendError::Full(cmd)) => {
                    debug!(command = cmd.as_str(), "input queue full, dropping command");
                    Ok(())
                }
                Err(TrySendError::Disconnected(_)) => Err(()),
            }
        };

        if sent.is_err() {
            debug!("input queue closed, listener stopping");
            return;
        }
    }
}
