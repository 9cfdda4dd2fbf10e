//! Input queue
//!
//! Key and touch handlers are producers; the frame driver is the only
//! consumer and drains the queue once per frame, so every command lands
//! between frames and never in the middle of one.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::sim::Command;

/// Cloneable producer handle given to input listeners
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    /// Queue a command. Returns false once the driver is gone.
    pub fn send(&self, command: Command) -> bool {
        self.tx.send(command).is_ok()
    }
}

/// Single-consumer end of the queue, owned by the frame driver
#[derive(Debug)]
pub struct CommandQueue {
    tx: Sender<Command>,
    rx: Receiver<Command>,
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> CommandSender {
        CommandSender {
            tx: self.tx.clone(),
        }
    }

    /// Take every command queued so far, in arrival order
    pub fn drain(&self) -> Vec<Command> {
        self.rx.try_iter().collect()
    }
}

/// Map a `KeyboardEvent.code` to a command
pub fn command_for_key(code: &str) -> Option<Command> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Command::MoveLeft),
        "ArrowRight" | "KeyD" => Some(Command::MoveRight),
        "Space" => Some(Command::Fire),
        _ => None,
    }
}

/// On-screen touch/click buttons and the command each one sends
pub const BUTTONS: [(&str, Command); 4] = [
    ("leftBtn", Command::MoveLeft),
    ("rightBtn", Command::MoveRight),
    ("shootBtn", Command::Fire),
    ("restartBtn", Command::Restart),
];
