//! One-shot command inbox
//!
//! The transport task raises flags, the timer loop takes them. Each flag is
//! a bit in one atomic byte, so raising and taking never lock and a command
//! raised twice before the loop runs is applied once.

use portable_atomic::{AtomicU8, Ordering};
use pomo_protocol::RemoteCommand;

/// Lock-free set of pending remote commands
#[derive(Debug, Default)]
pub struct CommandInbox {
    flags: AtomicU8,
}

impl CommandInbox {
    pub const fn new() -> Self {
        Self {
            flags: AtomicU8::new(0),
        }
    }

    /// Mark a command as pending
    pub fn raise(&self, cmd: RemoteCommand) {
        self.flags.fetch_or(cmd.bit(), Ordering::AcqRel);
    }

    /// Clear and report a single command
    pub fn take(&self, cmd: RemoteCommand) -> bool {
        self.flags.fetch_and(!cmd.bit(), Ordering::AcqRel) & cmd.bit() != 0
    }

    /// Clear and return every pending command
    pub fn take_all(&self) -> PendingCommands {
        PendingCommands {
            bits: self.flags.swap(0, Ordering::AcqRel),
            next: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flags.load(Ordering::Acquire) == 0
    }
}

/// Commands taken from the inbox, yielded in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingCommands {
    bits: u8,
    next: usize,
}

impl PendingCommands {
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl Iterator for PendingCommands {
    type Item = RemoteCommand;

    fn next(&mut self) -> Option<RemoteCommand> {
        while self.next < RemoteCommand::ALL.len() {
            let cmd = RemoteCommand::ALL[self.next];
            self.next += 1;
            if self.bits & cmd.bit() != 0 {
                return Some(cmd);
            }
        }
        None
    }
}
