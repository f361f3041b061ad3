//! Pomo remote-control protocol
//!
//! Text protocol spoken between the timer and a chat bot or serial
//! console. The timer never blocks on it: inbound commands become one-shot
//! flags, outbound notifications go through a small bounded queue.
//!
//! # Protocol Overview
//!
//! ```text
//!  chat / console                        timer
//!  ──────────────                        ─────
//!  "/work\n"        ──── BotCommand ───▶  RemoteCommand::Start flag
//!  "🍅 Starting..." ◀─── reply ─────────
//!  "🍅 <b>Work started!</b>" ◀── Notification (queue of 3, drop when full)
//! ```
//!
//! Lines are newline-delimited UTF-8. Commands are matched
//! case-insensitively after trimming surrounding whitespace.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod line;
pub mod messages;

pub use command::{BotCommand, RemoteCommand};
pub use line::{Line, LineError, LineParser, MAX_LINE_LEN};
pub use messages::{
    Message, Notification, Reply, StatusPhase, StatusSnapshot, MAX_MESSAGE_LEN, MAX_REPLY_LEN,
    NOTIFY_QUEUE_SIZE,
};
