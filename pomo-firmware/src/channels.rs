//! Inter-task communication channels
//!
//! Defines the statics shared between the UI loop, the console tasks and
//! the settings task.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use pomo_core::config::ColorSettings;
use pomo_core::inbox::CommandInbox;
use pomo_core::traits::Outbox;
use pomo_protocol::{Message, Reply, StatusPhase, StatusSnapshot, NOTIFY_QUEUE_SIZE};

/// Channel capacity for console replies
const REPLY_CHANNEL_SIZE: usize = 2;

/// Remote commands raised by the console, taken by the UI loop
pub static INBOX: CommandInbox = CommandInbox::new();

/// Outbound notifications from the UI loop
pub static NOTIFY_CHANNEL: Channel<CriticalSectionRawMutex, Message, NOTIFY_QUEUE_SIZE> =
    Channel::new();

/// Replies to console commands
pub static REPLY_CHANNEL: Channel<CriticalSectionRawMutex, Reply, REPLY_CHANNEL_SIZE> =
    Channel::new();

/// Settings record to persist (latest value wins)
pub static SETTINGS_SAVE: Signal<CriticalSectionRawMutex, ColorSettings> = Signal::new();

/// Latest timer status, published by the UI loop for `/status`
pub static STATUS: Mutex<CriticalSectionRawMutex, Cell<StatusSnapshot>> =
    Mutex::new(Cell::new(StatusSnapshot {
        phase: StatusPhase::Stopped,
        mode_label: "25/5",
        next_mode_label: "50/10",
    }));

/// Outbox feeding `NOTIFY_CHANNEL`; a full channel drops the message
pub struct ChannelOutbox;

impl Outbox for ChannelOutbox {
    fn try_send(&mut self, message: Message) -> bool {
        NOTIFY_CHANNEL.try_send(message).is_ok()
    }
}

/// Publish the timer status
pub fn publish_status(status: StatusSnapshot) {
    STATUS.lock(|s| s.set(status));
}

/// Read the last published timer status
pub fn current_status() -> StatusSnapshot {
    STATUS.lock(|s| s.get())
}
