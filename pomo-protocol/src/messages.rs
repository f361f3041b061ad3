//! Outbound text: notifications and command replies
//!
//! Text uses the chat HTML subset (`<b>`). Notifications are queued by the
//! timer loop; replies are produced by the transport task that received
//! the command.

use heapless::String;

use crate::command::BotCommand;

/// Maximum length of a queued notification in bytes
pub const MAX_MESSAGE_LEN: usize = 128;

/// Maximum length of a command reply in bytes (help text is the longest)
pub const MAX_REPLY_LEN: usize = 192;

/// Capacity of the outbound notification queue
pub const NOTIFY_QUEUE_SIZE: usize = 3;

/// A queued notification
pub type Message = String<MAX_MESSAGE_LEN>;

/// A command reply
pub type Reply = String<MAX_REPLY_LEN>;

/// Notifications emitted by the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// Transport came up
    Connected,
    /// Countdown started from Stopped
    WorkStarted,
    /// Countdown paused
    Paused,
    /// Countdown resumed
    Resumed,
    /// Timer stopped
    Stopped,
    /// Work session expired, rest begins
    RestTime,
    /// Rest session expired, work begins
    WorkTime,
}

impl Notification {
    /// Message text
    pub fn text(&self) -> &'static str {
        match self {
            Notification::Connected => "🍅 Pomodoro Timer connected!",
            Notification::WorkStarted => "🍅 <b>Work started!</b>",
            Notification::Paused => "⏸ <b>Timer paused</b>",
            Notification::Resumed => "▶️ <b>Timer resumed</b>",
            Notification::Stopped => "⏹ <b>Timer stopped</b>",
            Notification::RestTime => "☕ <b>Rest time!</b> Take a break.",
            Notification::WorkTime => "🍅 <b>Work time!</b> Focus on your task.",
        }
    }

    /// Check if this notification is rate limited
    ///
    /// User-driven control notifications share one debounce window so a
    /// burst of start/pause/resume/stop produces a single message. Session
    /// flips are always sent.
    pub fn is_debounced(&self) -> bool {
        matches!(
            self,
            Notification::WorkStarted
                | Notification::Paused
                | Notification::Resumed
                | Notification::Stopped
        )
    }

    /// Render into a queue-sized message
    pub fn to_message(&self) -> Message {
        let mut msg = Message::new();
        push_truncated(&mut msg, self.text());
        msg
    }
}

/// Timer phase as reported by `/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusPhase {
    Stopped,
    Working,
    Resting,
    Paused,
}

impl StatusPhase {
    pub fn label(&self) -> &'static str {
        match self {
            StatusPhase::Stopped => "Stopped",
            StatusPhase::Working => "Working",
            StatusPhase::Resting => "Resting",
            StatusPhase::Paused => "Paused",
        }
    }
}

/// Snapshot of timer state published for the transport task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    /// Current phase
    pub phase: StatusPhase,
    /// Current mode label, e.g. "25/5"
    pub mode_label: &'static str,
    /// Label of the mode `/mode` will switch to
    pub next_mode_label: &'static str,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            phase: StatusPhase::Stopped,
            mode_label: "25/5",
            next_mode_label: "50/10",
        }
    }
}

impl BotCommand {
    /// Reply sent back to the chat for this command
    pub fn reply(&self, status: &StatusSnapshot) -> Reply {
        let mut reply = Reply::new();
        match self {
            BotCommand::Start | BotCommand::Help => {
                push_truncated(&mut reply, "🍅 <b>Pomodoro Timer</b>\n\n");
                push_truncated(&mut reply, "/status - Current status\n");
                push_truncated(&mut reply, "/work - Start work\n");
                push_truncated(&mut reply, "/pause - Pause\n");
                push_truncated(&mut reply, "/resume - Resume\n");
                push_truncated(&mut reply, "/stop - Stop\n");
                push_truncated(&mut reply, "/mode - Change mode");
            }
            BotCommand::Status => {
                push_truncated(&mut reply, "🍅 ");
                push_truncated(&mut reply, status.phase.label());
                push_truncated(&mut reply, " | ");
                push_truncated(&mut reply, status.mode_label);
            }
            BotCommand::Work => push_truncated(&mut reply, "🍅 Starting..."),
            BotCommand::Pause => push_truncated(&mut reply, "⏸ Pausing..."),
            BotCommand::Resume => push_truncated(&mut reply, "▶️ Resuming..."),
            BotCommand::Stop => push_truncated(&mut reply, "⏹ Stopping..."),
            BotCommand::Mode => {
                push_truncated(&mut reply, "⏱ Mode: ");
                push_truncated(&mut reply, status.next_mode_label);
            }
        }
        reply
    }
}

/// Append as much of `text` as fits, never splitting a character
fn push_truncated<const N: usize>(out: &mut String<N>, text: &str) {
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
}
