//! Events that trigger timer state transitions

use pomo_protocol::{Notification, RemoteCommand};

/// Events that can trigger timer state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Start a work session (long press or remote `/work`)
    Start,
    /// Pause the countdown (status button or remote)
    Pause,
    /// Resume a paused countdown (status button or remote)
    Resume,
    /// Stop the timer (long press or remote)
    Stop,
    /// Current session ran out
    SessionExpired,
}

impl Event {
    /// Event raised by a remote command, if the command controls the timer
    pub fn from_remote(cmd: RemoteCommand) -> Option<Self> {
        match cmd {
            RemoteCommand::Start => Some(Event::Start),
            RemoteCommand::Pause => Some(Event::Pause),
            RemoteCommand::Resume => Some(Event::Resume),
            RemoteCommand::Stop => Some(Event::Stop),
            RemoteCommand::CycleMode => None,
        }
    }

    /// Notification announcing this event once applied
    ///
    /// Session expiry is announced by the session it flips to, so it has
    /// no fixed notification here.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Event::Start => Some(Notification::WorkStarted),
            Event::Pause => Some(Notification::Paused),
            Event::Resume => Some(Notification::Resumed),
            Event::Stop => Some(Notification::Stopped),
            Event::SessionExpired => None,
        }
    }
}
