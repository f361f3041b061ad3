//! Notification rate limiting

use pomo_protocol::Notification;

/// Rate limit for user-driven control notifications
///
/// Start, pause, resume and stop share one window: a notification is
/// admitted only if the previous admitted one is older than the window.
/// Session flips bypass the gate.
///
/// The window starts closed at boot (time 0), so control notifications
/// in the first window after power-up are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NotificationGate {
    window_ms: u32,
    /// Time of the last admitted notification, boot if none
    last: u32,
}

impl NotificationGate {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last: 0,
        }
    }

    /// Check if `n` may be sent now, recording it if so
    pub fn admit(&mut self, n: Notification, now_ms: u32) -> bool {
        if !n.is_debounced() {
            return true;
        }
        if now_ms.wrapping_sub(self.last) <= self.window_ms {
            return false;
        }
        self.last = now_ms;
        true
    }
}
