//! Timer state machine
//!
//! Whether the countdown is live is a function of the current state and an
//! event. Invalid events leave the state unchanged.

use super::events::Event;

/// Timer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// No countdown; home screen shows the splash
    #[default]
    Stopped,
    /// Countdown advancing
    Running,
    /// Countdown frozen
    Paused,
}

impl TimerState {
    /// Check if the countdown screen is shown in this state
    pub fn is_active(&self) -> bool {
        matches!(self, TimerState::Running | TimerState::Paused)
    }

    /// Check if `event` would change the state
    pub fn accepts(self, event: Event) -> bool {
        match (self, event) {
            // Expiry keeps the state but restarts the countdown
            (TimerState::Running, Event::SessionExpired) => true,
            _ => self.transition(event) != self,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use TimerState::*;

        match (self, event) {
            (Stopped, Start) => Running,

            (Running, Pause) => Paused,
            (Running, Stop) => Stopped,
            (Running, SessionExpired) => Running,

            (Paused, Resume) => Running,
            (Paused, Stop) => Stopped,

            // Default: stay in current state
            _ => self,
        }
    }
}
