//! Tap and long-press classification
//!
//! ```text
//!            active                   held >= long_press_ms
//!   Idle ──────────────▶ Pressed ──────────────────────────▶ LongPressFired
//!    ▲                      │                                      │
//!    │   released: Tap or   │                                      │
//!    └──── Dropped ─────────┘◀──────────── released ───────────────┘
//! ```
//!
//! Each physical press produces at most one gesture. A long press fires
//! while the finger is still down; a tap fires on release.
//!
//! The debounced release trails the last contact by the debounce window,
//! so the hold used for tap classification runs from the first debounced
//! sample to the last raw asserted sample. A contact shorter than
//! `min_tap_ms` is dropped as jitter even though the debouncer stretched
//! it into a press.

use super::debounce::Debouncer;
use crate::config::TimingConfig;
use crate::geometry::Point;

/// Why a press did not become a tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DropReason {
    /// Shorter than the jitter threshold
    TooShort,
    /// No coordinate was reported during the press
    NoCoordinate,
    /// Inside the window after the timer started
    Suppressed,
}

/// What happened on one input sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    /// Nothing changed
    #[default]
    None,
    /// A press began
    Pressed,
    /// The press crossed the long-press threshold
    LongPress,
    /// A short press was released
    Tap(Point),
    /// A long press was released
    Released,
    /// A short press was released but discarded
    Dropped(DropReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum PressState {
    Idle,
    /// `last_contact` is the latest raw asserted sample
    Pressed { since: u32, last_contact: u32 },
    LongPressFired,
}

/// Touch gesture state machine
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureDetector {
    debouncer: Debouncer,
    state: PressState,
    /// Last coordinate seen during the current press
    last_point: Option<Point>,
    /// When the post-start tap suppression was armed
    suppress_from: Option<u32>,
    long_press_ms: u32,
    min_tap_ms: u32,
    suppression_ms: u32,
}

impl GestureDetector {
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            debouncer: Debouncer::new(timing.debounce_ms),
            state: PressState::Idle,
            last_point: None,
            suppress_from: None,
            long_press_ms: timing.long_press_ms,
            min_tap_ms: timing.min_tap_ms,
            suppression_ms: timing.start_suppression_ms,
        }
    }

    /// Swallow taps released within the suppression window from `now_ms`
    pub fn arm_suppression(&mut self, now_ms: u32) {
        self.suppress_from = Some(now_ms);
    }

    pub fn clear_suppression(&mut self) {
        self.suppress_from = None;
    }

    /// Drop the remembered coordinate
    ///
    /// Called when the orientation changes: a point transformed with the
    /// old orientation must not be hit-tested against the new layout.
    pub fn forget_point(&mut self) {
        self.last_point = None;
    }

    /// Feed one sample
    ///
    /// `point` is the current coordinate in display axes, if the controller
    /// reported one.
    pub fn update(&mut self, asserted: bool, point: Option<Point>, now_ms: u32) -> TouchEvent {
        let active = self.debouncer.update(asserted, now_ms);

        match (self.state, active) {
            (PressState::Idle, true) => {
                self.state = PressState::Pressed {
                    since: now_ms,
                    last_contact: now_ms,
                };
                self.last_point = point;
                TouchEvent::Pressed
            }
            (PressState::Idle, false) => TouchEvent::None,

            (PressState::Pressed { since, last_contact }, true) => {
                if point.is_some() {
                    self.last_point = point;
                }
                let last_contact = if asserted { now_ms } else { last_contact };
                self.state = PressState::Pressed { since, last_contact };
                if now_ms.wrapping_sub(since) >= self.long_press_ms {
                    self.state = PressState::LongPressFired;
                    TouchEvent::LongPress
                } else {
                    TouchEvent::None
                }
            }
            (PressState::Pressed { since, last_contact }, false) => {
                self.state = PressState::Idle;
                self.classify_release(last_contact.wrapping_sub(since), now_ms)
            }

            (PressState::LongPressFired, true) => TouchEvent::None,
            (PressState::LongPressFired, false) => {
                self.state = PressState::Idle;
                TouchEvent::Released
            }
        }
    }

    fn classify_release(&self, held_ms: u32, now_ms: u32) -> TouchEvent {
        if held_ms <= self.min_tap_ms {
            return TouchEvent::Dropped(DropReason::TooShort);
        }
        if self.is_suppressed(now_ms) {
            return TouchEvent::Dropped(DropReason::Suppressed);
        }
        match self.last_point {
            Some(p) => TouchEvent::Tap(p),
            None => TouchEvent::Dropped(DropReason::NoCoordinate),
        }
    }

    fn is_suppressed(&self, now_ms: u32) -> bool {
        self.suppress_from
            .is_some_and(|t| now_ms.wrapping_sub(t) <= self.suppression_ms)
    }
}
