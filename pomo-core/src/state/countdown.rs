//! Countdown clock
//!
//! Time is injected as a millisecond timestamp. All arithmetic wraps so a
//! `u32` millisecond counter rolling over does not disturb the countdown.

/// Fixed-point progress scale (parts per million)
pub const PROGRESS_SCALE: u32 = 1_000_000;

/// Fraction of the session elapsed, clamped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress(u32);

impl Progress {
    pub const ZERO: Progress = Progress(0);
    pub const FULL: Progress = Progress(PROGRESS_SCALE);

    /// Progress of `elapsed` over `duration`
    ///
    /// A zero duration counts as complete.
    pub fn from_ratio(elapsed: u32, duration: u32) -> Self {
        if duration == 0 || elapsed >= duration {
            return Self::FULL;
        }
        Progress(((elapsed as u64 * PROGRESS_SCALE as u64) / duration as u64) as u32)
    }

    /// Progress from a parts-per-million value, clamped
    pub fn from_ppm(ppm: u32) -> Self {
        Progress(ppm.min(PROGRESS_SCALE))
    }

    pub fn ppm(self) -> u32 {
        self.0
    }

    /// Number of whole segments covered when the ring is split in `total`
    pub fn segments(self, total: u16) -> u16 {
        ((self.0 as u64 * total as u64) / PROGRESS_SCALE as u64) as u16
    }
}

/// Elapsed-time bookkeeping for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    /// Timestamp the running interval is measured from
    started_at: u32,
    /// Elapsed time frozen at the last pause
    frozen_ms: u32,
    running: bool,
    duration_ms: u32,
}

impl Countdown {
    /// Start a fresh session of `duration_ms` at `now_ms`
    pub fn start(&mut self, now_ms: u32, duration_ms: u32) {
        self.started_at = now_ms;
        self.frozen_ms = 0;
        self.running = true;
        self.duration_ms = duration_ms;
    }

    /// Freeze the elapsed time
    pub fn pause(&mut self, now_ms: u32) {
        if self.running {
            self.frozen_ms = now_ms.wrapping_sub(self.started_at);
            self.running = false;
        }
    }

    /// Continue from the frozen elapsed time
    pub fn resume(&mut self, now_ms: u32) {
        if !self.running {
            self.started_at = now_ms.wrapping_sub(self.frozen_ms);
            self.running = true;
        }
    }

    /// Stop and clear
    pub fn reset(&mut self) {
        *self = Self {
            duration_ms: self.duration_ms,
            ..Self::default()
        };
    }

    /// Change the session length without touching elapsed time
    pub fn set_duration(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Time spent in the current session
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        if self.running {
            now_ms.wrapping_sub(self.started_at)
        } else {
            self.frozen_ms
        }
    }

    /// Time left, never below zero
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        self.duration_ms.saturating_sub(self.elapsed_ms(now_ms))
    }

    /// Check if the session has run out
    pub fn is_expired(&self, now_ms: u32) -> bool {
        self.running && self.elapsed_ms(now_ms) >= self.duration_ms
    }

    pub fn progress(&self, now_ms: u32) -> Progress {
        Progress::from_ratio(self.elapsed_ms(now_ms), self.duration_ms)
    }
}
