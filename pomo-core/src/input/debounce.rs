//! Touch line debouncing
//!
//! The interrupt line of the touch controller can glitch to the inactive
//! level for a few milliseconds in the middle of a touch. A touch is
//! treated as active while any of these hold:
//!
//! - the line is asserted now
//! - the line was asserted within the window
//! - the line was released less than a window ago
//!
//! so one physical touch never fragments into several presses.

/// Debounces the touch presence signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_ms: u32,
    /// Last sample with the line asserted
    last_asserted: Option<u32>,
    /// Start of the current released stretch (set on the falling edge)
    released_since: Option<u32>,
    /// Line level at the previous sample
    was_asserted: bool,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_asserted: None,
            released_since: None,
            was_asserted: false,
        }
    }

    /// Feed one sample and return the debounced touch state
    pub fn update(&mut self, asserted: bool, now_ms: u32) -> bool {
        if asserted {
            self.last_asserted = Some(now_ms);
            self.released_since = None;
        } else if self.was_asserted {
            self.released_since = Some(now_ms);
        }
        self.was_asserted = asserted;

        asserted || self.within(self.last_asserted, now_ms) || self.within(self.released_since, now_ms)
    }

    fn within(&self, stamp: Option<u32>, now_ms: u32) -> bool {
        stamp.is_some_and(|t| now_ms.wrapping_sub(t) < self.window_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_at_boot() {
        let mut d = Debouncer::new(200);
        assert!(!d.update(false, 0));
        assert!(!d.update(false, 5));
    }

    #[test]
    fn test_glitch_bridged() {
        let mut d = Debouncer::new(200);
        assert!(d.update(true, 100));
        // Line glitches inactive for 30ms mid-touch
        assert!(d.update(false, 110));
        assert!(d.update(false, 140));
        assert!(d.update(true, 150));
        assert!(d.update(true, 400));
    }

    #[test]
    fn test_release_after_window() {
        let mut d = Debouncer::new(200);
        d.update(true, 0);
        assert!(d.update(false, 10));
        assert!(d.update(false, 209));
        assert!(!d.update(false, 210));
        assert!(!d.update(false, 1_000));
    }

    #[test]
    fn test_counter_wrap() {
        let mut d = Debouncer::new(200);
        d.update(true, u32::MAX - 50);
        assert!(d.update(false, 100));
        assert!(!d.update(false, 300));
    }
}
