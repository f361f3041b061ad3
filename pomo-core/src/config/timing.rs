//! Timing constants for input handling and display updates

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timing configuration
///
/// All durations are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Touch line debounce window
    pub debounce_ms: u32,
    /// Hold time that turns a press into a long press
    pub long_press_ms: u32,
    /// Presses this short or shorter are jitter, not taps
    pub min_tap_ms: u32,
    /// Taps are swallowed for this long after the timer starts
    pub start_suppression_ms: u32,
    /// Accelerometer polling interval
    pub rotation_poll_ms: u32,
    /// In-plane acceleration needed to pick an orientation (milli-g)
    pub rotation_threshold_mg: i16,
    /// Countdown text refresh interval
    pub display_cadence_ms: u32,
    /// Minimum spacing between start/pause/resume/stop notifications
    pub notify_debounce_ms: u32,
    /// How long the tap indicator dot stays visible
    pub tap_indicator_ms: u32,
    /// Draw a dot where each tap landed
    pub tap_indicator: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            long_press_ms: 1000,
            min_tap_ms: 10,
            start_suppression_ms: 1500,
            rotation_poll_ms: 2000,
            rotation_threshold_mg: 500,
            display_cadence_ms: 1000,
            notify_debounce_ms: 3000,
            tap_indicator_ms: 500,
            tap_indicator: false,
        }
    }
}
