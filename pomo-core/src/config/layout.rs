//! Layout constants for every screen

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Screen geometry configuration
///
/// Sizes are in pixels. Positions that depend on the screen size are
/// computed by the screen modules from these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutConfig {
    /// Outer radius of the progress ring
    pub ring_radius: i32,
    /// Ring thickness (number of concentric 1px circles)
    pub ring_thickness: i32,
    /// Angular resolution of incremental ring erasure
    pub ring_segments: u16,
    /// Extra hit-test margin around every control
    pub touch_padding: i32,
    /// Edge length of a palette cell
    pub grid_cell: i32,
    /// Timer icon size (status and mode buttons)
    pub icon_size: i32,
    /// Space between a button's content and its border
    pub button_padding: i32,
    /// Settings gear diameter
    pub gear_size: i32,
    /// Hit padding included in the gear region
    pub gear_padding: i32,
    /// Area cleared behind the countdown text
    pub time_area_width: i32,
    pub time_area_height: i32,
    /// Color swatch on the preview screen
    pub swatch_width: i32,
    pub swatch_height: i32,
    /// Preview confirm/cancel button content size
    pub preview_button_size: i32,
    /// Tap indicator dot radius
    pub tap_indicator_radius: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ring_radius: 70,
            ring_thickness: 5,
            ring_segments: 720,
            touch_padding: 15,
            grid_cell: 43,
            icon_size: 24,
            button_padding: 6,
            gear_size: 36,
            gear_padding: 8,
            time_area_width: 100,
            time_area_height: 60,
            swatch_width: 80,
            swatch_height: 40,
            preview_button_size: 30,
            tap_indicator_radius: 4,
        }
    }
}

impl LayoutConfig {
    /// Status and mode button content size (icon plus side margin)
    pub fn timer_button_size(&self) -> (i32, i32) {
        (self.icon_size + 8, self.icon_size)
    }
}
