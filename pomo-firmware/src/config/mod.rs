//! Boot configuration and settings persistence
//!
//! Boot defaults come from pomo.toml, validated and compiled in by
//! build.rs. The user's color choice is persisted in flash.

pub mod settings;

pub use settings::{load_settings, save_settings, PersistedSettings, SettingsError};

use pomo_core::config::{Color, ColorSelection, TimingConfig};
use pomo_core::geometry::Orientation;
use pomo_core::state::Mode;

mod boot {
    include!(concat!(env!("OUT_DIR"), "/boot_config.rs"));
}

/// Durations used until the user cycles the mode
pub fn boot_mode() -> Mode {
    Mode::from_index(boot::DEFAULT_MODE).unwrap_or_default()
}

/// Colors used when flash holds no valid settings record
pub fn boot_colors() -> ColorSelection {
    ColorSelection {
        work: Color(boot::WORK_COLOR),
        rest: Color(boot::REST_COLOR),
    }
}

/// Orientation assumed until the accelerometer reports otherwise
pub fn boot_orientation() -> Orientation {
    Orientation::from_index(boot::ORIENTATION)
}

pub fn timing() -> TimingConfig {
    TimingConfig {
        tap_indicator: boot::TAP_INDICATOR,
        ..TimingConfig::default()
    }
}
