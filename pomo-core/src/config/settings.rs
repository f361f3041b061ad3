//! Persisted color settings
//!
//! The selected work and rest colors survive power cycles. They are
//! stored as a small record with a header for validation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::palette::Color;
use crate::state::SessionKind;

/// Magic number to identify valid settings data
pub const SETTINGS_MAGIC: u32 = 0x504F4D4F; // "POMO"

/// Current settings data version
pub const SETTINGS_VERSION: u8 = 1;

/// Named 16-bit values in the settings store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingKey {
    /// Color used during work sessions
    WorkColor,
    /// Color used during rest sessions (0 = inverted work color)
    RestColor,
}

impl SettingKey {
    /// Value used when the key was never written
    pub const fn default_value(self) -> u16 {
        match self {
            SettingKey::WorkColor => Color::GOLD.raw(),
            SettingKey::RestColor => 0,
        }
    }
}

/// The user's color choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorSelection {
    pub work: Color,
    /// `Color(0)` means "derive by inverting the work color"
    pub rest: Color,
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self {
            work: Color(SettingKey::WorkColor.default_value()),
            rest: Color(SettingKey::RestColor.default_value()),
        }
    }
}

impl ColorSelection {
    /// Color actually drawn during rest sessions
    pub fn effective_rest(&self) -> Color {
        if self.rest.is_unset() {
            self.work.inverted()
        } else {
            self.rest
        }
    }

    /// Color of the interface for a session kind
    pub fn ui_color(&self, session: SessionKind) -> Color {
        match session {
            SessionKind::Work => self.work,
            SessionKind::Rest => self.effective_rest(),
        }
    }
}

/// Settings record stored in flash
///
/// This struct is serialized to flash using postcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorSettings {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Work color (RGB565)
    pub work_color: u16,
    /// Rest color (RGB565, 0 = inverted work color)
    pub rest_color: u16,
    /// CRC32 checksum (calculated over magic..rest_color)
    pub crc: u32,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self::new(ColorSelection::default())
    }
}

impl ColorSettings {
    /// Create a record for a color selection with a valid CRC
    pub fn new(colors: ColorSelection) -> Self {
        let mut record = Self {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            work_color: colors.work.raw(),
            rest_color: colors.rest.raw(),
            crc: 0,
        };
        record.update_crc();
        record
    }

    /// Check if the data is valid (magic and version match)
    pub fn is_valid(&self) -> bool {
        self.magic == SETTINGS_MAGIC && self.version == SETTINGS_VERSION
    }

    /// Colors held by this record
    pub fn colors(&self) -> ColorSelection {
        ColorSelection {
            work: Color(self.work_color),
            rest: Color(self.rest_color),
        }
    }

    /// Read a named value
    pub fn get(&self, key: SettingKey) -> u16 {
        match key {
            SettingKey::WorkColor => self.work_color,
            SettingKey::RestColor => self.rest_color,
        }
    }

    /// Write a named value and refresh the CRC
    pub fn set(&mut self, key: SettingKey, value: u16) {
        match key {
            SettingKey::WorkColor => self.work_color = value,
            SettingKey::RestColor => self.rest_color = value,
        }
        self.update_crc();
    }

    /// Calculate CRC32 for the data (excluding the crc field itself)
    pub fn calculate_crc(&self) -> u32 {
        let mut crc: u32 = 0xFFFFFFFF;
        crc = crc32_update(crc, &self.magic.to_le_bytes());
        crc = crc32_update(crc, &[self.version]);
        crc = crc32_update(crc, &self.work_color.to_le_bytes());
        crc = crc32_update(crc, &self.rest_color.to_le_bytes());
        !crc
    }

    /// Update the CRC field
    pub fn update_crc(&mut self) {
        self.crc = self.calculate_crc();
    }

    /// Verify the CRC is correct
    pub fn verify_crc(&self) -> bool {
        self.crc == self.calculate_crc()
    }
}

/// CRC32 update (IEEE 802.3 polynomial, reflected)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB88320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}
