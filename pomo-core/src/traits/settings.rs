//! Settings store trait

use crate::config::{ColorSelection, ColorSettings, Color, SettingKey};

/// Get/set access to the persisted named values
///
/// `set` only records the value; implementations decide when it reaches
/// non-volatile storage.
pub trait SettingsStore {
    /// Stored value, or `None` if the key was never written
    fn get(&self, key: SettingKey) -> Option<u16>;

    fn set(&mut self, key: SettingKey, value: u16);

    /// Stored value, falling back to the key's default
    fn get_or_default(&self, key: SettingKey) -> u16 {
        self.get(key).unwrap_or(key.default_value())
    }

    /// Both colors with defaults applied
    fn colors(&self) -> ColorSelection {
        ColorSelection {
            work: Color(self.get_or_default(SettingKey::WorkColor)),
            rest: Color(self.get_or_default(SettingKey::RestColor)),
        }
    }

    /// Write both colors
    fn store_colors(&mut self, colors: ColorSelection) {
        self.set(SettingKey::WorkColor, colors.work.raw());
        self.set(SettingKey::RestColor, colors.rest.raw());
    }
}

impl SettingsStore for ColorSettings {
    fn get(&self, key: SettingKey) -> Option<u16> {
        Some(ColorSettings::get(self, key))
    }

    fn set(&mut self, key: SettingKey, value: u16) {
        ColorSettings::set(self, key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_store_keeps_crc_valid() {
        let mut record = ColorSettings::default();
        record.store_colors(ColorSelection {
            work: Color::CYAN,
            rest: Color::RED,
        });
        assert!(record.verify_crc());
        assert_eq!(SettingsStore::colors(&record).work, Color::CYAN);
        assert_eq!(record.get_or_default(SettingKey::RestColor), Color::RED.raw());
    }
}
