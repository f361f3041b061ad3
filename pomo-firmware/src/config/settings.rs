//! Color settings persistence
//!
//! Loads and saves the `ColorSettings` record to flash storage.

use defmt::*;

use pomo_core::config::{ColorSelection, ColorSettings, SettingKey};
use pomo_core::traits::SettingsStore;
use pomo_hal_esp32c6::flash::{FlashError, FlashStorage, StorageKey};
use pomo_hal_esp32c6::FlashStorageTrait;

use crate::channels::SETTINGS_SAVE;

/// Maximum serialized settings size
const MAX_SETTINGS_SIZE: usize = 64;

/// Settings persistence errors
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Flash operation failed
    Flash(FlashError),
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Invalid magic or version
    InvalidFormat,
    /// CRC check failed
    CrcMismatch,
}

impl From<FlashError> for SettingsError {
    fn from(e: FlashError) -> Self {
        SettingsError::Flash(e)
    }
}

/// Load the settings record from flash
///
/// Falls back to a fresh record holding `fallback` if nothing is stored or
/// the stored record is invalid.
pub async fn load_settings(storage: &mut FlashStorage<'_>, fallback: ColorSelection) -> ColorSettings {
    match load_settings_inner(storage).await {
        Ok(record) => {
            info!(
                "Loaded colors from flash: work={=u16:#x} rest={=u16:#x}",
                record.work_color, record.rest_color
            );
            record
        }
        Err(SettingsError::Flash(FlashError::NotFound)) => {
            debug!("No settings in flash, using boot colors");
            ColorSettings::new(fallback)
        }
        Err(e) => {
            warn!("Failed to load settings: {:?}, using boot colors", e);
            ColorSettings::new(fallback)
        }
    }
}

async fn load_settings_inner(storage: &mut FlashStorage<'_>) -> Result<ColorSettings, SettingsError> {
    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let len = storage.read(StorageKey::ColorSettings, &mut buffer).await?;

    debug!("Read {} bytes of settings from flash", len);

    let record: ColorSettings =
        postcard::from_bytes(&buffer[..len]).map_err(|_| SettingsError::Deserialize)?;

    if !record.is_valid() {
        return Err(SettingsError::InvalidFormat);
    }

    if !record.verify_crc() {
        warn!("Settings CRC mismatch");
        return Err(SettingsError::CrcMismatch);
    }

    Ok(record)
}

/// Save the settings record to flash
///
/// Updates the CRC before saving.
pub async fn save_settings(
    storage: &mut FlashStorage<'_>,
    record: &mut ColorSettings,
) -> Result<(), SettingsError> {
    record.update_crc();

    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let bytes = postcard::to_slice(record, &mut buffer).map_err(|_| SettingsError::Serialize)?;

    debug!("Saving {} bytes of settings to flash", bytes.len());

    storage.write(StorageKey::ColorSettings, bytes).await?;

    info!(
        "Saved colors to flash: work={=u16:#x} rest={=u16:#x}",
        record.work_color, record.rest_color
    );
    Ok(())
}

/// Settings store used by the UI loop
///
/// Writes update the in-memory record and hand a copy to the settings
/// task, which persists it without blocking the loop.
pub struct PersistedSettings {
    record: ColorSettings,
}

impl PersistedSettings {
    pub fn new(record: ColorSettings) -> Self {
        Self { record }
    }
}

impl SettingsStore for PersistedSettings {
    fn get(&self, key: SettingKey) -> Option<u16> {
        Some(self.record.get(key))
    }

    fn set(&mut self, key: SettingKey, value: u16) {
        self.record.set(key, value);
        SETTINGS_SAVE.signal(self.record);
    }
}
