//! Flash storage driver for ESP32-C6
//!
//! Uses sequential-storage for wear-leveled key-value storage in the
//! region the default partition table reserves for NVS. The firmware does
//! not use ESP-IDF NVS, so the region is free for the settings map.

use embassy_embedded_hal::adapter::BlockingAsync;
use esp_hal::peripherals::FLASH;
use esp_storage::FlashStorage as EspFlash;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

pub use pomo_hal::flash::{FlashError, StorageKey};

/// Start of the settings partition (default `nvs` partition offset)
pub const SETTINGS_PARTITION_START: u32 = 0x9000;

/// Size of the settings partition (six 4 KiB sectors)
pub const SETTINGS_PARTITION_SIZE: u32 = 0x6000;

/// Flash range handed to sequential-storage
pub const SETTINGS_RANGE: core::ops::Range<u32> =
    SETTINGS_PARTITION_START..(SETTINGS_PARTITION_START + SETTINGS_PARTITION_SIZE);

/// Scratch buffer size for map items (records are a few dozen bytes)
const ITEM_BUFFER_SIZE: usize = 128;

/// ESP32-C6 flash storage implementation
pub struct Esp32c6FlashStorage<'d> {
    flash: BlockingAsync<EspFlash<'d>>,
}

impl<'d> Esp32c6FlashStorage<'d> {
    /// Create a new flash storage instance
    pub fn new(flash: FLASH<'d>) -> Self {
        Self {
            flash: BlockingAsync::new(EspFlash::new(flash)),
        }
    }
}

impl<'d> pomo_hal::FlashStorage for Esp32c6FlashStorage<'d> {
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        let mut data_buffer = [0u8; ITEM_BUFFER_SIZE];

        let result = map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
        )
        .await;

        match result {
            Ok(Some(data)) => {
                let len = data.len();
                if buffer.len() < len {
                    return Err(FlashError::BufferTooSmall);
                }
                buffer[..len].copy_from_slice(data);
                Ok(len)
            }
            Ok(None) => Err(FlashError::NotFound),
            Err(_) => Err(FlashError::Storage),
        }
    }

    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        let mut data_buffer = [0u8; ITEM_BUFFER_SIZE];

        map::store_item(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
            &data,
        )
        .await
        .map_err(|_| FlashError::Storage)
    }
}

/// Board flash storage
pub type FlashStorage<'d> = Esp32c6FlashStorage<'d>;
