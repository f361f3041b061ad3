//! Persistent settings storage
//!
//! The timer keeps a single small record in flash: the user's color
//! choice. Chip crates store it in a wear-leveled key-value map.

/// Records kept in the settings map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Work/rest colors, postcard encoded
    ColorSettings = 0,
}

impl StorageKey {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::ColorSettings),
            _ => None,
        }
    }
}

/// Storage failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Flash access or map bookkeeping failed
    Storage,
    /// Key has never been written
    NotFound,
    /// Stored record larger than the caller's buffer
    BufferTooSmall,
}

/// Key-value record storage
pub trait FlashStorage {
    /// Copy the record for `key` into `buffer`, returning its length
    fn read(
        &mut self,
        key: StorageKey,
        buffer: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, FlashError>>;

    /// Replace the record for `key`
    fn write(
        &mut self,
        key: StorageKey,
        data: &[u8],
    ) -> impl core::future::Future<Output = Result<(), FlashError>>;
}

#[cfg(feature = "sequential-storage")]
mod map_key {
    use super::StorageKey;
    use sequential_storage::map::{Key, SerializationError};

    impl Key for StorageKey {
        fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
            let slot = buffer.first_mut().ok_or(SerializationError::BufferTooSmall)?;
            *slot = self.as_u8();
            Ok(1)
        }

        fn deserialize_from(buffer: &[u8]) -> Result<(Self, usize), SerializationError> {
            let byte = buffer.first().ok_or(SerializationError::BufferTooSmall)?;
            let key = StorageKey::from_u8(*byte).ok_or(SerializationError::InvalidFormat)?;
            Ok((key, 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_byte_mapping() {
        assert_eq!(StorageKey::ColorSettings.as_u8(), 0);
        assert_eq!(StorageKey::from_u8(0), Some(StorageKey::ColorSettings));
        assert_eq!(StorageKey::from_u8(1), None);
        assert_eq!(StorageKey::from_u8(0xFF), None);
    }
}
