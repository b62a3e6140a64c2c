//! Settings persistence
//!
//! Loads the face settings from key-value storage at start-up and writes
//! them back on shutdown. Each setting lives under its own key, so a
//! missing or damaged value only resets that one setting to its default.

use wortuhr_hal::{KeyValueStorage, StorageError};
use wortuhr_protocol::SettingKey;

use crate::settings::FaceSettings;

/// Buffer size for one encoded setting
const MAX_VALUE_SIZE: usize = 4;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Storage operation failed
    Storage(StorageError),
    /// Stored bytes are not a valid value
    Deserialize,
    /// Value could not be encoded
    Serialize,
}

impl From<StorageError> for SettingsError {
    fn from(e: StorageError) -> Self {
        SettingsError::Storage(e)
    }
}

/// Settings persistence manager
pub struct SettingsStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SettingsStore<S> {
    /// Create a new settings store
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Consume this store and return the underlying storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Load settings, falling back to defaults key by key
    pub async fn load(&mut self) -> FaceSettings {
        let mut settings = FaceSettings::default();

        for key in SettingKey::ALL {
            if !self.storage.exists(key.as_u8()).await {
                debug!("No stored value for {}, using default", key);
                continue;
            }
            match self.load_flag(key).await {
                Ok(enabled) => settings.set(key, enabled),
                Err(e) => warn!("Ignoring stored value for {}: {}", key, e),
            }
        }

        info!("Settings loaded: {}", settings);
        settings
    }

    async fn load_flag(&mut self, key: SettingKey) -> Result<bool, SettingsError> {
        let mut buffer = [0u8; MAX_VALUE_SIZE];
        let len = self.storage.read(key.as_u8(), &mut buffer).await?;
        postcard::from_bytes(&buffer[..len]).map_err(|_| SettingsError::Deserialize)
    }

    /// Write every setting back to storage
    pub async fn save(&mut self, settings: &FaceSettings) -> Result<(), SettingsError> {
        for key in SettingKey::ALL {
            let mut buffer = [0u8; MAX_VALUE_SIZE];
            let bytes = postcard::to_slice(&settings.get(key), &mut buffer)
                .map_err(|_| SettingsError::Serialize)?;
            self.storage.write(key.as_u8(), bytes).await?;
        }

        info!("Settings saved");
        Ok(())
    }

    /// Forget all stored settings
    pub async fn reset(&mut self) -> Result<(), SettingsError> {
        self.storage.erase_all().await?;
        info!("Stored settings erased");
        Ok(())
    }
}
