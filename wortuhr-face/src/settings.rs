//! Face settings
//!
//! The formatter configuration plus the indicator switches. This is the
//! single mutable copy of the settings; the formatter only ever sees an
//! immutable [`Configuration`] taken from it at tick time.

use wortuhr_core::Configuration;
use wortuhr_protocol::{SettingKey, SettingsUpdate};

/// All user settings of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceSettings {
    /// Phrase formatter flags
    pub config: Configuration,
    /// Show the Bluetooth indicator
    pub bluetooth: bool,
    /// Vibrate when the phone disconnects
    pub vibe: bool,
    /// Show the battery indicator
    pub battery_image: bool,
    /// Show the weekday/date line
    pub show_date: bool,
}

impl Default for FaceSettings {
    fn default() -> Self {
        Self {
            config: Configuration::default(),
            bluetooth: true,
            vibe: true,
            battery_image: true,
            show_date: true,
        }
    }
}

/// Parts of the face affected by a settings update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsChange {
    /// Phrase flags changed; applies from the next tick
    pub phrase: bool,
    /// Date visibility changed
    pub date: bool,
    /// Battery indicator needs refreshing
    pub battery: bool,
    /// Bluetooth indicator needs refreshing
    pub bluetooth: bool,
    /// Number of settings carried by the update
    pub applied: u8,
}

impl FaceSettings {
    /// Value of a single setting
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Fuzzy => self.config.fuzzy,
            SettingKey::Bluetooth => self.bluetooth,
            SettingKey::Vibe => self.vibe,
            SettingKey::BatteryImage => self.battery_image,
            SettingKey::DialectNrw => self.config.dialect_nrw,
            SettingKey::DialectWien => self.config.dialect_wien,
            SettingKey::Date => self.show_date,
        }
    }

    /// Set a single setting
    pub fn set(&mut self, key: SettingKey, enabled: bool) {
        let slot = match key {
            SettingKey::Fuzzy => &mut self.config.fuzzy,
            SettingKey::Bluetooth => &mut self.bluetooth,
            SettingKey::Vibe => &mut self.vibe,
            SettingKey::BatteryImage => &mut self.battery_image,
            SettingKey::DialectNrw => &mut self.config.dialect_nrw,
            SettingKey::DialectWien => &mut self.config.dialect_wien,
            SettingKey::Date => &mut self.show_date,
        };
        *slot = enabled;
    }

    /// Apply an update from the companion app
    pub fn apply(&mut self, update: &SettingsUpdate) -> SettingsChange {
        let mut change = SettingsChange::default();

        for (key, enabled) in update.iter() {
            self.set(key, enabled);
            change.applied += 1;
            match key {
                SettingKey::Fuzzy | SettingKey::DialectNrw | SettingKey::DialectWien => {
                    change.phrase = true
                }
                SettingKey::Date => change.date = true,
                SettingKey::BatteryImage => change.battery = true,
                SettingKey::Bluetooth => change.bluetooth = true,
                SettingKey::Vibe => {}
            }
        }

        change
    }
}
