//! Setting identifiers
//!
//! The companion app and persistent storage share these ids, so a value
//! received over the link is written back under the same key.

/// Number of known settings
pub const SETTING_COUNT: usize = 7;

/// A user-facing setting of the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SettingKey {
    /// Fuzzy minute rounding
    Fuzzy = 0,
    /// Bluetooth indicator
    Bluetooth = 1,
    /// Vibrate on Bluetooth disconnect
    Vibe = 2,
    /// Battery indicator
    BatteryImage = 3,
    /// "viertel vor" at minute 45
    DialectNrw = 4,
    /// "viertel" with the next hour at minute 15
    DialectWien = 5,
    /// Weekday/date line
    Date = 6,
}

impl SettingKey {
    /// Every key, in wire-id order
    pub const ALL: [SettingKey; SETTING_COUNT] = [
        SettingKey::Fuzzy,
        SettingKey::Bluetooth,
        SettingKey::Vibe,
        SettingKey::BatteryImage,
        SettingKey::DialectNrw,
        SettingKey::DialectWien,
        SettingKey::Date,
    ];

    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }
}
