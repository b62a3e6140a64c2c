//! Status service readings
//!
//! Values delivered by the platform's battery and Bluetooth services.

/// Battery charge state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    /// Charge level (0-100)
    pub charge_percent: u8,
    /// Charger connected and charging
    pub is_charging: bool,
}

impl BatteryState {
    /// Create a battery reading, clamping the level to 100
    pub fn new(charge_percent: u8, is_charging: bool) -> Self {
        Self {
            charge_percent: charge_percent.min(100),
            is_charging,
        }
    }
}

/// Phone connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

impl ConnectionState {
    /// Returns true while the phone is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

impl From<bool> for ConnectionState {
    fn from(connected: bool) -> Self {
        if connected {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }
}
