//! Battery and Bluetooth indicator policy
//!
//! Decides which status icons are visible. The face keeps the screen
//! quiet: by default the battery only shows when it is low and the
//! Bluetooth icon only shows when the phone is gone.

use wortuhr_hal::{BatteryState, ConnectionState};

use crate::layers::{BatteryIcon, BluetoothIcon};

/// Battery level at or below which the indicator turns red
pub const BATTERY_RED_PERCENT: u8 = 10;

/// Width of a full battery charge bar in pixels
pub const BATTERY_FILL_WIDTH: u8 = 11;

/// Indicator display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorPolicy {
    /// Show the battery only when it is at or below the red level
    pub battery_red_only: bool,
    /// Show Bluetooth only while disconnected
    pub bluetooth_offline_only: bool,
}

impl Default for IndicatorPolicy {
    fn default() -> Self {
        Self {
            battery_red_only: true,
            bluetooth_offline_only: true,
        }
    }
}

/// Battery charge bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryFill {
    /// Bar width in pixels (0-11)
    pub width: u8,
    /// Draw the bar in the warning colour
    pub critical: bool,
}

impl BatteryFill {
    /// Bar for a charge level
    pub fn for_percent(percent: u8) -> Self {
        let percent = percent.min(100);
        Self {
            width: (percent as u16 * BATTERY_FILL_WIDTH as u16 / 100) as u8,
            critical: percent <= BATTERY_RED_PERCENT,
        }
    }
}

/// Visible state of the battery indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryIndicator {
    pub visible: bool,
    pub icon: BatteryIcon,
    pub fill_visible: bool,
    pub fill: BatteryFill,
}

impl BatteryIndicator {
    /// Hidden indicator
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Indicator for a battery reading
    ///
    /// `enabled` is the user's battery indicator setting.
    pub fn from_state(state: BatteryState, enabled: bool, policy: &IndicatorPolicy) -> Self {
        let show = enabled
            && (!policy.battery_red_only || state.charge_percent <= BATTERY_RED_PERCENT);
        if !show {
            return Self::hidden();
        }

        Self {
            visible: true,
            icon: if state.is_charging {
                BatteryIcon::Charging
            } else {
                BatteryIcon::Plain
            },
            // The charging bitmap has its own bolt instead of a bar
            fill_visible: !state.is_charging,
            fill: BatteryFill::for_percent(state.charge_percent),
        }
    }
}

/// Visible state of the Bluetooth indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BluetoothIndicator {
    pub visible: bool,
    pub icon: BluetoothIcon,
}

impl BluetoothIndicator {
    /// Indicator for a connection reading
    ///
    /// `enabled` is the user's Bluetooth indicator setting.
    pub fn from_state(state: ConnectionState, enabled: bool, policy: &IndicatorPolicy) -> Self {
        match (enabled, state) {
            (false, _) => Self {
                visible: false,
                icon: BluetoothIcon::Disconnected,
            },
            (true, ConnectionState::Connected) => Self {
                visible: !policy.bluetooth_offline_only,
                icon: BluetoothIcon::Connected,
            },
            (true, ConnectionState::Disconnected) => Self {
                visible: true,
                icon: BluetoothIcon::Disconnected,
            },
        }
    }
}
