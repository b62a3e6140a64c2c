//! Display backend trait
//!
//! Defines the interface to the platform's window layer.

use wortuhr_core::TextAlignment;

use crate::indicators::BatteryFill;
use crate::layers::{BatteryIcon, BluetoothIcon, FaceLayer};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Layer was not created by the platform
    NoSuchLayer,
    /// Text did not fit the platform's buffer
    BufferOverflow,
    /// Window not loaded yet
    NotInitialized,
}

/// Display backend trait
///
/// Implementations own the platform text/bitmap layers and map each
/// [`FaceLayer`] onto them.
pub trait FaceBackend {
    /// Show or hide a layer
    fn set_hidden(&mut self, layer: FaceLayer, hidden: bool) -> Result<(), DisplayError>;

    /// Replace the text of a text layer
    fn set_text(&mut self, layer: FaceLayer, text: &str) -> Result<(), DisplayError>;

    /// Set the alignment of all time text layers
    fn set_alignment(&mut self, alignment: TextAlignment) -> Result<(), DisplayError>;

    /// Select the battery outline bitmap
    fn set_battery_icon(&mut self, icon: BatteryIcon) -> Result<(), DisplayError>;

    /// Set the battery charge bar
    fn set_battery_fill(&mut self, fill: BatteryFill) -> Result<(), DisplayError>;

    /// Select the Bluetooth bitmap
    fn set_bluetooth_icon(&mut self, icon: BluetoothIcon) -> Result<(), DisplayError>;

    /// Mark changed layers for redraw
    fn flush(&mut self) -> Result<(), DisplayError>;
}
