//! Face model
//!
//! Buffered copy of everything the face shows. Updates only touch the
//! model; [`FaceScreen::render`] pushes it to a backend.

use heapless::String;
use wortuhr_core::{FormatResult, LayoutVariant, TextAlignment};

use crate::backend::{DisplayError, FaceBackend};
use crate::indicators::{BatteryIndicator, BluetoothIndicator};
use crate::layers::{FaceLayer, LAYER_COUNT};

/// Minute phrase capacity in bytes
pub const MINUTE_TEXT_LEN: usize = 24;

/// Hour name capacity in bytes
pub const HOUR_TEXT_LEN: usize = 12;

/// Date label capacity in bytes
pub const DATE_TEXT_LEN: usize = 8;

/// Buffered face state
#[derive(Debug, Clone)]
pub struct FaceScreen {
    hidden: [bool; LAYER_COUNT],
    minute: String<MINUTE_TEXT_LEN>,
    hour: String<HOUR_TEXT_LEN>,
    date: String<DATE_TEXT_LEN>,
    layout: Option<LayoutVariant>,
    alignment: TextAlignment,
    battery: BatteryIndicator,
    bluetooth: BluetoothIndicator,
    dirty: bool,
}

impl Default for FaceScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_text<const N: usize>(target: &mut String<N>, text: &str) {
    target.clear();
    // Cut at a char boundary so multi-byte umlauts stay intact
    let mut end = text.len().min(N);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let pushed = target.push_str(&text[..end]);
    debug_assert!(pushed.is_ok(), "text longer than layer buffer");
}

impl FaceScreen {
    /// Create a blank face with every layer hidden
    pub fn new() -> Self {
        Self {
            hidden: [true; LAYER_COUNT],
            minute: String::new(),
            hour: String::new(),
            date: String::new(),
            layout: None,
            alignment: TextAlignment::default(),
            battery: BatteryIndicator::hidden(),
            bluetooth: BluetoothIndicator::default(),
            dirty: true,
        }
    }

    /// Show a formatted time
    ///
    /// Makes the minute container for `result.layout` visible and hides
    /// the other two. The minute text is written to all three so a later
    /// layout switch never shows stale text.
    pub fn show_time(&mut self, result: &FormatResult, show_date: bool) {
        let visible = FaceLayer::minute_container(result.layout);
        for layer in FaceLayer::MINUTE {
            self.hidden[layer.index()] = layer != visible;
        }
        self.hidden[FaceLayer::Hour.index()] = false;
        self.hidden[FaceLayer::Date.index()] = !show_date;

        copy_text(&mut self.minute, result.minute_text);
        copy_text(&mut self.hour, result.hour_text);
        copy_text(&mut self.date, &result.weekday_text);
        self.layout = Some(result.layout);
        self.dirty = true;
    }

    /// Show or hide the date line without touching its text
    pub fn set_date_visible(&mut self, visible: bool) {
        self.hidden[FaceLayer::Date.index()] = !visible;
        self.dirty = true;
    }

    /// Set the text alignment hint
    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        if self.alignment != alignment {
            self.alignment = alignment;
            self.dirty = true;
        }
    }

    /// Apply a battery indicator state
    pub fn set_battery(&mut self, indicator: BatteryIndicator) {
        self.battery = indicator;
        self.hidden[FaceLayer::Battery.index()] = !indicator.visible;
        self.hidden[FaceLayer::BatteryFill.index()] = !(indicator.visible && indicator.fill_visible);
        self.dirty = true;
    }

    /// Apply a Bluetooth indicator state
    pub fn set_bluetooth(&mut self, indicator: BluetoothIndicator) {
        self.bluetooth = indicator;
        self.hidden[FaceLayer::Bluetooth.index()] = !indicator.visible;
        self.dirty = true;
    }

    /// Check whether a layer is hidden
    pub fn is_hidden(&self, layer: FaceLayer) -> bool {
        self.hidden[layer.index()]
    }

    /// Text currently held for a layer
    ///
    /// All three minute containers share the minute text. Icon layers
    /// have no text.
    pub fn text(&self, layer: FaceLayer) -> Option<&str> {
        match layer {
            FaceLayer::MinuteThreeLine | FaceLayer::MinuteTwoLineLong | FaceLayer::MinuteTwoLineBig => {
                Some(self.minute.as_str())
            }
            FaceLayer::Hour => Some(self.hour.as_str()),
            FaceLayer::Date => Some(self.date.as_str()),
            FaceLayer::Battery | FaceLayer::BatteryFill | FaceLayer::Bluetooth => None,
        }
    }

    /// Layout of the last shown time
    pub fn layout(&self) -> Option<LayoutVariant> {
        self.layout
    }

    /// Current alignment hint
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Current battery indicator
    pub fn battery(&self) -> &BatteryIndicator {
        &self.battery
    }

    /// Current Bluetooth indicator
    pub fn bluetooth(&self) -> &BluetoothIndicator {
        &self.bluetooth
    }

    /// Layers currently visible
    pub fn visible_layers(&self) -> impl Iterator<Item = FaceLayer> + '_ {
        FaceLayer::ALL
            .into_iter()
            .filter(move |layer| !self.is_hidden(*layer))
    }

    /// Check if the face needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Push the whole model to a backend and mark it clean
    pub fn render<B: FaceBackend>(&mut self, backend: &mut B) -> Result<(), DisplayError> {
        backend.set_alignment(self.alignment)?;

        for layer in FaceLayer::MINUTE {
            backend.set_text(layer, &self.minute)?;
        }
        backend.set_text(FaceLayer::Hour, &self.hour)?;
        backend.set_text(FaceLayer::Date, &self.date)?;

        backend.set_battery_icon(self.battery.icon)?;
        backend.set_battery_fill(self.battery.fill)?;
        backend.set_bluetooth_icon(self.bluetooth.icon)?;

        for layer in FaceLayer::ALL {
            backend.set_hidden(layer, self.is_hidden(layer))?;
        }

        backend.flush()?;
        self.dirty = false;
        Ok(())
    }

    /// Render only when something changed
    pub fn render_if_dirty<B: FaceBackend>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        if !self.dirty {
            return Ok(false);
        }
        self.render(backend)?;
        Ok(true)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FaceScreen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Face[{} | {} | {}]",
            self.minute.as_str(),
            self.hour.as_str(),
            self.date.as_str()
        );
    }
}
