//! Time-to-phrase formatting
//!
//! Turns a [`ClockReading`] and a [`Configuration`] into the texts shown
//! on the face and the layout container they need:
//!
//! ```text
//! minute ──► adjust_minute ──► select_minute ──► minute text, layout
//!                                   │ hour_carry
//! hour ──────────────────────► hour_phrase ───► hour text
//! weekday, day ──────────────► weekday_label ─► date text
//! ```
//!
//! Every step is a pure function over static tables; the formatter keeps
//! no state between calls.

pub mod hour;
pub mod layout;
pub mod rounding;
pub mod tables;

use core::fmt::Write;

use heapless::String;

use crate::clock::ClockReading;
use crate::config::Configuration;

pub use hour::{displayed_hour, hour_phrase};
pub use layout::{select_layout, LayoutVariant};
pub use rounding::{adjust_minute, MAX_ADJUSTED_MINUTE};
pub use tables::minute_phrase;

/// Capacity of the weekday/date label ("mo 31")
pub const WEEKDAY_TEXT_LEN: usize = 8;

/// Adjusted minute where the NRW override applies
pub const NRW_MINUTE: u8 = 45;

/// Adjusted minute where the Wien override applies
pub const WIEN_MINUTE: u8 = 15;

/// Minute phrase after dialect overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MinuteSelection {
    /// Text for the minute container
    pub text: &'static str,
    /// Container the text is laid out for
    pub layout: LayoutVariant,
    /// Read the phrase against the next hour regardless of the minute
    pub hour_carry: bool,
}

/// Pick the minute phrase and layout for an adjusted minute
///
/// Dialect overrides replace the text only; the layout always comes from
/// the minute.
pub fn select_minute(adjusted_minute: u8, config: &Configuration) -> MinuteSelection {
    let mut selection = MinuteSelection {
        text: minute_phrase(adjusted_minute),
        layout: select_layout(adjusted_minute),
        hour_carry: false,
    };

    if config.dialect_nrw && adjusted_minute == NRW_MINUTE {
        selection.text = tables::NRW_QUARTER_TO;
    }
    if config.dialect_wien && adjusted_minute == WIEN_MINUTE {
        selection.text = tables::WIEN_QUARTER;
        selection.hour_carry = true;
    }

    selection
}

/// Weekday and day of month, e.g. "so 3"
pub fn weekday_label(weekday: u8, day_of_month: u8) -> String<WEEKDAY_TEXT_LEN> {
    let mut label = String::new();
    // Longest label is 5 bytes
    let written = write!(
        label,
        "{} {}",
        tables::WEEKDAY_LABELS[weekday as usize],
        day_of_month
    );
    debug_assert!(written.is_ok(), "weekday label overflow");
    label
}

/// Everything the face needs to show one minute
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormatResult {
    pub minute_text: &'static str,
    pub hour_text: &'static str,
    pub weekday_text: String<WEEKDAY_TEXT_LEN>,
    pub layout: LayoutVariant,
}

/// Formats clock readings with a fixed configuration
///
/// Cheap to build; create one per tick from the current settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseFormatter {
    config: Configuration,
}

impl PhraseFormatter {
    /// Create a formatter for the given configuration
    pub const fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Configuration this formatter applies
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// Format a clock reading
    pub fn format(&self, reading: &ClockReading) -> FormatResult {
        reading.debug_check();

        let minute = adjust_minute(reading.minute, self.config.fuzzy);
        let selection = select_minute(minute, &self.config);

        FormatResult {
            minute_text: selection.text,
            hour_text: hour_phrase(reading.hour, minute, selection.hour_carry),
            weekday_text: weekday_label(reading.weekday, reading.day_of_month),
            layout: selection.layout,
        }
    }
}
