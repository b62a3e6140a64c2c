//! Hour phrase selection
//!
//! Phrases past minute 20 ("fünf vor halb drei", "zehn vor drei") are
//! spoken against the next hour.

use super::tables::hour_word;

/// Last adjusted minute that is read against the current hour
pub const LAST_CURRENT_HOUR_MINUTE: u8 = 20;

/// Hour on the 12-hour dial that the phrase refers to
///
/// `hour_carry` forces the next hour regardless of the minute; it is set
/// by the Wien quarter override.
pub fn displayed_hour(hour: u8, adjusted_minute: u8, hour_carry: bool) -> u8 {
    debug_assert!(hour < 24, "hour out of range");

    if hour_carry || adjusted_minute > LAST_CURRENT_HOUR_MINUTE {
        (hour + 1) % 12
    } else {
        hour % 12
    }
}

/// Hour name for the phrase
pub fn hour_phrase(hour: u8, adjusted_minute: u8, hour_carry: bool) -> &'static str {
    hour_word(displayed_hour(hour, adjusted_minute, hour_carry))
}
