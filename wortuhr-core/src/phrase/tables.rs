//! Static phrase tables
//!
//! Minute phrases carry their own line breaks so each one fits the
//! container picked for it by the layout table.

/// Minute phrases, indexed by minute of hour
///
/// Adjusted minute 60 has no slot of its own; it reads as minute 0.
pub const MINUTE_PHRASES: [&str; 60] = [
    "\npunkt",
    "eins\nnach",
    "zwei\nnach",
    "drei\nnach",
    "vier\nnach",
    "fünf\nnach",
    "sechs\nnach",
    "sieben\nnach",
    "acht\nnach",
    "neun\nnach",
    "zehn\nnach",
    "elf\nnach",
    "zwölf\nnach",
    "dreizehn nach",
    "vierzehn nach",
    "viertel nach",
    "sechzehn nach",
    "siebzehn nach",
    "achtzehn nach",
    "neunzehn nach",
    "\nzwanzig nach",
    "neun\nvor\nhalb",
    "acht\nvor\nhalb",
    "sieben\nvor\nhalb",
    "sechs\nvor\nhalb",
    "\nfünf vor halb",
    "vier\nvor\nhalb",
    "drei\nvor\nhalb",
    "zwei\nvor\nhalb",
    "eins\nvor\nhalb",
    "\nhalb",
    "eins\nnach\nhalb",
    "zwei\nnach\nhalb",
    "drei\nnach\nhalb",
    "vier\nnach\nhalb",
    "\nfünf nach halb",
    "sechs\nnach\nhalb",
    "sieben\nnach\nhalb",
    "acht\nnach\nhalb",
    "neun\nnach\nhalb",
    "\nzwanzig vor",
    "neunzehn vor",
    "achtzehn vor",
    "siebzehn vor",
    "sechzehn vor",
    "drei-\nviertel",
    "vierzehn vor",
    "dreizehn vor",
    "zwölf\nvor",
    "elf\nvor",
    "zehn\nvor",
    "neun\nvor",
    "acht\nvor",
    "sieben\nvor",
    "sechs\nvor",
    "fünf\nvor",
    "vier\nvor",
    "drei\nvor",
    "zwei\nvor",
    "eins\nvor",
];

/// Hour names, indexed by hour of a 12-hour dial (0 = twelve)
pub const HOUR_WORDS: [&str; 12] = [
    "zwölf", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf",
];

/// Short weekday labels, indexed by weekday (0 = Sunday)
pub const WEEKDAY_LABELS: [&str; 7] = ["so", "mo", "di", "mi", "do", "fr", "sa"];

/// NRW variant for minute 45
pub const NRW_QUARTER_TO: &str = "viertel vor";

/// Wien variant for minute 15, read against the next hour
pub const WIEN_QUARTER: &str = "\nviertel";

/// Base phrase for an adjusted minute (`0..=60`)
pub fn minute_phrase(adjusted_minute: u8) -> &'static str {
    MINUTE_PHRASES[(adjusted_minute % 60) as usize]
}

/// Hour name for an hour of the 12-hour dial (`0..12`)
pub fn hour_word(dial_hour: u8) -> &'static str {
    HOUR_WORDS[dial_hour as usize]
}
