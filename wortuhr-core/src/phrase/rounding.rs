//! Fuzzy minute rounding
//!
//! Snaps a minute to the nearest multiple of five, leaning the way
//! people speak ("kurz nach", "kurz vor"). The hour is never touched, so
//! minutes 58 and 59 round up to 60.

/// Largest minute value the rounding step can produce
pub const MAX_ADJUSTED_MINUTE: u8 = 60;

/// Correction per last digit of the minute
///
/// Index is `minute % 10`, value is added to the minute.
pub const FUZZY_OFFSETS: [i8; 10] = [0, -1, -2, 2, 1, 0, -1, -2, 2, 1];

/// Minute used for all phrase and layout lookups
///
/// Returns `minute` unchanged when `fuzzy` is off. The result is always
/// in `0..=60`.
pub fn adjust_minute(minute: u8, fuzzy: bool) -> u8 {
    debug_assert!(minute < 60, "minute out of range");

    if !fuzzy {
        return minute;
    }

    let offset = FUZZY_OFFSETS[(minute % 10) as usize];
    // minute % 10 >= |offset| whenever offset is negative
    (minute as i16 + offset as i16) as u8
}
