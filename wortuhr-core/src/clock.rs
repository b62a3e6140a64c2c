//! Wall-clock input supplied by the minute tick

/// Hours per day
pub const HOURS_PER_DAY: u8 = 24;

/// Minutes per hour
pub const MINUTES_PER_HOUR: u8 = 60;

/// Days per week
pub const DAYS_PER_WEEK: u8 = 7;

/// A single wall-clock reading
///
/// Built by the platform once per minute. Values are expected to be in
/// range; out-of-range values are a caller bug and trip a debug assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute of hour (0-59)
    pub minute: u8,
    /// Day of week (0 = Sunday)
    pub weekday: u8,
    /// Day of month (1-31)
    pub day_of_month: u8,
}

impl ClockReading {
    /// Create a new clock reading
    pub fn new(hour: u8, minute: u8, weekday: u8, day_of_month: u8) -> Self {
        let reading = Self {
            hour,
            minute,
            weekday,
            day_of_month,
        };
        reading.debug_check();
        reading
    }

    /// Check whether every field is within its calendar range
    pub const fn is_valid(&self) -> bool {
        self.hour < HOURS_PER_DAY
            && self.minute < MINUTES_PER_HOUR
            && self.weekday < DAYS_PER_WEEK
            && self.day_of_month >= 1
            && self.day_of_month <= 31
    }

    /// Abort debug builds on an out-of-range reading
    #[inline]
    pub(crate) fn debug_check(&self) {
        debug_assert!(self.hour < HOURS_PER_DAY, "hour out of range");
        debug_assert!(self.minute < MINUTES_PER_HOUR, "minute out of range");
        debug_assert!(self.weekday < DAYS_PER_WEEK, "weekday out of range");
        debug_assert!(
            (1..=31).contains(&self.day_of_month),
            "day of month out of range"
        );
    }
}
