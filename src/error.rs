//! Error type shared by every fallible calendar operation.

/// Error type for the equinox engine and the calendar arithmetic.
///
/// Range errors name the offending field, the value that was supplied and the
/// bound it violated. Nothing is clamped: recovering (for example by moving a
/// day to the last valid day of its month) is left to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// The calendar year is below 1.
    #[error("invalid year: {year} (must be >= 1)")]
    InvalidYear {
        /// The year that was provided.
        year: i32,
    },

    /// The month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The month that was provided.
        month: u8,
    },

    /// The day is outside the length of its month for that year.
    #[error("invalid day: {day} for month {month} (must be 1..={max_day})")]
    InvalidDay {
        /// The day that was provided.
        day: u8,
        /// The month the day was checked against.
        month: u8,
        /// The last valid day of that month in that year.
        max_day: u8,
    },

    /// The observer longitude is NaN or infinite.
    #[error("invalid longitude: {longitude} (must be finite)")]
    InvalidLongitude {
        /// The longitude in degrees east that was provided.
        longitude: f64,
    },

    /// Two consecutive year starts are neither 365 nor 366 days apart.
    #[error("invalid year length: year {year} spans {days} days (must be 365 or 366)")]
    YearLength {
        /// The calendar year whose length was measured.
        year: i32,
        /// Days between its start and the start of the following year.
        days: i64,
    },

    /// The Gregorian year cannot be represented as a date.
    #[error("gregorian year {year} is out of the representable range")]
    OutOfRange {
        /// The Gregorian year that was requested.
        year: i32,
    },
}
