//! Calendar date value and the month-length table.

use std::fmt;

use crate::error::CalendarError;

/// Calendar year minus the Gregorian year that contains its first day.
pub const EPOCH_OFFSET: i32 = 700;

pub const MONTHS_PER_YEAR: u8 = 12;

/// Month lengths in a common year; the last month gains a day in leap years.
const MONTH_LENGTHS: [u8; MONTHS_PER_YEAR as usize] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Days before the first of each month.
const DAYS_BEFORE_MONTH: [u16; MONTHS_PER_YEAR as usize] =
    [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Calendar year whose first day falls in `gregorian_year`.
pub fn calendar_year(gregorian_year: i32) -> i32 {
    gregorian_year + EPOCH_OFFSET
}

/// Gregorian year containing the first day of `calendar_year`.
pub fn gregorian_year(calendar_year: i32) -> i32 {
    calendar_year - EPOCH_OFFSET
}

/// Number of days in `month`, given the leap status of its year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_length(month: u8, leap: bool) -> Result<u8, CalendarError> {
    let base = MONTH_LENGTHS
        .get(usize::from(month).wrapping_sub(1))
        .copied()
        .ok_or(CalendarError::InvalidMonth { month })?;
    Ok(if month == MONTHS_PER_YEAR && leap {
        base + 1
    } else {
        base
    })
}

/// Days from the start of the year to the first of `month`.
pub(crate) fn days_before_month(month: u8) -> u16 {
    DAYS_BEFORE_MONTH[usize::from(month - 1)]
}

/// Splits a 1-based day of the year into `(month, day)`.
///
/// Returns `None` if `ordinal` is zero or runs past the end of the year.
pub(crate) fn month_day_from_ordinal(ordinal: u16, leap: bool) -> Option<(u8, u8)> {
    if ordinal == 0 {
        return None;
    }
    let mut remaining = ordinal;
    for month in 1..=MONTHS_PER_YEAR {
        let length = u16::from(month_length(month, leap).ok()?);
        if remaining <= length {
            return Some((month, remaining as u8));
        }
        remaining -= length;
    }
    None
}

/// A validated date in the solar calendar.
///
/// Obtained from a calendar's `date` constructor or from a Gregorian
/// conversion, both of which check the day against the month length for that
/// year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KurdishDate {
    year: i32,
    month: u8,
    day: u8,
}

impl KurdishDate {
    /// Callers have validated the triple.
    pub(crate) fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    pub fn ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Day of the year, 1..=366.
    pub fn day_of_year(self) -> u16 {
        days_before_month(self.month) + u16::from(self.day)
    }

    /// Gregorian year containing the first day of this date's year.
    pub fn gregorian_year(self) -> i32 {
        gregorian_year(self.year)
    }
}

impl fmt::Display for KurdishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
