//! Day counting between Gregorian dates and calendar dates.
//!
//! [`CalendarArithmetic`] knows the month table and nothing else: which
//! Gregorian day is the first of a year comes from a [`YearStartProvider`].
//! The astronomical and simplified calendars are two providers over this one
//! routine, so their month lengths and leap-year handling cannot drift apart.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::warn;

use crate::date::{
    calendar_year, days_before_month, gregorian_year, month_day_from_ordinal, month_length,
    KurdishDate, MONTHS_PER_YEAR,
};
use crate::error::CalendarError;

/// Supplies the Gregorian date on which each calendar year begins.
///
/// Implemented by the astronomical and fixed-date policies, and by any
/// `Fn(i32) -> Result<NaiveDate, CalendarError>`.
pub trait YearStartProvider {
    /// Gregorian date of day 1 of month 1 of calendar year `year`.
    fn year_start(&self, year: i32) -> Result<NaiveDate, CalendarError>;
}

impl<F> YearStartProvider for F
where
    F: Fn(i32) -> Result<NaiveDate, CalendarError>,
{
    fn year_start(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        self(year)
    }
}

/// Calendar arithmetic over a year-start policy.
///
/// A year is a leap year exactly when its start and the next year's start are
/// 366 days apart; the extra day goes to month 12.
#[derive(Debug, Clone)]
pub struct CalendarArithmetic<P> {
    provider: P,
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if year < 1 {
        Err(CalendarError::InvalidYear { year })
    } else {
        Ok(())
    }
}

impl<P: YearStartProvider> CalendarArithmetic<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Gregorian date on which `year` begins.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidYear`] for years below 1, or whatever the
    /// provider reports.
    pub fn year_start(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        check_year(year)?;
        self.provider.year_start(year)
    }

    /// Number of days in `year`, measured between consecutive year starts.
    ///
    /// # Errors
    ///
    /// A gap other than 365 or 366 days is an invariant violation and is
    /// reported as [`CalendarError::YearLength`].
    pub fn year_length(&self, year: i32) -> Result<u16, CalendarError> {
        let start = self.year_start(year)?;
        let next_year = year.checked_add(1).ok_or(CalendarError::OutOfRange {
            year: gregorian_year(year),
        })?;
        let next = self.provider.year_start(next_year)?;
        match (next - start).num_days() {
            days @ (365 | 366) => Ok(days as u16),
            days => {
                warn!(
                    target: "calendar_calculation",
                    year, days, %start, %next,
                    "consecutive year starts are not 365 or 366 days apart"
                );
                Err(CalendarError::YearLength { year, days })
            }
        }
    }

    pub fn is_leap_year(&self, year: i32) -> Result<bool, CalendarError> {
        Ok(self.year_length(year)? == 366)
    }

    /// Length of `month` in `year`. Only month 12 consults the leap status.
    pub fn days_in_month(&self, month: u8, year: i32) -> Result<u8, CalendarError> {
        check_year(year)?;
        let leap = month == MONTHS_PER_YEAR && self.is_leap_year(year)?;
        month_length(month, leap)
    }

    /// Checks year, month and day, in that order.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidYear`], [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::InvalidDay`] naming the bound that was violated.
    pub fn validate(&self, year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
        let max_day = self.days_in_month(month, year)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(())
    }

    /// Validated constructor for [`KurdishDate`].
    pub fn date(&self, year: i32, month: u8, day: u8) -> Result<KurdishDate, CalendarError> {
        self.validate(year, month, day)?;
        Ok(KurdishDate::from_parts(year, month, day))
    }

    /// Day of the year (1..=366) of a calendar date.
    pub fn day_of_year(&self, year: i32, month: u8, day: u8) -> Result<u16, CalendarError> {
        Ok(self.date(year, month, day)?.day_of_year())
    }

    /// Converts a calendar date to the Gregorian calendar.
    pub fn to_gregorian(&self, year: i32, month: u8, day: u8) -> Result<NaiveDate, CalendarError> {
        self.validate(year, month, day)?;
        self.gregorian_of(KurdishDate::from_parts(year, month, day))
    }

    /// Converts an already validated date to the Gregorian calendar.
    pub fn gregorian_of(&self, date: KurdishDate) -> Result<NaiveDate, CalendarError> {
        let start = self.provider.year_start(date.year())?;
        let offset = i64::from(date.day_of_year()) - 1;
        start
            .checked_add_signed(Duration::days(offset))
            .ok_or(CalendarError::OutOfRange {
                year: date.gregorian_year(),
            })
    }

    /// Gregorian weekday of a calendar date.
    pub fn weekday(&self, date: KurdishDate) -> Result<Weekday, CalendarError> {
        Ok(self.gregorian_of(date)?.weekday())
    }

    /// Converts a Gregorian date to the calendar.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidYear`] for dates before the start of year 1,
    /// plus any provider or year-length error met on the way.
    pub fn from_gregorian(&self, date: NaiveDate) -> Result<KurdishDate, CalendarError> {
        let mut year = calendar_year(date.year());
        let mut start = self.provider.year_start(year)?;
        if date < start {
            year -= 1;
            start = self.provider.year_start(year)?;
        }
        check_year(year)?;

        let ordinal = (date - start).num_days() + 1;
        let leap = ordinal > i64::from(days_before_month(MONTHS_PER_YEAR))
            && self.is_leap_year(year)?;
        let (month, day) = u16::try_from(ordinal)
            .ok()
            .and_then(|ordinal| month_day_from_ordinal(ordinal, leap))
            .ok_or(CalendarError::YearLength {
                year,
                days: ordinal,
            })?;
        Ok(KurdishDate::from_parts(year, month, day))
    }
}
