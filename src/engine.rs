//! The two calendar variants and the convenience entry points.
//!
//! Both variants are [`CalendarArithmetic`] over a different
//! [`YearStartProvider`]:
//!
//! - [`AstronomicalCalendar`]: year `y` starts on the Gregorian day that
//!   contains the spring equinox of `y - 700` at the observer's longitude.
//! - [`SimplifiedCalendar`]: year `y` starts on March 21 of `y - 700`.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::arithmetic::{CalendarArithmetic, YearStartProvider};
use crate::cache::{global_cache, EquinoxCache};
use crate::date::{gregorian_year, KurdishDate};
use crate::error::CalendarError;
use crate::longitude::{Longitude, LongitudeProjector};

/// Gregorian (month, day) of the fixed new year.
pub const FIXED_NEW_YEAR: (u32, u32) = (3, 21);

/// Positions of the leap years in the 33-year cycle.
const CYCLE_LEAP_POSITIONS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];
const CYCLE_LENGTH: i32 = 33;

/// Year start at the local date of the spring equinox.
#[derive(Debug, Clone)]
pub struct AstronomicalYearStart {
    projector: LongitudeProjector,
    longitude: Longitude,
}

impl AstronomicalYearStart {
    pub fn new(longitude: Longitude, cache: Arc<EquinoxCache>) -> Self {
        Self {
            projector: LongitudeProjector::new(cache),
            longitude,
        }
    }

    pub fn longitude(&self) -> Longitude {
        self.longitude
    }

    pub fn cache(&self) -> &Arc<EquinoxCache> {
        self.projector.cache()
    }
}

impl YearStartProvider for AstronomicalYearStart {
    fn year_start(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        self.projector
            .year_start_date(gregorian_year(year), self.longitude)
    }
}

/// Year start fixed at [`FIXED_NEW_YEAR`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedYearStart;

impl YearStartProvider for FixedYearStart {
    fn year_start(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        let (month, day) = FIXED_NEW_YEAR;
        let gregorian = gregorian_year(year);
        NaiveDate::from_ymd_opt(gregorian, month, day)
            .ok_or(CalendarError::OutOfRange { year: gregorian })
    }
}

pub type AstronomicalCalendar = CalendarArithmetic<AstronomicalYearStart>;

/// Calendar whose years all begin on Gregorian March 21.
///
/// [`CalendarArithmetic::is_leap_year`] reports the year-start gap, so a year
/// is leap exactly when the following Gregorian February has 29 days. This is
/// not the 33-year cycle: year 1 is leap under the cycle but not here. The
/// cycle is available separately through
/// [`is_cycle_leap_year`](CalendarArithmetic::is_cycle_leap_year) and takes
/// no part in day counting.
pub type SimplifiedCalendar = CalendarArithmetic<FixedYearStart>;

impl CalendarArithmetic<AstronomicalYearStart> {
    /// Astronomical calendar at `longitude` degrees east, backed by the
    /// process-wide equinox cache.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidLongitude`] for non-finite input.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use kurdish_calendar::AstronomicalCalendar;
    ///
    /// let calendar = AstronomicalCalendar::astronomical(52.5).unwrap();
    /// let nowruz = calendar.to_gregorian(2725, 1, 1).unwrap();
    /// assert_eq!(nowruz, NaiveDate::from_ymd_opt(2025, 3, 20).unwrap());
    /// ```
    pub fn astronomical(longitude: f64) -> Result<Self, CalendarError> {
        Self::with_cache(longitude, global_cache())
    }

    /// Astronomical calendar over a caller-owned cache.
    pub fn with_cache(longitude: f64, cache: Arc<EquinoxCache>) -> Result<Self, CalendarError> {
        let longitude = Longitude::new(longitude)?;
        Ok(Self::new(AstronomicalYearStart::new(longitude, cache)))
    }

    pub fn longitude(&self) -> Longitude {
        self.provider().longitude()
    }

    /// UTC instant of the equinox that begins calendar year `year`.
    pub fn equinox(&self, year: i32) -> Result<DateTime<Utc>, CalendarError> {
        if year < 1 {
            return Err(CalendarError::InvalidYear { year });
        }
        self.provider().cache().get_or_compute(gregorian_year(year))
    }
}

impl CalendarArithmetic<FixedYearStart> {
    pub fn simplified() -> Self {
        Self::new(FixedYearStart)
    }

    /// Leap status under the traditional 33-year cycle.
    ///
    /// This is a label only. Day counting in this calendar follows the
    /// distance between consecutive March 21 starts, see
    /// [`CalendarArithmetic::is_leap_year`].
    pub fn is_cycle_leap_year(&self, year: i32) -> Result<bool, CalendarError> {
        if year < 1 {
            return Err(CalendarError::InvalidYear { year });
        }
        let position = (year - 1).rem_euclid(CYCLE_LENGTH) + 1;
        Ok(CYCLE_LEAP_POSITIONS.contains(&position))
    }
}

/// Converts an astronomical calendar date at `longitude` to Gregorian.
pub fn to_gregorian(
    year: i32,
    month: u8,
    day: u8,
    longitude: f64,
) -> Result<NaiveDate, CalendarError> {
    AstronomicalCalendar::astronomical(longitude)?.to_gregorian(year, month, day)
}

/// Converts a Gregorian date to the astronomical calendar at `longitude`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kurdish_calendar::from_gregorian;
///
/// let date = from_gregorian(NaiveDate::from_ymd_opt(2023, 3, 21).unwrap(), 52.5).unwrap();
/// assert_eq!((2723, 1, 1), date.ymd());
/// ```
pub fn from_gregorian(date: NaiveDate, longitude: f64) -> Result<KurdishDate, CalendarError> {
    AstronomicalCalendar::astronomical(longitude)?.from_gregorian(date)
}

pub fn is_leap_year(year: i32, longitude: f64) -> Result<bool, CalendarError> {
    AstronomicalCalendar::astronomical(longitude)?.is_leap_year(year)
}

pub fn days_in_month(month: u8, year: i32, longitude: f64) -> Result<u8, CalendarError> {
    AstronomicalCalendar::astronomical(longitude)?.days_in_month(month, year)
}

pub fn validate(year: i32, month: u8, day: u8, longitude: f64) -> Result<(), CalendarError> {
    AstronomicalCalendar::astronomical(longitude)?.validate(year, month, day)
}
