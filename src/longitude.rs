//! Projection of the UTC equinox onto an observer's meridian.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::cache::{global_cache, EquinoxCache};
use crate::error::CalendarError;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Observer longitude in degrees east; western longitudes are negative.
///
/// Any finite value is accepted. Values differing by whole turns describe the
/// same meridian and yield the same offset.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Longitude(f64);

impl Longitude {
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidLongitude`] for NaN or infinities.
    pub fn new(degrees: f64) -> Result<Self, CalendarError> {
        if degrees.is_finite() {
            Ok(Self(degrees))
        } else {
            Err(CalendarError::InvalidLongitude { longitude: degrees })
        }
    }

    /// The longitude as given.
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The longitude folded into `[-180, 180)`.
    pub fn normalized(self) -> f64 {
        (self.0 + 180.0).rem_euclid(360.0) - 180.0
    }

    /// Mean solar offset from UTC, `normalized / 15` hours, to the millisecond.
    pub fn offset(self) -> Duration {
        Duration::milliseconds((self.normalized() / 15.0 * MILLIS_PER_HOUR).round() as i64)
    }
}

impl TryFrom<f64> for Longitude {
    type Error = CalendarError;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°E", self.0)
    }
}

/// UTC shifted by a fixed longitude offset.
///
/// This is not a civil time zone: there are no zone rules and no daylight
/// saving. Only [`LocalInstant::date`] is used by the calendar; the time of
/// day carries no calendar meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalInstant(NaiveDateTime);

impl LocalInstant {
    pub fn naive(self) -> NaiveDateTime {
        self.0
    }

    /// The calendar day containing this instant.
    pub fn date(self) -> NaiveDate {
        self.0.date()
    }
}

impl fmt::Display for LocalInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (local mean time)", self.0)
    }
}

/// Shifts a UTC instant to the mean solar time of `longitude`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the shifted instant leaves the
/// representable range.
pub fn local_instant(
    equinox_utc: DateTime<Utc>,
    longitude: Longitude,
) -> Result<LocalInstant, CalendarError> {
    let utc = equinox_utc.naive_utc();
    utc.checked_add_signed(longitude.offset())
        .map(LocalInstant)
        .ok_or(CalendarError::OutOfRange {
            year: chrono::Datelike::year(&utc),
        })
}

/// Finds the Gregorian day on which the equinox falls at a given meridian.
#[derive(Debug, Clone)]
pub struct LongitudeProjector {
    cache: Arc<EquinoxCache>,
}

impl Default for LongitudeProjector {
    fn default() -> Self {
        Self::new(global_cache())
    }
}

impl LongitudeProjector {
    pub fn new(cache: Arc<EquinoxCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<EquinoxCache> {
        &self.cache
    }

    /// The day containing the spring equinox of `gregorian_year` as observed
    /// at `longitude`. This is the Nowruz of the astronomical calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] for unrepresentable years.
    pub fn year_start_date(
        &self,
        gregorian_year: i32,
        longitude: Longitude,
    ) -> Result<NaiveDate, CalendarError> {
        let equinox = self.cache.get_or_compute(gregorian_year)?;
        Ok(local_instant(equinox, longitude)?.date())
    }
}
