//! Spring (March) equinox instant from a truncated periodic series.
//!
//! The mean equinox is a polynomial in millennia, corrected by 24 periodic
//! terms (Meeus, *Astronomical Algorithms*, chapter 27). The resulting Julian
//! Ephemeris Day is converted to a civil instant and tagged UTC; the
//! difference between dynamical time and UTC (about a minute in this century)
//! is not applied.

use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::trace;

use crate::error::CalendarError;

/// Gregorian years for which the series is accurate to about a minute.
///
/// Other years are computed the same way with degrading accuracy; nothing
/// signals it, so callers who need the guarantee check this range themselves.
pub const ACCURATE_YEARS: RangeInclusive<i32> = 1800..=2200;

/// Years served by the modern polynomial.
const MODERN_YEARS: std::ops::Range<i32> = 1000..3000;

const J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
/// First Julian day number counted in the Gregorian calendar (1582-10-15).
const GREGORIAN_REFORM: f64 = 2_299_161.0;

/// Mean March equinox as a quartic in `Y = (year - epoch) / 1000`.
struct MeanEquinox {
    epoch: f64,
    coefficients: [f64; 5],
}

impl MeanEquinox {
    fn jde0(&self, year: i32) -> f64 {
        let y = (f64::from(year) - self.epoch) / 1000.0;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * y + c)
    }
}

static MODERN: MeanEquinox = MeanEquinox {
    epoch: 2000.0,
    coefficients: [2_451_623.809_84, 365_242.374_04, 0.051_69, -0.004_11, -0.000_57],
};

static ANCIENT: MeanEquinox = MeanEquinox {
    epoch: 0.0,
    coefficients: [1_721_139.291_89, 365_242.137_40, 0.061_34, 0.001_11, -0.000_71],
};

/// Periodic terms `(amplitude, phase°, rate°/century)`.
static PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1_934.136),
    (203.0, 337.23, 32_964.467),
    (199.0, 342.08, 20.186),
    (182.0, 27.85, 445_267.112),
    (156.0, 73.14, 45_036.886),
    (136.0, 171.52, 22_518.443),
    (77.0, 222.54, 65_928.934),
    (74.0, 296.72, 3_034.906),
    (70.0, 243.58, 9_037.513),
    (58.0, 119.81, 33_718.147),
    (52.0, 297.17, 150.678),
    (50.0, 21.02, 2_281.226),
    (45.0, 247.54, 29_929.562),
    (44.0, 325.15, 31_555.956),
    (29.0, 60.93, 4_443.417),
    (18.0, 155.12, 67_555.328),
    (17.0, 288.79, 4_562.452),
    (16.0, 198.04, 62_894.029),
    (14.0, 199.76, 31_436.921),
    (12.0, 95.39, 14_577.848),
    (12.0, 287.11, 31_931.756),
    (12.0, 320.81, 34_777.259),
    (9.0, 227.73, 1_222.114),
    (8.0, 15.45, 16_859.074),
];

/// Computes the instant of the spring equinox of a Gregorian year.
///
/// Every year is accepted. Accuracy is about a minute within
/// [`ACCURATE_YEARS`] and degrades outside it. Dates before the Gregorian
/// reform are proleptic Gregorian, like every other `chrono` date.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result cannot be represented
/// as a `chrono` date.
///
/// # Example
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use kurdish_calendar::compute_spring_equinox;
///
/// let equinox = compute_spring_equinox(2025).unwrap();
/// assert_eq!((3, 20, 9), (equinox.month(), equinox.day(), equinox.hour()));
/// ```
pub fn compute_spring_equinox(year: i32) -> Result<DateTime<Utc>, CalendarError> {
    let jde = julian_ephemeris_day(year);
    let instant = jde_to_utc(jde).ok_or(CalendarError::OutOfRange { year })?;
    trace!(target: "equinox", year, jde, %instant, "computed spring equinox");
    Ok(instant)
}

/// Returns the Julian Ephemeris Day of the spring equinox of `year`.
pub fn julian_ephemeris_day(year: i32) -> f64 {
    let mean = if MODERN_YEARS.contains(&year) {
        &MODERN
    } else {
        &ANCIENT
    };
    let jde0 = mean.jde0(year);

    let t = (jde0 - J2000) / DAYS_PER_CENTURY;
    let w = (35_999.373 * t - 2.47).to_radians();
    let delta_lambda = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();

    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|&(amplitude, phase, rate)| amplitude * (phase + rate * t).to_radians().cos())
        .sum();

    jde0 + 0.00001 * s / delta_lambda
}

/// Julian day number of 0000-12-31 (proleptic Gregorian), day zero of
/// `NaiveDate::num_days_from_ce`.
const JDN_BEFORE_CE: f64 = 1_721_425.0;

/// Converts a Julian day to a proleptic Gregorian instant at millisecond
/// resolution.
///
/// The fraction of the day is expanded unit by unit: each stage is floored
/// and only its remainder is carried into the next multiplication.
fn jde_to_utc(jde: f64) -> Option<DateTime<Utc>> {
    let z = (jde + 0.5).floor();
    let f = jde + 0.5 - z;

    let date = if z >= GREGORIAN_REFORM {
        gregorian_date(z)?
    } else {
        // The series is Julian-calendar numbered here; the day number is not.
        let days = z - JDN_BEFORE_CE;
        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&days) {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(days as i32)?
    };

    let hours = f * 24.0;
    let hour = hours.floor();
    let minutes = (hours - hour) * 60.0;
    let minute = minutes.floor();
    let seconds = (minutes - minute) * 60.0;
    let second = seconds.floor();
    let milli = ((seconds - second) * 1000.0).floor();

    let civil = date.and_hms_milli_opt(hour as u32, minute as u32, second as u32, milli as u32)?;
    Some(Utc.from_utc_datetime(&civil))
}

/// Calendar date of Julian day number `z` on or after the Gregorian reform.
fn gregorian_date(z: f64) -> Option<NaiveDate> {
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
}
