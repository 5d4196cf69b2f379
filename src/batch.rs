//! Parallel conversions over date ranges.

use std::ops::RangeInclusive;
use std::time::Instant;

use chrono::{Datelike, Duration, NaiveDate};
use rayon::prelude::*;
use tracing::info;

use crate::arithmetic::{CalendarArithmetic, YearStartProvider};
use crate::date::KurdishDate;
use crate::error::CalendarError;

/// Converts `count` consecutive Gregorian days starting at `start`.
///
/// Results are in input order. Worker threads share the calendar's equinox
/// cache.
pub fn from_gregorian_range<P>(
    calendar: &CalendarArithmetic<P>,
    start: NaiveDate,
    count: u32,
) -> Result<Vec<KurdishDate>, CalendarError>
where
    P: YearStartProvider + Sync,
{
    let started = Instant::now();
    let dates = (0..count)
        .into_par_iter()
        .map(|offset| {
            let date = start
                .checked_add_signed(Duration::days(i64::from(offset)))
                .ok_or(CalendarError::OutOfRange { year: start.year() })?;
            calendar.from_gregorian(date)
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        target: "calendar_calculation",
        count,
        elapsed_us = started.elapsed().as_micros() as u64,
        "converted gregorian range"
    );
    Ok(dates)
}

/// Converts calendar dates to Gregorian in parallel, preserving order.
pub fn to_gregorian_all<P>(
    calendar: &CalendarArithmetic<P>,
    dates: &[KurdishDate],
) -> Result<Vec<NaiveDate>, CalendarError>
where
    P: YearStartProvider + Sync,
{
    let started = Instant::now();
    let converted = dates
        .par_iter()
        .map(|&date| calendar.gregorian_of(date))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        target: "calendar_calculation",
        count = dates.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "converted calendar dates"
    );
    Ok(converted)
}

/// First day of each calendar year in `years`, as `(year, gregorian date)`.
pub fn year_starts<P>(
    calendar: &CalendarArithmetic<P>,
    years: RangeInclusive<i32>,
) -> Result<Vec<(i32, NaiveDate)>, CalendarError>
where
    P: YearStartProvider + Sync,
{
    years
        .into_par_iter()
        .map(|year| calendar.year_start(year).map(|start| (year, start)))
        .collect()
}
