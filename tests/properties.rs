use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use kurdish_calendar::{
    clear_cache, clear_cache_year, local_instant, AstronomicalCalendar, CalendarArithmetic,
    CalendarError, EquinoxCache, Longitude, SimplifiedCalendar, YearStartProvider,
};

const LONGITUDES: [f64; 4] = [0.0, 44.0, 52.5, -75.0];

fn astronomical(longitude: f64) -> AstronomicalCalendar {
    AstronomicalCalendar::with_cache(longitude, Arc::new(EquinoxCache::new())).unwrap()
}

fn assert_round_trip<P: YearStartProvider>(calendar: &CalendarArithmetic<P>, years: std::ops::Range<i32>) {
    for year in years {
        for month in 1..=12 {
            let last = calendar.days_in_month(month, year).unwrap();
            for day in 1..=last {
                let gregorian = calendar.to_gregorian(year, month, day).unwrap();
                let back = calendar.from_gregorian(gregorian).unwrap();
                assert_eq!(back.ymd(), (year, month, day), "via {gregorian}");
            }
        }
    }
}

#[test]
fn round_trip_astronomical() {
    for longitude in LONGITUDES {
        assert_round_trip(&astronomical(longitude), 2715..2735);
    }
}

#[test]
fn round_trip_simplified() {
    assert_round_trip(&SimplifiedCalendar::simplified(), 2690..2740);
}

#[test]
fn gregorian_round_trip_over_consecutive_days() {
    let calendar = astronomical(52.5);
    let start = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
    for offset in 0..(366 * 8) {
        let gregorian = start + Duration::days(offset);
        let date = calendar.from_gregorian(gregorian).unwrap();
        assert_eq!(calendar.gregorian_of(date).unwrap(), gregorian);
    }
}

#[test]
fn leap_year_day_count_law() {
    for longitude in LONGITUDES {
        let calendar = astronomical(longitude);
        for year in 2500..2900 {
            let days = (calendar.to_gregorian(year + 1, 1, 1).unwrap()
                - calendar.to_gregorian(year, 1, 1).unwrap())
            .num_days();
            let expected = if calendar.is_leap_year(year).unwrap() { 366 } else { 365 };
            assert_eq!(days, expected, "{year} at {longitude}");
        }
    }

    let simplified = SimplifiedCalendar::simplified();
    for year in 2500..2900 {
        let days = (simplified.to_gregorian(year + 1, 1, 1).unwrap()
            - simplified.to_gregorian(year, 1, 1).unwrap())
        .num_days();
        assert_eq!(days == 366, simplified.is_leap_year(year).unwrap(), "{year}");
    }
}

#[test]
fn month_lengths_sum_to_year_length() {
    let calendar = astronomical(44.0);
    for year in 2700..2760 {
        let total: u32 = (1..=12)
            .map(|month| u32::from(calendar.days_in_month(month, year).unwrap()))
            .sum();
        let expected = if calendar.is_leap_year(year).unwrap() { 366 } else { 365 };
        assert_eq!(total, expected, "{year}");
    }
}

#[test]
fn leap_years_average_the_tropical_year() {
    let calendar = astronomical(52.5);
    let leaps = (2600..2900)
        .filter(|&year| calendar.is_leap_year(year).unwrap())
        .count();
    // 300 years of 365.2422 days hold about 72.7 leap days
    assert!((71..=74).contains(&leaps), "{leaps}");
}

#[test]
fn year_boundary() {
    for longitude in LONGITUDES {
        let calendar = astronomical(longitude);
        for year in 2710..2730 {
            let start = calendar.year_start(year).unwrap();
            assert_eq!(calendar.from_gregorian(start).unwrap().ymd(), (year, 1, 1));

            let eve = start.pred_opt().unwrap();
            let last = calendar.days_in_month(12, year - 1).unwrap();
            assert_eq!(
                calendar.from_gregorian(eve).unwrap().ymd(),
                (year - 1, 12, last),
                "{year} at {longitude}"
            );
        }
    }
}

#[test]
fn invalid_input() {
    let calendar = astronomical(52.5);
    assert_eq!(
        calendar.validate(2725, 13, 1).unwrap_err(),
        CalendarError::InvalidMonth { month: 13 }
    );
    assert!(!calendar.is_leap_year(2725).unwrap());
    assert_eq!(
        calendar.validate(2725, 12, 30).unwrap_err(),
        CalendarError::InvalidDay {
            day: 30,
            month: 12,
            max_day: 29
        }
    );
    assert_eq!(
        calendar.to_gregorian(0, 1, 1).unwrap_err(),
        CalendarError::InvalidYear { year: 0 }
    );
    assert_eq!(
        calendar.date(2725, 1, 32).unwrap_err(),
        CalendarError::InvalidDay {
            day: 32,
            month: 1,
            max_day: 31
        }
    );
}

#[test]
fn cache_transparency() {
    let calendar = AstronomicalCalendar::astronomical(44.0).unwrap();
    let gregorian = NaiveDate::from_ymd_opt(2023, 3, 20).unwrap();

    let warm = calendar.from_gregorian(gregorian).unwrap();
    let leap = calendar.is_leap_year(2722).unwrap();

    clear_cache();
    assert_eq!(calendar.from_gregorian(gregorian).unwrap(), warm);

    clear_cache_year(2022);
    clear_cache_year(2023);
    assert_eq!(calendar.is_leap_year(2722).unwrap(), leap);
    assert_eq!(warm.ymd(), (2722, 12, 30));
}

#[test]
fn longitude_periodicity_and_hour_shift() {
    for longitude in LONGITUDES {
        let here = astronomical(longitude);
        let turned = astronomical(longitude + 360.0);
        for year in 2700..2740 {
            assert_eq!(here.year_start(year).unwrap(), turned.year_start(year).unwrap());
        }
    }

    let calendar = astronomical(0.0);
    let equinox = calendar.equinox(2725).unwrap();
    let at = |degrees: f64| local_instant(equinox, Longitude::new(degrees).unwrap()).unwrap();
    assert_eq!(at(60.0).naive() - at(45.0).naive(), Duration::hours(1));
    assert_eq!(at(-15.0).naive() - at(-30.0).naive(), Duration::hours(1));
}
