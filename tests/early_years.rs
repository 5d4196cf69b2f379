use std::sync::Arc;

use chrono::NaiveDate;
use kurdish_calendar::{
    AstronomicalCalendar, CalendarArithmetic, CalendarError, EquinoxCache, SimplifiedCalendar,
    YearStartProvider,
};

const LONGITUDES: [f64; 4] = [0.0, 44.0, 52.5, -75.0];

/// Calendar years 1 through 2300 start between Gregorian -699 and 1600.
const EARLY_YEARS: std::ops::RangeInclusive<i32> = 1..=2300;

fn astronomical(longitude: f64) -> AstronomicalCalendar {
    AstronomicalCalendar::with_cache(longitude, Arc::new(EquinoxCache::new())).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn assert_year_structure<P: YearStartProvider>(calendar: &CalendarArithmetic<P>, label: &str) {
    for year in EARLY_YEARS {
        let leap = calendar
            .is_leap_year(year)
            .unwrap_or_else(|err| panic!("{label} {year}: {err}"));
        let last = calendar.days_in_month(12, year).unwrap();
        assert_eq!(last, if leap { 30 } else { 29 }, "{label} {year}");

        let start = calendar.to_gregorian(year, 1, 1).unwrap();
        let end = calendar.to_gregorian(year, 12, last).unwrap();
        assert_eq!(calendar.from_gregorian(start).unwrap().ymd(), (year, 1, 1));
        assert_eq!(calendar.from_gregorian(end).unwrap().ymd(), (year, 12, last));
        assert_eq!(end.succ_opt(), calendar.to_gregorian(year + 1, 1, 1).ok());
    }
}

fn assert_every_day_round_trips<P: YearStartProvider>(calendar: &CalendarArithmetic<P>) {
    for year in EARLY_YEARS.step_by(23) {
        for month in 1..=12 {
            for day in 1..=calendar.days_in_month(month, year).unwrap() {
                let gregorian = calendar.to_gregorian(year, month, day).unwrap();
                assert_eq!(
                    calendar.from_gregorian(gregorian).unwrap().ymd(),
                    (year, month, day),
                    "via {gregorian}"
                );
            }
        }
    }
}

#[test]
fn astronomical_years_hold_their_shape_back_to_year_one() {
    for longitude in LONGITUDES {
        let calendar = astronomical(longitude);
        assert_year_structure(&calendar, &format!("{longitude}°"));
        assert_every_day_round_trips(&calendar);
    }
}

#[test]
fn simplified_years_hold_their_shape_back_to_year_one() {
    let calendar = SimplifiedCalendar::simplified();
    assert_year_structure(&calendar, "simplified");
    assert_every_day_round_trips(&calendar);
}

#[test]
fn nowruz_around_the_gregorian_reform() {
    let calendar = astronomical(52.5);
    assert_eq!(calendar.year_start(2199).unwrap(), ymd(1499, 3, 21));
    assert_eq!(calendar.year_start(2200).unwrap(), ymd(1500, 3, 21));
    assert_eq!(calendar.year_start(2282).unwrap(), ymd(1582, 3, 21));
    assert_eq!(calendar.year_start(2283).unwrap(), ymd(1583, 3, 21));
    assert!(!calendar.is_leap_year(2199).unwrap());
    assert_eq!(
        calendar.from_gregorian(ymd(1500, 3, 9)).unwrap().ymd(),
        (2199, 12, 18)
    );
}

#[test]
fn julian_only_leap_centuries_are_ordinary_years() {
    // 700, 900, 1100, 1300 and 1500 have a February 29 only in the Julian calendar
    let calendar = astronomical(52.5);
    for gregorian in [699, 899, 1099, 1299, 1499] {
        let year = gregorian + 700;
        let days = calendar.year_length(year).unwrap();
        assert!(days == 365 || days == 366, "{year}: {days}");
    }
}

#[test]
fn dates_before_year_one_are_rejected() {
    for longitude in LONGITUDES {
        let calendar = astronomical(longitude);
        let first = calendar.year_start(1).unwrap();
        assert_eq!(calendar.from_gregorian(first).unwrap().ymd(), (1, 1, 1));
        assert_eq!(
            calendar.from_gregorian(first.pred_opt().unwrap()).unwrap_err(),
            CalendarError::InvalidYear { year: 0 }
        );
    }
}
