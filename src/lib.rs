//! # kurdish_calendar
//!
//! Conversion between the Gregorian calendar and a solar calendar whose year
//! begins at the spring equinox (Nowruz), numbered 700 years ahead of the
//! Gregorian year in which it starts.
//!
//! ```text
//! gregorian year ──compute_spring_equinox──▶ UTC instant ──(EquinoxCache)
//!        │                                         │
//!        │                    LongitudeProjector: + longitude / 15 h
//!        ▼                                         ▼
//!   NaiveDate ◀──────── CalendarArithmetic ◀── year start (Gregorian day)
//!                    (month table, leap years)
//! ```
//!
//! Two variants share the arithmetic and differ only in the first day of the
//! year:
//!
//! - [`AstronomicalCalendar`]: the Gregorian day containing the equinox at a
//!   given longitude. Leap years are the years whose starts are 366 days apart.
//! - [`SimplifiedCalendar`]: always Gregorian March 21.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use kurdish_calendar::{AstronomicalCalendar, SimplifiedCalendar};
//!
//! let calendar = AstronomicalCalendar::astronomical(44.0).unwrap();
//! let date = calendar
//!     .from_gregorian(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
//!     .unwrap();
//! assert_eq!((2725, 1, 1), date.ymd());
//!
//! let simplified = SimplifiedCalendar::simplified();
//! assert_eq!(
//!     NaiveDate::from_ymd_opt(2025, 3, 21).unwrap(),
//!     simplified.to_gregorian(2725, 1, 1).unwrap()
//! );
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `equinox` | Spring equinox series |
//! | `cache` | Process-wide equinox memo |
//! | `longitude` | Longitude offset and local equinox date |
//! | `arithmetic` | Month table and day counting over a year-start provider |
//! | `engine` | Astronomical and simplified calendars |
//! | `batch` | Parallel range conversion |
//! | `config` | Calendar construction options |
//! | `logging` | Tracing subscriber setup |

pub mod arithmetic;
pub mod batch;
pub mod cache;
pub mod config;
pub mod date;
pub mod engine;
pub mod equinox;
mod error;
pub mod logging;
pub mod longitude;
mod metrics;

pub use arithmetic::{CalendarArithmetic, YearStartProvider};
pub use cache::{clear_cache, clear_cache_year, global_cache, EquinoxCache};
pub use config::{CachePolicy, EngineConfig, DEFAULT_LONGITUDE};
pub use date::{KurdishDate, EPOCH_OFFSET};
pub use engine::{
    days_in_month, from_gregorian, is_leap_year, to_gregorian, validate, AstronomicalCalendar,
    AstronomicalYearStart, FixedYearStart, SimplifiedCalendar,
};
pub use equinox::{compute_spring_equinox, ACCURATE_YEARS};
pub use error::CalendarError;
pub use longitude::{local_instant, LocalInstant, Longitude, LongitudeProjector};
pub use metrics::CacheMetrics;
