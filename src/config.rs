//! Configuration for building an astronomical calendar.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::cache::{global_cache, EquinoxCache};
use crate::engine::AstronomicalCalendar;
use crate::error::CalendarError;

/// Reference meridian, 52.5° east (UTC+3:30).
pub const DEFAULT_LONGITUDE: f64 = 52.5;

/// Which equinox cache a calendar uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// The process-wide cache, cleared with [`crate::clear_cache`].
    #[default]
    Shared,
    /// A private, unbounded cache.
    Private,
    /// A private cache keeping at most this many years.
    Bounded(NonZeroUsize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Observer longitude in degrees east.
    pub longitude: f64,
    pub cache: CachePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            longitude: DEFAULT_LONGITUDE,
            cache: CachePolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn new(longitude: f64) -> Self {
        Self {
            longitude,
            ..Self::default()
        }
    }

    pub fn with_cache(mut self, cache: CachePolicy) -> Self {
        self.cache = cache;
        self
    }

    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidLongitude`] for a non-finite longitude.
    pub fn build(&self) -> Result<AstronomicalCalendar, CalendarError> {
        let cache = match self.cache {
            CachePolicy::Shared => global_cache(),
            CachePolicy::Private => Arc::new(EquinoxCache::new()),
            CachePolicy::Bounded(capacity) => Arc::new(EquinoxCache::with_capacity(capacity)),
        };
        AstronomicalCalendar::with_cache(self.longitude, cache)
    }
}
