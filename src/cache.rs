//! Memo table of spring equinox instants keyed by Gregorian year.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, info, trace};

use crate::equinox::compute_spring_equinox;
use crate::error::CalendarError;
use crate::metrics::CacheMetrics;

lazy_static! {
    // Process-wide cache shared by every calendar that does not bring its own.
    static ref GLOBAL_CACHE: Arc<EquinoxCache> = Arc::new(EquinoxCache::new());
}

/// Returns a handle to the process-wide equinox cache.
pub fn global_cache() -> Arc<EquinoxCache> {
    Arc::clone(&GLOBAL_CACHE)
}

/// Empties the process-wide equinox cache.
pub fn clear_cache() {
    GLOBAL_CACHE.clear_all();
}

/// Drops one Gregorian year from the process-wide equinox cache.
pub fn clear_cache_year(year: i32) {
    GLOBAL_CACHE.clear_year(year);
}

/// Thread-safe memo of [`compute_spring_equinox`].
///
/// The cached value for a year is a pure function of the year, so the cache
/// only ever changes latency: clearing it, or evicting from a bounded one,
/// never changes a conversion. Lookup, computation on a miss and insertion
/// all happen under one lock, so concurrent misses for the same year compute
/// it once.
pub struct EquinoxCache {
    entries: Mutex<LruCache<i32, DateTime<Utc>>>,
    metrics: Arc<CacheMetrics>,
}

impl Default for EquinoxCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EquinoxCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EquinoxCache")
            .field("len", &self.len())
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl EquinoxCache {
    /// Creates an unbounded cache.
    pub fn new() -> Self {
        Self::from_entries(LruCache::unbounded())
    }

    /// Creates a cache holding at most `capacity` years, evicting the least
    /// recently used year first.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::from_entries(LruCache::new(capacity))
    }

    fn from_entries(entries: LruCache<i32, DateTime<Utc>>) -> Self {
        Self {
            entries: Mutex::new(entries),
            metrics: Arc::new(CacheMetrics::new()),
        }
    }

    /// Returns the equinox of `year`, computing and storing it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates [`CalendarError::OutOfRange`] from the computation; failed
    /// years are not stored.
    pub fn get_or_compute(&self, year: i32) -> Result<DateTime<Utc>, CalendarError> {
        let mut entries = self.entries.lock();
        if let Some(&instant) = entries.get(&year) {
            self.metrics.record_cache_hit();
            trace!(target: "equinox_cache", year, "cache hit");
            return Ok(instant);
        }
        self.metrics.record_cache_miss();

        let start = Instant::now();
        let instant = compute_spring_equinox(year)?;
        self.metrics.record_calculation(start.elapsed());

        entries.put(year, instant);
        debug!(target: "equinox_cache", year, %instant, "cache miss, stored equinox");
        Ok(instant)
    }

    pub fn clear_all(&self) {
        let mut entries = self.entries.lock();
        let dropped = entries.len();
        entries.clear();
        info!(target: "equinox_cache", dropped, "cleared equinox cache");
    }

    /// Drops `year` from the cache, returning whether it was present.
    pub fn clear_year(&self, year: i32) -> bool {
        let removed = self.entries.lock().pop(&year).is_some();
        debug!(target: "equinox_cache", year, removed, "cleared cached year");
        removed
    }

    /// Whether `year` is cached, without touching its recency.
    pub fn contains(&self, year: i32) -> bool {
        self.entries.lock().contains(&year)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_hit() {
        let cache = EquinoxCache::new();
        let first = cache.get_or_compute(2024).unwrap();
        let second = cache.get_or_compute(2024).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.metrics().misses(), 1);
        assert_eq!(cache.metrics().hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cached_value_matches_direct_computation() {
        let cache = EquinoxCache::new();
        assert_eq!(
            cache.get_or_compute(1999).unwrap(),
            compute_spring_equinox(1999).unwrap()
        );
    }

    #[test]
    fn clear_year_only_drops_that_year() {
        let cache = EquinoxCache::new();
        cache.get_or_compute(2020).unwrap();
        cache.get_or_compute(2021).unwrap();
        assert!(cache.clear_year(2020));
        assert!(!cache.clear_year(2020));
        assert!(!cache.contains(2020));
        assert!(cache.contains(2021));
    }

    #[test]
    fn clear_all_keeps_values_stable() {
        let cache = EquinoxCache::new();
        let before = cache.get_or_compute(2030).unwrap();
        cache.get_or_compute(2031).unwrap();
        cache.clear_all();
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_compute(2030).unwrap(), before);
        assert_eq!(cache.metrics().misses(), 3);
    }

    #[test]
    fn bounded_cache_evicts_least_recently_used() {
        let cache = EquinoxCache::with_capacity(NonZeroUsize::new(2).unwrap());
        cache.get_or_compute(2000).unwrap();
        cache.get_or_compute(2001).unwrap();
        cache.get_or_compute(2000).unwrap();
        cache.get_or_compute(2002).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(2000));
        assert!(!cache.contains(2001));
        assert!(cache.contains(2002));
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = EquinoxCache::new();
        assert!(cache.get_or_compute(i32::MAX).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EquinoxCache>();
    }
}
