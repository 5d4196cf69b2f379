//! Counters for the equinox cache.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Hit/miss counters and cumulative equinox calculation time.
///
/// All counters are relaxed atomics; they are statistics, not synchronization.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    calculation_time: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_calculation(&self, duration: Duration) {
        self.calculation_time
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Total time spent computing equinoxes on cache misses.
    pub fn calculation_time(&self) -> Duration {
        Duration::from_micros(self.calculation_time.load(Ordering::Relaxed))
    }

    /// Fraction of lookups served from the cache, `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }

    pub fn reset(&self) {
        self.calculation_time.store(0, Ordering::Relaxed);
        self.cache_hits.store(0, Ordering::Relaxed);
        self.cache_misses.store(0, Ordering::Relaxed);
    }

    pub fn report(&self) -> String {
        format!(
            "Equinox Cache Metrics:\n\
             Calculation Time: {}µs\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%",
            self.calculation_time().as_micros(),
            self.hits(),
            self.misses(),
            self.hit_rate() * 100.0
        )
    }
}
