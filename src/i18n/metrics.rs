//! Translation metrics.
//!
//! Counts lookups and loads for one `TranslationStore`. Counters are atomic
//! so lookups can record through `&self`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-store translation counters.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of string tokens found in the active table
    lookup_hits: AtomicUsize,

    /// Number of string tokens passed through untranslated
    lookup_misses: AtomicUsize,

    /// Number of successful table loads
    loads: AtomicUsize,

    /// Number of loads that kept the previous table
    load_failures: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key found in the table.
    pub fn record_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key passed through literally.
    pub fn record_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful load.
    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed load.
    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookup_hits(&self) -> usize {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    pub fn lookup_misses(&self) -> usize {
        self.lookup_misses.load(Ordering::Relaxed)
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn load_failures(&self) -> usize {
        self.load_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.lookup_hits();
        let misses = self.lookup_misses();
        let total_lookups = hits + misses;
        let hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookup_hits: hits,
            lookup_misses: misses,
            hit_rate,
            loads: self.loads(),
            load_failures: self.load_failures(),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lookup_hits.store(0, Ordering::Relaxed);
        self.lookup_misses.store(0, Ordering::Relaxed);
        self.loads.store(0, Ordering::Relaxed);
        self.load_failures.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of a store's translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of keys found in the table
    pub lookup_hits: usize,

    /// Number of keys passed through
    pub lookup_misses: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,

    /// Number of successful loads
    pub loads: usize,

    /// Number of failed loads
    pub load_failures: usize,
}
