//! Cache Statistics Module
//!
//! Tracks how entries enter and leave the cache.

use serde::Serialize;

use crate::cache::ExtremaPolicy;

// == Cache Stats ==
/// Counters describing cache activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of values inserted (including emplaced values)
    pub insertions: u64,
    /// Number of entries dropped to make room for an insertion
    pub evictions: u64,
    /// Number of entries removed by an explicit pop
    pub pops: u64,
    /// Number of extremum rescans triggered by a removal
    pub recomputations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Maximum number of entries the cache retains
    pub capacity: usize,
    /// Policy applied to high/low on removal
    pub extrema_policy: ExtremaPolicy,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new(capacity: usize, extrema_policy: ExtremaPolicy) -> Self {
        Self {
            capacity,
            extrema_policy,
            ..Self::default()
        }
    }

    // == Fill Ratio ==
    /// Returns total_entries / capacity, or 0.0 for a zero capacity.
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.total_entries as f64 / self.capacity as f64
        }
    }

    // == Record Insertion ==
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Pop ==
    pub fn record_pop(&mut self) {
        self.pops += 1;
    }

    // == Record Recomputation ==
    pub fn record_recomputation(&mut self) {
        self.recomputations += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
