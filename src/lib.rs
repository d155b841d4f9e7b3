//! Extrema Cache - A fixed-capacity cache that remembers its extremes
//!
//! Retains the last `N` inserted values, evicting the oldest when full, and
//! tracks the running high and low under a pluggable ordering.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{print, BoundedOrderedCache, CacheStats, Compare, ExtremaPolicy, NaturalOrder};
pub use config::Config;
pub use error::{CacheError, Result};
