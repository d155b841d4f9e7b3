//! Cache Module
//!
//! Provides a bounded, insertion-ordered cache with running extremum tracking.

mod cursor;
mod extrema;
mod ordering;
mod sequence;
mod stats;
mod store;


// Re-export public types
pub use cursor::{positions_eq, positions_ne, Iter, Position};
pub(crate) use extrema::Extrema;
pub use extrema::ExtremaPolicy;
pub use ordering::{Compare, NaturalOrder, ReverseOrder};
pub use stats::CacheStats;
pub use store::{print, BoundedOrderedCache};
