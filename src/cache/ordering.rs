//! Ordering Module
//!
//! Pluggable strict-weak-order predicates used for extremum tracking.

// == Compare Trait ==
/// A strict weak ordering over `T`.
///
/// `less(a, b)` must be irreflexive and asymmetric, and incomparability must
/// be transitive. Violating this does not panic, but the tracked high and low
/// values become meaningless.
///
/// Any `Fn(&T, &T) -> bool` closure is a `Compare<T>`:
///
/// ```
/// use extrema_cache::BoundedOrderedCache;
///
/// let by_len = |a: &String, b: &String| a.len() < b.len();
/// let mut cache: BoundedOrderedCache<String, 4, _> = BoundedOrderedCache::with_order(by_len);
/// cache.insert("ccc".to_string());
/// cache.insert("a".to_string());
/// assert_eq!(cache.high().map(String::as_str), Some("ccc"));
/// assert_eq!(cache.low().map(String::as_str), Some("a"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns true if neither value orders before the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

// == Natural Order ==
/// Orders values with their own `<`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for NaturalOrder {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

// == Reverse Order ==
/// Orders values with their own `>`, swapping what counts as high and low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for ReverseOrder {
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}
