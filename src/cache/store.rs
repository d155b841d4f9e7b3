//! Cache Store Module
//!
//! Fixed-capacity insertion-ordered cache with running high/low tracking.

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::cache::cursor::{Iter, Position};
use crate::cache::sequence::Sequence;
use crate::cache::{CacheStats, Compare, Extrema, ExtremaPolicy, NaturalOrder};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Bounded Ordered Cache ==
/// Retains the last `N` inserted values, newest first, and tracks the
/// highest and lowest of them under the ordering `C`.
///
/// Inserting into a full cache silently evicts the oldest entry. High and
/// low are owned copies updated on every insertion. What happens to them
/// when an entry leaves is governed by [`ExtremaPolicy`]; with the default
/// [`ExtremaPolicy::Historical`] they may outlive the entries they came from.
///
/// The cache has no internal locking. Wrap it in a `Mutex` to share it.
///
/// # Example
/// ```
/// use extrema_cache::BoundedOrderedCache;
///
/// let mut cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();
/// cache.insert(5);
/// cache.insert(3);
/// cache.insert(8);
/// cache.insert(1); // evicts 5
///
/// assert_eq!(cache.iter().copied().collect::<Vec<_>>(), vec![1, 8, 3]);
/// assert_eq!(cache.get_low(), 1);
/// ```
///
/// A zero capacity does not compile:
///
/// ```compile_fail
/// use extrema_cache::BoundedOrderedCache;
///
/// let cache: BoundedOrderedCache<i32, 0> = BoundedOrderedCache::new();
/// ```
pub struct BoundedOrderedCache<T, const N: usize, C = NaturalOrder> {
    /// Owned entries, front = newest
    sequence: Sequence<T>,
    /// Unset until the first insertion
    extrema: Option<Extrema<T>>,
    /// Strict weak ordering used for high/low
    order: C,
    /// Behaviour of high/low on removal
    policy: ExtremaPolicy,
    /// Activity counters
    stats: CacheStats,
}

impl<T, const N: usize, C: Default> BoundedOrderedCache<T, N, C> {
    // == Constructors ==
    /// Creates an empty cache with a default-constructed ordering.
    pub fn new() -> Self {
        Self::with_order_and_policy(C::default(), ExtremaPolicy::default())
    }

    /// Creates an empty cache using `policy` for removals.
    pub fn with_policy(policy: ExtremaPolicy) -> Self {
        Self::with_order_and_policy(C::default(), policy)
    }

    /// Creates an empty cache configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_policy(config.extrema_policy)
    }
}

impl<T, const N: usize, C> BoundedOrderedCache<T, N, C> {
    /// Creates an empty cache ordered by `order`.
    pub fn with_order(order: C) -> Self {
        Self::with_order_and_policy(order, ExtremaPolicy::default())
    }

    /// Creates an empty cache ordered by `order`, using `policy` for removals.
    pub fn with_order_and_policy(order: C, policy: ExtremaPolicy) -> Self {
        const { assert!(N > 0, "BoundedOrderedCache capacity must be greater than zero") };

        Self {
            sequence: Sequence::with_capacity(N),
            extrema: None,
            order,
            policy,
            stats: CacheStats::new(N, policy),
        }
    }

    // == Size ==
    /// Returns the number of entries currently held, always in `0..=N`.
    pub fn size(&self) -> usize {
        self.sequence.len()
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_full(&self) -> bool {
        self.sequence.len() == N
    }

    pub fn policy(&self) -> ExtremaPolicy {
        self.policy
    }

    pub fn order(&self) -> &C {
        &self.order
    }

    // == Extremes ==
    /// Tracked maximum, or None before the first insertion.
    pub fn high(&self) -> Option<&T> {
        self.extrema.as_ref().map(|e| &e.high)
    }

    /// Tracked minimum, or None before the first insertion.
    pub fn low(&self) -> Option<&T> {
        self.extrema.as_ref().map(|e| &e.low)
    }

    // == Iteration ==
    /// Iterates values from newest to oldest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.sequence)
    }

    /// Position of the newest entry (equals `end()` when empty).
    pub fn begin(&self) -> Position<'_, T> {
        Position::begin(&self.sequence)
    }

    /// Past-the-end position.
    pub fn end(&self) -> Position<'_, T> {
        Position::end(&self.sequence)
    }

    /// Oldest entry, the next one to be evicted.
    pub fn oldest(&self) -> Option<&T> {
        self.sequence.back()
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.sequence.len());
        stats
    }

    // == Clear ==
    /// Drops every entry and unsets the extremes. Counters are kept.
    pub fn clear(&mut self) {
        self.sequence.clear();
        self.extrema = None;
        self.stats.set_total_entries(0);
    }
}

impl<T: Clone, const N: usize, C: Compare<T>> BoundedOrderedCache<T, N, C> {
    // == Insert ==
    /// Stores `value` as the newest entry, evicting the oldest if full.
    pub fn insert(&mut self, value: T) {
        if self.sequence.len() == N && self.remove_oldest().is_some() {
            self.stats.record_eviction();
            debug!(capacity = N, "evicted oldest entry to make room");
        }

        if self.sequence.is_empty() {
            self.extrema = Some(Extrema::seed(&value));
        } else if let Some(extrema) = self.extrema.as_mut() {
            extrema.observe(&value, &self.order);
        }

        self.sequence.push_front(value);
        self.stats.record_insertion();
        self.stats.set_total_entries(self.sequence.len());
        trace!(len = self.sequence.len(), "inserted entry");
    }

    /// Same as [`insert`](Self::insert) for a borrowed value.
    pub fn insert_ref(&mut self, value: &T) {
        self.insert(value.clone());
    }

    // == Emplace ==
    /// Builds a `T` from `args` and inserts it.
    pub fn emplace<A>(&mut self, args: A)
    where
        T: From<A>,
    {
        self.insert(T::from(args));
    }

    // == Pop ==
    /// Removes and returns the oldest entry.
    ///
    /// Fails with [`CacheError::EmptyContainer`] and leaves the cache
    /// untouched if there is nothing to remove.
    pub fn pop(&mut self) -> Result<T> {
        let value = self.remove_oldest().ok_or(CacheError::EmptyContainer)?;
        self.stats.record_pop();
        self.stats.set_total_entries(self.sequence.len());
        Ok(value)
    }

    // Shared by pop and eviction; applies the extrema policy.
    fn remove_oldest(&mut self) -> Option<T> {
        let removed = self.sequence.pop_back()?;

        if self.policy == ExtremaPolicy::Recompute && !self.sequence.is_empty() {
            let holds_record = self
                .extrema
                .as_ref()
                .is_some_and(|e| e.holds_record(&removed, &self.order));
            if holds_record {
                self.extrema = Extrema::scan(self.sequence.values(), &self.order);
                self.stats.record_recomputation();
                debug!(remaining = self.sequence.len(), "recomputed extremes after removal");
            }
        }

        Some(removed)
    }
}

impl<T: Clone + Default, const N: usize, C> BoundedOrderedCache<T, N, C> {
    // == Get High / Low ==
    /// Copy of the tracked maximum; `T::default()` if nothing was ever inserted.
    pub fn get_high(&self) -> T {
        self.high().cloned().unwrap_or_default()
    }

    /// Copy of the tracked minimum; `T::default()` if nothing was ever inserted.
    pub fn get_low(&self) -> T {
        self.low().cloned().unwrap_or_default()
    }
}

impl<T, const N: usize, C: Default> Default for BoundedOrderedCache<T, N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, const N: usize, C> IntoIterator for &'a BoundedOrderedCache<T, N, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, const N: usize, C> fmt::Debug for BoundedOrderedCache<T, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedOrderedCache")
            .field("capacity", &N)
            .field("entries", &DebugEntries(self))
            .field("high", &self.high())
            .field("low", &self.low())
            .field("policy", &self.policy)
            .finish()
    }
}

struct DebugEntries<'a, T, const N: usize, C>(&'a BoundedOrderedCache<T, N, C>);

impl<T: fmt::Debug, const N: usize, C> fmt::Debug for DebugEntries<'_, T, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// == Display ==
/// Values newest to oldest, separated by single spaces.
impl<T: fmt::Display, const N: usize, C> fmt::Display for BoundedOrderedCache<T, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
        }
        for value in values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

// == Print ==
/// Writes the cache's values to `sink`, newest to oldest, space-separated.
pub fn print<T, const N: usize, C, W>(
    cache: &BoundedOrderedCache<T, N, C>,
    sink: &mut W,
) -> io::Result<()>
where
    T: fmt::Display,
    W: Write,
{
    write!(sink, "{}", cache)
}
