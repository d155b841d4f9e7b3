//! Extrema Module
//!
//! Running high/low tracking and the policy applied when entries leave.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::cache::Compare;
use crate::error::CacheError;

// == Extrema Policy ==
/// What happens to the tracked extremes when an entry is removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremaPolicy {
    /// Extremes are only ever updated on insertion. Once the entry holding
    /// the record is popped or evicted, high/low may name a value that is
    /// no longer present.
    #[default]
    Historical,
    /// When a removed entry was the high or low, that extreme is re-derived
    /// by scanning the remaining entries. An emptied cache keeps its last
    /// extremes.
    Recompute,
}

impl FromStr for ExtremaPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "historical" => Ok(Self::Historical),
            "recompute" => Ok(Self::Recompute),
            other => Err(CacheError::InvalidConfig(format!(
                "unknown extrema policy '{}', expected 'historical' or 'recompute'",
                other
            ))),
        }
    }
}

impl fmt::Display for ExtremaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Historical => f.write_str("historical"),
            Self::Recompute => f.write_str("recompute"),
        }
    }
}

// == Extrema ==
/// Owned copies of the current high and low values.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrema<T> {
    pub high: T,
    pub low: T,
}

impl<T: Clone> Extrema<T> {
    // == Constructor ==
    /// Both extremes start at the first observed value.
    pub fn seed(value: &T) -> Self {
        Self {
            high: value.clone(),
            low: value.clone(),
        }
    }

    // == Observe ==
    /// Folds a newly inserted value in with a single comparison branch.
    pub fn observe<C: Compare<T>>(&mut self, value: &T, order: &C) {
        if order.less(&self.high, value) {
            self.high = value.clone();
        } else if order.less(value, &self.low) {
            self.low = value.clone();
        }
    }

    // == Scan ==
    /// Computes extremes from scratch, or None for an empty input.
    pub fn scan<'a, I, C>(values: I, order: &C) -> Option<Self>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        C: Compare<T>,
    {
        let mut values = values.into_iter();
        let mut extrema = Self::seed(values.next()?);
        for value in values {
            // Both branches must be checked; a rescan has no prior bounds
            if order.less(&extrema.high, value) {
                extrema.high = value.clone();
            }
            if order.less(value, &extrema.low) {
                extrema.low = value.clone();
            }
        }
        Some(extrema)
    }

    // == Holds Record ==
    /// Returns true if `removed` is equivalent to either tracked extreme.
    pub fn holds_record<C: Compare<T>>(&self, removed: &T, order: &C) -> bool {
        order.equivalent(removed, &self.high) || order.equivalent(removed, &self.low)
    }
}
