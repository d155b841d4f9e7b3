//! Cursor Module
//!
//! Read-only iteration over cache entries, newest to oldest.

use std::fmt;
use std::iter::FusedIterator;

use crate::cache::sequence::Sequence;

// == Position ==
/// A read-only position in a cache, from `begin()` up to `end()`.
///
/// Equality compares the *values* at two positions, not where they are:
/// two different positions holding equal values are equal. Past-the-end
/// positions equal each other and nothing else.
pub struct Position<'a, T> {
    sequence: &'a Sequence<T>,
    slot: Option<usize>,
}

impl<'a, T> Position<'a, T> {
    pub(crate) fn begin(sequence: &'a Sequence<T>) -> Self {
        Self {
            sequence,
            slot: sequence.head(),
        }
    }

    pub(crate) fn end(sequence: &'a Sequence<T>) -> Self {
        Self {
            sequence,
            slot: None,
        }
    }

    // == Get ==
    /// Value at this position, or None past the end.
    pub fn get(&self) -> Option<&'a T> {
        self.sequence.get(self.slot?)
    }

    // == Is End ==
    pub fn is_end(&self) -> bool {
        self.slot.is_none()
    }

    // == Advance ==
    /// Moves one entry towards the oldest. Advancing past the end stays there.
    pub fn advance(&mut self) {
        if let Some(slot) = self.slot {
            self.slot = self.sequence.next_of(slot);
        }
    }
}

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

impl<T: PartialEq> PartialEq for Position<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        positions_eq(self, other)
    }
}

impl<T: fmt::Debug> fmt::Debug for Position<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Position").field(value).finish(),
            None => f.write_str("Position(end)"),
        }
    }
}

// == Position Equality ==
/// True if both positions hold equal values, or both are past the end.
pub fn positions_eq<T: PartialEq>(left: &Position<'_, T>, right: &Position<'_, T>) -> bool {
    match (left.get(), right.get()) {
        (Some(l), Some(r)) => l == r,
        (None, None) => true,
        _ => false,
    }
}

/// Negation of [`positions_eq`].
pub fn positions_ne<T: PartialEq>(left: &Position<'_, T>, right: &Position<'_, T>) -> bool {
    !positions_eq(left, right)
}

// == Iter ==
/// Iterator over cache values from newest to oldest.
pub struct Iter<'a, T> {
    position: Position<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(sequence: &'a Sequence<T>) -> Self {
        Self {
            position: Position::begin(sequence),
            remaining: sequence.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.position.get()?;
        self.position.advance();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            position: self.position,
            remaining: self.remaining,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sequence_of(values: &[i32]) -> Sequence<i32> {
        let mut seq = Sequence::with_capacity(values.len());
        for &v in values {
            seq.push_front(v);
        }
        seq
    }

    #[test]
    fn test_iter_newest_first() {
        let seq = sequence_of(&[1, 2, 3]);
        let values: Vec<_> = Iter::new(&seq).copied().collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn test_iter_exact_size() {
        let seq = sequence_of(&[1, 2, 3]);
        let mut iter = Iter::new(&seq);
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_iter_restartable() {
        let seq = sequence_of(&[4, 5]);
        let first: Vec<_> = Iter::new(&seq).collect();
        let second: Vec<_> = Iter::new(&seq).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_position_walks_to_end() {
        let seq = sequence_of(&[7, 8]);
        let mut pos = Position::begin(&seq);
        assert_eq!(pos.get(), Some(&8));
        pos.advance();
        assert_eq!(pos.get(), Some(&7));
        pos.advance();
        assert!(pos.is_end());
        assert_eq!(pos, Position::end(&seq));

        // Advancing past the end is a no-op
        pos.advance();
        assert!(pos.is_end());
    }

    #[test]
    fn test_position_equality_is_by_value() {
        let seq = sequence_of(&[5, 9, 5]);
        let first = Position::begin(&seq);
        let mut third = first;
        third.advance();
        third.advance();

        // Different positions, equal values
        assert!(positions_eq(&first, &third));
        assert_eq!(first, third);

        let mut second = first;
        second.advance();
        assert!(positions_ne(&first, &second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_position_end_never_equals_value() {
        let seq = sequence_of(&[1]);
        let begin = Position::begin(&seq);
        let end = Position::end(&seq);
        assert!(positions_ne(&begin, &end));
        assert!(positions_eq(&end, &Position::end(&seq)));
    }

    #[test]
    fn test_position_debug() {
        let seq = sequence_of(&[3]);
        assert_eq!(format!("{:?}", Position::begin(&seq)), "Position(3)");
        assert_eq!(format!("{:?}", Position::end(&seq)), "Position(end)");
    }
}
