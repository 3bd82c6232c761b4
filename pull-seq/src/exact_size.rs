//! Sequences that know exactly how many values they have left.

use crate::sequence::Sequence;

/// A [`Sequence`] whose [`Sequence::size_hint`] is exact.
///
/// Only implemented where the remaining length is known without pulling, a
/// [`crate::Filter`] for example can never be one.
pub trait ExactSizeSequence: Sequence {
    /// Returns the exact number of values left.
    #[inline]
    fn size(&self) -> usize {
        let (lower, upper) = self.size_hint();
        debug_assert_eq!(upper, Some(lower), "inexact size_hint on an ExactSizeSequence");
        lower
    }

    /// Returns `true` if there are no values left.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<S: ExactSizeSequence + ?Sized> ExactSizeSequence for &mut S {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<S: ExactSizeSequence + ?Sized> ExactSizeSequence for Box<S> {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DoubleEndedSequence;
    use crate::source::from_ref;

    #[test]
    fn size_tracks_pulls_from_both_ends() {
        let xs = [1, 2, 3, 4];
        let mut seq = from_ref(&xs);
        assert_eq!(seq.size(), 4);
        seq.next();
        seq.next_back();
        assert_eq!(seq.size(), 2);
        assert!(!seq.is_empty());
        seq.next();
        seq.next();
        assert!(seq.is_empty());
        seq.next();
        assert_eq!(seq.size(), 0);
    }

    #[test]
    fn borrowed_size() {
        let xs = [1, 2, 3];
        let mut seq = from_ref(&xs);
        let borrowed = seq.by_ref();
        assert_eq!(borrowed.size(), 3);
    }
}
