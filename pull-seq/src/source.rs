//! Ways to start a sequence.
//!
//! [`from_ref`] and [`from_owned`] turn a collection into a [`Source`]. Which
//! capabilities the result has is decided by the collection's own iterator: a
//! [`Source`] is a [`DoubleEndedSequence`] only if that iterator can be walked
//! from the back, and an [`ExactSizeSequence`] only if it knows its length.

use std::iter::{Empty, FromFn, Fuse};
use std::ops::ControlFlow;

use crate::double_ended::DoubleEndedSequence;
use crate::exact_size::ExactSizeSequence;
use crate::sequence::Sequence;
use crate::try_op::Try;

mod range;

pub use range::{Range, RangeValue, range, range_by, range_to};

/// Borrows `collection` and yields references to its elements.
///
/// The collection must outlive the returned sequence, which the borrow checker enforces.
///
/// ```
/// use pull_seq::{Sequence, from_ref};
///
/// let xs = vec![1, 2, 3];
/// let total = from_ref(&xs).fold(0, |acc, x| acc + x);
/// assert_eq!(total, 6);
/// assert_eq!(xs.len(), 3);
/// ```
pub fn from_ref<'a, C>(collection: &'a C) -> Source<<&'a C as IntoIterator>::IntoIter>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    Source::new(collection.into_iter())
}

/// Takes ownership of `collection` and yields its elements by value.
///
/// ```
/// use pull_seq::{DoubleEndedSequence, Sequence, from_owned};
///
/// let mut names = from_owned(vec![String::from("a"), String::from("b")]);
/// assert_eq!(names.next_back().as_deref(), Some("b"));
/// ```
pub fn from_owned<C: IntoIterator>(collection: C) -> Source<C::IntoIter> {
    Source::new(collection.into_iter())
}

/// Wraps a [`std::iter::Iterator`].
pub fn from_iter<I: Iterator>(iter: I) -> Source<I> {
    Source::new(iter)
}

/// A sequence that calls `f` for every value, ending the first time it returns `None`.
///
/// Only pulls from the front, it is neither double ended nor exact size.
pub fn from_fn<T, F>(f: F) -> Source<FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    Source::new(std::iter::from_fn(f))
}

/// A sequence that yields nothing.
pub fn empty<T>() -> Source<Empty<T>> {
    Source::new(std::iter::empty())
}

/// A sequence over the elements of a collection, see [`from_ref`] and [`from_owned`].
///
/// The inner iterator is fused, so the sequence keeps reporting its end even
/// if the collection's iterator wouldn't.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Source<I> {
    inner: Fuse<I>,
}

impl<I: Iterator> Source<I> {
    fn new(inner: I) -> Self {
        Source {
            inner: inner.fuse(),
        }
    }
}

impl<I: Iterator> Sequence for Source<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.inner.nth(n)
    }

    #[inline]
    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.inner.fold(init, f)
    }

    fn try_fold<B, F, R>(&mut self, init: B, mut f: F) -> R
    where
        F: FnMut(B, I::Item) -> R,
        R: Try<Output = B>,
    {
        match self.inner.try_fold(init, |acc, x| f(acc, x).branch()) {
            ControlFlow::Continue(acc) => R::from_output(acc),
            ControlFlow::Break(residual) => {
                tracing::trace!("try_fold short-circuited");
                R::from_residual(residual)
            }
        }
    }
}

impl<I: DoubleEndedIterator> DoubleEndedSequence for Source<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.inner.next_back()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<I::Item> {
        self.inner.nth_back(n)
    }

    #[inline]
    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.inner.rfold(init, f)
    }

    fn try_rfold<B, F, R>(&mut self, init: B, mut f: F) -> R
    where
        F: FnMut(B, I::Item) -> R,
        R: Try<Output = B>,
    {
        match self.inner.try_rfold(init, |acc, x| f(acc, x).branch()) {
            ControlFlow::Continue(acc) => R::from_output(acc),
            ControlFlow::Break(residual) => {
                tracing::trace!("try_rfold short-circuited");
                R::from_residual(residual)
            }
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeSequence for Source<I> {
    #[inline]
    fn size(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet, LinkedList};

    use pull_ore::{assert_exhausted, assert_none};

    use super::*;

    fn assert_double_ended<S: DoubleEndedSequence>(_: &S) {}
    fn assert_exact_size<S: ExactSizeSequence>(_: &S) {}

    #[test]
    fn construct_from_array_ref() {
        let xs: [u32; 6] = [1, 2, 3, 4, 5, 6];
        let mut seq = from_ref(&xs);
        for expected in &xs {
            assert_eq!(seq.next(), Some(expected));
        }
        assert_exhausted!(seq);
    }

    #[test]
    fn construct_from_owned_array() {
        let mut seq = from_owned([1u32, 2, 3, 4, 5, 6]);
        for expected in 1..=6 {
            assert_eq!(seq.next(), Some(expected));
        }
        assert_exhausted!(seq);
    }

    #[test]
    fn owned_source_outlives_its_collection_binding() {
        let seq = {
            let words = vec![String::from("left"), String::from("right")];
            from_owned(words)
        };
        assert_eq!(seq.collect::<Vec<_>>(), vec!["left", "right"]);
    }

    #[test]
    fn capabilities_follow_the_collection() {
        let list: LinkedList<u8> = [1, 2, 3].into_iter().collect();
        let seq = from_ref(&list);
        assert_double_ended(&seq);
        assert_exact_size(&seq);

        let set: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
        let mut seq = from_owned(set);
        assert_double_ended(&seq);
        assert_eq!(seq.next_back(), Some(3));
        assert_eq!(seq.size(), 2);

        // Hash sets know their length but can't be walked backwards.
        let set: HashSet<u8> = [1, 2, 3].into_iter().collect();
        let seq = from_ref(&set);
        assert_exact_size(&seq);
        assert_eq!(seq.count(), 3);
    }

    #[test]
    fn from_fn_is_fused() {
        let mut calls = 0;
        let mut seq = from_fn(|| {
            calls += 1;
            // Would "resurrect" after the first `None` if it weren't fused.
            (calls != 3).then_some(calls)
        });
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(2));
        assert_exhausted!(seq);
        assert_eq!(seq.size_hint(), (0, Some(0)));
    }

    #[test]
    fn empty_source() {
        let mut seq = empty::<String>();
        assert_none!(seq.next());
        assert_none!(seq.next_back());
        assert!(seq.is_empty());
    }

    #[test]
    fn source_folds_delegate() {
        let xs = [3, 4, 5];
        assert_eq!(from_ref(&xs).fold(0, |acc, x| acc * 10 + x), 345);
        assert_eq!(from_ref(&xs).rfold(0, |acc, x| acc * 10 + x), 543);
        assert_eq!(from_iter(xs.iter().copied()).last(), Some(5));
    }
}
