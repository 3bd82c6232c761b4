//! Bridge from a [`Sequence`] to a [`std::iter::Iterator`].

use crate::double_ended::DoubleEndedSequence;
use crate::exact_size::ExactSizeSequence;
use crate::sequence::Sequence;

/// A [`Sequence`] wrapped up as a [`std::iter::Iterator`].
///
/// Created by [`Sequence::into_std`]. Capabilities carry over: the iterator is
/// double ended or exact size only when the sequence is.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoStd<S> {
    inner: S,
}

impl<S> IntoStd<S> {
    pub(crate) fn new(inner: S) -> Self {
        IntoStd { inner }
    }
}

impl<S: Sequence> Iterator for IntoStd<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.count()
    }

    #[inline]
    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, S::Item) -> B,
    {
        self.inner.fold(init, f)
    }
}

impl<S: DoubleEndedSequence> DoubleEndedIterator for IntoStd<S> {
    #[inline]
    fn next_back(&mut self) -> Option<S::Item> {
        self.inner.next_back()
    }

    #[inline]
    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, S::Item) -> B,
    {
        self.inner.rfold(init, f)
    }
}

impl<S: ExactSizeSequence> ExactSizeIterator for IntoStd<S> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.size()
    }
}

#[cfg(test)]
mod tests {
    use crate::Sequence;
    use crate::source::{from_owned, range_to};

    #[test]
    fn smoketest_into_std() {
        let evens: Vec<u32> = range_to(0u32, 10)
            .filter(|x| x % 2 == 0)
            .into_std()
            .skip(1)
            .collect();
        assert_eq!(evens, vec![2, 4, 6, 8]);
    }

    #[test]
    fn capabilities_carry_over() {
        let mut iter = from_owned(vec![1, 2, 3, 4]).map(|x| x * 10).into_std();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(40));
        assert_eq!(iter.rev().collect::<Vec<_>>(), vec![30, 20, 10]);
    }

    #[test]
    fn usable_in_for_loops() {
        let mut seen = Vec::new();
        for (i, c) in range_to(0usize, 3).zip(from_owned("abc".chars())).into_std() {
            seen.push(format!("{i}{c}"));
        }
        assert_eq!(seen, vec!["0a", "1b", "2c"]);
    }
}
