use crate::exact_size::ExactSizeSequence;
use crate::sequence::Sequence;

/// Yields pairs of values pulled from two sequences in lockstep.
///
/// Ends as soon as either side does. The first sequence is always pulled
/// before the second, so when the first ends the second isn't pulled at all,
/// and when the second ends the value already taken from the first is dropped.
///
/// Created by [`Sequence::zip`].
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Zip<A, B> {
    first: A,
    second: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Zip { first, second }
    }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let Some(a) = self.first.next() else {
            tracing::trace!(side = "first", "zip reached the end");
            return None;
        };
        let Some(b) = self.second.next() else {
            tracing::trace!(side = "second", "zip reached the end");
            return None;
        };
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();
        let upper = match (first_upper, second_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        (first_lower.min(second_lower), upper)
    }
}

impl<A, B> ExactSizeSequence for Zip<A, B>
where
    A: ExactSizeSequence,
    B: ExactSizeSequence,
{
    #[inline]
    fn size(&self) -> usize {
        self.first.size().min(self.second.size())
    }
}
