use derivative::Derivative;

use crate::double_ended::DoubleEndedSequence;
use crate::exact_size::ExactSizeSequence;
use crate::sequence::Sequence;
use crate::try_op::Try;

/// Applies a function to every value of the upstream sequence.
///
/// Created by [`Sequence::map`].
#[derive(Derivative, Clone)]
#[derivative(Debug(bound = "S: std::fmt::Debug"))]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Map<S, F> {
    inner: S,
    #[derivative(Debug = "ignore")]
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(inner: S, f: F) -> Self {
        Map { inner, f }
    }
}

impl<B, S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.inner.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, B) -> Acc,
    {
        let Map { inner, mut f } = self;
        inner.fold(init, move |acc, x| g(acc, f(x)))
    }

    fn try_fold<Acc, G, R>(&mut self, init: Acc, mut g: G) -> R
    where
        G: FnMut(Acc, B) -> R,
        R: Try<Output = Acc>,
    {
        let f = &mut self.f;
        self.inner.try_fold(init, move |acc, x| g(acc, f(x)))
    }
}

impl<B, S, F> DoubleEndedSequence for Map<S, F>
where
    S: DoubleEndedSequence,
    F: FnMut(S::Item) -> B,
{
    #[inline]
    fn next_back(&mut self) -> Option<B> {
        self.inner.next_back().map(&mut self.f)
    }

    fn rfold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, B) -> Acc,
    {
        let Map { inner, mut f } = self;
        inner.rfold(init, move |acc, x| g(acc, f(x)))
    }

    fn try_rfold<Acc, G, R>(&mut self, init: Acc, mut g: G) -> R
    where
        G: FnMut(Acc, B) -> R,
        R: Try<Output = Acc>,
    {
        let f = &mut self.f;
        self.inner.try_rfold(init, move |acc, x| g(acc, f(x)))
    }
}

impl<B, S, F> ExactSizeSequence for Map<S, F>
where
    S: ExactSizeSequence,
    F: FnMut(S::Item) -> B,
{
    #[inline]
    fn size(&self) -> usize {
        self.inner.size()
    }
}
