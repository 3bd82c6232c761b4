use std::num::NonZeroUsize;

use crate::exact_size::ExactSizeSequence;
use crate::sequence::Sequence;

/// Yields the first upstream value, then every `stride`th value after it.
///
/// Each pull takes one value from upstream and then makes `stride - 1` more
/// pulls whose results are dropped. Those extra pulls are made even if
/// upstream has already ended partway through them.
///
/// Created by [`Sequence::step_by`] and [`Sequence::try_step_by`].
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct StepBy<S> {
    inner: S,
    stride: NonZeroUsize,
}

impl<S> StepBy<S> {
    pub(crate) fn new(inner: S, stride: NonZeroUsize) -> Self {
        tracing::trace!(stride = stride.get(), "created step_by");
        StepBy { inner, stride }
    }

    /// Number of values yielded out of `n` upstream values.
    fn strided_len(&self, n: usize) -> usize {
        match n {
            0 => 0,
            n => 1 + (n - 1) / self.stride.get(),
        }
    }
}

impl<S: Sequence> Sequence for StepBy<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let value = self.inner.next()?;
        for _ in 1..self.stride.get() {
            let _ = self.inner.next();
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            self.strided_len(lower),
            upper.map(|upper| self.strided_len(upper)),
        )
    }
}

impl<S: ExactSizeSequence> ExactSizeSequence for StepBy<S> {
    #[inline]
    fn size(&self) -> usize {
        self.strided_len(self.inner.size())
    }
}
