//! Pulling from the back of a sequence.

use std::ops::ControlFlow;

use crate::error::SeqError;
use crate::sequence::Sequence;
use crate::try_op::Try;

/// A [`Sequence`] that can also yield values from its unconsumed tail.
///
/// Front and back pulls share the same remaining values: no value is ever
/// yielded twice, and once the two ends meet both return `None`.
pub trait DoubleEndedSequence: Sequence {
    /// Pulls the last remaining value, returning `None` once the sequence has ended.
    fn next_back(&mut self) -> Option<Self::Item>;

    /// Pulls and discards `n` values from the back.
    ///
    /// # Errors
    ///
    /// * [`SeqError::Exhausted`] if the sequence ends before `n` values were pulled.
    fn advance_back_by(&mut self, n: usize) -> Result<(), SeqError> {
        for pulled in 0..n {
            if self.next_back().is_none() {
                return Err(SeqError::Exhausted {
                    requested: n,
                    shortfall: n - pulled,
                });
            }
        }
        Ok(())
    }

    /// Skips `n` values from the back and returns the one before them.
    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.advance_back_by(n).ok()?;
        self.next_back()
    }

    /// Right fold, the mirror image of [`Sequence::fold`].
    fn rfold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(x) = self.next_back() {
            acc = f(acc, x);
        }
        acc
    }

    /// Right fold that stops as soon as `f` returns a value that breaks,
    /// leaving the sequence where it stopped.
    fn try_rfold<B, F, R>(&mut self, init: B, mut f: F) -> R
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> R,
        R: Try<Output = B>,
    {
        let mut acc = init;
        while let Some(x) = self.next_back() {
            match f(acc, x).branch() {
                ControlFlow::Continue(next) => acc = next,
                ControlFlow::Break(residual) => {
                    tracing::trace!("try_rfold short-circuited");
                    return R::from_residual(residual);
                }
            }
        }
        R::from_output(acc)
    }
}

impl<S: DoubleEndedSequence + ?Sized> DoubleEndedSequence for &mut S {
    #[inline]
    fn next_back(&mut self) -> Option<S::Item> {
        (**self).next_back()
    }

    #[inline]
    fn advance_back_by(&mut self, n: usize) -> Result<(), SeqError> {
        (**self).advance_back_by(n)
    }
}

impl<S: DoubleEndedSequence + ?Sized> DoubleEndedSequence for Box<S> {
    #[inline]
    fn next_back(&mut self) -> Option<S::Item> {
        (**self).next_back()
    }

    #[inline]
    fn advance_back_by(&mut self, n: usize) -> Result<(), SeqError> {
        (**self).advance_back_by(n)
    }
}
