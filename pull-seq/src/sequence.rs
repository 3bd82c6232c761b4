//! The pull protocol.
//!
//! A [`Sequence`] has exactly one required method, [`Sequence::next`]. Every
//! other operation has a default written in terms of it, which adapters
//! override whenever they can hand the work to their upstream instead.

use std::num::NonZeroUsize;
use std::ops::ControlFlow;

use crate::adapters::{Chain, Filter, Map, StepBy, Zip};
use crate::collect::FromSequence;
use crate::error::SeqError;
use crate::std_iter::IntoStd;
use crate::try_op::Try;

/// A lazy, single pass source of values that are pulled one at a time.
///
/// Once [`Sequence::next`] has returned `None` it must keep returning `None`,
/// every source and adapter in this crate upholds that.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub trait Sequence {
    /// The type of the values yielded by this sequence.
    type Item;

    /// Pulls the next value, returning `None` once the sequence has ended.
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns bounds on the number of values left in this sequence.
    ///
    /// The first half of the tuple is a lower bound and the second half is an
    /// upper bound, with `None` meaning unknown or larger than a `usize`. The
    /// default of `(0, None)` is correct for any sequence.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Consumes the sequence, returning the number of values that were left.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |count, _| count + 1)
    }

    /// Consumes the sequence, returning the final value.
    #[inline]
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.fold(None, |_, x| Some(x))
    }

    /// Pulls and discards `n` values.
    ///
    /// # Errors
    ///
    /// * [`SeqError::Exhausted`] if the sequence ends before `n` values were
    ///   pulled, carrying how many were missing.
    fn advance_by(&mut self, n: usize) -> Result<(), SeqError> {
        for pulled in 0..n {
            if self.next().is_none() {
                return Err(SeqError::Exhausted {
                    requested: n,
                    shortfall: n - pulled,
                });
            }
        }
        Ok(())
    }

    /// Skips `n` values and returns the one after them.
    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.advance_by(n).ok()?;
        self.next()
    }

    /// Left fold, calling `f(accumulator, value)` for every remaining value.
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x);
        }
        acc
    }

    /// Left fold that stops as soon as `f` returns a value that breaks.
    ///
    /// The breaking value is returned as is. Nothing is rewound, the next call
    /// to [`Sequence::next`] yields the value after the one that stopped the
    /// fold.
    fn try_fold<B, F, R>(&mut self, init: B, mut f: F) -> R
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> R,
        R: Try<Output = B>,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            match f(acc, x).branch() {
                ControlFlow::Continue(next) => acc = next,
                ControlFlow::Break(residual) => {
                    tracing::trace!("try_fold short-circuited");
                    return R::from_residual(residual);
                }
            }
        }
        R::from_output(acc)
    }

    /// Calls `f` on every remaining value.
    #[inline]
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), move |(), x| f(x));
    }

    /// Drains the sequence into a new collection, preserving yield order.
    #[inline]
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: FromSequence<Self::Item>,
    {
        C::from_seq(self)
    }

    /// Lazily transforms every value with `f`.
    #[inline]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Lazily keeps only the values for which `predicate` returns `true`.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields the first value, then every `stride`th value after it.
    ///
    /// # Panics
    ///
    /// * If `stride` is 0, see [`Sequence::try_step_by`] for a non-panicking version.
    fn step_by(self, stride: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        match self.try_step_by(stride) {
            Ok(step_by) => step_by,
            Err(err) => panic!("invalid step_by: {err}"),
        }
    }

    /// Yields the first value, then every `stride`th value after it.
    ///
    /// # Errors
    ///
    /// * [`SeqError::ZeroStride`] if `stride` is 0.
    fn try_step_by(self, stride: usize) -> Result<StepBy<Self>, SeqError>
    where
        Self: Sized,
    {
        let stride = NonZeroUsize::new(stride).ok_or(SeqError::ZeroStride)?;
        Ok(StepBy::new(self, stride))
    }

    /// Yields every value of this sequence, then every value of `other`.
    #[inline]
    fn chain<U>(self, other: U) -> Chain<Self, U::IntoSeq>
    where
        Self: Sized,
        U: IntoSequence<Item = Self::Item>,
    {
        Chain::new(self, other.into_seq())
    }

    /// Yields pairs of values from this sequence and `other`, stopping as
    /// soon as either one ends.
    #[inline]
    fn zip<U>(self, other: U) -> Zip<Self, U::IntoSeq>
    where
        Self: Sized,
        U: IntoSequence,
    {
        Zip::new(self, other.into_seq())
    }

    /// Borrows this sequence so an adapter can be built without consuming it.
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Wraps this sequence in a [`std::iter::Iterator`].
    #[inline]
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> Result<(), SeqError> {
        (**self).advance_by(n)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<S::Item> {
        (**self).nth(n)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> Result<(), SeqError> {
        (**self).advance_by(n)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<S::Item> {
        (**self).nth(n)
    }
}

/// Conversion into a [`Sequence`].
///
/// Taken by [`Sequence::chain`] and [`Sequence::zip`] for their second argument.
pub trait IntoSequence {
    /// The values yielded by the resulting sequence.
    type Item;

    /// The resulting sequence.
    type IntoSeq: Sequence<Item = Self::Item>;

    /// Creates a sequence from this value.
    fn into_seq(self) -> Self::IntoSeq;
}

impl<S: Sequence> IntoSequence for S {
    type Item = S::Item;
    type IntoSeq = S;

    #[inline]
    fn into_seq(self) -> S {
        self
    }
}
