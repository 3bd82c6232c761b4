use derivative::Derivative;

use crate::double_ended::DoubleEndedSequence;
use crate::sequence::Sequence;
use crate::try_op::Try;

/// Yields only the upstream values that satisfy a predicate.
///
/// How many values will pass isn't known up front, so a `Filter` is never an
/// [`crate::ExactSizeSequence`] and its lower size bound is always 0.
///
/// Created by [`Sequence::filter`].
#[derive(Derivative, Clone)]
#[derivative(Debug(bound = "S: std::fmt::Debug"))]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Filter<S, P> {
    inner: S,
    #[derivative(Debug = "ignore")]
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(inner: S, predicate: P) -> Self {
        Filter { inner, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let predicate = &mut self.predicate;
        loop {
            let x = self.inner.next()?;
            if predicate(&x) {
                return Some(x);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }

    fn count(self) -> usize {
        let Filter {
            inner,
            mut predicate,
        } = self;
        inner.fold(0, move |count, x| count + usize::from(predicate(&x)))
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, S::Item) -> Acc,
    {
        let Filter {
            inner,
            mut predicate,
        } = self;
        inner.fold(init, move |acc, x| {
            if predicate(&x) { g(acc, x) } else { acc }
        })
    }

    fn try_fold<Acc, G, R>(&mut self, init: Acc, mut g: G) -> R
    where
        G: FnMut(Acc, S::Item) -> R,
        R: Try<Output = Acc>,
    {
        let predicate = &mut self.predicate;
        self.inner.try_fold(init, move |acc, x| {
            if predicate(&x) {
                g(acc, x)
            } else {
                R::from_output(acc)
            }
        })
    }
}

impl<S, P> DoubleEndedSequence for Filter<S, P>
where
    S: DoubleEndedSequence,
    P: FnMut(&S::Item) -> bool,
{
    fn next_back(&mut self) -> Option<S::Item> {
        let predicate = &mut self.predicate;
        loop {
            let x = self.inner.next_back()?;
            if predicate(&x) {
                return Some(x);
            }
        }
    }

    fn rfold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, S::Item) -> Acc,
    {
        let Filter {
            inner,
            mut predicate,
        } = self;
        inner.rfold(init, move |acc, x| {
            if predicate(&x) { g(acc, x) } else { acc }
        })
    }

    fn try_rfold<Acc, G, R>(&mut self, init: Acc, mut g: G) -> R
    where
        G: FnMut(Acc, S::Item) -> R,
        R: Try<Output = Acc>,
    {
        let predicate = &mut self.predicate;
        self.inner.try_rfold(init, move |acc, x| {
            if predicate(&x) {
                g(acc, x)
            } else {
                R::from_output(acc)
            }
        })
    }
}
