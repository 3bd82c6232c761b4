use std::ops::ControlFlow;

use crate::sequence::Sequence;
use crate::try_op::Try;

/// Which half of a [`Chain`] is being pulled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainState {
    DrainingFirst,
    DrainingSecond,
}

/// Yields every value of one sequence and then every value of another.
///
/// The first sequence is never pulled again once it has ended, and the second
/// is never pulled until then.
///
/// Created by [`Sequence::chain`].
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Chain<A, B> {
    first: A,
    second: B,
    state: ChainState,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Chain {
            first,
            second,
            state: ChainState::DrainingFirst,
        }
    }

    fn latch(&mut self) {
        tracing::trace!("chain switched to its second sequence");
        self.state = ChainState::DrainingSecond;
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if self.state == ChainState::DrainingFirst {
            match self.first.next() {
                Some(x) => return Some(x),
                None => self.latch(),
            }
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (second_lower, second_upper) = self.second.size_hint();
        match self.state {
            ChainState::DrainingFirst => {
                let (first_lower, first_upper) = self.first.size_hint();
                let lower = first_lower.saturating_add(second_lower);
                let upper = match (first_upper, second_upper) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                (lower, upper)
            }
            ChainState::DrainingSecond => (second_lower, second_upper),
        }
    }

    fn count(self) -> usize {
        match self.state {
            ChainState::DrainingFirst => self.first.count() + self.second.count(),
            ChainState::DrainingSecond => self.second.count(),
        }
    }

    fn fold<Acc, F>(self, init: Acc, mut f: F) -> Acc
    where
        F: FnMut(Acc, A::Item) -> Acc,
    {
        let acc = match self.state {
            ChainState::DrainingFirst => self.first.fold(init, &mut f),
            ChainState::DrainingSecond => init,
        };
        self.second.fold(acc, f)
    }

    fn try_fold<Acc, F, R>(&mut self, init: Acc, mut f: F) -> R
    where
        F: FnMut(Acc, A::Item) -> R,
        R: Try<Output = Acc>,
    {
        let mut acc = init;
        if self.state == ChainState::DrainingFirst {
            // A break inside the first half leaves the chain where it was.
            match self.first.try_fold(acc, &mut f).branch() {
                ControlFlow::Continue(next) => acc = next,
                ControlFlow::Break(residual) => return R::from_residual(residual),
            }
            self.latch();
        }
        self.second.try_fold(acc, f)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pull_ore::assert_exhausted;
    use pull_ore::logging::with_captured_logging;

    use crate::Sequence;
    use crate::source::{empty, from_fn, from_ref, range, range_to};

    #[test]
    fn smoketest_chain() {
        let mut seq = range_to(1u32, 5).chain(range_to(5u32, 9));
        for expected in 1..=8 {
            assert_eq!(seq.next(), Some(expected));
        }
        assert_exhausted!(seq);
    }

    #[test]
    fn empty_halves() {
        let xs = [1, 2];
        assert_eq!(from_ref(&xs).chain(empty()).collect::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(empty().chain(from_ref(&xs)).collect::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(empty::<u8>().chain(empty()).count(), 0);
    }

    #[test]
    fn first_is_not_pulled_after_it_ends() {
        let mut first_pulls = 0;
        let mut seq = from_fn(|| {
            first_pulls += 1;
            (first_pulls == 1).then_some(0)
        })
        .chain(range_to(1, 4));
        assert_eq!(seq.by_ref().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_exhausted!(seq);
        assert_eq!(first_pulls, 2);
    }

    #[test]
    fn second_is_not_pulled_while_first_has_values() {
        let second_pulls = Cell::new(0);
        let xs: [i8; 4] = [10, 20, 100, 30];
        let mut seq = from_ref(&xs).map(|x| *x).chain(from_fn(|| {
            second_pulls.set(second_pulls.get() + 1);
            Some(-1)
        }));

        assert_eq!(seq.next(), Some(10));
        assert_eq!(seq.next(), Some(20));
        assert_eq!(second_pulls.get(), 0);

        // 50 + 100 overflows an i8, inside the first half.
        assert_eq!(seq.try_fold(50i8, |acc, x| acc.checked_add(x)), None);
        assert_eq!(second_pulls.get(), 0);

        assert_eq!(seq.next(), Some(30));
        assert_eq!(second_pulls.get(), 0);
        assert_eq!(seq.next(), Some(-1));
        assert_eq!(second_pulls.get(), 1);
    }

    #[test]
    fn size_hint_sums_both_halves() {
        let mut seq = range_to(0u8, 3).chain(range_to(0u8, 2));
        assert_eq!(seq.size_hint(), (5, Some(5)));
        seq.nth(3);
        assert_eq!(seq.size_hint(), (1, Some(1)));

        let seq = range(0u8).chain(range(0u8));
        assert_eq!(seq.size_hint(), (2, None));
    }

    #[test]
    fn count_and_fold_after_partial_pulls() {
        let make = || range_to(1u32, 4).chain(range_to(4u32, 7));
        let mut seq = make();
        seq.nth(3);
        assert_eq!(seq.count(), 2);

        let mut seq = make();
        seq.nth(1);
        assert_eq!(seq.fold(0, |acc, x| acc * 10 + x), 3456);
    }

    #[test]
    fn try_fold_across_the_boundary() {
        let xs: [i8; 3] = [10, 20, 30];
        let ys: [i8; 3] = [40, 100, 50];

        let mut seq = from_ref(&xs).chain(from_ref(&ys));
        assert_eq!(seq.try_fold(0i8, |acc, &x| acc.checked_add(x)), None);
        assert_eq!(seq.next(), Some(&50));

        // Breaking inside the first half keeps draining it afterwards.
        let mut seq = from_ref(&ys).chain(from_ref(&xs));
        assert_eq!(seq.try_fold(0i8, |acc, &x| acc.checked_add(x)), None);
        assert_eq!(seq.next(), Some(&50));
        assert_eq!(seq.next(), Some(&10));
    }

    #[test]
    fn latching_is_traced_once() {
        let (values, events) = with_captured_logging(|| {
            let mut seq = range_to(0u8, 2).chain(range_to(2u8, 3));
            let mut values = Vec::new();
            while let Some(x) = seq.next() {
                values.push(x);
            }
            assert_exhausted!(seq);
            values
        });
        assert_eq!(values, vec![0, 1, 2]);

        let latches: Vec<_> = events
            .iter()
            .filter(|e| e.message.contains("second sequence"))
            .collect();
        assert_eq!(latches.len(), 1);
        assert_eq!(latches[0].level, tracing::Level::TRACE);
    }
}
