//! Arithmetic progressions over primitive integers.

use std::fmt::Debug;

use crate::error::SeqError;
use crate::sequence::Sequence;

/// Integers that a [`Range`] can count over.
pub trait RangeValue: Copy + PartialOrd + Debug {
    const ZERO: Self;
    const ONE: Self;

    /// Returns `self + step`, or `None` if that overflows.
    fn checked_step(self, step: Self) -> Option<Self>;

    /// Number of values in `start..end` when counting by `step`, if that fits in a `usize`.
    fn steps_between(start: Self, end: Self, step: Self) -> Option<usize>;
}

macro_rules! range_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl RangeValue for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                fn steps_between(start: Self, end: Self, step: Self) -> Option<usize> {
                    if start >= end {
                        return Some(0);
                    }
                    let span = i128::try_from(end).ok()? - i128::try_from(start).ok()?;
                    let step = i128::try_from(step).ok()?;
                    usize::try_from((span + step - 1) / step).ok()
                }
            }
        )*
    };
}

range_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Counts up from a start value, by a positive step, until an optional end.
///
/// The range ends for good once it reaches `end`, or when the next value
/// would overflow `T`.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Range<T> {
    next: T,
    end: Option<T>,
    step: T,
    latched: bool,
}

/// Counts up by one from `start` until `T` overflows.
pub fn range<T: RangeValue>(start: T) -> Range<T> {
    Range {
        next: start,
        end: None,
        step: T::ONE,
        latched: false,
    }
}

/// Counts up by one from `start`, stopping before `end`.
pub fn range_to<T: RangeValue>(start: T, end: T) -> Range<T> {
    Range {
        next: start,
        end: Some(end),
        step: T::ONE,
        latched: false,
    }
}

/// Counts up by `step` from `start`, stopping before `end`.
///
/// # Errors
///
/// * [`SeqError::NonPositiveStep`] if `step` is zero or negative.
pub fn range_by<T: RangeValue>(start: T, end: T, step: T) -> Result<Range<T>, SeqError> {
    if step <= T::ZERO {
        return Err(SeqError::NonPositiveStep);
    }
    Ok(Range {
        next: start,
        end: Some(end),
        step,
        latched: false,
    })
}

impl<T: RangeValue> Sequence for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.latched {
            return None;
        }
        if let Some(end) = self.end {
            if self.next >= end {
                self.latched = true;
                return None;
            }
        }

        let value = self.next;
        match value.checked_step(self.step) {
            Some(next) => self.next = next,
            None => self.latched = true,
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.latched {
            return (0, Some(0));
        }
        match self.end {
            // At least the current value, the rest depends on when `T` overflows.
            None => (1, None),
            Some(end) => match T::steps_between(self.next, end, self.step) {
                Some(n) => (n, Some(n)),
                None => (usize::MAX, None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pull_ore::assert_exhausted;

    use super::*;

    #[test]
    fn smoketest_range_to() {
        let seq = range_to(3u32, 7);
        assert_eq!(seq.size_hint(), (4, Some(4)));
        assert_eq!(seq.collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn range_by_steps() -> anyhow::Result<()> {
        let mut seq = range_by(-5i32, 6, 4)?;
        assert_eq!(seq.size_hint(), (3, Some(3)));
        assert_eq!(seq.next(), Some(-5));
        assert_eq!(seq.next(), Some(-1));
        assert_eq!(seq.next(), Some(3));
        assert_exhausted!(seq);
        assert_eq!(seq.size_hint(), (0, Some(0)));
        Ok(())
    }

    #[test]
    fn range_by_rejects_non_positive_steps() {
        assert_eq!(range_by(0i8, 10, 0).unwrap_err(), SeqError::NonPositiveStep);
        assert_eq!(range_by(0i8, 10, -2).unwrap_err(), SeqError::NonPositiveStep);
    }

    #[test]
    fn unbounded_range_latches_on_overflow() {
        let seq = range(250u8);
        assert_eq!(seq.size_hint(), (1, None));
        assert_eq!(seq.collect::<Vec<_>>(), vec![250, 251, 252, 253, 254, 255]);

        let mut seq = range_by(100u8, 255, 100).expect("valid step");
        assert_eq!(seq.next(), Some(100));
        assert_eq!(seq.next(), Some(200));
        assert_exhausted!(seq);
    }

    #[test]
    fn empty_when_start_is_past_end() {
        let mut seq = range_to(10i64, 3);
        assert_eq!(seq.size_hint(), (0, Some(0)));
        assert_exhausted!(seq);
    }
}
