//! Utilities for `assert!`s.

/// Number of extra pulls [`assert_exhausted!`] makes to check that "end" sticks.
pub const EXHAUSTED_PULLS: usize = 3;

/// Asserts that the provided expression, that returns an `Option`, is `None`.
#[macro_export]
macro_rules! assert_none {
    ($val:expr, $($msg:tt)+) => {{
        if let Some(y) = &$val {
            panic!("assertion failed: expected None found Some({y:?}), {}", format!($($msg)+));
        }
    }};
    ($val:expr) => {{
        if let Some(y) = &$val {
            panic!("assertion failed: expected None found Some({y:?})");
        }
    }}
}

/// Asserts that a sequence is at its end, and stays there.
///
/// Pulls [`EXHAUSTED_PULLS`] times with the named method, `next` by default,
/// and panics if any pull produces a value. The method is resolved at the call
/// site so the relevant trait must be in scope there.
///
/// ```ignore
/// assert_exhausted!(seq);
/// assert_exhausted!(seq, next_back);
/// ```
#[macro_export]
macro_rules! assert_exhausted {
    ($seq:expr) => {
        $crate::assert_exhausted!($seq, next)
    };
    ($seq:expr, $pull:ident) => {{
        let seq = &mut $seq;
        for attempt in 0..$crate::assert::EXHAUSTED_PULLS {
            if let Some(y) = seq.$pull() {
                panic!(
                    "assertion failed: expected end from `{}` on pull {attempt}, found Some({y:?})",
                    stringify!($pull),
                );
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn smoketest_assert_none() {
        let val: Option<u32> = None;
        assert_none!(val);
        assert_none!(val, "with a message {}", 42);
    }

    #[test]
    #[should_panic(expected = "expected None found Some(7)")]
    fn assert_none_panics_on_some() {
        assert_none!(Some(7));
    }

    #[test]
    fn assert_exhausted_on_std_iterator() {
        let mut it = std::iter::empty::<u8>();
        assert_exhausted!(it);
        let mut it = Vec::<u8>::new().into_iter();
        assert_exhausted!(it, next_back);
    }

    #[test]
    #[should_panic(expected = "expected end from `next` on pull 0")]
    fn assert_exhausted_panics_on_value() {
        let mut it = [1, 2].into_iter();
        assert_exhausted!(it);
    }
}
