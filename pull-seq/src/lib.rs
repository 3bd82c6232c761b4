//! Lazy, pull based sequences.
//!
//! A [`Sequence`] produces its values one at a time, on demand, through
//! [`Sequence::next`]. Adapters like [`Sequence::map`] and [`Sequence::chain`]
//! wrap a sequence without pulling anything, work only happens once a terminal
//! operation such as [`Sequence::fold`] or [`Sequence::collect`] runs. Each
//! user supplied closure is called at most once per value.
//!
//! Sequences that can be consumed from their tail implement
//! [`DoubleEndedSequence`], and ones that know exactly how many values remain
//! implement [`ExactSizeSequence`]. Adapters only carry those capabilities
//! over when their upstream has them.
//!
//! ```
//! use pull_seq::{DoubleEndedSequence, Sequence, from_owned};
//!
//! let evens = from_owned(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10);
//! assert_eq!(evens.rfold(0, |acc, x| acc + x), 120);
//! ```

mod adapters;
mod collect;
mod double_ended;
mod error;
mod exact_size;
mod sequence;
pub mod source;
mod std_iter;
mod try_op;


pub use adapters::{Chain, Filter, Map, StepBy, Zip};
pub use collect::FromSequence;
pub use double_ended::DoubleEndedSequence;
pub use error::SeqError;
pub use exact_size::ExactSizeSequence;
pub use sequence::{IntoSequence, Sequence};
pub use source::{
    Range, RangeValue, Source, empty, from_fn, from_iter, from_owned, from_ref, range, range_by,
    range_to,
};
pub use std_iter::IntoStd;
pub use try_op::Try;
