//! Errors returned by the fallible parts of the sequence API.
//!
//! Composition mistakes are rejected by the type checker and panics in user
//! closures propagate untouched, so this is a short list.

/// An error from a sequence operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// A stride of zero was requested from [`crate::Sequence::try_step_by`].
    #[error("stride must be positive, got 0")]
    ZeroStride,
    /// [`crate::source::range_by`] was given a step that isn't positive.
    #[error("range step must be positive")]
    NonPositiveStep,
    /// The sequence ended before it could be advanced as far as requested.
    #[error("sequence ended {shortfall} element(s) short of advancing by {requested}")]
    Exhausted { requested: usize, shortfall: usize },
}
