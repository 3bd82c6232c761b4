//! Sequences built by wrapping other sequences.
//!
//! Every adapter owns its upstream sequence(s), or borrows them when built
//! from [`crate::Sequence::by_ref`], and does no work until it is pulled.
//! Bulk operations like `fold` are handed down to the upstream with a wrapped
//! reducer rather than re-implemented as a loop over `next`.

mod chain;
mod filter;
mod map;
mod step_by;
mod zip;

pub use chain::Chain;
pub use filter::Filter;
pub use map::Map;
pub use step_by::StepBy;
pub use zip::Zip;
