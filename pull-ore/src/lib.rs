//! Odds and ends shared across the `pull` workspace.
//!
//! Nothing in here knows about sequences, it's a grab bag of helpers for
//! assertions, environment variables, and logging in tests.

pub mod assert;
pub mod env;
pub mod logging;
