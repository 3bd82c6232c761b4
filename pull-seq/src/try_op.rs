//! The "try" protocol used by short-circuiting folds.
//!
//! `std::ops::Try` is unstable, so [`Try`] is a small stand-in for it. A
//! reducer handed to [`crate::Sequence::try_fold`] returns some `R: Try`, and
//! the fold continues for as long as that value branches to
//! [`ControlFlow::Continue`].

use std::ops::ControlFlow;

/// A value that either carries an accumulator forward or stops a fold.
pub trait Try: Sized {
    /// The value carried forward when the fold should keep going.
    type Output;
    /// Whatever is left over when the fold stops early.
    type Residual;

    /// Wrap a plain accumulator, used once the sequence runs out.
    fn from_output(output: Self::Output) -> Self;

    /// Rebuild the short-circuiting value from its residual.
    fn from_residual(residual: Self::Residual) -> Self;

    /// Split this value into "keep going" or "stop".
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output>;
}

impl<T> Try for Option<T> {
    type Output = T;
    type Residual = ();

    #[inline]
    fn from_output(output: T) -> Self {
        Some(output)
    }

    #[inline]
    fn from_residual((): ()) -> Self {
        None
    }

    #[inline]
    fn branch(self) -> ControlFlow<(), T> {
        match self {
            Some(output) => ControlFlow::Continue(output),
            None => ControlFlow::Break(()),
        }
    }
}

impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = E;

    #[inline]
    fn from_output(output: T) -> Self {
        Ok(output)
    }

    #[inline]
    fn from_residual(residual: E) -> Self {
        Err(residual)
    }

    #[inline]
    fn branch(self) -> ControlFlow<E, T> {
        match self {
            Ok(output) => ControlFlow::Continue(output),
            Err(err) => ControlFlow::Break(err),
        }
    }
}

impl<B, C> Try for ControlFlow<B, C> {
    type Output = C;
    type Residual = B;

    #[inline]
    fn from_output(output: C) -> Self {
        ControlFlow::Continue(output)
    }

    #[inline]
    fn from_residual(residual: B) -> Self {
        ControlFlow::Break(residual)
    }

    #[inline]
    fn branch(self) -> ControlFlow<B, C> {
        self
    }
}
