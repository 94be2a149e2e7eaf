//! Error types for the checked entry points.
//!
//! The argument evaluators and the sexagesimal decomposers are total over the
//! finite reals and never fail. [`AstroError`] is only produced where input
//! has to be interpreted before any arithmetic happens: parsing an argument
//! name, or the `try_*` decomposition variants that screen out non-finite
//! values and resolutions too fine for the `i32` fraction field.
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`MathError`](AstroError::MathError) | Non-finite input, unsupported resolution, bad names |
//! | [`CalculationError`](AstroError::CalculationError) | Leading field does not fit `i32` |
//!
//! ```
//! use celestial_fundargs::{AstroError, MathErrorKind};
//!
//! fn checked_ndp(ndp: i32) -> Result<i32, AstroError> {
//!     if ndp > 9 {
//!         return Err(AstroError::math_error(
//!             "checked_ndp",
//!             MathErrorKind::OutOfRange,
//!             "fraction field exceeds i32",
//!         ));
//!     }
//!     Ok(ndp)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Input or result is NaN or infinity.
    NotFinite,
    /// Value outside valid domain.
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum AstroError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Algorithm or calculation failure.
    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`CalculationError`](Self::CalculationError).
    pub fn calculation_error(context: &str, reason: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] for math errors.
    pub fn math_kind(&self) -> Option<&MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(kind),
            Self::CalculationError { .. } => None,
        }
    }
}
