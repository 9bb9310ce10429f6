//! Error types for prycing-rs.
//!
//! Every violated precondition is a hard failure of the call that detected
//! it. Errors are raised synchronously, before any structure owned by the
//! caller has been mutated.

use thiserror::Error;

/// The top-level error type used throughout prycing-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error, e.g. a solver that failed to converge.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the addressed range.
        size: usize,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout prycing-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pr_core::{ensure, errors::Error};
/// fn positive(x: f64) -> pr_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pr_core::{require_arg, errors::Error};
/// fn even(n: usize) -> pr_core::errors::Result<usize> {
///     require_arg!(n % 2 == 0, "expected an even number, got {n}");
///     Ok(n)
/// }
/// assert!(even(4).is_ok());
/// assert!(matches!(even(3), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! require_arg {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use pr_core::{fail, errors::Error};
/// fn always_err() -> pr_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_message() {
        let e = Error::IndexOutOfRange { index: 7, size: 6 };
        assert_eq!(e.to_string(), "index (7) out of range [0, 6)");
    }

    #[test]
    fn invalid_argument_message() {
        let e = Error::InvalidArgument("number of paths must be even".into());
        assert_eq!(e.to_string(), "invalid argument: number of paths must be even");
    }

    fn checked_sqrt(x: f64) -> Result<f64> {
        ensure!(x >= 0.0, "negative input {x}");
        Ok(x.sqrt())
    }

    #[test]
    fn ensure_returns_precondition() {
        assert_eq!(checked_sqrt(4.0), Ok(2.0));
        assert!(matches!(checked_sqrt(-1.0), Err(Error::Precondition(_))));
    }

    proptest::proptest! {
        #[test]
        fn ensure_accepts_all_non_negative(x in 0.0f64..1e6) {
            proptest::prop_assert!(checked_sqrt(x).is_ok());
        }
    }
}
