//! Error types for the date, calendar and day-count library.
//!
//! Every fallible operation returns [`Result`], whose error side is the
//! single `thiserror`-derived [`Error`] enum below.  The kinds are kept
//! distinct so callers can tell a malformed date from an out-of-range one or
//! from an undecidable period comparison.  The [`ensure!`](crate::ensure),
//! [`ensure_kind!`](crate::ensure_kind) and [`fail!`](crate::fail) macros
//! are the usual way to raise them.

use thiserror::Error;

/// The top-level error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A (day, month, year) triple or time-of-day field is not a valid
    /// civil date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A serial number falls outside the supported date range.
    #[error("date out of range: {0}")]
    DateRange(String),

    /// An operation that needs a concrete date received the null date.
    #[error("null date: {0}")]
    NullDate(String),

    /// A convention value has no handler (including the `Unknown` and
    /// `OtherFrequency` sentinels).
    #[error("unsupported convention: {0}")]
    UnsupportedConvention(String),

    /// Period arithmetic between units that cannot be reconciled.
    #[error("impossible period operation: {0}")]
    ImpossiblePeriodOperation(String),

    /// Ordering between two periods whose day ranges overlap.
    #[error("undecidable comparison: {0}")]
    UndecidableComparison(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ql_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ql_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
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

/// Return `Err(Error::$kind(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ql_core::{ensure_kind, errors::Error};
/// fn month(m: u8) -> ql_core::errors::Result<u8> {
///     ensure_kind!((1..=12).contains(&m), InvalidDate, "month {m} outside [1, 12]");
///     Ok(m)
/// }
/// assert_eq!(month(3), Ok(3));
/// assert!(matches!(month(13), Err(Error::InvalidDate(_))));
/// ```
#[macro_export]
macro_rules! ensure_kind {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ql_core::{fail, errors::Error};
/// fn always_err() -> ql_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("something went wrong".into())));
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

    fn checked(n: i32) -> Result<i32> {
        ensure!(n != 0, "n must be non-zero");
        ensure_kind!(n > 0, DateRange, "n = {n} is negative");
        Ok(n)
    }

    #[test]
    fn macros_pick_the_right_kind() {
        assert_eq!(checked(4), Ok(4));
        assert!(matches!(checked(0), Err(Error::Precondition(_))));
        assert!(matches!(checked(-2), Err(Error::DateRange(_))));
    }

    #[test]
    fn messages_carry_the_kind() {
        let e = Error::NullDate("adjust".into());
        assert_eq!(e.to_string(), "null date: adjust");
        let e = Error::UndecidableComparison("1M vs 30D".into());
        assert_eq!(e.to_string(), "undecidable comparison: 1M vs 30D");
    }
}
