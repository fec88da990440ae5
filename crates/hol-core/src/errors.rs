//! Error types for holidays-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here. Table invariants are
//! checked with the [`ensure!`](crate::ensure) and [`fail!`](crate::fail)
//! macros, which both produce [`Error::Definition`].

use thiserror::Error;

/// The top-level error type used throughout holidays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested year is zero, not a number, or outside [1900, 2200].
    #[error("invalid year: {0}")]
    InvalidYear(String),

    /// No holiday with the given canonical name exists in the table.
    #[error("unknown holiday: {0}")]
    UnknownHoliday(String),

    /// The region code is not present in the country's region registry.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// A holiday definition table is malformed.
    ///
    /// This indicates a bug in the static table rather than bad caller input.
    #[error("invalid holiday definition: {0}")]
    Definition(String),

    /// Calendar arithmetic left the supported range or named an invalid day.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout holidays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a definition-table invariant.
///
/// Returns `Err(Error::Definition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hol_core::{ensure, errors::Error};
/// fn occurrence(n: u8) -> hol_core::errors::Result<u8> {
///     ensure!((1..=4).contains(&n), "occurrence must be in 1..=4, got {n}");
///     Ok(n)
/// }
/// assert!(occurrence(3).is_ok());
/// assert!(matches!(occurrence(5), Err(Error::Definition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Definition(
                format!($($msg)*)
            ));
        }
    };
}

/// Reject a definition table unconditionally.
///
/// Returns `Err(Error::Definition(...))` immediately.
///
/// # Example
/// ```
/// use hol_core::{fail, errors::Error};
/// fn always_err() -> hol_core::errors::Result<()> {
///     fail!("holiday {:?} is defined twice", "Canada Day");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Definition(format!($($msg)*)))
    };
}
