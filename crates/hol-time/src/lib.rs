//! # hol-time
//!
//! Civil dates, weekdays, months, and the calendar arithmetic that holiday
//! rules are built from: nth-weekday lookup, paschal dates, and weekday
//! adjustments.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Weekday-based adjustments (weekend shift, closest Monday, …).
pub mod adjust;

/// `Date` type.
pub mod date;

/// Easter Sunday and the dates derived from it.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
