//! # holidays
//!
//! Statutory and observance holidays computed from declarative rules.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hol-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holidays::countries::canada;
//!
//! let canada = canada::calendar()?;
//! let day = canada.holiday("Canada Day", 2025)?;
//! assert_eq!(day.date.iso(), "2025-07-01");
//!
//! let manitoba = canada.holidays_by_region("mb", 2024)?;
//! assert!(manitoba
//!     .iter()
//!     .any(|h| h.display_name == "Louis Riel Day (Family Day)"));
//! # Ok::<(), holidays::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the validated `Year`.
pub use hol_core as core;

/// Dates, weekdays, months, and calendar arithmetic.
pub use hol_time as time;

/// The holiday rule engine.
pub use hol_rules as rules;

/// Per-country tables.
pub use hol_countries as countries;

pub use hol_core::{Error, Result, Year};
pub use hol_rules::{HolidayCalendar, RegionalHoliday, ResolvedHoliday};
pub use hol_time::Date;
