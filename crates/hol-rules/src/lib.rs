//! # hol-rules
//!
//! The holiday rule engine: declarative definitions, the three-pass
//! resolution pipeline, and the per-region view with localized names.
//!
//! ```
//! use hol_rules::{
//!     DateRule, HolidayCalendar, HolidayDefinition, ObservanceRule, Region, RegionKind,
//!     Regions, RelativeTransform,
//! };
//! use hol_time::Month;
//!
//! let calendar = HolidayCalendar::new(
//!     "Example",
//!     vec![
//!         HolidayDefinition::new("Christmas Day", DateRule::fixed(Month::December, 25))
//!             .observed(ObservanceRule::PostWeekendShift),
//!         HolidayDefinition::new("Boxing Day", DateRule::fixed(Month::December, 26))
//!             .observed(ObservanceRule::relative_to(
//!                 "Christmas Day",
//!                 RelativeTransform::WeekdayAfter,
//!             ))
//!             .regions(Regions::only(["on"])),
//!     ],
//!     vec![
//!         Region::new("Ontario", RegionKind::Province, "on"),
//!         Region::new("Quebec", RegionKind::Province, "qc"),
//!     ],
//! )?;
//!
//! // Christmas 2026 is a Friday, so Boxing Day is taken on Monday the 28th.
//! let boxing = calendar.holiday("Boxing Day", 2026)?;
//! assert_eq!(boxing.observance_date.iso(), "2026-12-28");
//! assert_eq!(calendar.holidays_by_region("qc", 2026)?.len(), 1);
//! # Ok::<(), hol_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` — the public entry points.
pub mod calendar;

/// `HolidayDefinition` and its categories.
pub mod definition;

/// `ResolvedHoliday` and `RegionalHoliday`.
pub mod holiday;

/// Region filtering and name localization.
pub mod localize;

/// The resolution pipeline.
pub mod pipeline;

/// Regions, the region registry, and applicability sets.
pub mod region;

/// Date rules, observance rules, and the observance resolver.
pub mod rule;

/// `HolidayTable` — the per-country data seam.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::HolidayCalendar;
pub use definition::{Category, HolidayDefinition};
pub use holiday::{RegionalHoliday, ResolvedHoliday};
pub use region::{Region, RegionKind, RegionRegistry, Regions};
pub use rule::{
    resolve_observance, Computed, DateFn, DateRule, ObservanceRule, RelativeTransform, YearFn,
};
pub use table::HolidayTable;
