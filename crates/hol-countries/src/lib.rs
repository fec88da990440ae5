//! # hol-countries
//!
//! Country holiday tables. Each country module provides a unit struct
//! implementing [`HolidayTable`](hol_rules::HolidayTable) and a `calendar()`
//! accessor that builds the validated
//! [`HolidayCalendar`](hol_rules::HolidayCalendar) once per process.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Canada: provinces, territories, and their holidays.
pub mod canada;
