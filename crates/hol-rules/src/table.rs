//! The collaborator seam: where a country's data comes from.

use crate::definition::HolidayDefinition;
use crate::region::Region;

/// A country's static holiday data.
///
/// Implementors return the same data on every call; the engine reads it once
/// when building a [`HolidayCalendar`](crate::HolidayCalendar).
pub trait HolidayTable: Send + Sync {
    /// Human-readable country name (e.g. `"Canada"`).
    fn name(&self) -> &str;

    /// Ordered holiday definitions.
    fn definitions(&self) -> Vec<HolidayDefinition>;

    /// Ordered subdivisions with their codes.
    fn regions(&self) -> Vec<Region>;
}
