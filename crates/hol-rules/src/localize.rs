//! Regional view: filter resolved holidays to one region and localize names.

use hol_core::errors::Result;

use crate::holiday::{RegionalHoliday, ResolvedHoliday};
use crate::region::{Region, RegionRegistry};

/// Display name of `holiday` in `region_code`.
///
/// `"{override} ({canonical})"` when the region renames the holiday, the
/// canonical name otherwise.
pub fn display_name(holiday: &ResolvedHoliday, region_code: &str) -> String {
    match holiday.region_name_overrides.get(region_code) {
        Some(local) => format!("{local} ({})", holiday.name),
        None => holiday.name.clone(),
    }
}

/// Project the holidays observed in `region`, keeping input order.
pub fn localize(holidays: &[ResolvedHoliday], region: &Region) -> Vec<RegionalHoliday> {
    let code = region.code.as_str();
    holidays
        .iter()
        .filter(|h| h.applicable_regions.applies_to(code))
        .map(|h| RegionalHoliday {
            display_name: display_name(h, code),
            date: h.date,
            observance_date: h.observance_date,
            region_code: code.to_owned(),
            is_public_holiday: h.is_public_holiday,
            categories: h.categories.clone(),
            description: h.description.clone(),
        })
        .collect()
}

/// Validate `region_code` against `registry`, then [`localize`].
///
/// # Errors
/// [`hol_core::Error::UnknownRegion`] if the code is not registered; an
/// unknown code never yields an empty list.
pub fn holidays_by_region(
    holidays: &[ResolvedHoliday],
    registry: &RegionRegistry,
    region_code: &str,
) -> Result<Vec<RegionalHoliday>> {
    let region = registry.get(region_code)?;
    log::debug!("localizing {} holidays for region {}", holidays.len(), region.code);
    Ok(localize(holidays, region))
}
