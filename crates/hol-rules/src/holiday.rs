//! Resolved holidays: the output of the pipeline and of the regional view.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use hol_time::Date;

use crate::definition::{Category, HolidayDefinition};
use crate::region::Regions;

/// A holiday with concrete dates for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedHoliday {
    /// Canonical name.
    pub name: String,
    /// Nominal date.
    pub date: Date,
    /// Date the holiday is actually taken.
    pub observance_date: Date,
    /// Where the holiday is observed.
    pub applicable_regions: Regions,
    /// Region code → localized name.
    pub region_name_overrides: BTreeMap<String, String>,
    /// Statutory / recognized public holiday.
    pub is_public_holiday: bool,
    /// Free text.
    pub description: Option<String>,
    /// Advisory tags.
    pub categories: BTreeSet<Category>,
}

impl ResolvedHoliday {
    pub(crate) fn new(def: &HolidayDefinition, date: Date, observance_date: Date) -> Self {
        Self {
            name: def.name.clone(),
            date,
            observance_date,
            applicable_regions: def.applicable_regions.clone(),
            region_name_overrides: def.region_name_overrides.clone(),
            is_public_holiday: def.is_public_holiday,
            description: def.description.clone(),
            categories: def.categories.clone(),
        }
    }

    /// Whether the observed day differs from the nominal one.
    pub fn is_shifted(&self) -> bool {
        self.date != self.observance_date
    }
}

impl fmt::Display for ResolvedHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.iso())?;
        if self.is_shifted() {
            write!(f, " (observed {})", self.observance_date.iso())?;
        }
        Ok(())
    }
}

/// A holiday as seen from one region.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionalHoliday {
    /// `"{regional} ({canonical})"` when the region renames it, else canonical.
    pub display_name: String,
    /// Nominal date.
    pub date: Date,
    /// Date the holiday is actually taken.
    pub observance_date: Date,
    /// Lowercase region code.
    pub region_code: String,
    /// Statutory / recognized public holiday.
    pub is_public_holiday: bool,
    /// Advisory tags.
    pub categories: BTreeSet<Category>,
    /// Free text.
    pub description: Option<String>,
}
