//! `HolidayCalendar` — a validated definition table with its region registry.
//!
//! The calendar is immutable once built. Every query re-runs the resolution
//! pipeline for the requested year; nothing is cached between calls.

use std::collections::{BTreeSet, HashMap};

use hol_core::errors::{Error, Result};
use hol_core::{ensure, fail, Year};
use hol_time::{Date, Month};
use log::{debug, warn};

use crate::definition::HolidayDefinition;
use crate::holiday::{RegionalHoliday, ResolvedHoliday};
use crate::localize;
use crate::pipeline;
use crate::region::{Region, RegionRegistry, Regions};
use crate::rule::{Computed, DateRule, ObservanceRule};
use crate::table::HolidayTable;

/// A country's holidays and subdivisions.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    definitions: Vec<HolidayDefinition>,
    registry: RegionRegistry,
}

impl HolidayCalendar {
    /// Build a calendar, validating the table against the registry.
    ///
    /// Region codes in the definitions are lowercased first, matching the
    /// registry.
    ///
    /// # Errors
    /// [`Error::Definition`] for duplicate or empty names, date rules that are
    /// not valid in every year, dangling or chained relative rules, and region
    /// codes the registry does not know.
    pub fn new(
        name: impl Into<String>,
        definitions: Vec<HolidayDefinition>,
        regions: Vec<Region>,
    ) -> Result<Self> {
        let name = name.into();
        let registry = RegionRegistry::new(regions)?;
        let definitions: Vec<_> = definitions
            .into_iter()
            .map(HolidayDefinition::with_lowercase_codes)
            .collect();
        validate(&definitions, &registry)?;
        debug!(
            "{name}: {} holiday definitions, {} regions",
            definitions.len(),
            registry.regions().len()
        );
        Ok(Self {
            name,
            definitions,
            registry,
        })
    }

    /// Build a calendar from a collaborator table.
    pub fn from_table<T: HolidayTable + ?Sized>(table: &T) -> Result<Self> {
        Self::new(table.name(), table.definitions(), table.regions())
    }

    /// Country name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The definition table, in order.
    pub fn definitions(&self) -> &[HolidayDefinition] {
        &self.definitions
    }

    // ── Resolution ───────────────────────────────────────────────────────────

    /// All holidays of `year`, in table order.
    ///
    /// # Errors
    /// [`Error::InvalidYear`] outside [1900, 2200]; [`Error::Definition`] if a
    /// rule fails to resolve.
    pub fn holidays(&self, year: i32) -> Result<Vec<ResolvedHoliday>> {
        let year = Year::new(year)?;
        pipeline::resolve(&self.definitions, year)
    }

    /// All holidays of `year`, sorted by date.
    pub fn holidays_sorted(&self, year: i32) -> Result<Vec<ResolvedHoliday>> {
        let mut holidays = self.holidays(year)?;
        pipeline::sort_chronologically(&mut holidays);
        Ok(holidays)
    }

    /// The holiday called `name` in `year`.
    ///
    /// # Errors
    /// [`Error::UnknownHoliday`] if no definition has that canonical name.
    pub fn holiday(&self, name: &str, year: i32) -> Result<ResolvedHoliday> {
        let year = Year::new(year)?;
        if !self.definitions.iter().any(|d| d.name == name) {
            return Err(Error::UnknownHoliday(name.to_owned()));
        }
        pipeline::resolve(&self.definitions, year)?
            .into_iter()
            .find(|h| h.name == name)
            .ok_or_else(|| Error::UnknownHoliday(name.to_owned()))
    }

    /// Holidays of `year` observed in `region_code`, with localized names.
    ///
    /// # Errors
    /// [`Error::InvalidYear`] is checked first, then [`Error::UnknownRegion`].
    pub fn holidays_by_region(
        &self,
        region_code: &str,
        year: i32,
    ) -> Result<Vec<RegionalHoliday>> {
        let year = Year::new(year)?;
        let resolved = pipeline::resolve(&self.definitions, year)?;
        localize::holidays_by_region(&resolved, &self.registry, region_code)
    }

    // ── Regions ──────────────────────────────────────────────────────────────

    /// Subdivisions, in registry order.
    pub fn regions(&self) -> &[Region] {
        self.registry.regions()
    }

    /// Look up a subdivision by code (case-insensitive).
    pub fn region(&self, code: &str) -> Result<&Region> {
        self.registry.get(code)
    }

    /// The set of valid region codes.
    pub fn region_codes(&self) -> BTreeSet<&str> {
        self.registry.codes()
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Whether `date` is the observance date of a public holiday observed in
    /// every region.
    pub fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(self.holidays(date.year() as i32)?.iter().any(|h| {
            h.is_public_holiday
                && h.observance_date == date
                && h.applicable_regions == Regions::All
        }))
    }

    /// Whether `date` is the observance date of a public holiday in
    /// `region_code`.
    pub fn is_holiday_in(&self, region_code: &str, date: Date) -> Result<bool> {
        Ok(self
            .holidays_by_region(region_code, date.year() as i32)?
            .iter()
            .any(|h| h.is_public_holiday && h.observance_date == date))
    }

    /// The first holiday in `region_code` observed on or after `date`.
    ///
    /// Looks into the following year when `date` is past the last holiday of
    /// its own year. Returns `None` only at the end of the supported range.
    pub fn next_holiday(
        &self,
        region_code: &str,
        date: Date,
    ) -> Result<Option<RegionalHoliday>> {
        let mut year = Some(Year::new(date.year() as i32)?);
        while let Some(y) = year {
            let mut holidays = self.holidays_by_region(region_code, y.get() as i32)?;
            holidays.sort_by_key(|h| h.observance_date);
            if let Some(h) = holidays.into_iter().find(|h| h.observance_date >= date) {
                return Ok(Some(h));
            }
            year = y.succ().filter(|next| next.get() <= date.year() + 1);
        }
        Ok(None)
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate(definitions: &[HolidayDefinition], registry: &RegionRegistry) -> Result<()> {
    let by_name: HashMap<&str, &HolidayDefinition> =
        definitions.iter().map(|d| (d.name.as_str(), d)).collect();
    ensure!(
        by_name.len() == definitions.len(),
        "holiday names must be unique within a table"
    );

    for def in definitions {
        ensure!(!def.name.trim().is_empty(), "holiday name must not be empty");
        validate_date_rule(def)?;

        if let Some(target) = def.observance_rule.depends_on() {
            ensure!(target != def.name, "{:?} is observed relative to itself", def.name);
            let Some(sibling) = by_name.get(target) else {
                fail!("{:?} is observed relative to unknown holiday {target:?}", def.name);
            };
            ensure!(
                !matches!(sibling.observance_rule, ObservanceRule::RelativeTo { .. }),
                "{:?} is observed relative to {target:?}, which is itself relative",
                def.name
            );
        }

        if let Regions::Only(codes) = &def.applicable_regions {
            ensure!(!codes.is_empty(), "{:?} applies to no region", def.name);
        }
        for code in def.applicable_regions.named_codes() {
            ensure!(
                registry.contains(code),
                "{:?} names unregistered region {code:?}",
                def.name
            );
        }
        for code in def.region_name_overrides.keys() {
            ensure!(
                registry.contains(code),
                "{:?} renames for unregistered region {code:?}",
                def.name
            );
            if !def.applicable_regions.applies_to(code) {
                warn!("{:?} renames for {code:?}, where it is not observed", def.name);
            }
        }
    }
    Ok(())
}

fn validate_date_rule(def: &HolidayDefinition) -> Result<()> {
    match def.date_rule {
        DateRule::Fixed { month, day } | DateRule::Computed(Computed::Date { month, day, .. }) => {
            check_every_year(def, month, day)
        }
        DateRule::NthWeekday { occurrence, .. } => {
            ensure!(
                (1..=4).contains(&occurrence),
                "{:?}: occurrence {occurrence} is outside 1..=4",
                def.name
            );
            Ok(())
        }
        DateRule::Computed(Computed::Year(_)) => Ok(()),
    }
}

fn check_every_year(def: &HolidayDefinition, month: Month, day: u8) -> Result<()> {
    ensure!(
        day >= 1 && day <= month.max_days() && !(month == Month::February && day == 29),
        "{:?}: {month} {day} is not a date in every year",
        def.name
    );
    Ok(())
}
