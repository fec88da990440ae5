//! Resolution of a definition table into concrete dates for one year.
//!
//! Three passes run in order over the whole table:
//!
//! 1. every date rule is resolved to a nominal date;
//! 2. every non-relative observance rule is resolved, and the results are
//!    collected into a name-keyed [`SiblingLookup`];
//! 3. every relative observance rule is resolved against that lookup.
//!
//! Any failure aborts the whole call.

use hol_core::errors::{Error, Result};
use hol_core::Year;
use hol_time::Date;
use log::{debug, trace};

use crate::definition::HolidayDefinition;
use crate::holiday::ResolvedHoliday;
use crate::rule::{resolve_observance, SiblingLookup};

/// Resolve `definitions` for `year`, preserving table order.
///
/// # Errors
/// [`Error::Definition`] naming the offending holiday when a date rule does
/// not produce a valid date or a relative rule cannot find its sibling.
pub fn resolve(definitions: &[HolidayDefinition], year: Year) -> Result<Vec<ResolvedHoliday>> {
    debug!("resolving {} holiday definitions for {year}", definitions.len());

    // Pass 1: nominal dates.
    let dates = definitions
        .iter()
        .map(|def| def.date_rule.resolve(year).map_err(|e| in_definition(def, e)))
        .collect::<Result<Vec<Date>>>()?;

    // Pass 2: observances that only depend on their own date.
    let mut observed: Vec<Option<Date>> = vec![None; definitions.len()];
    let mut siblings = SiblingLookup::with_capacity(definitions.len());
    for ((def, &date), slot) in definitions.iter().zip(&dates).zip(observed.iter_mut()) {
        if def.observance_rule.is_relative() {
            continue;
        }
        let day = resolve_observance(&def.observance_rule, date, &siblings)
            .map_err(|e| in_definition(def, e))?;
        siblings.insert(def.name.as_str(), day);
        *slot = Some(day);
    }

    // Pass 3: observances derived from a sibling resolved in pass 2.
    for ((def, &date), slot) in definitions.iter().zip(&dates).zip(observed.iter_mut()) {
        if slot.is_none() {
            let day = resolve_observance(&def.observance_rule, date, &siblings)
                .map_err(|e| in_definition(def, e))?;
            *slot = Some(day);
        }
    }

    definitions
        .iter()
        .zip(dates)
        .zip(observed)
        .map(|((def, date), observance)| {
            let observance = observance.ok_or_else(|| {
                Error::Definition(format!("{:?}: observance was never resolved", def.name))
            })?;
            trace!("{}: {} observed {}", def.name, date.iso(), observance.iso());
            Ok(ResolvedHoliday::new(def, date, observance))
        })
        .collect()
}

/// Sort resolved holidays chronologically by nominal date.
///
/// The sort is stable, so holidays sharing a date keep their table order.
pub fn sort_chronologically(holidays: &mut [ResolvedHoliday]) {
    holidays.sort_by_key(|h| h.date);
}

fn in_definition(def: &HolidayDefinition, err: Error) -> Error {
    let detail = match err {
        Error::Date(msg) | Error::Definition(msg) => msg,
        other => other.to_string(),
    };
    Error::Definition(format!("{:?}: {detail}", def.name))
}
