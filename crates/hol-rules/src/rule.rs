//! Date rules and observance rules.
//!
//! Both are closed enums: every kind of rule a definition table can use is
//! listed here and dispatched with an exhaustive `match`. `Computed` rules pick
//! a calendar function from a fixed registry ([`YearFn`], [`DateFn`]) instead
//! of referencing arbitrary code.

use std::collections::HashMap;

use hol_core::errors::{Error, Result};
use hol_core::Year;
use hol_time::{adjust, easter, Date, Month, Weekday};

// ── Date rules ────────────────────────────────────────────────────────────────

/// How a holiday's nominal date is found in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DateRule {
    /// The same month and day every year.
    Fixed {
        /// Month.
        month: Month,
        /// Day of month.
        day: u8,
    },
    /// The `occurrence`-th `weekday` of `month`, counted from the 1st (1–4).
    NthWeekday {
        /// Month.
        month: Month,
        /// Weekday.
        weekday: Weekday,
        /// 1-based occurrence.
        occurrence: u8,
    },
    /// A date produced by a registered calendar function.
    Computed(Computed),
}

impl DateRule {
    /// `Fixed` shorthand.
    pub fn fixed(month: Month, day: u8) -> Self {
        DateRule::Fixed { month, day }
    }

    /// `NthWeekday` shorthand.
    pub fn nth_weekday(month: Month, weekday: Weekday, occurrence: u8) -> Self {
        DateRule::NthWeekday {
            month,
            weekday,
            occurrence,
        }
    }

    /// A computed rule whose only argument is the year.
    pub fn from_year(func: YearFn) -> Self {
        DateRule::Computed(Computed::Year(func))
    }

    /// A computed rule applied to `month`/`day` in the target year.
    pub fn from_date(func: DateFn, month: Month, day: u8) -> Self {
        DateRule::Computed(Computed::Date { func, month, day })
    }

    /// Resolve to a concrete date in `year`.
    pub fn resolve(&self, year: Year) -> Result<Date> {
        let y = year.get();
        match *self {
            DateRule::Fixed { month, day } => Date::new(y, month, day),
            DateRule::NthWeekday {
                month,
                weekday,
                occurrence,
            } => Date::nth_weekday(y, month, weekday, occurrence),
            DateRule::Computed(Computed::Year(func)) => func.apply(y),
            DateRule::Computed(Computed::Date { func, month, day }) => {
                func.apply(Date::new(y, month, day)?)
            }
        }
    }
}

/// Arguments of a computed date rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Computed {
    /// `func(year)`.
    Year(YearFn),
    /// `func(date(year, month, day))`.
    Date {
        /// Function applied to the anchor date.
        func: DateFn,
        /// Anchor month.
        month: Month,
        /// Anchor day.
        day: u8,
    },
}

/// Registered calendar functions of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum YearFn {
    /// Easter Sunday.
    PaschalSunday,
    /// Easter Sunday − 2 days.
    GoodFriday,
    /// Easter Sunday + 1 day.
    EasterMonday,
}

impl YearFn {
    /// The function itself.
    pub fn function(self) -> fn(u16) -> Result<Date> {
        match self {
            YearFn::PaschalSunday => easter::paschal_sunday,
            YearFn::GoodFriday => easter::good_friday,
            YearFn::EasterMonday => easter::easter_monday,
        }
    }

    /// Apply to `year`.
    pub fn apply(self, year: u16) -> Result<Date> {
        (self.function())(year)
    }
}

/// Registered calendar functions of an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DateFn {
    /// Monday closest to the anchor (see [`adjust::closest_monday`]).
    ClosestMonday,
    /// Last Monday strictly before the anchor.
    MondayBefore,
}

impl DateFn {
    /// The function itself.
    pub fn function(self) -> fn(Date) -> Result<Date> {
        match self {
            DateFn::ClosestMonday => adjust::closest_monday,
            DateFn::MondayBefore => adjust::monday_before,
        }
    }

    /// Apply to `date`.
    pub fn apply(self, date: Date) -> Result<Date> {
        (self.function())(date)
    }
}

// ── Observance rules ──────────────────────────────────────────────────────────

/// How the observed day off follows from the nominal date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ObservanceRule {
    /// Observed on the nominal date.
    #[default]
    SameAsDate,
    /// Saturday and Sunday move forward to Monday.
    PostWeekendShift,
    /// Derived from another holiday's observed date.
    RelativeTo {
        /// Canonical name of the sibling holiday.
        holiday: String,
        /// Transform applied to the sibling's observance date.
        transform: RelativeTransform,
    },
}

impl ObservanceRule {
    /// `RelativeTo` shorthand.
    pub fn relative_to(holiday: impl Into<String>, transform: RelativeTransform) -> Self {
        ObservanceRule::RelativeTo {
            holiday: holiday.into(),
            transform,
        }
    }

    /// Name of the sibling this rule depends on, if any.
    pub fn depends_on(&self) -> Option<&str> {
        match self {
            ObservanceRule::RelativeTo { holiday, .. } => Some(holiday.as_str()),
            _ => None,
        }
    }

    /// Whether this rule needs a sibling's observance date.
    pub fn is_relative(&self) -> bool {
        self.depends_on().is_some()
    }
}

/// Transforms applied to a sibling's observance date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RelativeTransform {
    /// The next day.
    DayAfter,
    /// The next day, or the Monday after when the sibling is on a Friday.
    WeekdayAfter,
}

impl RelativeTransform {
    /// Apply to the sibling's observance date.
    pub fn apply(self, sibling: Date) -> Result<Date> {
        match self {
            RelativeTransform::DayAfter => sibling.add_days(1),
            RelativeTransform::WeekdayAfter => adjust::weekday_after(sibling),
        }
    }
}

/// Observance dates of already-resolved, non-relative holidays, by name.
pub type SiblingLookup<'a> = HashMap<&'a str, Date>;

/// Resolve the observance date of a holiday whose nominal date is `base`.
///
/// `siblings` is only consulted for [`ObservanceRule::RelativeTo`]; it must
/// hold the observance dates of the non-relative holidays of the same year.
///
/// # Errors
/// [`Error::Definition`] if a relative rule names a holiday missing from
/// `siblings`, or [`Error::Date`] if the result leaves the supported range.
pub fn resolve_observance(
    rule: &ObservanceRule,
    base: Date,
    siblings: &SiblingLookup<'_>,
) -> Result<Date> {
    match rule {
        ObservanceRule::SameAsDate => Ok(base),
        ObservanceRule::PostWeekendShift => adjust::post_weekend_shift(base),
        ObservanceRule::RelativeTo { holiday, transform } => {
            let sibling = siblings.get(holiday.as_str()).ok_or_else(|| {
                Error::Definition(format!(
                    "observance refers to {holiday:?}, which is not a resolved non-relative holiday"
                ))
            })?;
            transform.apply(*sibling)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn year(y: i32) -> Year {
        Year::new(y).unwrap()
    }

    #[test]
    fn date_rules() {
        let canada_day = DateRule::fixed(Month::July, 1);
        assert_eq!(canada_day.resolve(year(2025)).unwrap(), date(2025, 7, 1));

        let labour_day = DateRule::nth_weekday(Month::September, Weekday::Monday, 1);
        assert_eq!(labour_day.resolve(year(2025)).unwrap(), date(2025, 9, 1));

        let good_friday = DateRule::from_year(YearFn::GoodFriday);
        assert_eq!(good_friday.resolve(year(2024)).unwrap(), date(2024, 3, 29));

        let orangemen = DateRule::from_date(DateFn::ClosestMonday, Month::July, 12);
        assert_eq!(orangemen.resolve(year(2024)).unwrap(), date(2024, 7, 15));

        let victoria = DateRule::from_date(DateFn::MondayBefore, Month::May, 25);
        assert_eq!(victoria.resolve(year(2025)).unwrap(), date(2025, 5, 19));
    }

    #[test]
    fn bad_date_rules_fail() {
        assert!(DateRule::fixed(Month::February, 30).resolve(year(2024)).is_err());
        assert!(DateRule::fixed(Month::February, 29).resolve(year(2023)).is_err());
        assert!(DateRule::nth_weekday(Month::February, Weekday::Wednesday, 5)
            .resolve(year(2024))
            .is_err());
    }

    #[test]
    fn simple_observances() {
        let none = SiblingLookup::new();
        let sat = date(2023, 7, 1);
        assert_eq!(resolve_observance(&ObservanceRule::SameAsDate, sat, &none).unwrap(), sat);
        assert_eq!(
            resolve_observance(&ObservanceRule::PostWeekendShift, sat, &none).unwrap(),
            date(2023, 7, 3)
        );
    }

    #[test]
    fn relative_observance() {
        let rule = ObservanceRule::relative_to("Christmas Day", RelativeTransform::WeekdayAfter);
        assert_eq!(rule.depends_on(), Some("Christmas Day"));

        let mut siblings = SiblingLookup::new();
        // Christmas 2026 is a Friday.
        siblings.insert("Christmas Day", date(2026, 12, 25));
        assert_eq!(
            resolve_observance(&rule, date(2026, 12, 26), &siblings).unwrap(),
            date(2026, 12, 28)
        );
        // Christmas 2025 is a Thursday.
        siblings.insert("Christmas Day", date(2025, 12, 25));
        assert_eq!(
            resolve_observance(&rule, date(2025, 12, 26), &siblings).unwrap(),
            date(2025, 12, 26)
        );
    }

    #[test]
    fn relative_observance_without_sibling() {
        let rule = ObservanceRule::relative_to("Nonexistent", RelativeTransform::DayAfter);
        let err = resolve_observance(&rule, date(2025, 1, 1), &SiblingLookup::new());
        assert!(matches!(err, Err(Error::Definition(_))));
    }
}
