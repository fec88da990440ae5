//! Declarative holiday definitions.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::region::Regions;
use crate::rule::{DateRule, ObservanceRule};

/// Advisory tag attached to a holiday. Not used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    /// Observed across the country.
    National,
    /// Observed by some subdivisions only.
    Regional,
    /// Religious in origin.
    Religious,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::National => "national",
            Category::Regional => "regional",
            Category::Religious => "religious",
        })
    }
}

/// One row of a country's holiday table.
///
/// Built with [`HolidayDefinition::new`] and the chained setters:
///
/// ```
/// use hol_rules::{Category, DateRule, HolidayDefinition, ObservanceRule, Regions};
/// use hol_time::Month;
///
/// let def = HolidayDefinition::new("Remembrance Day", DateRule::fixed(Month::November, 11))
///     .observed(ObservanceRule::PostWeekendShift)
///     .regions(Regions::except(["mb", "on", "qc"]))
///     .category(Category::National);
/// assert!(def.is_public_holiday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayDefinition {
    /// Canonical name; unique within a table.
    pub name: String,
    /// Nominal date rule.
    pub date_rule: DateRule,
    /// Observance rule (defaults to [`ObservanceRule::SameAsDate`]).
    pub observance_rule: ObservanceRule,
    /// Where the holiday is observed (defaults to [`Regions::All`]).
    pub applicable_regions: Regions,
    /// Region code → localized name.
    pub region_name_overrides: BTreeMap<String, String>,
    /// Statutory / recognized public holiday (defaults to `true`).
    pub is_public_holiday: bool,
    /// Free text.
    pub description: Option<String>,
    /// Advisory tags.
    pub categories: BTreeSet<Category>,
}

impl HolidayDefinition {
    /// A public, nationwide holiday observed on its nominal date.
    pub fn new(name: impl Into<String>, date_rule: DateRule) -> Self {
        Self {
            name: name.into(),
            date_rule,
            observance_rule: ObservanceRule::SameAsDate,
            applicable_regions: Regions::All,
            region_name_overrides: BTreeMap::new(),
            is_public_holiday: true,
            description: None,
            categories: BTreeSet::new(),
        }
    }

    /// Set the observance rule.
    pub fn observed(mut self, rule: ObservanceRule) -> Self {
        self.observance_rule = rule;
        self
    }

    /// Set the applicable regions.
    pub fn regions(mut self, regions: Regions) -> Self {
        self.applicable_regions = regions;
        self
    }

    /// Use `name` as the display name in `region`.
    pub fn rename(mut self, region: &str, name: impl Into<String>) -> Self {
        self.region_name_overrides
            .insert(region.to_ascii_lowercase(), name.into());
        self
    }

    /// Mark as an informal observance rather than a public holiday.
    pub fn informal(mut self) -> Self {
        self.is_public_holiday = false;
        self
    }

    /// Attach a description.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Add a category tag.
    pub fn category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    /// Lowercase every region code, whether set through the builders, the
    /// public fields or deserialization.
    pub(crate) fn with_lowercase_codes(mut self) -> Self {
        self.applicable_regions = self.applicable_regions.lowercased();
        self.region_name_overrides = std::mem::take(&mut self.region_name_overrides)
            .into_iter()
            .map(|(code, name)| (code.to_ascii_lowercase(), name))
            .collect();
        self
    }
}
