//! Regions (subdivisions) and the sets of regions a holiday applies to.

use std::collections::BTreeSet;
use std::fmt;

use hol_core::errors::{Error, Result};

/// Kind of second-level jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RegionKind {
    /// Province (e.g. Ontario).
    Province,
    /// Territory (e.g. Yukon).
    Territory,
    /// State (e.g. Bavaria).
    State,
    /// Federal or capital district.
    District,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegionKind::Province => "province",
            RegionKind::Territory => "territory",
            RegionKind::State => "state",
            RegionKind::District => "district",
        })
    }
}

/// A subdivision of a country.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Display name, e.g. `"Prince Edward Island"`.
    pub name: String,
    /// Kind of jurisdiction.
    pub kind: RegionKind,
    /// Lowercase code, e.g. `"pe"`.
    pub code: String,
}

impl Region {
    /// Create a region. The code is stored lowercased.
    pub fn new(name: impl Into<String>, kind: RegionKind, code: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            code: code.to_ascii_lowercase(),
        }
    }
}

/// The ordered list of a country's valid region codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionRegistry {
    regions: Vec<Region>,
}

impl RegionRegistry {
    /// Build a registry, rejecting duplicate codes.
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for r in &regions {
            hol_core::ensure!(
                seen.insert(r.code.as_str()),
                "region code {:?} is registered twice",
                r.code
            );
        }
        Ok(Self { regions })
    }

    /// All regions, in registration order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Look up a region by code (case-insensitive).
    ///
    /// # Errors
    /// [`Error::UnknownRegion`] if the code is not registered.
    pub fn get(&self, code: &str) -> Result<&Region> {
        self.regions
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnknownRegion(code.to_owned()))
    }

    /// Whether `code` is registered (case-insensitive).
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_ok()
    }

    /// The set of registered codes.
    pub fn codes(&self) -> BTreeSet<&str> {
        self.regions.iter().map(|r| r.code.as_str()).collect()
    }
}

/// Which regions observe a holiday.
///
/// Inclusion and exclusion are separate variants, so a definition can never
/// carry both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Regions {
    /// Every region.
    #[default]
    All,
    /// Only the listed codes.
    Only(BTreeSet<String>),
    /// Every region except the listed codes.
    Except(BTreeSet<String>),
}

impl Regions {
    /// Inclusion form.
    pub fn only<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        Regions::Only(lowercase_set(codes))
    }

    /// Exclusion form.
    pub fn except<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        Regions::Except(lowercase_set(codes))
    }

    /// Whether a holiday with this applicability is observed in `code`.
    ///
    /// `code` must already be lowercase.
    pub fn applies_to(&self, code: &str) -> bool {
        match self {
            Regions::All => true,
            Regions::Only(codes) => codes.contains(code),
            Regions::Except(codes) => !codes.contains(code),
        }
    }

    /// The codes named explicitly by this set (empty for [`Regions::All`]).
    pub fn named_codes(&self) -> impl Iterator<Item = &str> {
        let codes = match self {
            Regions::All => None,
            Regions::Only(c) | Regions::Except(c) => Some(c),
        };
        codes.into_iter().flatten().map(String::as_str)
    }

    /// The same set with every code lowercased.
    pub(crate) fn lowercased(self) -> Self {
        match self {
            Regions::All => Regions::All,
            Regions::Only(c) => Regions::only(c.iter().map(String::as_str)),
            Regions::Except(c) => Regions::except(c.iter().map(String::as_str)),
        }
    }
}

fn lowercase_set<'a>(codes: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    codes.into_iter().map(str::to_ascii_lowercase).collect()
}
