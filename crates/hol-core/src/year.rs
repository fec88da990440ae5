//! `Year` — a validated calendar year in the supported range.
//!
//! Every year-taking entry point validates its argument through [`Year`]
//! before any resolution work starts.

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// A calendar year in `[Year::MIN, Year::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct Year(u16);

impl Year {
    /// First supported year.
    pub const MIN: u16 = 1900;

    /// Last supported year.
    pub const MAX: u16 = 2200;

    /// Validate `year`.
    ///
    /// # Errors
    /// [`Error::InvalidYear`] if `year` is zero or outside `[1900, 2200]`.
    pub fn new(year: i32) -> Result<Self> {
        if year == 0 {
            return Err(Error::InvalidYear("year 0 does not exist".into()));
        }
        if year < Self::MIN as i32 || year > Self::MAX as i32 {
            return Err(Error::InvalidYear(format!(
                "{year} is outside [{}, {}]",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Year(year as u16))
    }

    /// Return the year number.
    pub fn get(self) -> u16 {
        self.0
    }

    /// The following year, if it is still supported.
    pub fn succ(self) -> Option<Self> {
        (self.0 < Self::MAX).then(|| Year(self.0 + 1))
    }
}

impl TryFrom<i32> for Year {
    type Error = Error;

    fn try_from(year: i32) -> Result<Self> {
        Year::new(year)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> i32 {
        year.0 as i32
    }
}

impl FromStr for Year {
    type Err = Error;

    /// Parse a decimal year; anything that is not an integer is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let n: i32 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidYear(format!("{s:?} is not an integer")))?;
        Year::new(n)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
