//! Paschal dates.
//!
//! Easter Sunday is computed with the anonymous Gregorian (Meeus/Jones/Butcher)
//! algorithm using integer arithmetic only. Good Friday and Easter Monday are
//! fixed offsets from it.

use crate::date::Date;
use hol_core::errors::Result;

/// Easter Sunday of `year` in the Gregorian calendar.
pub fn paschal_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    let month = n / 31;
    let day = n % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

/// Good Friday: two days before Easter Sunday.
pub fn good_friday(year: u16) -> Result<Date> {
    paschal_sunday(year)?.add_days(-2)
}

/// Easter Monday: the day after Easter Sunday.
pub fn easter_monday(year: u16) -> Result<Date> {
    paschal_sunday(year)?.add_days(1)
}
