//! Weekday-based date adjustments used by holiday rules.

use crate::date::Date;
use hol_core::errors::Result;

/// Move a Saturday or Sunday forward to the following Monday.
///
/// Saturday → +2 days, Sunday → +1 day, any other day is returned unchanged.
pub fn post_weekend_shift(date: Date) -> Result<Date> {
    match date.weekday_index() {
        6 => date.add_days(2),
        7 => date.add_days(1),
        _ => Ok(date),
    }
}

/// The Monday closest to `date`.
///
/// Monday is returned as-is, Tuesday to Thursday go back to the Monday of the
/// same week, Friday to Sunday go forward to the Monday of the next week.
pub fn closest_monday(date: Date) -> Result<Date> {
    let idx = date.weekday_index() as i32;
    let start_of_week = 1 - idx;
    if idx <= 4 {
        date.add_days(start_of_week)
    } else {
        date.add_days(start_of_week + 7)
    }
}

/// The last Monday strictly before `date`.
pub fn monday_before(date: Date) -> Result<Date> {
    match date.weekday_index() {
        1 => date.add_days(-7),
        idx => date.add_days(1 - idx as i32),
    }
}

/// The day after `date`, skipping the weekend when `date` is a Friday.
pub fn weekday_after(date: Date) -> Result<Date> {
    match date.weekday_index() {
        5 => date.add_days(3),
        _ => date.add_days(1),
    }
}
