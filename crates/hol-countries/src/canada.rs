//! Canadian statutory holidays and observances.
//!
//! Regions are the ten provinces and three territories, keyed by lowercase
//! postal abbreviation. Which jurisdictions observe which day is jurisdiction
//! data and changes over time; this table reflects current practice.

use std::sync::OnceLock;

use hol_core::errors::Result;
use hol_rules::{
    Category, DateFn, DateRule, HolidayCalendar, HolidayDefinition, HolidayTable,
    ObservanceRule, Region, RegionKind, Regions, RelativeTransform, YearFn,
};
use hol_time::{Month, Weekday};

/// Canada holiday table.
///
/// Holidays, in table order:
/// * New Year's Day (Jan 1, weekend → Monday)
/// * Family Day (3rd Monday of February; Louis Riel Day, Heritage Day, Islander Day)
/// * Saint Patrick's Day (NL, Monday closest to Mar 17)
/// * Good Friday (Easter − 2)
/// * Easter Monday (Easter + 1)
/// * Saint George's Day (NL, Monday closest to Apr 23)
/// * Victoria Day (Monday preceding May 25; National Patriots' Day in QC)
/// * National Indigenous Peoples Day (NT, YT, Jun 21)
/// * Discovery Day (NL, Monday closest to Jun 24)
/// * Saint-Jean-Baptiste Day (QC, Jun 24)
/// * Canada Day (Jul 1, weekend → Monday)
/// * Orangemen's Day (NL, Monday closest to Jul 12)
/// * Civic Holiday (1st Monday of August, regional names)
/// * Yukon Discovery Day (YT, 3rd Monday of August)
/// * Labour Day (1st Monday of September)
/// * National Day for Truth and Reconciliation (Sep 30, weekend → Monday)
/// * Thanksgiving (2nd Monday of October)
/// * Remembrance Day (Nov 11, weekend → Monday)
/// * Christmas Day (Dec 25, weekend → Monday)
/// * Boxing Day (day after Christmas is observed, skipping the weekend)
#[derive(Debug, Clone, Copy, Default)]
pub struct Canada;

impl HolidayTable for Canada {
    fn name(&self) -> &str {
        "Canada"
    }

    fn definitions(&self) -> Vec<HolidayDefinition> {
        definitions()
    }

    fn regions(&self) -> Vec<Region> {
        regions()
    }
}

/// The validated Canada calendar, built on first use.
pub fn calendar() -> Result<&'static HolidayCalendar> {
    static CALENDAR: OnceLock<Result<HolidayCalendar>> = OnceLock::new();
    CALENDAR
        .get_or_init(|| HolidayCalendar::from_table(&Canada))
        .as_ref()
        .map_err(Clone::clone)
}

/// Provinces and territories.
pub fn regions() -> Vec<Region> {
    use RegionKind::{Province, Territory};
    [
        ("Alberta", Province, "ab"),
        ("British Columbia", Province, "bc"),
        ("Manitoba", Province, "mb"),
        ("New Brunswick", Province, "nb"),
        ("Newfoundland and Labrador", Province, "nl"),
        ("Nova Scotia", Province, "ns"),
        ("Northwest Territories", Territory, "nt"),
        ("Nunavut", Territory, "nu"),
        ("Ontario", Province, "on"),
        ("Prince Edward Island", Province, "pe"),
        ("Quebec", Province, "qc"),
        ("Saskatchewan", Province, "sk"),
        ("Yukon", Territory, "yt"),
    ]
    .into_iter()
    .map(|(name, kind, code)| Region::new(name, kind, code))
    .collect()
}

/// The national holiday table.
pub fn definitions() -> Vec<HolidayDefinition> {
    use Category::{National, Regional, Religious};

    let monday = Weekday::Monday;
    let weekend_shift = ObservanceRule::PostWeekendShift;

    vec![
        HolidayDefinition::new("New Year's Day", DateRule::fixed(Month::January, 1))
            .observed(weekend_shift.clone())
            .category(National),
        HolidayDefinition::new("Family Day", DateRule::nth_weekday(Month::February, monday, 3))
            .regions(Regions::only(["ab", "bc", "mb", "nb", "ns", "on", "pe", "sk"]))
            .rename("mb", "Louis Riel Day")
            .rename("ns", "Heritage Day")
            .rename("pe", "Islander Day")
            .category(Regional),
        HolidayDefinition::new(
            "Saint Patrick's Day",
            DateRule::from_date(DateFn::ClosestMonday, Month::March, 17),
        )
        .regions(Regions::only(["nl"]))
        .informal()
        .category(Regional),
        HolidayDefinition::new("Good Friday", DateRule::from_year(YearFn::GoodFriday))
            .category(National)
            .category(Religious),
        HolidayDefinition::new("Easter Monday", DateRule::from_year(YearFn::EasterMonday))
            .informal()
            .describe("Observed by federal employees; not a statutory holiday in most provinces.")
            .category(Religious),
        HolidayDefinition::new(
            "Saint George's Day",
            DateRule::from_date(DateFn::ClosestMonday, Month::April, 23),
        )
        .regions(Regions::only(["nl"]))
        .informal()
        .category(Regional),
        HolidayDefinition::new(
            "Victoria Day",
            DateRule::from_date(DateFn::MondayBefore, Month::May, 25),
        )
        .regions(Regions::except(["nb", "nl", "ns", "pe"]))
        .rename("qc", "National Patriots' Day")
        .describe("The Monday preceding May 25.")
        .category(National),
        HolidayDefinition::new(
            "National Indigenous Peoples Day",
            DateRule::fixed(Month::June, 21),
        )
        .regions(Regions::only(["nt", "yt"]))
        .category(Regional),
        HolidayDefinition::new(
            "Discovery Day",
            DateRule::from_date(DateFn::ClosestMonday, Month::June, 24),
        )
        .regions(Regions::only(["nl"]))
        .describe("Marks John Cabot's 1497 landfall in Newfoundland.")
        .category(Regional),
        HolidayDefinition::new("Saint-Jean-Baptiste Day", DateRule::fixed(Month::June, 24))
            .regions(Regions::only(["qc"]))
            .rename("qc", "Fête nationale du Québec")
            .category(Regional),
        HolidayDefinition::new("Canada Day", DateRule::fixed(Month::July, 1))
            .observed(weekend_shift.clone())
            .category(National),
        HolidayDefinition::new(
            "Orangemen's Day",
            DateRule::from_date(DateFn::ClosestMonday, Month::July, 12),
        )
        .regions(Regions::only(["nl"]))
        .category(Regional),
        HolidayDefinition::new("Civic Holiday", DateRule::nth_weekday(Month::August, monday, 1))
            .regions(Regions::only(["ab", "bc", "mb", "nb", "ns", "nt", "nu", "on", "sk"]))
            .rename("ab", "Heritage Day")
            .rename("bc", "British Columbia Day")
            .rename("mb", "Terry Fox Day")
            .rename("nb", "New Brunswick Day")
            .rename("ns", "Natal Day")
            .rename("sk", "Saskatchewan Day")
            .informal()
            .category(Regional),
        HolidayDefinition::new(
            "Yukon Discovery Day",
            DateRule::nth_weekday(Month::August, monday, 3),
        )
        .regions(Regions::only(["yt"]))
        .describe("Commemorates the 1896 discovery of gold in the Klondike.")
        .category(Regional),
        HolidayDefinition::new("Labour Day", DateRule::nth_weekday(Month::September, monday, 1))
            .category(National),
        HolidayDefinition::new(
            "National Day for Truth and Reconciliation",
            DateRule::fixed(Month::September, 30),
        )
        .observed(weekend_shift.clone())
        .regions(Regions::only(["bc", "mb", "nt", "nu", "pe", "yt"]))
        .category(National),
        HolidayDefinition::new("Thanksgiving", DateRule::nth_weekday(Month::October, monday, 2))
            .regions(Regions::except(["nb", "nl", "ns", "pe"]))
            .rename("qc", "Action de grâce")
            .category(National),
        HolidayDefinition::new("Remembrance Day", DateRule::fixed(Month::November, 11))
            .observed(weekend_shift.clone())
            .regions(Regions::except(["mb", "ns", "on", "qc"]))
            .category(National),
        HolidayDefinition::new("Christmas Day", DateRule::fixed(Month::December, 25))
            .observed(weekend_shift)
            .category(National)
            .category(Religious),
        HolidayDefinition::new("Boxing Day", DateRule::fixed(Month::December, 26))
            .observed(ObservanceRule::relative_to(
                "Christmas Day",
                RelativeTransform::WeekdayAfter,
            ))
            .category(National),
    ]
}
