//! End-to-end tests of the rule engine against the Canada table.

use std::collections::BTreeSet;

use hol_core::Error;
use hol_countries::canada;
use hol_rules::{HolidayCalendar, ResolvedHoliday};
use hol_time::{Date, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn cal() -> &'static HolidayCalendar {
    canada::calendar().unwrap()
}

fn find<'a>(holidays: &'a [ResolvedHoliday], name: &str) -> &'a ResolvedHoliday {
    holidays
        .iter()
        .find(|h| h.name == name)
        .unwrap_or_else(|| panic!("{name} missing"))
}

// ─── Year validation ──────────────────────────────────────────────────────────

#[test]
fn year_range_boundaries() {
    for bad in [1899, 2201, 0, -1] {
        assert!(
            matches!(cal().holidays(bad), Err(Error::InvalidYear(_))),
            "{bad} should be rejected"
        );
        assert!(matches!(cal().holiday("Canada Day", bad), Err(Error::InvalidYear(_))));
        assert!(matches!(cal().holidays_by_region("on", bad), Err(Error::InvalidYear(_))));
    }
    assert!(matches!("2022x".parse::<hol_core::Year>(), Err(Error::InvalidYear(_))));
    assert!(cal().holidays(1900).is_ok());
    assert!(cal().holidays(2200).is_ok());
}

#[test]
fn every_supported_year_resolves() {
    for y in 1900..=2200 {
        let holidays = cal().holidays(y).unwrap();
        assert_eq!(holidays.len(), 20, "{y}");
        for h in &holidays {
            assert!(h.observance_date >= h.date, "{h} in {y}");
        }
    }
}

// ─── Lookups ──────────────────────────────────────────────────────────────────

#[test]
fn canada_day_lookup() {
    let h = cal().holiday("Canada Day", 2025).unwrap();
    assert_eq!(h.name, "Canada Day");
    assert_eq!(h.date, date(2025, 7, 1));
    assert_eq!(h.date.month().number(), 7);
    assert_eq!(h.date.day(), 1);
    assert!(h.is_public_holiday);
}

#[test]
fn unknown_holiday() {
    assert_eq!(
        cal().holiday("Dominion Day", 2025),
        Err(Error::UnknownHoliday("Dominion Day".into()))
    );
}

#[test]
fn table_order_is_preserved() {
    let names: Vec<_> = cal()
        .holidays(2025)
        .unwrap()
        .into_iter()
        .map(|h| h.name)
        .collect();
    let expected: Vec<_> = canada::definitions().into_iter().map(|d| d.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn sorted_view_is_chronological() {
    let sorted = cal().holidays_sorted(2024).unwrap();
    assert!(sorted.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(sorted.first().unwrap().name, "New Year's Day");
    assert_eq!(sorted.last().unwrap().name, "Boxing Day");
}

// ─── Date rules ───────────────────────────────────────────────────────────────

#[test]
fn known_dates_2025() {
    let hs = cal().holidays(2025).unwrap();
    let expect = [
        ("New Year's Day", (2025, 1, 1), (2025, 1, 1)),
        ("Family Day", (2025, 2, 17), (2025, 2, 17)),
        ("Saint Patrick's Day", (2025, 3, 17), (2025, 3, 17)),
        ("Good Friday", (2025, 4, 18), (2025, 4, 18)),
        ("Easter Monday", (2025, 4, 21), (2025, 4, 21)),
        ("Saint George's Day", (2025, 4, 21), (2025, 4, 21)),
        ("Victoria Day", (2025, 5, 19), (2025, 5, 19)),
        ("Discovery Day", (2025, 6, 23), (2025, 6, 23)),
        ("Orangemen's Day", (2025, 7, 14), (2025, 7, 14)),
        ("Civic Holiday", (2025, 8, 4), (2025, 8, 4)),
        ("Yukon Discovery Day", (2025, 8, 18), (2025, 8, 18)),
        ("Labour Day", (2025, 9, 1), (2025, 9, 1)),
        ("Thanksgiving", (2025, 10, 13), (2025, 10, 13)),
        ("Christmas Day", (2025, 12, 25), (2025, 12, 25)),
        ("Boxing Day", (2025, 12, 26), (2025, 12, 26)),
    ];
    for (name, (y, m, d), (oy, om, od)) in expect {
        let h = find(&hs, name);
        assert_eq!(h.date, date(y, m, d), "{name} date");
        assert_eq!(h.observance_date, date(oy, om, od), "{name} observance");
    }
}

#[test]
fn weekend_observances_2023() {
    let hs = cal().holidays(2023).unwrap();
    // Jan 1, Jul 1, Sep 30 and Nov 11 2023 all fall on a weekend.
    assert_eq!(find(&hs, "New Year's Day").observance_date, date(2023, 1, 2));
    assert_eq!(find(&hs, "Canada Day").observance_date, date(2023, 7, 3));
    assert_eq!(
        find(&hs, "National Day for Truth and Reconciliation").observance_date,
        date(2023, 10, 2)
    );
    assert_eq!(find(&hs, "Remembrance Day").observance_date, date(2023, 11, 13));
    // Saint-Jean-Baptiste Day keeps its date.
    let sjb = find(&hs, "Saint-Jean-Baptiste Day");
    assert_eq!(sjb.observance_date, sjb.date);
}

#[test]
fn good_friday_is_two_days_before_easter() {
    for y in 2000..=2050 {
        let hs = cal().holidays(y).unwrap();
        let friday = find(&hs, "Good Friday").date;
        let monday = find(&hs, "Easter Monday").date;
        assert_eq!(friday.days_between(monday), 3, "{y}");
        assert_eq!(friday.weekday(), Weekday::Friday);
    }
}

// ─── Relative rule ────────────────────────────────────────────────────────────

#[test]
fn boxing_day_follows_christmas() {
    // (year, Christmas observed, Boxing Day observed)
    let cases = [
        (2022, (12, 26), (12, 27)), // Christmas on Sunday
        (2025, (12, 25), (12, 26)), // Thursday
        (2026, (12, 25), (12, 28)), // Friday: skip the weekend
        (2027, (12, 27), (12, 28)), // Saturday
    ];
    for (y, (cm, cd), (bm, bd)) in cases {
        let hs = cal().holidays(y).unwrap();
        let christmas = find(&hs, "Christmas Day").observance_date;
        let boxing = find(&hs, "Boxing Day");
        assert_eq!(christmas, date(y as u16, cm, cd), "Christmas {y}");
        assert_eq!(boxing.date, date(y as u16, 12, 26));
        assert_eq!(boxing.observance_date, date(y as u16, bm, bd), "Boxing Day {y}");
        let gap = if christmas.weekday() == Weekday::Friday { 3 } else { 1 };
        assert_eq!(christmas.days_between(boxing.observance_date), gap);
    }
}

// ─── Regions ──────────────────────────────────────────────────────────────────

#[test]
fn regions_registry() {
    let codes = cal().region_codes();
    assert_eq!(codes.len(), 13);
    assert!(codes.contains("on") && codes.contains("yt"));
    assert_eq!(cal().region("PE").unwrap().name, "Prince Edward Island");
    assert_eq!(cal().region("nu").unwrap().kind.to_string(), "territory");
    let names: BTreeSet<_> = cal().regions().iter().map(|r| r.code.as_str()).collect();
    assert_eq!(names, codes);
}

#[test]
fn nationwide_holidays_appear_everywhere() {
    for code in cal().region_codes() {
        let hs = cal().holidays_by_region(code, 2025).unwrap();
        for name in ["New Year's Day", "Good Friday", "Canada Day", "Labour Day", "Christmas Day"] {
            assert!(
                hs.iter().any(|h| h.display_name == name),
                "{name} missing in {code}"
            );
        }
        assert!(hs.iter().all(|h| h.region_code == code));
    }
}

#[test]
fn inclusion_and_exclusion() {
    let names_in = |code: &str| -> Vec<String> {
        cal()
            .holidays_by_region(code, 2025)
            .unwrap()
            .into_iter()
            .map(|h| h.display_name)
            .collect()
    };
    // Orangemen's Day: Newfoundland only.
    for code in cal().region_codes() {
        let has = names_in(code).iter().any(|n| n == "Orangemen's Day");
        assert_eq!(has, code == "nl", "{code}");
    }
    // The two Discovery Days belong to different regions.
    for code in cal().region_codes() {
        let names = names_in(code);
        assert_eq!(names.iter().any(|n| n == "Discovery Day"), code == "nl", "{code}");
        assert_eq!(names.iter().any(|n| n == "Yukon Discovery Day"), code == "yt", "{code}");
    }
    // Remembrance Day: everywhere except MB, NS, ON, QC.
    for code in cal().region_codes() {
        let has = names_in(code).iter().any(|n| n == "Remembrance Day");
        assert_eq!(has, !["mb", "ns", "on", "qc"].contains(&code), "{code}");
    }
}

#[test]
fn regional_lists() {
    let on: Vec<_> = cal()
        .holidays_by_region("on", 2025)
        .unwrap()
        .into_iter()
        .map(|h| h.display_name)
        .collect();
    assert_eq!(
        on,
        [
            "New Year's Day",
            "Family Day",
            "Good Friday",
            "Easter Monday",
            "Victoria Day",
            "Canada Day",
            "Civic Holiday",
            "Labour Day",
            "Thanksgiving",
            "Christmas Day",
            "Boxing Day",
        ]
    );

    let qc: Vec<_> = cal()
        .holidays_by_region("QC", 2025)
        .unwrap()
        .into_iter()
        .map(|h| h.display_name)
        .collect();
    assert_eq!(
        qc,
        [
            "New Year's Day",
            "Good Friday",
            "Easter Monday",
            "National Patriots' Day (Victoria Day)",
            "Fête nationale du Québec (Saint-Jean-Baptiste Day)",
            "Canada Day",
            "Labour Day",
            "Action de grâce (Thanksgiving)",
            "Christmas Day",
            "Boxing Day",
        ]
    );
}

#[test]
fn name_overrides() {
    let family = |code: &str| {
        cal()
            .holidays_by_region(code, 2024)
            .unwrap()
            .into_iter()
            .find(|h| h.date == date(2024, 2, 19))
            .map(|h| h.display_name)
    };
    assert_eq!(family("mb").as_deref(), Some("Louis Riel Day (Family Day)"));
    assert_eq!(family("ns").as_deref(), Some("Heritage Day (Family Day)"));
    assert_eq!(family("pe").as_deref(), Some("Islander Day (Family Day)"));
    assert_eq!(family("on").as_deref(), Some("Family Day"));
    assert_eq!(family("qc"), None);
}

#[test]
fn unknown_region_fails_closed() {
    assert_eq!(
        cal().holidays_by_region("zz", 2025),
        Err(Error::UnknownRegion("zz".into()))
    );
    assert!(cal().region("zz").is_err());
}

// ─── Queries ──────────────────────────────────────────────────────────────────

#[test]
fn is_holiday_queries() {
    assert!(cal().is_holiday(date(2025, 7, 1)).unwrap());
    assert!(cal().is_holiday(date(2023, 7, 3)).unwrap());
    assert!(!cal().is_holiday(date(2023, 7, 1)).unwrap());
    // Regional or informal days are not nationwide public holidays.
    assert!(!cal().is_holiday(date(2025, 2, 17)).unwrap());
    assert!(!cal().is_holiday(date(2025, 4, 21)).unwrap());

    assert!(cal().is_holiday_in("on", date(2025, 2, 17)).unwrap());
    assert!(!cal().is_holiday_in("qc", date(2025, 2, 17)).unwrap());
    assert!(!cal().is_holiday_in("on", date(2025, 8, 4)).unwrap());
    assert!(cal().is_holiday_in("qc", date(2025, 6, 24)).unwrap());
    assert!(cal().is_holiday_in("zz", date(2025, 6, 24)).is_err());
}

#[test]
fn next_holiday_queries() {
    let next = cal().next_holiday("on", date(2025, 6, 2)).unwrap().unwrap();
    assert_eq!(next.display_name, "Canada Day");

    let same_day = cal().next_holiday("on", date(2025, 7, 1)).unwrap().unwrap();
    assert_eq!(same_day.display_name, "Canada Day");

    let rollover = cal().next_holiday("on", date(2025, 12, 27)).unwrap().unwrap();
    assert_eq!(rollover.display_name, "New Year's Day");
    assert_eq!(rollover.observance_date, date(2026, 1, 1));

    assert_eq!(cal().next_holiday("on", date(2200, 12, 30)).unwrap(), None);
}

#[test]
fn built_from_table_equals_memoized() {
    let fresh = HolidayCalendar::from_table(&canada::Canada).unwrap();
    assert_eq!(fresh.holidays(2030).unwrap(), cal().holidays(2030).unwrap());
}

#[cfg(feature = "serde")]
#[test]
fn regional_holiday_serializes_as_plain_data() {
    let h = cal()
        .holidays_by_region("mb", 2024)
        .unwrap()
        .into_iter()
        .find(|h| h.display_name.starts_with("Louis Riel"))
        .unwrap();
    let json = serde_json::to_value(&h).unwrap();
    assert_eq!(json["display_name"], "Louis Riel Day (Family Day)");
    assert_eq!(json["date"], "2024-02-19");
    assert_eq!(json["region_code"], "mb");
    assert_eq!(json["categories"][0], "regional");
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn resolution_is_deterministic(y in 1900i32..=2200) {
        prop_assert_eq!(cal().holidays(y).unwrap(), cal().holidays(y).unwrap());
    }

    #[test]
    fn weekend_shifted_days_land_on_weekdays(y in 1900i32..=2200) {
        let hs = cal().holidays(y).unwrap();
        for name in ["New Year's Day", "Canada Day", "Remembrance Day", "Christmas Day"] {
            let h = find(&hs, name);
            prop_assert!(!h.observance_date.weekday().is_weekend());
            if !h.date.weekday().is_weekend() {
                prop_assert_eq!(h.observance_date, h.date);
            }
        }
    }

    #[test]
    fn regional_view_is_a_subset(y in 1900i32..=2200, idx in 0usize..13) {
        let code = canada::regions()[idx].code.clone();
        let national = cal().holidays(y).unwrap();
        let regional = cal().holidays_by_region(&code, y).unwrap();
        prop_assert!(regional.len() <= national.len());
        for r in &regional {
            prop_assert!(national.iter().any(|n| n.date == r.date
                && n.observance_date == r.observance_date
                && r.display_name.contains(n.name.as_str())));
        }
    }
}
