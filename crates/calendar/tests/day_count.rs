use almanac_calendar::math::{
    self, from_day_count, is_leap_year, iso_week, to_day_count, weekday_from_day_count,
};
use almanac_calendar::{DateTime, MAX_YEAR, MIN_YEAR};

#[test]
fn day_count_roundtrip_full_range() {
    for year in MIN_YEAR..=MAX_YEAR {
        for month in 1..=12u8 {
            for day in 1..=math::days_in_month(year, month) {
                let count = to_day_count(year, month, day);
                assert_eq!(
                    from_day_count(count),
                    (year, month, day),
                    "roundtrip failed for {year}-{month}-{day}"
                );
            }
        }
    }
}

#[test]
fn day_count_is_contiguous() {
    let mut previous = to_day_count(MIN_YEAR, 1, 1) - 1;
    for year in MIN_YEAR..=MAX_YEAR {
        for month in 1..=12u8 {
            for day in 1..=math::days_in_month(year, month) {
                let count = to_day_count(year, month, day);
                assert_eq!(
                    count,
                    previous + 1,
                    "day count not contiguous at {year}-{month}-{day}"
                );
                previous = count;
            }
        }
    }
}

#[test]
fn leap_year_law_matches_rule() {
    for year in -2000..=2400 {
        let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        assert_eq!(is_leap_year(year), expected, "leap year mismatch for {year}");
    }
    let cases: &[(i32, bool)] = &[(1900, false), (2000, true), (2024, true), (2023, false)];
    for &(year, leap) in cases {
        assert_eq!(is_leap_year(year), leap, "is_leap_year({year})");
    }
}

#[test]
fn weekdays_cycle_from_anchor() {
    let anchor = DateTime::for_date_only(2000, 1, 1).unwrap();
    assert_eq!(anchor.weekday(), math::SATURDAY);
    for offset in -800..800 {
        let expected = ((i64::from(math::SATURDAY) - 1 + offset).rem_euclid(7) + 1) as u8;
        assert_eq!(
            weekday_from_day_count(math::ANCHOR_DAY_COUNT + offset),
            expected,
            "weekday mismatch at offset {offset}"
        );
    }
}

#[test]
fn iso_weeks_never_skip_or_repeat() {
    // Walking day by day, the ISO week either stays or advances by one week.
    let start = to_day_count(1990, 1, 1);
    let end = to_day_count(2040, 12, 31);
    let mut previous = iso_week(1990, 1, 1);
    for count in start + 1..=end {
        let (y, m, d) = from_day_count(count);
        let current = iso_week(y, m, d);
        if weekday_from_day_count(count) == math::MONDAY {
            let advanced = if previous.1 == math::iso_weeks_in_year(previous.0) {
                (previous.0 + 1, 1)
            } else {
                (previous.0, previous.1 + 1)
            };
            assert_eq!(current, advanced, "week did not advance on {y}-{m}-{d}");
        } else {
            assert_eq!(current, previous, "week changed mid-week on {y}-{m}-{d}");
        }
        previous = current;
    }
}

#[test]
fn iso_week_year_boundaries() {
    let cases: &[((i32, u8, u8), (i32, u8))] = &[
        ((2018, 12, 31), (2019, 1)),
        ((2021, 1, 1), (2020, 53)),
        ((2021, 1, 3), (2020, 53)),
        ((2008, 12, 29), (2009, 1)),
        ((2010, 1, 3), (2009, 53)),
        ((2023, 1, 1), (2022, 52)),
    ];
    for &((y, m, d), expected) in cases {
        assert_eq!(iso_week(y, m, d), expected, "iso_week({y}-{m}-{d})");
        let value = DateTime::for_date_only(y, m, d).unwrap();
        assert_eq!(value.week_index(), expected.1);
    }
}
