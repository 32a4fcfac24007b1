use almanac_calendar::{CalendarError, DateTime, DayOverflow, ErrorKind, Period};

fn date(year: i32, month: u8, day: u8) -> DateTime {
    DateTime::for_date_only(year, month, day).unwrap()
}

#[test]
fn one_month_from_month_end() {
    let cases: &[((i32, u8, u8), DayOverflow, (i32, u8, u8))] = &[
        ((2024, 1, 31), DayOverflow::LastDayOfMonth, (2024, 2, 29)),
        ((2024, 1, 31), DayOverflow::FirstDayOfNextMonth, (2024, 3, 1)),
        ((2023, 1, 31), DayOverflow::LastDayOfMonth, (2023, 2, 28)),
        ((2023, 1, 31), DayOverflow::FirstDayOfNextMonth, (2023, 3, 1)),
        ((2024, 3, 31), DayOverflow::LastDayOfMonth, (2024, 4, 30)),
        ((2024, 3, 31), DayOverflow::FirstDayOfNextMonth, (2024, 5, 1)),
        ((2024, 12, 31), DayOverflow::LastDayOfMonth, (2025, 1, 31)),
    ];
    for &((y, m, d), policy, (ey, em, ed)) in cases {
        let result = date(y, m, d)
            .plus(&Period::new(0, 1, 0, 0, 0, 0), policy)
            .unwrap();
        assert_eq!(
            result,
            date(ey, em, ed),
            "{y}-{m}-{d} + 1 month with {policy}"
        );
    }
}

#[test]
fn three_months_from_january_31() {
    let jan31 = date(2023, 1, 31);
    assert_eq!(
        jan31.plus_months(3, DayOverflow::LastDayOfMonth).unwrap(),
        date(2023, 4, 30)
    );
    assert_eq!(
        jan31
            .plus_months(3, DayOverflow::FirstDayOfNextMonth)
            .unwrap(),
        date(2023, 5, 1)
    );
}

#[test]
fn day_arithmetic_is_exact_and_reversible() {
    let start = date(1999, 12, 31);
    for n in [-1_000_000, -366, -1, 0, 1, 59, 60, 366, 1_000_000] {
        let moved = start.plus_days(n).unwrap();
        assert_eq!(start.num_days_from(&moved), n);
        assert_eq!(moved.minus_days(n).unwrap(), start);
    }
}

#[test]
fn period_round_trip_with_time() {
    let start = DateTime::for_date_time(2024, 2, 28, 22, 15, 0, 0).unwrap();
    let p = Period::new(0, 0, 1, 3, 45, 30);
    let later = start.plus(&p, DayOverflow::Abort).unwrap();
    assert_eq!(
        later,
        DateTime::for_date_time(2024, 3, 1, 2, 0, 30, 0).unwrap()
    );
    assert_eq!(later.minus(&p, DayOverflow::Abort).unwrap(), start);
    assert_eq!(
        start.num_seconds_from(&later).unwrap(),
        86_400 + 3 * 3600 + 45 * 60 + 30
    );
}

#[test]
fn seconds_till_midnight() {
    let now = DateTime::for_date_time(2011, 6, 3, 19, 50, 10, 0).unwrap();
    let midnight = now.plus_days(1).unwrap().start_of_day();
    assert_eq!(now.num_seconds_from(&midnight).unwrap(), 14_990);
}

#[test]
fn field_completeness_errors() {
    let a = date(2024, 1, 1);
    let b = date(2024, 6, 1);
    let err = a.num_seconds_from(&b).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldCompleteness);
    let err = a
        .plus(&Period::ZERO.with_seconds(1), DayOverflow::Abort)
        .unwrap_err();
    assert!(matches!(err, CalendarError::MissingTime { .. }));
}

#[test]
fn sorting_uses_calendar_order() {
    let mut values: Vec<DateTime> = [
        "2024-03-01",
        "2023-12-31 23:59:59",
        "2024-03-01 00:00:00",
        "-0001-06-01",
        "2024-02-29",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();
    values.sort();
    let sorted: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(
        sorted,
        [
            "-0001-06-01",
            "2023-12-31 23:59:59",
            "2024-02-29",
            "2024-03-01",
            "2024-03-01 00:00:00",
        ]
    );
}
