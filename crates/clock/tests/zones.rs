//! Observing one instant from several zones.

use almanac_calendar::DateTime;
use almanac_clock::{ClockError, ClockSource, FixedClock, Zone, change_zone, to_instant_millis};

fn source(millis: i64) -> ClockSource<FixedClock> {
    ClockSource::new(FixedClock::from_millis(millis).unwrap())
}

// 2011-06-03T23:50:09Z
const INSTANT: i64 = 1_307_145_009_000;

#[test]
fn same_instant_different_days() {
    let source = source(INSTANT);
    let expected = [
        ("UTC", "2011-06-03"),
        ("America/Los_Angeles", "2011-06-03"),
        ("Europe/Paris", "2011-06-04"),
        ("Asia/Tokyo", "2011-06-04"),
    ];
    for (name, day) in expected {
        let zone = Zone::resolve(name).unwrap();
        let today = source.today(&zone).unwrap();
        assert_eq!(today.to_string(), day, "zone {name}");
        assert_eq!(today.zone(), Some(name));
    }
}

#[test]
fn now_round_trips_to_the_same_instant() {
    let source = source(INSTANT);
    for name in ["UTC", "Africa/Cairo", "Australia/Perth", "America/St_Johns"] {
        let zone = Zone::resolve(name).unwrap();
        let now = source.now(&zone).unwrap();
        assert_eq!(to_instant_millis(&now, &zone).unwrap(), INSTANT, "zone {name}");
    }
}

#[test]
fn unknown_zone_is_reported() {
    assert_eq!(
        Zone::resolve("Mars/Olympus_Mons").unwrap_err(),
        ClockError::UnknownZone {
            zone: "Mars/Olympus_Mons".to_string()
        }
    );
}

#[test]
fn change_zone_crosses_date_line() {
    let honolulu = Zone::resolve("Pacific/Honolulu").unwrap();
    let auckland = Zone::resolve("Pacific/Auckland").unwrap();
    let evening: DateTime = "2024-01-15 20:00".parse().unwrap();
    let shifted = change_zone(&evening, &honolulu, &auckland).unwrap();
    // Honolulu is UTC-10, Auckland is UTC+13 in January.
    assert_eq!(shifted.to_string(), "2024-01-16 19:00:00");
    let back = change_zone(&shifted, &auckland, &honolulu).unwrap();
    assert_eq!(back.compare_fields(&evening), std::cmp::Ordering::Equal);
}

#[test]
fn future_and_past_against_fixed_clock() {
    let source = source(INSTANT);
    let utc = Zone::utc();
    let yesterday = source.today(&utc).unwrap().minus_days(1).unwrap();
    let tomorrow = source.today(&utc).unwrap().plus_days(1).unwrap();
    assert!(source.is_in_the_past(&yesterday, &utc).unwrap());
    assert!(source.is_in_the_future(&tomorrow, &utc).unwrap());
}
