//! The classic worked examples, run against one frozen instant.

use almanac_calendar::{DateTime, DayOverflow, Period, math};
use almanac_clock::{Clock, ClockSource, FixedClock, SystemClock, Zone, to_instant};
use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::ExamplesArgs;
use crate::convert::Settings;

pub fn run(args: ExamplesArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("examples").entered();
    let zone = settings.zone(args.zone)?;
    let instant = match &args.at {
        Some(at) => to_instant(at, &zone).with_context(|| format!("invalid --at {at}"))?,
        None => SystemClock.now_utc()?,
    };
    info!(zone = zone.name(), %instant, "running examples");
    let source = ClockSource::new(FixedClock::new(instant));
    for (label, value) in examples(&source, &zone)? {
        println!("{label} : {value}");
    }
    Ok(())
}

/// Every example answered from the same clock reading.
fn examples(source: &ClockSource<FixedClock>, zone: &Zone) -> Result<Vec<(String, String)>> {
    let now = source.now(zone)?;
    let today = source.today(zone)?;
    let cairo = source.now(&Zone::resolve("Africa/Cairo")?)?;
    let paris = source.now(&Zone::resolve("Europe/Paris")?)?;
    let perth = source.now(&Zone::resolve("Australia/Perth")?)?;

    let birthday = DateTime::for_date_only(1995, 5, 16)?;
    let project_start = DateTime::for_date_only(2010, 9, 6)?;
    let jdk_release = DateTime::for_date_only(1996, 1, 23)?;

    let mut rows = vec![
        (
            format!("Current date-time in {}", zone.name()),
            now.format("YYYY-MM-DD hh:mm:ss")?,
        ),
        (
            "Current date-time in Cairo".to_string(),
            cairo.format("YYYY-MM-DD hh:mm:ss (WWWW)")?,
        ),
        (
            "Age of someone born May 16, 1995".to_string(),
            years_between(&birthday, &today).to_string(),
        ),
        (
            "The 3rd Friday of this month".to_string(),
            third_friday(&today)?.format("YYYY-MM-DD")?,
        ),
        (
            "Number of days till Christmas".to_string(),
            days_till_christmas(&today)?.to_string(),
        ),
        (
            "90 days from today".to_string(),
            today.plus_days(90)?.format("YYYY-MM-DD")?,
        ),
        (
            "3 months and 5 days from today".to_string(),
            today
                .plus(
                    &Period::new(0, 3, 5, 0, 0, 0),
                    DayOverflow::FirstDayOfNextMonth,
                )?
                .format("YYYY-MM-DD")?,
        ),
    ];
    let hours = paris.num_seconds_from(&perth)?.div_euclid(3600).rem_euclid(24);
    rows.push((
        "Hours difference between Paris and Perth".to_string(),
        hours.to_string(),
    ));
    rows.push((
        "Weeks since Sep 6, 2010".to_string(),
        (today.week_index_from(&project_start) - 1).to_string(),
    ));
    let midnight = now.plus_days(1)?.start_of_day();
    rows.push((
        "Seconds till midnight".to_string(),
        now.num_seconds_from(&midnight)?.to_string(),
    ));
    rows.push((
        "Output using the 'T' found in ISO formats".to_string(),
        now.format("YYYY-MM-DD|T|hh:mm:ss")?,
    ));
    rows.push((
        "Years since Jan 23, 1996".to_string(),
        years_between(&jdk_release, &today).to_string(),
    ));
    Ok(rows)
}

/// Whole years from `start` to `end`; a year counts once its anniversary is reached.
fn years_between(start: &DateTime, end: &DateTime) -> i32 {
    let years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years - 1
    } else {
        years
    }
}

fn third_friday(today: &DateTime) -> Result<DateTime> {
    let first = today.start_of_month();
    let first_friday = 1 + (math::FRIDAY + 7 - first.weekday()) % 7;
    Ok(DateTime::for_date_only(first.year(), first.month(), first_friday + 14)?)
}

fn days_till_christmas(today: &DateTime) -> Result<i64> {
    let christmas = DateTime::for_date_only(today.year(), 12, 25)?;
    if today.lteq(&christmas) {
        Ok(today.num_days_from(&christmas))
    } else {
        let next = DateTime::for_date_only(today.year() + 1, 12, 25)?;
        Ok(today.num_days_from(&next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_at(local: &str, zone: &Zone) -> ClockSource<FixedClock> {
        let value: DateTime = local.parse().unwrap();
        ClockSource::new(FixedClock::new(to_instant(&value, zone).unwrap()))
    }

    #[test]
    fn classic_output() {
        let toronto = Zone::resolve("America/Toronto").unwrap();
        let source = source_at("2011-06-03 19:50:10", &toronto);
        let rows = examples(&source, &toronto).unwrap();
        let values: Vec<&str> = rows.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(
            values,
            [
                "2011-06-03 19:50:10",
                "2011-06-04 01:50:10 (Saturday)",
                "16",
                "2011-06-17",
                "205",
                "2011-09-01",
                "2011-09-08",
                "6",
                "38",
                "14990",
                "2011-06-03T19:50:10",
                "15",
            ]
        );
        assert_eq!(rows[0].0, "Current date-time in America/Toronto");
    }

    #[test]
    fn third_friday_when_month_starts_on_saturday() {
        // 2024-06-01 was a Saturday.
        let today = DateTime::for_date_only(2024, 6, 12).unwrap();
        assert_eq!(third_friday(&today).unwrap().to_string(), "2024-06-21");
        // 2024-03-01 was a Friday.
        let today = DateTime::for_date_only(2024, 3, 30).unwrap();
        assert_eq!(third_friday(&today).unwrap().to_string(), "2024-03-15");
    }

    #[test]
    fn christmas_rolls_to_next_year() {
        let boxing_day = DateTime::for_date_only(2023, 12, 26).unwrap();
        assert_eq!(days_till_christmas(&boxing_day).unwrap(), 365);
        let christmas = DateTime::for_date_only(2023, 12, 25).unwrap();
        assert_eq!(days_till_christmas(&christmas).unwrap(), 0);
    }

    #[test]
    fn age_counts_birthday() {
        let born = DateTime::for_date_only(2000, 2, 29).unwrap();
        let eve = DateTime::for_date_only(2024, 2, 28).unwrap();
        let day = DateTime::for_date_only(2024, 2, 29).unwrap();
        assert_eq!(years_between(&born, &eve), 23);
        assert_eq!(years_between(&born, &day), 24);
    }
}
