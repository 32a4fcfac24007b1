//! Read-only commands: `now`, `today`, `format` and `info`.

use almanac_calendar::DateTime;
use almanac_clock::ClockSource;
use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::{ClockArgs, FormatArgs, InfoArgs};
use crate::convert::Settings;

pub fn run_now(args: ClockArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("now").entered();
    let zone = settings.zone(args.zone)?;
    let now = ClockSource::system().now(&zone)?;
    info!(zone = zone.name(), %now, "read current date-time");
    print_value(&now, args, settings, &settings.datetime_format)
}

pub fn run_today(args: ClockArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let zone = settings.zone(args.zone)?;
    let today = ClockSource::system().today(&zone)?;
    info!(zone = zone.name(), %today, "read current date");
    print_value(&today, args, settings, &settings.date_format)
}

fn print_value(
    value: &DateTime,
    args: ClockArgs,
    settings: &Settings,
    default_template: &str,
) -> Result<()> {
    let locale = settings.locale(args.locale)?;
    let template = args.format.as_deref().unwrap_or(default_template);
    let text = value
        .format_with_locale(template, locale)
        .with_context(|| format!("cannot format with template {template:?}"))?;
    println!("{text}");
    Ok(())
}

pub fn run_format(args: FormatArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("format").entered();
    let locale = settings.locale(args.locale)?;
    let text = args
        .value
        .format_with_locale(&args.template, locale)
        .with_context(|| format!("cannot format {} with {:?}", args.value, args.template))?;
    println!("{text}");
    Ok(())
}

pub fn run_info(args: InfoArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("info").entered();
    let locale = settings.locale(args.locale)?;
    for (label, value) in describe(&args.value, &locale.names())? {
        println!("{label:<14}{value}");
    }
    Ok(())
}

/// Label/value rows describing the calendar position of `value`.
fn describe(
    value: &DateTime,
    names: &almanac_calendar::NameTable<'_>,
) -> Result<Vec<(&'static str, String)>> {
    let (week_year, week) = value.iso_week();
    Ok(vec![
        ("value", value.to_string()),
        (
            "weekday",
            format!("{} ({})", value.weekday(), value.format_with_names("WWWW", names)?),
        ),
        ("day of year", value.day_of_year().to_string()),
        ("iso week", format!("{week_year:04}-W{week:02}")),
        ("mjd", value.modified_julian_day().to_string()),
        (
            "leap year",
            if value.is_leap_year() { "yes" } else { "no" }.to_string(),
        ),
        ("days in month", value.num_days_in_month().to_string()),
    ])
}
