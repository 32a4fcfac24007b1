//! Conversions between calendar values and absolute instants.
//!
//! A [`DateTime`] never converts between zones on its own; everything that
//! needs an offset goes through these functions with an explicit [`Zone`].

use almanac_calendar::{CalendarError, DateTime};
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::ClockError;
use crate::zone::Zone;

/// The calendar fields of `instant` as observed in `zone`, with the zone
/// attached.
///
/// # Errors
///
/// Returns a calendar error if the instant falls outside the supported
/// years.
pub fn from_instant(instant: chrono::DateTime<Utc>, zone: &Zone) -> Result<DateTime, ClockError> {
    let local = instant.with_timezone(&zone.tz()).naive_local();
    let value = DateTime::for_date_time(
        local.year(),
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
        // chrono encodes a leap second as nanosecond >= 1e9.
        local.nanosecond().min(999_999_999),
    )?;
    Ok(value.with_zone(zone.name())?)
}

/// Like [`from_instant`], from milliseconds since the Unix epoch.
///
/// # Errors
///
/// Returns [`ClockError::InstantOutOfRange`] if the instant cannot be
/// represented.
pub fn from_instant_millis(millis: i64, zone: &Zone) -> Result<DateTime, ClockError> {
    let instant = chrono::DateTime::from_timestamp_millis(millis)
        .ok_or(ClockError::InstantOutOfRange { millis })?;
    from_instant(instant, zone)
}

fn naive(value: &DateTime) -> Result<NaiveDateTime, ClockError> {
    let (hour, minute, second, nanosecond) = if value.has_time() {
        (
            value.hour()?,
            value.minute()?,
            value.second()?,
            value.nanosecond()?,
        )
    } else {
        (0, 0, 0, 0)
    };
    NaiveDate::from_ymd_opt(value.year(), u32::from(value.month()), u32::from(value.day()))
        .and_then(|d| {
            d.and_hms_nano_opt(
                u32::from(hour),
                u32::from(minute),
                u32::from(second),
                nanosecond,
            )
        })
        .ok_or_else(|| {
            ClockError::Calendar(CalendarError::Parse {
                input: value.to_string(),
                reason: "not representable as a chrono date-time",
            })
        })
}

/// The instant at which `value`, read as a local time in `zone`, occurs.
///
/// Date-only values mean the start of their day. Ambiguous local times
/// (clocks turned back) resolve to the earlier instant.
///
/// # Errors
///
/// Returns [`ClockError::NonexistentLocalTime`] if the local time was
/// skipped in `zone`.
pub fn to_instant(value: &DateTime, zone: &Zone) -> Result<chrono::DateTime<Utc>, ClockError> {
    let local = naive(value)?;
    zone.tz()
        .from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ClockError::NonexistentLocalTime {
            local: value.to_string(),
            zone: zone.name().to_string(),
        })
}

/// Like [`to_instant`], as milliseconds since the Unix epoch.
///
/// # Errors
///
/// See [`to_instant`].
pub fn to_instant_millis(value: &DateTime, zone: &Zone) -> Result<i64, ClockError> {
    Ok(to_instant(value, zone)?.timestamp_millis())
}

/// Re-expresses a date-time observed in `from` as the same instant
/// observed in `to`.
///
/// This is the only operation that converts between zones.
///
/// # Errors
///
/// Returns [`CalendarError::MissingTime`] for date-only values and
/// [`ClockError::NonexistentLocalTime`] if the value does not exist in
/// `from`.
#[tracing::instrument(skip(value), fields(value = %value, from = from.name(), to = to.name()))]
pub fn change_zone(value: &DateTime, from: &Zone, to: &Zone) -> Result<DateTime, ClockError> {
    if value.is_date_only() {
        return Err(CalendarError::MissingTime {
            operation: "change_zone",
        }
        .into());
    }
    from_instant(to_instant(value, from)?, to)
}
