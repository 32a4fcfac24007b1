//! Resolved IANA time zones.

use std::fmt;
use std::str::FromStr;

use almanac_calendar::DateTime;
use chrono::{Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::ClockError;

/// A zone from the compiled-in IANA database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zone(Tz);

impl Zone {
    /// Looks up an IANA identifier such as `Europe/Paris`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::UnknownZone`] if the identifier is not in the
    /// database. Matching is case-sensitive.
    pub fn resolve(name: &str) -> Result<Self, ClockError> {
        let tz = name.parse::<Tz>().map_err(|_| ClockError::UnknownZone {
            zone: name.to_string(),
        })?;
        debug!(zone = tz.name(), "resolved time zone");
        Ok(Self(tz))
    }

    /// Coordinated Universal Time.
    pub fn utc() -> Self {
        Self(chrono_tz::UTC)
    }

    /// The zone the host is configured with.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::SystemZone`] if the host zone cannot be read,
    /// or [`ClockError::UnknownZone`] if it is not in the database.
    pub fn system_default() -> Result<Self, ClockError> {
        let name = iana_time_zone::get_timezone().map_err(|e| ClockError::SystemZone {
            reason: e.to_string(),
        })?;
        debug!(zone = %name, "read system time zone");
        Self::resolve(&name)
    }

    /// Resolves the zone identifier attached to `value`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::UnknownZone`] if the attached identifier is
    /// not in the database.
    pub fn attached_to(value: &DateTime) -> Result<Option<Self>, ClockError> {
        value.zone().map(Self::resolve).transpose()
    }

    /// The canonical IANA identifier.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Total UTC offset in seconds in effect at `instant`, daylight saving
    /// included.
    pub fn offset_seconds_at(&self, instant: chrono::DateTime<Utc>) -> i32 {
        self.0
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc()
    }

    pub(crate) fn tz(&self) -> Tz {
        self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zone {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(rfc3339: &str) -> chrono::DateTime<Utc> {
        chrono::DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn resolve_known_zones() {
        assert_eq!(Zone::resolve("Europe/Paris").unwrap().name(), "Europe/Paris");
        assert_eq!(Zone::resolve("Africa/Cairo").unwrap().name(), "Africa/Cairo");
        assert_eq!(Zone::utc().name(), "UTC");
    }

    #[test]
    fn resolve_unknown_zone() {
        assert_eq!(
            Zone::resolve("Mars/Olympus").unwrap_err(),
            ClockError::UnknownZone {
                zone: "Mars/Olympus".to_string()
            }
        );
        assert!("".parse::<Zone>().is_err());
    }

    #[test]
    fn offsets_follow_daylight_saving() {
        let paris = Zone::resolve("Europe/Paris").unwrap();
        assert_eq!(paris.offset_seconds_at(instant("2024-07-01T12:00:00Z")), 7200);
        assert_eq!(paris.offset_seconds_at(instant("2024-01-15T12:00:00Z")), 3600);
        let perth = Zone::resolve("Australia/Perth").unwrap();
        assert_eq!(perth.offset_seconds_at(instant("2024-07-01T12:00:00Z")), 8 * 3600);
    }

    #[test]
    fn attached_zone() {
        let value = DateTime::for_date_only(2024, 1, 1)
            .unwrap()
            .with_zone("Asia/Tokyo")
            .unwrap();
        assert_eq!(
            Zone::attached_to(&value).unwrap(),
            Some(Zone::resolve("Asia/Tokyo").unwrap())
        );
        assert_eq!(Zone::attached_to(&value.without_zone()).unwrap(), None);
        let bogus = value.with_zone("Nowhere/Special").unwrap();
        assert!(Zone::attached_to(&bogus).is_err());
    }
}
