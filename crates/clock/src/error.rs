//! Error types for the almanac-clock crate.

use almanac_calendar::CalendarError;

/// Error type for all fallible operations in the almanac-clock crate.
///
/// Zone resolution failures are configuration errors: nothing here falls
/// back to UTC or to the host zone on its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Returned when a zone identifier is not in the zone database.
    #[error("unknown time zone: {zone:?}")]
    UnknownZone {
        /// The unresolved identifier.
        zone: String,
    },

    /// Returned when the host's configured zone cannot be determined.
    #[error("cannot determine the system time zone: {reason}")]
    SystemZone {
        /// Why the lookup failed.
        reason: String,
    },

    /// Returned when the system clock cannot be read as an instant.
    #[error("system clock unavailable: {reason}")]
    ClockUnavailable {
        /// Why the clock could not be used.
        reason: String,
    },

    /// Returned when a local date-time falls in a gap (for example a
    /// daylight-saving transition) of the given zone.
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime {
        /// The local date-time that was requested.
        local: String,
        /// The zone in which it does not exist.
        zone: String,
    },

    /// Returned when an instant cannot be represented.
    #[error("instant {millis} ms since the Unix epoch is out of range")]
    InstantOutOfRange {
        /// The offending instant.
        millis: i64,
    },

    /// Wraps an error from the almanac-calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_zone() {
        let err = ClockError::UnknownZone {
            zone: "Mars/Olympus".to_string(),
        };
        assert_eq!(err.to_string(), "unknown time zone: \"Mars/Olympus\"");
    }

    #[test]
    fn calendar_errors_pass_through() {
        let err: ClockError = CalendarError::InvalidMonth { month: 13 }.into();
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ClockError>();
    }
}
