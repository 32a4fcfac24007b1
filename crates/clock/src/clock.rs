//! Reading the current instant and turning it into calendar values.

use std::time::{SystemTime, UNIX_EPOCH};

use almanac_calendar::DateTime;
use chrono::Utc;
use tracing::trace;

use crate::error::ClockError;
use crate::instant::{from_instant, to_instant};
use crate::zone::Zone;

/// A source of the current instant.
pub trait Clock {
    /// Returns the current instant in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::ClockUnavailable`] if no instant can be read.
    fn now_utc(&self) -> Result<chrono::DateTime<Utc>, ClockError>;
}

/// The operating system's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> Result<chrono::DateTime<Utc>, ClockError> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ClockError::ClockUnavailable {
                reason: e.to_string(),
            })?;
        let secs = i64::try_from(since_epoch.as_secs()).map_err(|e| {
            ClockError::ClockUnavailable {
                reason: e.to_string(),
            }
        })?;
        chrono::DateTime::from_timestamp(secs, since_epoch.subsec_nanos()).ok_or_else(|| {
            ClockError::ClockUnavailable {
                reason: format!("{secs} s since the Unix epoch is not representable"),
            }
        })
    }
}

/// A clock stopped at a fixed instant, for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(chrono::DateTime<Utc>);

impl FixedClock {
    /// Stops the clock at `instant`.
    pub fn new(instant: chrono::DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Stops the clock at `millis` milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InstantOutOfRange`] if chrono cannot
    /// represent the instant.
    pub fn from_millis(millis: i64) -> Result<Self, ClockError> {
        chrono::DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or(ClockError::InstantOutOfRange { millis })
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> Result<chrono::DateTime<Utc>, ClockError> {
        Ok(self.0)
    }
}

/// Produces "now" and "today" values as observed in a zone.
#[derive(Debug, Clone, Default)]
pub struct ClockSource<C = SystemClock> {
    clock: C,
}

impl ClockSource<SystemClock> {
    /// A source backed by the system clock.
    pub fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ClockSource<C> {
    /// A source backed by `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The current date-time in `zone`, with the zone attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock cannot be read or the instant is
    /// outside the supported calendar range.
    pub fn now(&self, zone: &Zone) -> Result<DateTime, ClockError> {
        let instant = self.clock.now_utc()?;
        trace!(%instant, zone = zone.name(), "read clock");
        from_instant(instant, zone)
    }

    /// The current date in `zone`, date-only, with the zone attached.
    ///
    /// # Errors
    ///
    /// Same as [`now`](Self::now).
    pub fn today(&self, zone: &Zone) -> Result<DateTime, ClockError> {
        Ok(self.now(zone)?.date_only())
    }

    /// True if `value`, read as a local time in `zone`, is after the
    /// current instant.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock cannot be read or the local time does
    /// not exist in `zone`.
    pub fn is_in_the_future(&self, value: &DateTime, zone: &Zone) -> Result<bool, ClockError> {
        Ok(to_instant(value, zone)? > self.clock.now_utc()?)
    }

    /// True if `value`, read as a local time in `zone`, is before the
    /// current instant.
    ///
    /// # Errors
    ///
    /// Same as [`is_in_the_future`](Self::is_in_the_future).
    pub fn is_in_the_past(&self, value: &DateTime, zone: &Zone) -> Result<bool, ClockError> {
        Ok(to_instant(value, zone)? < self.clock.now_utc()?)
    }
}

/// The current date-time in `zone` from the system clock.
///
/// # Errors
///
/// See [`ClockSource::now`].
pub fn now(zone: &Zone) -> Result<DateTime, ClockError> {
    ClockSource::system().now(zone)
}

/// The current date in `zone` from the system clock.
///
/// # Errors
///
/// See [`ClockSource::today`].
pub fn today(zone: &Zone) -> Result<DateTime, ClockError> {
    ClockSource::system().today(zone)
}
