//! The immutable date/time value.

use std::cmp::Ordering;
use std::fmt;

use crate::error::CalendarError;
use crate::math::{self, MAX_DAY_COUNT, MAX_YEAR, MIN_DAY_COUNT, MIN_YEAR};
use crate::period::{DayOverflow, Period, Unit};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;

/// Time-of-day fields of a date-time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct TimeOfDay {
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    pub(crate) nanosecond: u32,
}

impl TimeOfDay {
    const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
    };

    const LAST_INSTANT: TimeOfDay = TimeOfDay {
        hour: 23,
        minute: 59,
        second: 59,
        nanosecond: 999_999_999,
    };

    fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self, CalendarError> {
        if hour > 23 {
            return Err(CalendarError::InvalidHour { hour });
        }
        if minute > 59 {
            return Err(CalendarError::InvalidMinute { minute });
        }
        if second > 59 {
            return Err(CalendarError::InvalidSecond { second });
        }
        if nanosecond > 999_999_999 {
            return Err(CalendarError::InvalidNanosecond { nanosecond });
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    fn second_of_day(self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }

    fn nanosecond_of_day(self) -> i64 {
        self.second_of_day() * NANOS_PER_SECOND + i64::from(self.nanosecond)
    }

    /// Inverse of [`nanosecond_of_day`](Self::nanosecond_of_day); `nanos`
    /// must be in `0..NANOS_PER_DAY`.
    fn from_nanosecond_of_day(nanos: i64) -> Self {
        let second_of_day = nanos / NANOS_PER_SECOND;
        Self {
            hour: (second_of_day / 3600) as u8,
            minute: (second_of_day % 3600 / 60) as u8,
            second: (second_of_day % 60) as u8,
            nanosecond: (nanos % NANOS_PER_SECOND) as u32,
        }
    }
}

/// An immutable proleptic Gregorian date, optionally with a time of day
/// and a time-zone identifier.
///
/// A value is either *date-only* or *date-time*: the hour, minute, second
/// and nanosecond fields are present together or not at all. Operations
/// that need them return [`CalendarError::MissingTime`] on a date-only
/// value.
///
/// The zone identifier is metadata. Comparisons and arithmetic work on the
/// stored fields and never convert between zones; conversions are explicit
/// and live in the clock crate.
///
/// The derived ordering is calendar order (date, then time of day, with a
/// date-only value sorting before any time on the same day), using the zone
/// identifier only as a final tiebreaker so that it agrees with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    year: i32,
    month: u8,
    day: u8,
    time: Option<TimeOfDay>,
    zone: Option<String>,
}

fn check_date(year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange {
            year: i64::from(year),
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let max_day = math::days_in_month(year, month);
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            year,
            month,
            day,
            max_day,
        });
    }
    Ok(())
}

fn check_day_count(day_count: i128) -> Result<i64, CalendarError> {
    if day_count < i128::from(MIN_DAY_COUNT) || day_count > i128::from(MAX_DAY_COUNT) {
        return Err(CalendarError::OutOfRange {
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    Ok(day_count as i64)
}

/// Accepts `Area/Location` style identifiers as well as bare names such
/// as `UTC`.
fn check_zone_id(zone: &str) -> Result<(), CalendarError> {
    let well_formed = !zone.is_empty()
        && !zone.starts_with('/')
        && !zone.ends_with('/')
        && !zone.contains("//")
        && zone
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-' | '+'));
    if well_formed {
        Ok(())
    } else {
        Err(CalendarError::InvalidZoneId {
            zone: zone.to_string(),
        })
    }
}

impl DateTime {
    /// Creates a date-only value.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the year is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`], the month is outside 1..=12 or the day
    /// does not exist in that month.
    pub fn for_date_only(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_date(year, month, day)?;
        Ok(Self {
            year,
            month,
            day,
            time: None,
            zone: None,
        })
    }

    /// Creates a date-time value.
    ///
    /// # Errors
    ///
    /// Returns a validation error for any out-of-range date or time field.
    pub fn for_date_time(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Result<Self, CalendarError> {
        check_date(year, month, day)?;
        let time = TimeOfDay::new(hour, minute, second, nanosecond)?;
        Ok(Self {
            year,
            month,
            day,
            time: Some(time),
            zone: None,
        })
    }

    /// Creates a date-only value from a day count (Modified Julian Day).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the day falls outside the
    /// supported years.
    pub fn from_day_count(day_count: i64) -> Result<Self, CalendarError> {
        let day_count = check_day_count(i128::from(day_count))?;
        let (year, month, day) = math::from_day_count(day_count);
        Ok(Self {
            year,
            month,
            day,
            time: None,
            zone: None,
        })
    }

    /// Same fields, attached to `zone`.
    ///
    /// Only the shape of the identifier is checked here; resolving it
    /// against the zone database is the clock's job.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidZoneId`] for malformed identifiers.
    pub fn with_zone(&self, zone: &str) -> Result<Self, CalendarError> {
        check_zone_id(zone)?;
        Ok(Self {
            zone: Some(zone.to_string()),
            ..self.clone()
        })
    }

    /// Same fields, zone-agnostic.
    pub fn without_zone(&self) -> Self {
        Self {
            zone: None,
            ..self.clone()
        }
    }

    /// Same date (and zone) without the time of day.
    pub fn date_only(&self) -> Self {
        Self {
            time: None,
            ..self.clone()
        }
    }

    /// Same date (and zone) at the given time of day.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range time fields.
    pub fn at_time(
        &self,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Result<Self, CalendarError> {
        let time = TimeOfDay::new(hour, minute, second, nanosecond)?;
        Ok(self.with_time(Some(time)))
    }

    fn with_time(&self, time: Option<TimeOfDay>) -> Self {
        Self {
            time,
            ..self.clone()
        }
    }

    fn with_date(&self, day_count: i64, time: Option<TimeOfDay>) -> Self {
        let (year, month, day) = math::from_day_count(day_count);
        Self {
            year,
            month,
            day,
            time,
            zone: self.zone.clone(),
        }
    }

    pub(crate) fn require_time(&self, operation: &'static str) -> Result<TimeOfDay, CalendarError> {
        self.time.ok_or(CalendarError::MissingTime { operation })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=23).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingTime`] on a date-only value.
    pub fn hour(&self) -> Result<u8, CalendarError> {
        Ok(self.require_time("hour")?.hour)
    }

    /// Returns the minute (0..=59).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingTime`] on a date-only value.
    pub fn minute(&self) -> Result<u8, CalendarError> {
        Ok(self.require_time("minute")?.minute)
    }

    /// Returns the second (0..=59).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingTime`] on a date-only value.
    pub fn second(&self) -> Result<u8, CalendarError> {
        Ok(self.require_time("second")?.second)
    }

    /// Returns the sub-second fraction in nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingTime`] on a date-only value.
    pub fn nanosecond(&self) -> Result<u32, CalendarError> {
        Ok(self.require_time("nanosecond")?.nanosecond)
    }

    /// Returns the zone identifier, if any.
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Returns true if the value carries time-of-day fields.
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    /// Returns true if the value carries only a calendar date.
    pub fn is_date_only(&self) -> bool {
        self.time.is_none()
    }

    /// Returns the day count (Modified Julian Day number) of the date.
    pub fn day_count(&self) -> i64 {
        math::to_day_count(self.year, self.month, self.day)
    }

    /// Alias for [`day_count`](Self::day_count).
    pub fn modified_julian_day(&self) -> i64 {
        self.day_count()
    }

    /// Returns the weekday, 1 = Sunday through 7 = Saturday.
    pub fn weekday(&self) -> u8 {
        math::day_of_week(self.year, self.month, self.day)
    }

    /// Returns the ordinal day within the year (1..=366).
    pub fn day_of_year(&self) -> u16 {
        math::day_of_year(self.year, self.month, self.day)
    }

    /// Returns the ISO-8601 week number (1..=53).
    ///
    /// The week may belong to the previous or next year; see
    /// [`iso_week`](Self::iso_week).
    pub fn week_index(&self) -> u8 {
        math::iso_week_index(self.year, self.month, self.day)
    }

    /// Returns the ISO-8601 `(week-year, week)`.
    pub fn iso_week(&self) -> (i32, u8) {
        math::iso_week(self.year, self.month, self.day)
    }

    /// Returns the number of weeks elapsed since `start`, counting the
    /// seven days beginning at `start` as week 1.
    ///
    /// Days before `start` yield 0 or negative indices.
    pub fn week_index_from(&self, start: &DateTime) -> i64 {
        (self.day_count() - start.day_count()).div_euclid(7) + 1
    }

    /// Returns true if the year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        math::is_leap_year(self.year)
    }

    /// Returns the number of days in the value's month.
    pub fn num_days_in_month(&self) -> u8 {
        math::days_in_month(self.year, self.month)
    }

    /// First day of the month; a date-time becomes midnight of that day.
    pub fn start_of_month(&self) -> Self {
        Self {
            day: 1,
            time: self.time.map(|_| TimeOfDay::MIDNIGHT),
            ..self.clone()
        }
    }

    /// Last day of the month; a date-time becomes the last nanosecond of
    /// that day.
    pub fn end_of_month(&self) -> Self {
        Self {
            day: self.num_days_in_month(),
            time: self.time.map(|_| TimeOfDay::LAST_INSTANT),
            ..self.clone()
        }
    }

    /// Midnight at the start of this date, always a date-time.
    pub fn start_of_day(&self) -> Self {
        self.with_time(Some(TimeOfDay::MIDNIGHT))
    }

    /// The last nanosecond of this date, always a date-time.
    pub fn end_of_day(&self) -> Self {
        self.with_time(Some(TimeOfDay::LAST_INSTANT))
    }

    /// Compares stored fields in calendar order, ignoring the zone.
    pub fn compare_fields(&self, other: &DateTime) -> Ordering {
        (self.year, self.month, self.day, self.time).cmp(&(
            other.year,
            other.month,
            other.day,
            other.time,
        ))
    }

    /// True if `self` is strictly earlier than `other` (zone ignored).
    pub fn lt(&self, other: &DateTime) -> bool {
        self.compare_fields(other) == Ordering::Less
    }

    /// True if `self` is earlier than or equal to `other` (zone ignored).
    pub fn lteq(&self, other: &DateTime) -> bool {
        self.compare_fields(other) != Ordering::Greater
    }

    /// True if `self` is strictly later than `other` (zone ignored).
    pub fn gt(&self, other: &DateTime) -> bool {
        self.compare_fields(other) == Ordering::Greater
    }

    /// True if `self` is later than or equal to `other` (zone ignored).
    pub fn gteq(&self, other: &DateTime) -> bool {
        self.compare_fields(other) != Ordering::Less
    }

    /// True if both values fall on the same calendar date; time and zone
    /// are ignored.
    pub fn is_same_day_as(&self, other: &DateTime) -> bool {
        (self.year, self.month, self.day) == (other.year, other.month, other.day)
    }

    /// Number of days from `self` to `other`; positive when `other` is later.
    pub fn num_days_from(&self, other: &DateTime) -> i64 {
        other.day_count() - self.day_count()
    }

    /// Number of whole seconds from `self` to `other`, ignoring sub-second
    /// fractions; positive when `other` is later.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingTime`] unless both values are
    /// date-time values.
    pub fn num_seconds_from(&self, other: &DateTime) -> Result<i64, CalendarError> {
        let from = self.require_time("num_seconds_from")?;
        let to = other.require_time("num_seconds_from")?;
        Ok(self.num_days_from(other) * 86_400 + to.second_of_day() - from.second_of_day())
    }

    /// Number of nanoseconds from `self` to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingTime`] unless both values are
    /// date-time values.
    pub fn num_nanoseconds_from(&self, other: &DateTime) -> Result<i128, CalendarError> {
        let from = self.require_time("num_nanoseconds_from")?;
        let to = other.require_time("num_nanoseconds_from")?;
        Ok(i128::from(self.num_days_from(other)) * i128::from(NANOS_PER_DAY)
            + i128::from(to.nanosecond_of_day())
            - i128::from(from.nanosecond_of_day()))
    }

    /// Adds `days`, keeping the time of day and zone.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result leaves the
    /// supported years.
    pub fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        let day_count = check_day_count(i128::from(self.day_count()) + i128::from(days))?;
        Ok(self.with_date(day_count, self.time))
    }

    /// Subtracts `days`, keeping the time of day and zone.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result leaves the
    /// supported years.
    pub fn minus_days(&self, days: i64) -> Result<Self, CalendarError> {
        self.plus_days(days.saturating_neg())
    }

    /// Adds `months`, resolving nonexistent days with `overflow`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result leaves the
    /// supported years and [`CalendarError::DayOverflow`] under
    /// [`DayOverflow::Abort`].
    pub fn plus_months(&self, months: i64, overflow: DayOverflow) -> Result<Self, CalendarError> {
        self.plus(&Period::ZERO.with_months(months), overflow)
    }

    /// Adds a period.
    ///
    /// Years and months are added field-wise first and `overflow` decides
    /// what happens when the day does not exist in the resulting month.
    /// Days are then added through the day count, and clock units through
    /// the nanosecond of the day, carrying whole days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingTime`] if the period has clock
    /// units and the value is date-only, [`CalendarError::DayOverflow`]
    /// under [`DayOverflow::Abort`], and [`CalendarError::OutOfRange`] if
    /// the result leaves the supported years.
    pub fn plus(&self, period: &Period, overflow: DayOverflow) -> Result<Self, CalendarError> {
        if period.has_time_part() {
            self.require_time("time arithmetic")?;
        }
        let mut day_count =
            i128::from(self.add_months(period.total_months(), overflow)?) + i128::from(period.days);
        let time = match self.time {
            Some(time) => {
                let nanos = i128::from(time.nanosecond_of_day()) + period.clock_nanoseconds();
                day_count += nanos.div_euclid(i128::from(NANOS_PER_DAY));
                let nanos = nanos.rem_euclid(i128::from(NANOS_PER_DAY)) as i64;
                Some(TimeOfDay::from_nanosecond_of_day(nanos))
            }
            None => None,
        };
        let day_count = check_day_count(day_count)?;
        Ok(self.with_date(day_count, time))
    }

    /// Subtracts a period; equivalent to adding its negation.
    ///
    /// # Errors
    ///
    /// Same as [`plus`](Self::plus).
    pub fn minus(&self, period: &Period, overflow: DayOverflow) -> Result<Self, CalendarError> {
        self.plus(&period.negate(), overflow)
    }

    /// Returns the day count after adding `months` field-wise.
    fn add_months(&self, months: i64, overflow: DayOverflow) -> Result<i64, CalendarError> {
        if months == 0 {
            return Ok(self.day_count());
        }
        let index = i128::from(self.year) * 12 + i128::from(self.month) - 1 + i128::from(months);
        let year = index.div_euclid(12);
        if year < i128::from(MIN_YEAR) || year > i128::from(MAX_YEAR) {
            return Err(CalendarError::OutOfRange {
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        let year = year as i32;
        let month = (index.rem_euclid(12) + 1) as u8;
        let max_day = math::days_in_month(year, month);
        if self.day <= max_day {
            return Ok(math::to_day_count(year, month, self.day));
        }
        let last_day = math::to_day_count(year, month, max_day);
        match overflow {
            DayOverflow::FirstDayOfNextMonth => Ok(last_day + 1),
            DayOverflow::LastDayOfMonth => Ok(last_day),
            DayOverflow::Spillover => Ok(last_day + i64::from(self.day - max_day)),
            DayOverflow::Abort => Err(CalendarError::DayOverflow {
                year,
                month,
                day: self.day,
            }),
        }
    }

    /// Drops every field finer than `unit`.
    ///
    /// Truncating to [`Unit::Day`] or coarser yields a date-only value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingTime`] when truncating a date-only
    /// value to a clock unit.
    pub fn truncate(&self, unit: Unit) -> Result<Self, CalendarError> {
        let truncated = match unit {
            Unit::Year => Self {
                month: 1,
                day: 1,
                time: None,
                ..self.clone()
            },
            Unit::Month => Self {
                day: 1,
                time: None,
                ..self.clone()
            },
            Unit::Day => self.date_only(),
            Unit::Hour | Unit::Minute | Unit::Second => {
                let time = self.require_time("truncate")?;
                let (minute, second) = match unit {
                    Unit::Hour => (0, 0),
                    Unit::Minute => (time.minute, 0),
                    _ => (time.minute, time.second),
                };
                self.with_time(Some(TimeOfDay {
                    hour: time.hour,
                    minute,
                    second,
                    nanosecond: 0,
                }))
            }
        };
        Ok(truncated)
    }
}

impl fmt::Display for DateTime {
    /// Writes `YYYY-MM-DD`, followed by ` hh:mm:ss` and a nine-digit
    /// fraction (when non-zero) for date-time values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            f.write_str("-")?;
        }
        write!(f, "{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month, self.day)?;
        if let Some(time) = self.time {
            write!(f, " {:02}:{:02}:{:02}", time.hour, time.minute, time.second)?;
            if time.nanosecond != 0 {
                write!(f, ".{:09}", time.nanosecond)?;
            }
        }
        Ok(())
    }
}
