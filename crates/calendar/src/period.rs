//! Signed calendar amounts and the policies that govern adding them.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// What to do when year/month addition lands on a day the target month
/// does not have (for example January 31 plus one month).
///
/// There is no default: callers always choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOverflow {
    /// Move to the first day of the following month (Jan 31 + 1 month = Mar 1).
    FirstDayOfNextMonth,
    /// Clamp to the last day of the target month (Jan 31 + 1 month = Feb 28/29).
    LastDayOfMonth,
    /// Carry the excess days into the following month (Jan 31 + 1 month =
    /// Mar 2 in a leap year, Mar 3 otherwise).
    Spillover,
    /// Refuse with [`CalendarError::DayOverflow`].
    Abort,
}

impl fmt::Display for DayOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DayOverflow::FirstDayOfNextMonth => "first-day",
            DayOverflow::LastDayOfMonth => "last-day",
            DayOverflow::Spillover => "spillover",
            DayOverflow::Abort => "abort",
        })
    }
}

impl FromStr for DayOverflow {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-day" | "first-day-of-next-month" => Ok(DayOverflow::FirstDayOfNextMonth),
            "last-day" | "last-day-of-month" => Ok(DayOverflow::LastDayOfMonth),
            "spillover" => Ok(DayOverflow::Spillover),
            "abort" => Ok(DayOverflow::Abort),
            _ => Err(CalendarError::Parse {
                input: s.to_string(),
                reason: "expected first-day, last-day, spillover or abort",
            }),
        }
    }
}

/// Granularity for [`DateTime::truncate`](crate::DateTime::truncate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// Keep the year; January 1, date-only.
    Year,
    /// Keep year and month; first of the month, date-only.
    Month,
    /// Keep the calendar date; date-only.
    Day,
    /// Keep the hour; minutes and below zeroed.
    Hour,
    /// Keep the minute; seconds and below zeroed.
    Minute,
    /// Keep the second; sub-second fraction zeroed.
    Second,
}

/// A signed amount of calendar and clock units.
///
/// Years and months are applied field-wise; days and smaller units are
/// applied exactly through the day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    /// Whole years.
    pub years: i64,
    /// Whole months.
    pub months: i64,
    /// Whole days.
    pub days: i64,
    /// Hours.
    pub hours: i64,
    /// Minutes.
    pub minutes: i64,
    /// Seconds.
    pub seconds: i64,
    /// Nanoseconds.
    pub nanoseconds: i64,
}

impl Period {
    /// The empty period.
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        nanoseconds: 0,
    };

    /// Creates a period from its date and clock parts, without nanoseconds.
    pub const fn new(
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            nanoseconds: 0,
        }
    }

    /// Sets the years.
    pub const fn with_years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }

    /// Sets the months.
    pub const fn with_months(mut self, months: i64) -> Self {
        self.months = months;
        self
    }

    /// Sets the days.
    pub const fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Sets the hours.
    pub const fn with_hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the minutes.
    pub const fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    /// Sets the seconds.
    pub const fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Sets the nanoseconds.
    pub const fn with_nanoseconds(mut self, nanoseconds: i64) -> Self {
        self.nanoseconds = nanoseconds;
        self
    }

    /// Returns true if any clock unit is non-zero.
    pub const fn has_time_part(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.nanoseconds != 0
    }

    /// Returns the same period with every sign flipped.
    pub const fn negate(self) -> Self {
        Self {
            years: self.years.saturating_neg(),
            months: self.months.saturating_neg(),
            days: self.days.saturating_neg(),
            hours: self.hours.saturating_neg(),
            minutes: self.minutes.saturating_neg(),
            seconds: self.seconds.saturating_neg(),
            nanoseconds: self.nanoseconds.saturating_neg(),
        }
    }

    /// Total months (years folded in), saturating on absurd inputs.
    pub(crate) fn total_months(&self) -> i64 {
        self.years.saturating_mul(12).saturating_add(self.months)
    }

    /// Clock part in nanoseconds.
    pub(crate) fn clock_nanoseconds(&self) -> i128 {
        i128::from(self.hours) * 3_600_000_000_000
            + i128::from(self.minutes) * 60_000_000_000
            + i128::from(self.seconds) * 1_000_000_000
            + i128::from(self.nanoseconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let p = Period::ZERO.with_months(3).with_days(5);
        assert_eq!(p, Period::new(0, 3, 5, 0, 0, 0));
        assert!(!p.has_time_part());
        assert!(p.with_nanoseconds(1).has_time_part());
    }

    #[test]
    fn negate_flips_every_field() {
        let p = Period::new(1, -2, 3, -4, 5, -6).with_nanoseconds(7);
        let n = p.negate();
        assert_eq!(n, Period::new(-1, 2, -3, 4, -5, 6).with_nanoseconds(-7));
        assert_eq!(n.negate(), p);
    }

    #[test]
    fn totals() {
        let p = Period::new(2, 3, 0, 1, 1, 1).with_nanoseconds(5);
        assert_eq!(p.total_months(), 27);
        assert_eq!(p.clock_nanoseconds(), 3_661_000_000_005);
    }

    #[test]
    fn overflow_policy_parses() {
        assert_eq!(
            "last-day".parse::<DayOverflow>().unwrap(),
            DayOverflow::LastDayOfMonth
        );
        assert_eq!(
            "First-Day".parse::<DayOverflow>().unwrap(),
            DayOverflow::FirstDayOfNextMonth
        );
        assert!("clamp".parse::<DayOverflow>().is_err());
        for policy in [
            DayOverflow::FirstDayOfNextMonth,
            DayOverflow::LastDayOfMonth,
            DayOverflow::Spillover,
            DayOverflow::Abort,
        ] {
            assert_eq!(policy.to_string().parse::<DayOverflow>().unwrap(), policy);
        }
    }
}
