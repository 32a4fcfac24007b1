//! Error types for the almanac-calendar crate.

/// Broad category of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range calendar/time fields.
    Validation,
    /// An operation needed time-of-day fields the value does not carry.
    FieldCompleteness,
    /// A locale or zone name could not be resolved.
    Resolution,
}

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Every variant is raised by the operation that detects the problem; no
/// operation falls back to a default value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year is outside the supported range.
    #[error("year {year} out of range (must be {min}..={max})")]
    YearOutOfRange {
        /// The offending year.
        year: i64,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// Returned when arithmetic produces a date outside the supported years.
    #[error("result is outside the supported years {min}..={max}")]
    OutOfRange {
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an hour is outside 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour.
        hour: u8,
    },

    /// Returned when a minute is outside 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute.
        minute: u8,
    },

    /// Returned when a second is outside 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The invalid second.
        second: u8,
    },

    /// Returned when a sub-second fraction is outside 0..=999_999_999.
    #[error("invalid nanosecond: {nanosecond} (must be 0..=999999999)")]
    InvalidNanosecond {
        /// The invalid nanosecond value.
        nanosecond: u32,
    },

    /// Returned when a zone identifier is not shaped like `Area/Location`.
    #[error("invalid time zone identifier: {zone:?}")]
    InvalidZoneId {
        /// The rejected identifier.
        zone: String,
    },

    /// Returned by the abort overflow policy when month arithmetic lands
    /// on a day the target month does not have.
    #[error("day overflow: {year}-{month:02} has no day {day}")]
    DayOverflow {
        /// Target year.
        year: i32,
        /// Target month.
        month: u8,
        /// Day that does not exist in the target month.
        day: u8,
    },

    /// Returned when text cannot be parsed as a date or date-time.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Returned when a format template opens a literal run with `|` and
    /// never closes it.
    #[error("unterminated literal run starting at byte {position} of format template")]
    UnterminatedEscape {
        /// Byte offset of the opening `|`.
        position: usize,
    },

    /// Returned when an operation needs time-of-day fields on a date-only value.
    #[error("{operation} requires a date-time value, but the value is date-only")]
    MissingTime {
        /// Name of the operation that was refused.
        operation: &'static str,
    },

    /// Returned when a locale tag has no name table.
    #[error("unknown locale: {tag:?}")]
    UnknownLocale {
        /// The unresolved locale tag.
        tag: String,
    },
}

impl CalendarError {
    /// Returns the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingTime { .. } => ErrorKind::FieldCompleteness,
            Self::UnknownLocale { .. } => ErrorKind::Resolution,
            _ => ErrorKind::Validation,
        }
    }
}
