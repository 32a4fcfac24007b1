//! # almanac-calendar
//!
//! Immutable proleptic Gregorian date/time values with exact calendar
//! arithmetic and template formatting.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"to_day_count()"| B["day count (MJD)"]
//!     B -->|"from_day_count()"| A
//!     C["DateTime"] -->|"plus(Period, DayOverflow)"| C
//!     C -->|".day_count()"| B
//!     C -->|".format(template)"| D["String"]
//!     E["Locale / NameTable"] --> D
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_calendar::{DateTime, DayOverflow, Period};
//!
//! let today = DateTime::for_date_only(2024, 1, 31).unwrap();
//! let next = today
//!     .plus(&Period::new(0, 1, 0, 0, 0, 0), DayOverflow::LastDayOfMonth)
//!     .unwrap();
//! assert_eq!(next.format("YYYY-MM-DD").unwrap(), "2024-02-29");
//!
//! // Weekdays run 1 = Sunday ... 7 = Saturday.
//! assert_eq!(DateTime::for_date_only(2000, 1, 1).unwrap().weekday(), 7);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `math` | Leap years, month lengths, day count, weekday, ISO week |
//! | `datetime` | The immutable date/time value |
//! | `period` | Period, overflow policy and truncation units |
//! | `format` | Template formatter |
//! | `locale` | Month/weekday name tables |
//! | `parse` | `FromStr` for date and date-time text |
//! | `error` | Error types |

mod datetime;
mod error;
pub mod format;
mod locale;
pub mod math;
mod parse;
mod period;

pub use datetime::DateTime;
pub use error::{CalendarError, ErrorKind};
pub use locale::{Locale, NameTable};
pub use math::{MAX_YEAR, MIN_YEAR};
pub use period::{DayOverflow, Period, Unit};
