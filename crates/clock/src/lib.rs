//! # almanac-clock
//!
//! The boundary between calendar values and the outside world: the system
//! clock, IANA time zones and absolute instants.
//!
//! `almanac-calendar` values never read a clock or apply an offset. Every
//! zone-dependent operation lives here and takes its [`Zone`] explicitly.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Clock (System / Fixed)"] -->|"now_utc()"| B["instant (UTC)"]
//!     B -->|"from_instant(zone)"| C["DateTime"]
//!     C -->|"to_instant(zone)"| B
//!     C -->|"change_zone(from, to)"| C
//!     D["Zone::resolve(name)"] --> C
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_clock::{Zone, change_zone, today};
//!
//! let cairo = Zone::resolve("Africa/Cairo")?;
//! let day = today(&cairo)?;
//! assert!(day.is_date_only());
//!
//! let paris = Zone::resolve("Europe/Paris")?;
//! let noon: almanac_calendar::DateTime = "2024-01-15 12:00".parse()?;
//! let perth = change_zone(&noon, &paris, &Zone::resolve("Australia/Perth")?)?;
//! assert_eq!(perth.to_string(), "2024-01-15 19:00:00");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `zone` | IANA zone lookup and offsets |
//! | `clock` | Clock trait, system/fixed clocks, now/today |
//! | `instant` | Instant conversions and zone changes |
//! | `error` | Error types |

mod clock;
mod error;
mod instant;
mod zone;

pub use clock::{Clock, ClockSource, FixedClock, SystemClock, now, today};
pub use error::ClockError;
pub use instant::{change_zone, from_instant, from_instant_millis, to_instant, to_instant_millis};
pub use zone::Zone;
