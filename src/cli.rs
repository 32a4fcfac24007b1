use std::path::PathBuf;

use almanac_calendar::{DateTime, DayOverflow, Locale};
use almanac_clock::Zone;
use clap::{Parser, Subcommand};

/// Almanac calendar toolkit.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Calendar dates and times with exact Gregorian arithmetic"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: almanac.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current date-time in a zone.
    Now(ClockArgs),
    /// Print the current date in a zone.
    Today(ClockArgs),
    /// Format a date or date-time with a template.
    Format(FormatArgs),
    /// Add a period to a date or date-time.
    Shift(ShiftArgs),
    /// Count days (and seconds) between two values.
    Diff(DiffArgs),
    /// Show calendar facts about a date.
    Info(InfoArgs),
    /// Run the worked examples against the current (or a fixed) time.
    Examples(ExamplesArgs),
}

/// Arguments shared by `now` and `today`.
#[derive(clap::Args)]
pub struct ClockArgs {
    /// IANA zone id; overrides the config default.
    #[arg(short, long)]
    pub zone: Option<Zone>,

    /// Locale for month and weekday names.
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Format template; overrides the config default.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// `YYYY-MM-DD` or `YYYY-MM-DD hh:mm[:ss[.f]]`.
    #[arg(allow_hyphen_values = true)]
    pub value: DateTime,

    /// Template such as `WWWW, D MMMM YYYY` (text between `|` is literal).
    pub template: String,

    /// Locale for month and weekday names.
    #[arg(short, long)]
    pub locale: Option<Locale>,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Starting value.
    #[arg(allow_hyphen_values = true)]
    pub value: DateTime,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub years: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub months: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub hours: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub minutes: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub seconds: i64,

    /// What to do when the target month is too short:
    /// first-day, last-day, spillover or abort.
    #[arg(long)]
    pub overflow: DayOverflow,

    /// Output template; defaults to the configured date or date-time format.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `diff` subcommand.
#[derive(clap::Args)]
pub struct DiffArgs {
    #[arg(allow_hyphen_values = true)]
    pub from: DateTime,

    #[arg(allow_hyphen_values = true)]
    pub to: DateTime,
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: DateTime,

    /// Locale for month and weekday names.
    #[arg(short, long)]
    pub locale: Option<Locale>,
}

/// Arguments for the `examples` subcommand.
#[derive(clap::Args)]
pub struct ExamplesArgs {
    /// Zone used as "the default zone"; overrides the config default.
    #[arg(short, long)]
    pub zone: Option<Zone>,

    /// Pretend the local time in that zone is this value.
    #[arg(long, allow_hyphen_values = true)]
    pub at: Option<DateTime>,
}
