//! Arithmetic commands: `shift` and `diff`.

use almanac_calendar::Period;
use anyhow::{Context, Result};
use tracing::{debug, info_span};

use crate::cli::{DiffArgs, ShiftArgs};
use crate::convert::Settings;

pub fn run_shift(args: ShiftArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("shift").entered();
    let period = Period::new(
        args.years,
        args.months,
        args.days,
        args.hours,
        args.minutes,
        args.seconds,
    );
    debug!(?period, overflow = %args.overflow, "shifting {}", args.value);
    let shifted = args
        .value
        .plus(&period, args.overflow)
        .with_context(|| format!("cannot shift {}", args.value))?;
    let template = settings.template_for(&shifted, args.format.as_deref());
    println!("{}", shifted.format(template)?);
    Ok(())
}

pub fn run_diff(args: DiffArgs) -> Result<()> {
    let _cmd = info_span!("diff").entered();
    println!("days     {}", args.from.num_days_from(&args.to));
    if args.from.has_time() && args.to.has_time() {
        println!("seconds  {}", args.from.num_seconds_from(&args.to)?);
    }
    Ok(())
}
