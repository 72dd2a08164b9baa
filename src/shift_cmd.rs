//! Shift and set commands: civil arithmetic on a single instant.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use almanac_calendar::{TimeZone, set_field, shift};

use crate::cli::{SetArgs, ShiftArgs};
use crate::convert;

/// Prints the instant shifted by `amount` units.
pub fn run_shift(args: ShiftArgs, tz: &TimeZone) -> Result<()> {
    let _cmd = info_span!("shift").entered();
    let instant = convert::parse_instant(&args.instant, tz)?;
    let unit = convert::parse_unit(&args.unit)?;
    debug!(%instant, %unit, amount = args.amount, "shifting");
    let shifted = shift(&instant, unit, args.amount)
        .with_context(|| format!("cannot shift {instant} by {} {unit}", args.amount))?;
    println!("{shifted}");
    Ok(())
}

/// Prints the instant with one field replaced.
pub fn run_set(args: SetArgs, tz: &TimeZone) -> Result<()> {
    let _cmd = info_span!("set").entered();
    let instant = convert::parse_instant(&args.instant, tz)?;
    let field = convert::parse_field(&args.field)?;
    debug!(%instant, ?field, value = args.value, "setting field");
    let updated = set_field(&instant, field, args.value)
        .with_context(|| format!("cannot set {} of {instant} to {}", args.field, args.value))?;
    println!("{updated}");
    Ok(())
}
