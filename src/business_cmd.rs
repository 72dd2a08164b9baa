//! Business command: weekend test, business-day shift and difference.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use almanac_business::{difference_in_business_days, is_weekend, shift_business_days_with};
use almanac_calendar::TimeZone;

use crate::cli::BusinessArgs;
use crate::config::AlmanacConfig;
use crate::convert;

/// Prints whether the instant is a weekend, plus the requested shift and
/// difference.
pub fn run(args: BusinessArgs, config: &AlmanacConfig, tz: &TimeZone) -> Result<()> {
    let _cmd = info_span!("business").entered();
    let instant = convert::parse_instant(&args.instant, tz)?;
    let policy = match args.policy.as_deref() {
        Some(name) => convert::parse_weekend_policy(name)?,
        None => config.business.weekend_policy,
    };
    debug!(%instant, ?policy, "business days");

    println!("{instant} ({})", instant.weekday());
    println!("weekend: {}", is_weekend(&instant));
    if let Some(n) = args.shift {
        let shifted = shift_business_days_with(&instant, n, policy)
            .with_context(|| format!("cannot shift {instant} by {n} business days"))?;
        println!("shifted {n:+}: {shifted} ({})", shifted.weekday());
    }
    if let Some(ref until) = args.until {
        let other = convert::parse_instant(until, tz)?;
        println!("business days until {other}: {}", difference_in_business_days(&other, &instant));
    }
    Ok(())
}
