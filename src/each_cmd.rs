//! Each command: enumerate period starts or days of a kind in an interval.

use anyhow::Result;
use tracing::{info, info_span};

use almanac_calendar::{Instant, Interval, TimeZone};
use almanac_interval::{
    each_business_day_of_interval, each_unit_of_interval, each_weekend_of_interval,
};

use crate::cli::EachArgs;
use crate::config::AlmanacConfig;
use crate::convert::{self, EachKind};

/// Prints one boundary per line, up to the configured limit.
pub fn run(args: EachArgs, config: &AlmanacConfig, tz: &TimeZone) -> Result<()> {
    let _cmd = info_span!("each").entered();
    let start = convert::parse_instant(&args.start, tz)?;
    let end = convert::parse_instant(&args.end, tz)?;
    let week_start = match args.week_start.as_deref() {
        Some(name) => convert::parse_week_start(name)?,
        None => config.each.week_start,
    };
    let limit = args.limit.unwrap_or(config.each.limit);
    let kind = convert::parse_each_kind(&args.unit, week_start)?;
    let interval = Interval::new(start, end);

    let boundaries: Box<dyn Iterator<Item = Instant>> = match kind {
        EachKind::Periods(unit) => Box::new(each_unit_of_interval(&interval, unit)?),
        EachKind::Weekends => Box::new(each_weekend_of_interval(&interval)?),
        EachKind::BusinessDays => Box::new(each_business_day_of_interval(&interval)?),
    };

    let mut printed = 0;
    for boundary in boundaries.take(limit) {
        println!("{boundary}");
        printed += 1;
    }
    info!(printed, limit, "enumeration finished");
    if printed == limit {
        info!("output truncated at the limit; raise it with --limit");
    }
    Ok(())
}
