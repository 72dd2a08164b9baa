//! Distance command: humanized distance between two instants.

use anyhow::Result;
use tracing::info_span;

use almanac_calendar::TimeZone;
use almanac_distance::{
    format_distance, format_distance_strict, format_distance_to_now,
    format_distance_to_now_strict,
};

use crate::cli::DistanceArgs;
use crate::config::AlmanacConfig;
use crate::convert;

/// Prints the distance phrase. Command-line flags add to the configured ones.
pub fn run(args: DistanceArgs, config: &AlmanacConfig, tz: &TimeZone) -> Result<()> {
    let _cmd = info_span!("distance").entered();
    let instant = convert::parse_instant(&args.instant, tz)?;
    let options = config
        .distance
        .with_include_seconds(config.distance.include_seconds() || args.include_seconds)
        .with_add_suffix(config.distance.add_suffix() || args.suffix);

    let phrase = match (args.base.as_deref(), args.strict) {
        (Some(base), strict) => {
            let base = convert::parse_instant(base, tz)?;
            if strict {
                format_distance_strict(&instant, &base, &options)
            } else {
                format_distance(&instant, &base, &options)
            }
        }
        (None, true) => format_distance_to_now_strict(&instant, &options),
        (None, false) => format_distance_to_now(&instant, &options),
    };
    println!("{phrase}");
    Ok(())
}
