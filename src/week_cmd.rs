//! Week command: ISO 8601 week date of an instant.

use anyhow::Result;
use tracing::info_span;

use almanac_calendar::{
    TimeZone, end_of_iso_week, iso_week_date, iso_weeks_in_year, start_of_iso_week,
    start_of_iso_week_year,
};

use crate::cli::WeekArgs;
use crate::convert;

/// Prints the ISO week date and the surrounding ISO week and week-year bounds.
pub fn run(args: WeekArgs, tz: &TimeZone) -> Result<()> {
    let _cmd = info_span!("week").entered();
    let instant = convert::parse_instant(&args.instant, tz)?;
    let week_date = iso_week_date(&instant);

    println!("iso week date:   {week_date}");
    println!("weeks in year:   {}", iso_weeks_in_year(week_date.year()));
    println!("week start:      {}", start_of_iso_week(&instant)?);
    println!("week end:        {}", end_of_iso_week(&instant)?);
    println!("week-year start: {}", start_of_iso_week_year(&instant)?);
    Ok(())
}
