use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Almanac calendar toolkit.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Calendar arithmetic, ISO weeks, business days and humanized distances"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured time zone (IANA name, "UTC" or "system").
    #[arg(long = "tz", global = true)]
    pub time_zone: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a signed amount of a unit to an instant.
    Shift(ShiftArgs),
    /// Replace one civil field of an instant.
    Set(SetArgs),
    /// Show the ISO week date of an instant and its week boundaries.
    Week(WeekArgs),
    /// Weekend test, business-day shifting and differencing.
    Business(BusinessArgs),
    /// List period starts between two instants.
    Each(EachArgs),
    /// Describe the distance between two instants in words.
    Distance(DistanceArgs),
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Instant to shift ("now", a date, a civil date-time or an RFC 9557 string).
    pub instant: String,

    /// Signed amount to add.
    #[arg(allow_hyphen_values = true)]
    pub amount: i64,

    /// Unit of the amount (second, minute, hour, day, week, month, quarter, year).
    pub unit: String,
}

/// Arguments for the `set` subcommand.
#[derive(clap::Args)]
pub struct SetArgs {
    /// Instant to modify.
    pub instant: String,

    /// Field to replace (year, month, quarter, day, day_of_year, weekday, hour,
    /// minute, second, millisecond).
    pub field: String,

    /// New value; out-of-range values are clamped.
    #[arg(allow_hyphen_values = true)]
    pub value: i64,
}

/// Arguments for the `week` subcommand.
#[derive(clap::Args)]
pub struct WeekArgs {
    /// Instant to inspect.
    pub instant: String,
}

/// Arguments for the `business` subcommand.
#[derive(clap::Args)]
pub struct BusinessArgs {
    /// Instant to inspect.
    pub instant: String,

    /// Shift by this many business days.
    #[arg(long, allow_hyphen_values = true)]
    pub shift: Option<i64>,

    /// Count business days from the instant to this one.
    #[arg(long)]
    pub until: Option<String>,

    /// Override the weekend policy (snap_in_direction, count_from_weekend).
    #[arg(long)]
    pub policy: Option<String>,
}

/// Arguments for the `each` subcommand.
#[derive(clap::Args)]
pub struct EachArgs {
    /// First instant of the interval.
    pub start: String,

    /// Last instant of the interval.
    pub end: String,

    /// Step (minute, hour, day, week, month, quarter, year, weekend, business_day).
    #[arg(short, long, default_value = "day")]
    pub unit: String,

    /// Override the configured first day of the week (monday, sunday).
    #[arg(long)]
    pub week_start: Option<String>,

    /// Override the configured maximum number of lines printed.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the `distance` subcommand.
#[derive(clap::Args)]
pub struct DistanceArgs {
    /// Instant to describe.
    pub instant: String,

    /// Instant to measure from; defaults to now.
    #[arg(short, long)]
    pub base: Option<String>,

    /// Use a single floored unit instead of approximate wording.
    #[arg(long)]
    pub strict: bool,

    /// Use second-level phrases below two minutes.
    #[arg(long)]
    pub include_seconds: bool,

    /// Wrap the phrase as "in X" or "X ago".
    #[arg(long)]
    pub suffix: bool,
}
