//! Pure conversion functions: command-line strings -> library values.

use anyhow::{Context, Result, bail};
use jiff::civil::{Date, DateTime};

use almanac_business::WeekendPolicy;
use almanac_calendar::{Field, Instant, TimeZone, Unit, WeekStart, Zoned};
use almanac_interval::IntervalUnit;

/// What `each` enumerates: period starts or days of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EachKind {
    Periods(IntervalUnit),
    Weekends,
    BusinessDays,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "_")
}

/// Parses a shift or difference unit, singular or plural.
pub fn parse_unit(s: &str) -> Result<Unit> {
    let name = normalize(s);
    match name.strip_suffix('s').unwrap_or(&name) {
        "second" => Ok(Unit::Second),
        "minute" => Ok(Unit::Minute),
        "hour" => Ok(Unit::Hour),
        "day" => Ok(Unit::Day),
        "week" => Ok(Unit::Week),
        "month" => Ok(Unit::Month),
        "quarter" => Ok(Unit::Quarter),
        "year" => Ok(Unit::Year),
        _ => bail!("unknown unit: {s:?}"),
    }
}

/// Parses a settable field name.
pub fn parse_field(s: &str) -> Result<Field> {
    match normalize(s).as_str() {
        "year" => Ok(Field::Year),
        "month" => Ok(Field::Month),
        "quarter" => Ok(Field::Quarter),
        "day" | "day_of_month" => Ok(Field::DayOfMonth),
        "day_of_year" => Ok(Field::DayOfYear),
        "weekday" => Ok(Field::Weekday),
        "hour" => Ok(Field::Hour),
        "minute" => Ok(Field::Minute),
        "second" => Ok(Field::Second),
        "millisecond" => Ok(Field::Millisecond),
        _ => bail!("unknown field: {s:?}"),
    }
}

/// Parses the first day of the week.
pub fn parse_week_start(s: &str) -> Result<WeekStart> {
    match normalize(s).as_str() {
        "monday" | "mon" => Ok(WeekStart::Monday),
        "sunday" | "sun" => Ok(WeekStart::Sunday),
        _ => bail!("unknown week start: {s:?}"),
    }
}

/// Parses a weekend policy name.
pub fn parse_weekend_policy(s: &str) -> Result<WeekendPolicy> {
    match normalize(s).as_str() {
        "snap_in_direction" | "snap" => Ok(WeekendPolicy::SnapInDirection),
        "count_from_weekend" | "count" => Ok(WeekendPolicy::CountFromWeekend),
        _ => bail!("unknown weekend policy: {s:?}"),
    }
}

/// Parses an enumeration step; weeks begin on `week_start`.
pub fn parse_each_kind(s: &str, week_start: WeekStart) -> Result<EachKind> {
    let name = normalize(s);
    let unit = match name.strip_suffix('s').unwrap_or(&name) {
        "minute" => IntervalUnit::Minute,
        "hour" => IntervalUnit::Hour,
        "day" => IntervalUnit::Day,
        "week" => IntervalUnit::Week(week_start),
        "month" => IntervalUnit::Month,
        "quarter" => IntervalUnit::Quarter,
        "year" => IntervalUnit::Year,
        "weekend" => return Ok(EachKind::Weekends),
        "business_day" => return Ok(EachKind::BusinessDays),
        _ => bail!("unknown enumeration unit: {s:?}"),
    };
    Ok(EachKind::Periods(unit))
}

/// Resolves a time zone: an IANA name, "UTC" or "system".
pub fn parse_time_zone(s: &str) -> Result<TimeZone> {
    if s.eq_ignore_ascii_case("system") {
        return TimeZone::try_system().context("failed to detect the system time zone");
    }
    if s.eq_ignore_ascii_case("utc") {
        return Ok(TimeZone::UTC);
    }
    TimeZone::get(s).with_context(|| format!("unknown time zone: {s:?}"))
}

/// Parses an instant.
///
/// Accepts "now", RFC 9557 strings with a zone annotation
/// (`2024-03-10T12:00:00-04:00[America/New_York]`), or civil date-times and
/// dates (`2024-03-10T12:00`, `2024-03-10`) read in `tz`.
pub fn parse_instant(s: &str, tz: &TimeZone) -> Result<Instant> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("now") {
        return Ok(Instant::now(tz.clone()));
    }
    if let Ok(zoned) = s.parse::<Zoned>() {
        return Ok(Instant::from_zoned(zoned));
    }
    if let Ok(datetime) = s.parse::<DateTime>() {
        let zoned = datetime
            .to_zoned(tz.clone())
            .with_context(|| format!("{s:?} is not representable in the configured zone"))?;
        return Ok(Instant::from_zoned(zoned));
    }
    if let Ok(date) = s.parse::<Date>() {
        let zoned = date
            .to_zoned(tz.clone())
            .with_context(|| format!("{s:?} is not representable in the configured zone"))?;
        return Ok(Instant::from_zoned(zoned));
    }
    bail!("invalid instant {s:?}: expected \"now\", a date, a date-time or an RFC 9557 string")
}
