//! Weekend detection and the weekend-start policy.

use almanac_calendar::{Instant, Weekday};
use serde::{Deserialize, Serialize};

/// How [`shift_business_days_with`](crate::shift_business_days_with) treats
/// a start that falls on a weekend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendPolicy {
    /// Move to the nearest weekday in the direction of travel first, then
    /// count. Saturday + 1 is Tuesday.
    #[default]
    SnapInDirection,
    /// Count from the weekend day itself. Saturday + 1 is Monday.
    CountFromWeekend,
}

/// Returns `true` for Saturday and Sunday in the instant's own zone.
pub fn is_weekend(instant: &Instant) -> bool {
    is_weekend_day(instant.date().to_days())
}

/// Returns `true` for Monday through Friday in the instant's own zone.
pub fn is_business_day(instant: &Instant) -> bool {
    !is_weekend(instant)
}

/// Weekend test on a day number (days since 1970-01-01).
pub(crate) fn is_weekend_day(days: i64) -> bool {
    matches!(
        Weekday::from_days_since_epoch(days),
        Weekday::Saturday | Weekday::Sunday
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_calendar::TimeZone;

    #[test]
    fn weekend_days() {
        // 2024-01-06 is a Saturday.
        let expected = [true, true, false, false, false, false, false];
        for (offset, weekend) in expected.iter().enumerate() {
            let t = Instant::from_ymd_hms(2024, 1, 6 + offset as u8, 12, 0, 0, TimeZone::UTC)
                .unwrap();
            assert_eq!(is_weekend(&t), *weekend, "2024-01-{:02}", 6 + offset);
            assert_eq!(is_business_day(&t), !*weekend);
        }
    }

    #[test]
    fn weekend_uses_own_zone() {
        // Friday 23:00 UTC is already Saturday in Tokyo.
        let utc = Instant::from_ymd_hms(2024, 1, 5, 23, 0, 0, TimeZone::UTC).unwrap();
        let tokyo = utc.in_time_zone(&TimeZone::get("Asia/Tokyo").unwrap());
        assert!(!is_weekend(&utc));
        assert!(is_weekend(&tokyo));
    }

    #[test]
    fn default_policy_snaps() {
        assert_eq!(WeekendPolicy::default(), WeekendPolicy::SnapInDirection);
    }
}
