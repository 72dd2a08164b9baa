use almanac_calendar::{
    CalendarError, Field, Instant, TimeZone, Unit, is_leap_year, set_field, shift,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn utc(year: i32, month: u8, day: u8) -> Instant {
    Instant::from_ymd_hms(year, month, day, 6, 7, 8, TimeZone::UTC).unwrap()
}

#[test]
fn jan_31_plus_one_month_follows_leap_rule() {
    for year in 1890..=2110 {
        let feb = shift(&utc(year, 1, 31), Unit::Month, 1).unwrap();
        let expected = if is_leap_year(year) { 29 } else { 28 };
        assert_eq!(
            (feb.year(), feb.month(), feb.day()),
            (year, 2, expected),
            "Jan 31 {year} + 1 month"
        );
    }
}

#[test]
fn month_round_trip_when_day_at_most_28() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2_000 {
        let year = rng.random_range(1600..=2400);
        let month = rng.random_range(1..=12u8);
        let day = rng.random_range(1..=28u8);
        let n = rng.random_range(-600..=600i64);
        let start = utc(year, month, day);
        let there = shift(&start, Unit::Month, n).unwrap();
        let back = shift(&there, Unit::Month, -n).unwrap();
        assert_eq!(back, start, "{start} shifted by {n} months and back");
    }
}

#[test]
fn month_shift_never_rolls_over() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let year = rng.random_range(1600..=2400);
        let month = rng.random_range(1..=12u8);
        let n = rng.random_range(-240..=240i64);
        let start = utc(year, month, 31.min(almanac_calendar::days_in_month(year, month).unwrap()));
        let shifted = shift(&start, Unit::Month, n).unwrap();
        let expected_month = ((i64::from(month) - 1 + n).rem_euclid(12) + 1) as u8;
        assert_eq!(shifted.month(), expected_month);
        assert!(shifted.is_last_day_of_month() || shifted.day() == start.day());
        assert_eq!((shifted.hour(), shifted.minute(), shifted.second()), (6, 7, 8));
    }
}

#[test]
fn zoned_month_shift_keeps_wall_clock() {
    let tz = TimeZone::get("Europe/Berlin").unwrap();
    // Winter time to summer time.
    let start = Instant::from_ymd_hms(2024, 1, 15, 9, 30, 0, tz).unwrap();
    let summer = shift(&start, Unit::Month, 6).unwrap();
    assert_eq!((summer.month(), summer.day(), summer.hour()), (7, 15, 9));
    assert_eq!(start.offset_seconds(), 3600);
    assert_eq!(summer.offset_seconds(), 7200);
}

#[test]
fn set_then_shift_composes() {
    let t = utc(2023, 8, 31);
    let feb = set_field(&t, Field::Month, 2).unwrap();
    assert_eq!(feb.day(), 28);
    let next_year = shift(&feb, Unit::Year, 1).unwrap();
    assert_eq!((next_year.year(), next_year.day()), (2024, 28));
}

#[test]
fn errors_surface_for_unrepresentable_results() {
    let t = utc(2024, 1, 1);
    assert!(matches!(
        shift(&t, Unit::Year, 8000),
        Err(CalendarError::YearOutOfRange { year: 10024 })
    ));
    assert!(matches!(
        shift(&t, Unit::Minute, i64::MIN),
        Err(CalendarError::Overflow { unit: Unit::Minute, .. })
    ));
}
