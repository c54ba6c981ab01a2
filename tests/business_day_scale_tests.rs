use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use pricechart::core::{BusinessDayScale, Scale, add_business_days, count_business_days};
use pricechart::error::ChartError;

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid date")
}

fn close(month: u32, d: u32) -> NaiveDateTime {
    day(month, d).and_hms_opt(16, 0, 0).expect("valid time")
}

#[test]
fn monday_to_friday_counts_five_business_days() {
    // 2024-03-04 is a Monday.
    assert_eq!(day(3, 4).weekday(), Weekday::Mon);
    assert_eq!(count_business_days(day(3, 4), day(3, 8)), 5);
    assert_eq!(count_business_days(day(3, 9), day(3, 10)), 0);
    assert_eq!(count_business_days(day(3, 4), day(3, 18)), 11);
}

#[test]
fn add_business_days_skips_weekends_in_both_directions() {
    let friday = close(3, 8);
    assert_eq!(add_business_days(friday, 1), Some(close(3, 11)));
    assert_eq!(add_business_days(close(3, 11), -1), Some(friday));
    assert_eq!(add_business_days(friday, 0), Some(friday));
    assert_eq!(add_business_days(close(3, 4), 10), Some(close(3, 18)));
}

#[test]
fn weekend_occupies_no_width() {
    let mut scale = BusinessDayScale::new(close(3, 4), close(3, 15)).expect("valid domain");
    scale.set_range(0.0, 900.0).expect("valid range");

    let friday = scale.scale(close(3, 8)).expect("friday");
    let saturday = scale.scale(close(3, 9)).expect("saturday");
    let sunday = scale.scale(close(3, 10)).expect("sunday");
    let monday = scale.scale(close(3, 11)).expect("monday");
    let thursday = scale.scale(close(3, 7)).expect("thursday");

    assert_eq!(friday, saturday);
    assert_eq!(saturday, sunday);
    assert!((monday - friday - (friday - thursday)).abs() <= 1e-9);
}

#[test]
fn domain_bounds_map_to_range_bounds() {
    let mut scale = BusinessDayScale::new(close(3, 4), close(3, 15)).expect("valid domain");
    scale.set_range(10.0, 910.0).expect("valid range");

    assert_eq!(scale.scale(close(3, 4)).expect("start"), 10.0);
    assert_eq!(scale.scale(close(3, 15)).expect("end"), 910.0);
    assert_eq!(scale.total_business_days().expect("total"), 9);
}

#[test]
fn invert_round_trips_business_days() {
    let mut scale = BusinessDayScale::new(close(3, 4), close(4, 26)).expect("valid domain");
    scale.set_range(0.0, 760.0).expect("valid range");

    let mut current = close(3, 4);
    while current <= close(4, 26) {
        if current.weekday().num_days_from_monday() < 5 {
            let px = scale.scale(current).expect("to pixel");
            let back = scale.invert(px).expect("from pixel");
            assert_eq!(back, current, "round trip for {current}");
        }
        current = current
            .checked_add_days(chrono::Days::new(1))
            .expect("in range");
    }
}

#[test]
fn zero_business_day_span_is_invalid_domain() {
    let saturday = close(3, 9);
    let sunday = close(3, 10);
    let result = BusinessDayScale::new(saturday, sunday);
    assert!(matches!(result, Err(ChartError::InvalidDomain(_))));

    let same_day = BusinessDayScale::new(close(3, 4), close(3, 4));
    assert!(matches!(same_day, Err(ChartError::InvalidDomain(_))));
}

#[test]
fn ticks_are_business_days_within_count() {
    let scale = BusinessDayScale::new(close(1, 2), close(6, 28)).expect("valid domain");

    for count in [1, 3, 6, 10, 40] {
        let ticks = scale.ticks(count).expect("ticks");
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= count, "{} ticks for count {count}", ticks.len());
        assert!(ticks.iter().all(|tick| tick.weekday().num_days_from_monday() < 5));
        assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    assert!(scale.ticks(0).expect("empty request").is_empty());
}

#[test]
fn ticks_start_on_first_business_day() {
    // Saturday start.
    let scale = BusinessDayScale::new(close(3, 9), close(3, 22)).expect("valid domain");
    let ticks = scale.ticks(20).expect("ticks");
    assert_eq!(ticks.first().copied(), Some(close(3, 11)));
}
