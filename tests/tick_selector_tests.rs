use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, Weekday};
use pricechart::api::{Period, PeriodPolicy, select_time_ticks, select_value_ticks};
use pricechart::core::{Series, is_business_day};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid datetime")
}

/// Business-day closes at midnight between two dates, inclusive.
fn daily_series(start: NaiveDateTime, end: NaiveDateTime) -> Series {
    let mut samples = Vec::new();
    let mut current = start;
    let mut value = 180.0;
    while current <= end {
        if is_business_day(current.date()) {
            samples.push((current, value));
            value += 0.7;
        }
        current = current.checked_add_days(Days::new(1)).expect("in range");
    }
    Series::from_samples(samples).expect("valid series")
}

/// Fifteen-minute samples from 09:30 for `count` slots on one day.
fn intraday_series(count: usize) -> Series {
    let open = at(2024, 3, 8, 9, 30);
    Series::from_samples(
        (0..count).map(|i| (open + Duration::minutes(15 * i as i64), 187.0 + (i % 7) as f64 * 0.3)),
    )
    .expect("valid series")
}

#[test]
fn intraday_ticks_use_fixed_times_of_day() {
    let series = intraday_series(45);
    let policy = PeriodPolicy::default_for(Period::Intraday);
    let ticks = select_time_ticks(&series, &policy);

    let indices: Vec<usize> = ticks.iter().map(|tick| tick.index).collect();
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(indices, vec![2, 10, 18, 26, 34, 42]);
    assert_eq!(labels, vec!["10:00", "12:00", "14:00", "16:00", "18:00", "20:00"]);
}

#[test]
fn partial_intraday_session_keeps_every_fixed_time() {
    // 09:30 .. 14:15
    let series = intraday_series(20);
    let policy = PeriodPolicy::default_for(Period::Intraday);
    let ticks = select_time_ticks(&series, &policy);

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["10:00", "12:00", "14:00", "16:00", "18:00", "20:00"]);
    // Later times land on the slots the full session will fill.
    let indices: Vec<usize> = ticks.iter().map(|tick| tick.index).collect();
    assert_eq!(indices, vec![2, 10, 18, 26, 34, 42]);
}

#[test]
fn single_sample_session_falls_back_to_nearest() {
    let series = intraday_series(1);
    let policy = PeriodPolicy::default_for(Period::Intraday);
    let ticks = select_time_ticks(&series, &policy);

    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].index, 0);
    assert_eq!(ticks[0].label, "10:00");
}

#[test]
fn one_month_ticks_land_on_mondays() {
    let series = daily_series(at(2024, 2, 12, 0, 0), at(2024, 3, 11, 0, 0));
    let policy = PeriodPolicy::default_for(Period::OneMonth);
    let ticks = select_time_ticks(&series, &policy);

    // Start boundary (Mon 12 Feb) excluded, end is exclusive.
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["19 Feb", "26 Feb", "04 Mar"]);
    for tick in &ticks {
        let point = series.get(tick.index).expect("tick index in series");
        assert_eq!(point.timestamp.weekday(), Weekday::Mon);
    }
}

#[test]
fn monday_holiday_falls_back_to_first_matching_weekday() {
    // Drop Mon 26 Feb: the boundary has no exact match, and the first Monday
    // in the series is picked.
    let samples: Vec<(NaiveDateTime, f64)> =
        daily_series(at(2024, 2, 13, 0, 0), at(2024, 3, 8, 0, 0))
            .points()
            .iter()
            .filter(|point| point.timestamp != at(2024, 2, 26, 0, 0))
            .map(|point| (point.timestamp, point.value))
            .collect();
    let series = Series::from_samples(samples).expect("valid series");
    let policy = PeriodPolicy::default_for(Period::OneMonth);
    let ticks = select_time_ticks(&series, &policy);

    let dates: Vec<NaiveDateTime> = ticks
        .iter()
        .map(|tick| series.get(tick.index).expect("in series").timestamp)
        .collect();
    // 19 Feb is exact; 26 Feb resolves to the first Monday (19 Feb) again and
    // collapses; 04 Mar is exact.
    assert_eq!(dates, vec![at(2024, 2, 19, 0, 0), at(2024, 3, 4, 0, 0)]);
}

#[test]
fn six_month_ticks_walk_every_other_month() {
    let series = daily_series(at(2024, 1, 2, 0, 0), at(2024, 6, 28, 0, 0));
    let policy = PeriodPolicy::default_for(Period::SixMonth);
    let ticks = select_time_ticks(&series, &policy);

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["Feb 2024", "Apr 2024", "Jun 2024"]);
    let first = series.get(ticks[0].index).expect("in series");
    assert_eq!(first.timestamp, at(2024, 2, 1, 0, 0));
}

#[test]
fn five_day_ticks_mark_each_following_session() {
    let mut samples = Vec::new();
    for day in [4, 5, 6, 7, 8] {
        let open = at(2024, 3, day, 9, 30);
        for slot in 0..27 {
            samples.push((open + Duration::minutes(15 * slot), 180.0 + slot as f64 * 0.1));
        }
    }
    let series = Series::from_samples(samples).expect("valid series");
    let policy = PeriodPolicy::default_for(Period::FiveDay);
    let ticks = select_time_ticks(&series, &policy);

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["05 Mar", "06 Mar", "07 Mar", "08 Mar"]);
    for tick in &ticks {
        let point = series.get(tick.index).expect("in series");
        assert_eq!(point.timestamp.time(), at(2024, 3, 4, 9, 30).time());
    }
}

#[test]
fn short_series_falls_back_to_first_index() {
    let series = daily_series(at(2024, 3, 5, 0, 0), at(2024, 3, 6, 0, 0));
    let policy = PeriodPolicy::default_for(Period::SixMonth);
    let ticks = select_time_ticks(&series, &policy);

    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].index, 0);
    assert_eq!(ticks[0].label, "Mar 2024");
}

#[test]
fn value_ticks_follow_period_gap() {
    let series = Series::from_samples([
        (at(2024, 3, 4, 0, 0), 181.3),
        (at(2024, 3, 5, 0, 0), 219.9),
        (at(2024, 3, 6, 0, 0), 200.0),
    ])
    .expect("valid series");

    let month = select_value_ticks(&series, &PeriodPolicy::default_for(Period::OneMonth))
        .expect("ticks");
    assert_eq!(month, vec![180.0, 190.0, 200.0, 210.0, 220.0]);

    let six_month = select_value_ticks(&series, &PeriodPolicy::default_for(Period::SixMonth))
        .expect("ticks");
    assert_eq!(six_month, vec![180.0, 200.0, 220.0]);
}
