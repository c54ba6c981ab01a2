use chrono::{Datelike, Days, NaiveDate};
use pricechart::core::{BusinessDayScale, LinearScale, Scale, TimeScale, generate_ticks_y};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::with_range(domain_start, domain_end, 480.0, 10.0)
            .expect("valid scale");

        let px = scale.scale(value).expect("to pixel");
        let recovered = scale.invert(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn business_day_round_trip_property(
        start_offset in 0u64..365,
        span_days in 1u64..400,
        pick in 0.0f64..1.0,
        width in 100.0f64..4000.0
    ) {
        let base = NaiveDate::from_ymd_opt(2023, 1, 2).expect("valid date");
        let start = base
            .checked_add_days(Days::new(start_offset))
            .and_then(|d| d.and_hms_opt(16, 0, 0))
            .expect("valid start");
        let end = start.checked_add_days(Days::new(span_days)).expect("valid end");

        let Ok(mut scale) = BusinessDayScale::new(start, end) else {
            // Spans made only of weekend days are rejected by construction.
            return Ok(());
        };
        scale.set_range(0.0, width).expect("valid range");

        let candidate = start
            .checked_add_days(Days::new((pick * span_days as f64) as u64))
            .expect("in range");
        prop_assume!(candidate.weekday().num_days_from_monday() < 5);
        prop_assume!(start.weekday().num_days_from_monday() < 5);

        let px = scale.scale(candidate).expect("to pixel");
        prop_assert!((0.0..=width).contains(&px));
        let recovered = scale.invert(px).expect("from pixel");
        prop_assert_eq!(recovered, candidate);
    }

    #[test]
    fn time_scale_round_trip_property(
        span_minutes in 1i64..100_000,
        pick in 0.0f64..1.0
    ) {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid start");
        let end = start + chrono::Duration::minutes(span_minutes);
        let mut scale = TimeScale::new(start, end).expect("valid scale");
        scale.set_range(0.0, 1000.0).expect("valid range");

        let value = start + chrono::Duration::seconds((pick * span_minutes as f64 * 60.0) as i64);
        let px = scale.scale(value).expect("to pixel");
        let recovered = scale.invert(px).expect("from pixel");

        prop_assert!((recovered - value).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn y_ticks_cover_range_with_even_gaps(
        low in -10_000.0f64..10_000.0,
        span in 0.0f64..5_000.0,
        gap_choice in 0usize..4
    ) {
        let gap = [1.0, 3.0, 10.0, 20.0][gap_choice];
        let high = low + span;
        let ticks = generate_ticks_y(low, high, gap).expect("valid gap");

        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks[0] <= low);
        prop_assert!(ticks[ticks.len() - 1] >= high);
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            prop_assert!(((pair[1] - pair[0]) - gap).abs() <= 1e-6);
        }
        prop_assert!(ticks[0] > low - gap);
        prop_assert!(ticks[ticks.len() - 1] < high + gap);
    }
}
