use chrono::{Days, Duration, NaiveDate, NaiveDateTime};
use criterion::{Criterion, criterion_group, criterion_main};
use pricechart::api::{ChartConfig, ChartEngine, Period, resolve_time};
use pricechart::core::{
    BusinessDayScale, LinearScale, Scale, Series, TimeScale, Viewport, is_business_day,
};
use pricechart::render::NullRenderer;
use std::hint::black_box;

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(16, 0, 0))
        .expect("valid start")
}

fn daily_series(days: u64) -> Series {
    let samples = (0..days)
        .filter_map(|offset| start().checked_add_days(Days::new(offset)))
        .filter(|ts| is_business_day(ts.date()))
        .enumerate()
        .map(|(i, ts)| (ts, 180.0 + (i as f64 * 0.37).sin() * 12.0));
    Series::from_samples(samples).expect("valid series")
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::with_range(0.0, 10_000.0, 0.0, 1920.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.scale(black_box(4_321.123)).expect("to pixel");
            let _ = scale.invert(px).expect("from pixel");
        })
    });
}

fn bench_business_day_round_trip(c: &mut Criterion) {
    let end = start() + Duration::days(182);
    let mut scale = BusinessDayScale::new(start(), end).expect("valid domain");
    scale.set_range(0.0, 1880.0).expect("valid range");
    let probe = start() + Duration::days(97);

    c.bench_function("business_day_round_trip_6m", |b| {
        b.iter(|| {
            let px = scale.scale(black_box(probe)).expect("to pixel");
            let _ = scale.invert(px).expect("from pixel");
        })
    });
}

fn bench_time_pointer_resolution(c: &mut Criterion) {
    let series = daily_series(3_650);
    let (first, last) = series.time_bounds();
    let mut scale = TimeScale::new(first, last).expect("valid scale");
    scale.set_range(0.0, 1880.0).expect("valid range");

    c.bench_function("time_pointer_resolution_10y", |b| {
        b.iter(|| {
            let _ = resolve_time(black_box(&series), &scale, black_box(1_234.5));
        })
    });
}

fn bench_engine_hover_6m(c: &mut Criterion) {
    let config = ChartConfig::new(Viewport::new(1600, 900));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .load_period(Period::SixMonth, daily_series(182))
        .expect("install series");

    c.bench_function("engine_hover_and_render_6m", |b| {
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 13.0) % 1_500.0;
            let _ = engine.pointer_move(black_box(x));
            engine.render().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_business_day_round_trip,
    bench_time_pointer_resolution,
    bench_engine_hover_6m
);
criterion_main!(benches);
