use std::fmt::Write as _;

use chrono::{NaiveDateTime, NaiveTime};

/// Non-breaking space used between tooltip fragments.
pub const LABEL_SPACE: char = '\u{a0}';

/// Formats a timestamp with a strftime pattern.
///
/// Patterns are validated when policies are registered; an invalid pattern
/// still never panics here and falls back to ISO-8601.
#[must_use]
pub fn format_timestamp(timestamp: NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", timestamp.format("%Y-%m-%dT%H:%M:%S"));
    }
    out
}

#[must_use]
pub fn format_time_of_day(time: NaiveTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", time.format("%H:%M"));
    }
    out
}

/// Value-axis label with as many decimals as the tick gap needs.
#[must_use]
pub fn format_axis_value(value: f64, gap: f64) -> String {
    let decimals = decimals_for_step(gap);
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

fn decimals_for_step(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step.abs();
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// `"<value> <currency>  "` fragment leading a single-point tooltip.
#[must_use]
pub fn format_tooltip_value(value: f64, currency: &str) -> String {
    format!("{value:.2}{LABEL_SPACE}{currency}{LABEL_SPACE}{LABEL_SPACE}")
}
