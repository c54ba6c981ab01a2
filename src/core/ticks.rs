use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Upper bound on value-axis ticks for one series.
pub const MAX_VALUE_TICKS: usize = 10_000;

/// Evenly spaced value-axis ticks covering `[min_value, max_value]`.
///
/// Bounds snap outward to multiples of `gap`. Each tick is computed as
/// `min_tick + i * gap` so long ranges do not accumulate float drift.
/// Spans needing more than [`MAX_VALUE_TICKS`] ticks are rejected.
pub fn generate_ticks_y(min_value: f64, max_value: f64, gap: f64) -> ChartResult<Vec<f64>> {
    if !gap.is_finite() || gap <= 0.0 {
        return Err(ChartError::InvalidData(
            "tick gap must be finite and > 0".to_owned(),
        ));
    }
    if !min_value.is_finite() || !max_value.is_finite() {
        return Err(ChartError::InvalidData(
            "tick bounds must be finite".to_owned(),
        ));
    }

    let (low, high) = if min_value <= max_value {
        (min_value, max_value)
    } else {
        (max_value, min_value)
    };

    let first_step = (low / gap).floor();
    let last_step = (high / gap).ceil();
    let span = (last_step - first_step).round();
    if span > MAX_VALUE_TICKS as f64 {
        return Err(ChartError::InvalidData(format!(
            "value span needs {span} ticks at gap {gap}, limit is {MAX_VALUE_TICKS}"
        )));
    }
    let steps = span as usize;

    Ok((0..=steps)
        .map(|i| (first_step + i as f64) * gap)
        .collect())
}

/// Calendar boundary used when walking a time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarUnit {
    /// Local midnight of every day.
    Day,
    /// Midnight of every Monday.
    Week,
    /// Midnight of the first day of every month.
    Month,
}

impl CalendarUnit {
    /// Smallest boundary `>= time`.
    fn ceil(self, time: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = time.date();
        let floor_date = match self {
            Self::Day => date,
            Self::Week => {
                let back = u64::from(date.weekday().num_days_from_monday());
                date.checked_sub_days(Days::new(back))?
            }
            Self::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?,
        };
        let floor = floor_date.and_time(NaiveTime::MIN);
        if floor == time {
            Some(floor)
        } else {
            self.advance(floor, 1)
        }
    }

    fn advance(self, boundary: NaiveDateTime, stride: u32) -> Option<NaiveDateTime> {
        match self {
            Self::Day => boundary.checked_add_days(Days::new(u64::from(stride))),
            Self::Week => boundary.checked_add_days(Days::new(7 * u64::from(stride))),
            Self::Month => boundary.checked_add_months(Months::new(stride)),
        }
    }
}

/// Calendar boundaries in `[start, end)` every `stride` units, excluding a
/// boundary that falls exactly on `start`.
#[must_use]
pub fn walk_calendar_boundaries(
    start: NaiveDateTime,
    end: NaiveDateTime,
    unit: CalendarUnit,
    stride: u32,
) -> Vec<NaiveDateTime> {
    let stride = stride.max(1);
    let mut boundaries = Vec::new();
    let mut current = unit.ceil(start);
    while let Some(boundary) = current {
        if boundary >= end {
            break;
        }
        if boundary != start {
            boundaries.push(boundary);
        }
        current = unit.advance(boundary, stride);
    }
    boundaries
}
