use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{DataPoint, Series, generate_ticks_y, is_business_day, walk_calendar_boundaries};
use crate::error::ChartResult;

use super::label_format::{format_time_of_day, format_timestamp};
use super::period::{PeriodPolicy, TickGeneration, TickMatcher, XAxisKind};

/// Time-axis tick resolved to a series position.
///
/// On an axis with reserved slots `index` may point past the last sample:
/// the slot the time will occupy once the session fills in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTick {
    pub index: usize,
    pub label: String,
}

/// Selects the labelled positions of the time axis.
///
/// Never returns an empty list: when no boundary resolves, the first sample
/// is labelled so the axis always shows something. Indices are unique and in
/// the order the boundaries were generated.
#[must_use]
pub fn select_time_ticks(series: &Series, policy: &PeriodPolicy) -> Vec<TimeTick> {
    let mut ticks: Vec<TimeTick> = match &policy.tick_generation {
        TickGeneration::TimesOfDay { times } => {
            let session_date = series.first().timestamp.date();
            let reserved_slots = match policy.x_axis {
                XAxisKind::Index { fixed_slots } => fixed_slots,
                _ => None,
            };
            times
                .iter()
                .filter_map(|time| {
                    let target = session_date.and_time(*time);
                    let projected = reserved_slots
                        .filter(|_| target > series.last().timestamp)
                        .and_then(|slots| projected_slot(series, target).map(|slot| (slot, slots)));
                    let index = match projected {
                        // Past the reserved axis: nowhere to draw it.
                        Some((slot, slots)) if slot >= slots => return None,
                        Some((slot, _)) => slot,
                        None => match_boundary(series, target, TickMatcher::Nearest).index,
                    };
                    Some(TimeTick {
                        index,
                        label: format_time_of_day(*time, &policy.tick_label_format),
                    })
                })
                .collect()
        }
        TickGeneration::CalendarWalk {
            unit,
            stride,
            business_days_only,
            time_of_day,
            matcher,
        } => {
            let (start, end) = series.time_bounds();
            walk_calendar_boundaries(start, end, *unit, *stride)
                .into_iter()
                .filter(|boundary| !business_days_only || is_business_day(boundary.date()))
                .map(|boundary| match time_of_day {
                    Some(time) => boundary.date().and_time(*time),
                    None => boundary,
                })
                .map(|boundary| {
                    let point = match_boundary(series, boundary, *matcher);
                    TimeTick {
                        index: point.index,
                        label: format_timestamp(point.timestamp, &policy.tick_label_format),
                    }
                })
                .collect()
        }
    };

    let mut seen: SmallVec<[usize; 16]> = SmallVec::new();
    ticks.retain(|tick| {
        if seen.contains(&tick.index) {
            false
        } else {
            seen.push(tick.index);
            true
        }
    });

    if ticks.is_empty() {
        let first = series.first();
        trace!("no time tick resolved, falling back to first sample");
        ticks.push(TimeTick {
            index: first.index,
            label: match &policy.tick_generation {
                TickGeneration::TimesOfDay { .. } => {
                    format_time_of_day(first.timestamp.time(), &policy.tick_label_format)
                }
                TickGeneration::CalendarWalk { .. } => {
                    format_timestamp(first.timestamp, &policy.tick_label_format)
                }
            },
        });
    }

    ticks
}

/// Resolves a calendar boundary to a sample.
///
/// Order: exact timestamp, then the policy matcher scanning in series order,
/// then the nearest timestamp.
fn match_boundary(series: &Series, boundary: NaiveDateTime, matcher: TickMatcher) -> &DataPoint {
    if let Some(point) = series.find_exact(boundary) {
        return point;
    }

    let matched = match matcher {
        TickMatcher::Nearest => None,
        TickMatcher::SameDate => series
            .points()
            .iter()
            .find(|point| point.timestamp.date() == boundary.date()),
        TickMatcher::SameWeekday => series
            .points()
            .iter()
            .find(|point| point.timestamp.weekday() == boundary.weekday()),
        TickMatcher::SameMonth => series
            .points()
            .iter()
            .find(|point| point.timestamp.month() == boundary.month()),
    };

    matched.unwrap_or_else(|| series.nearest_in_time(boundary))
}

/// Slot a time past the last sample takes at the session's sampling interval.
///
/// `None` when the series has fewer than two samples.
fn projected_slot(series: &Series, target: NaiveDateTime) -> Option<usize> {
    let last = series.last();
    let previous = series.get(last.index.checked_sub(1)?)?;
    let interval = (last.timestamp - previous.timestamp).num_seconds();
    if interval <= 0 {
        return None;
    }
    let ahead = (target - last.timestamp).num_seconds();
    let steps = (ahead as f64 / interval as f64).round() as usize;
    Some(last.index + steps)
}

/// Value-axis ticks for the series under the policy's gap.
pub fn select_value_ticks(series: &Series, policy: &PeriodPolicy) -> ChartResult<Vec<f64>> {
    let (min, max) = series.value_bounds();
    generate_ticks_y(min, max, policy.y_tick_gap)
}
