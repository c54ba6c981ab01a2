use chrono::NaiveDateTime;
use tracing::trace;

use crate::core::{DataPoint, LinearScale, Scale, Series, XScale};

/// Resolves a pointer on an index axis by rounding the inverted position.
///
/// No clamping: a rounded index outside `[0, len)` yields `None` and callers
/// skip the overlay for that event.
#[must_use]
pub fn resolve_index<'a>(series: &'a Series, scale: &LinearScale, pointer_x: f64) -> Option<&'a DataPoint> {
    let position = match scale.invert(pointer_x) {
        Ok(position) => position.round(),
        Err(err) => {
            trace!(error = %err, pointer_x, "index inversion failed");
            return None;
        }
    };

    if position < 0.0 || position >= series.len() as f64 {
        trace!(pointer_x, position, "pointer outside indexed samples");
        return None;
    }
    series.get(position as usize)
}

/// Resolves a pointer on a temporal axis by bisection.
///
/// The resolved sample is the one just before the insertion point, with equal
/// timestamps kept on the left: the last sample at or before the inverted
/// instant. A pointer before the first sample yields `None`.
#[must_use]
pub fn resolve_time<'a, S>(series: &'a Series, scale: &S, pointer_x: f64) -> Option<&'a DataPoint>
where
    S: Scale<Domain = NaiveDateTime>,
{
    match scale.invert(pointer_x) {
        Ok(time) => series.at_or_before(time),
        Err(err) => {
            trace!(error = %err, pointer_x, "time inversion failed");
            None
        }
    }
}

/// Dispatches to the strategy matching the installed horizontal scale.
#[must_use]
pub fn resolve_pointer<'a>(series: &'a Series, x_scale: &XScale, pointer_x: f64) -> Option<&'a DataPoint> {
    match x_scale {
        XScale::Index(scale) => resolve_index(series, scale, pointer_x),
        XScale::BusinessDay(scale) => resolve_time(series, scale, pointer_x),
        XScale::WallClock(scale) => resolve_time(series, scale, pointer_x),
    }
}
