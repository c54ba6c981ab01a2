use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::scale::{LinearScale, Scale, validate_range};
use crate::error::{ChartError, ChartResult};

/// Continuous wall-clock scale: elapsed time maps linearly to pixels.
///
/// Used for intraday sessions where every minute of the session gets the same
/// width. Internally the domain is held as milliseconds since `domain_start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    domain_start: NaiveDateTime,
    domain_end: NaiveDateTime,
    range_start: f64,
    range_end: f64,
}

impl TimeScale {
    pub fn new(domain_start: NaiveDateTime, domain_end: NaiveDateTime) -> ChartResult<Self> {
        validate_time_domain(domain_start, domain_end)?;
        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    fn offset_millis(self, time: NaiveDateTime) -> f64 {
        (time - self.domain_start).num_milliseconds() as f64
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::with_range(
            0.0,
            self.offset_millis(self.domain_end),
            self.range_start,
            self.range_end,
        )
    }
}

impl Scale for TimeScale {
    type Domain = NaiveDateTime;

    fn domain(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.domain_start, self.domain_end)
    }

    fn set_domain(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> ChartResult<&mut Self> {
        validate_time_domain(start, end)?;
        self.domain_start = start;
        self.domain_end = end;
        Ok(self)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    fn set_range(&mut self, start: f64, end: f64) -> ChartResult<&mut Self> {
        let (start, end) = validate_range(start, end)?;
        self.range_start = start;
        self.range_end = end;
        Ok(self)
    }

    fn scale(&self, value: NaiveDateTime) -> ChartResult<f64> {
        self.linear()?.scale(self.offset_millis(value))
    }

    fn invert(&self, pixel: f64) -> ChartResult<NaiveDateTime> {
        let millis = self.linear()?.invert(pixel)?.round();
        Duration::try_milliseconds(millis as i64)
            .and_then(|delta| self.domain_start.checked_add_signed(delta))
            .ok_or_else(|| {
                ChartError::InvalidData("pixel maps outside representable time".to_owned())
            })
    }
}

fn validate_time_domain(start: NaiveDateTime, end: NaiveDateTime) -> ChartResult<()> {
    if start == end {
        return Err(ChartError::InvalidDomain(
            "time scale domain must span a non-zero duration".to_owned(),
        ));
    }
    Ok(())
}
