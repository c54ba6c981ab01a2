use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::scale::{Scale, validate_range};
use crate::error::{ChartError, ChartResult};

/// Upper bound on business-day steps `invert` will walk away from the origin.
const MAX_INVERT_STEPS: f64 = 100_000.0;

#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of business days in `[start, end]`, inclusive, by calendar date.
///
/// Walks day by day; chart spans are a few hundred days at most.
#[must_use]
pub fn count_business_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if is_business_day(current) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}

/// Moves `date` by `days` business days, skipping weekends.
///
/// Negative `days` walks backwards. Time-of-day is preserved. Returns `None`
/// when the walk leaves chrono's representable range.
#[must_use]
pub fn add_business_days(date: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let mut current = date;
    let mut remaining = days.unsigned_abs();
    while remaining > 0 {
        current = if days > 0 {
            current.checked_add_days(Days::new(1))?
        } else {
            current.checked_sub_days(Days::new(1))?
        };
        if is_business_day(current.date()) {
            remaining -= 1;
        }
    }
    Some(current)
}

/// Signed count of business days between `origin` and `date`.
///
/// Counts days after `origin` up to and including `date`, so `origin` itself
/// sits at offset zero and each following business day adds one.
fn business_day_offset(origin: NaiveDate, date: NaiveDate) -> i64 {
    if date >= origin {
        match origin.succ_opt() {
            Some(next) => i64::from(count_business_days(next, date)),
            None => 0,
        }
    } else {
        match date.succ_opt() {
            Some(next) => -i64::from(count_business_days(next, origin)),
            None => 0,
        }
    }
}

/// Temporal scale where only business days occupy horizontal space.
///
/// Weekends collapse to zero width: a Friday and the following Monday are
/// exactly one step apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessDayScale {
    domain_start: NaiveDateTime,
    domain_end: NaiveDateTime,
    range_start: f64,
    range_end: f64,
}

impl BusinessDayScale {
    /// Creates a scale over `[start, end]` with the unit pixel range.
    ///
    /// Fails with `InvalidDomain` when the span holds no business-day step.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> ChartResult<Self> {
        let scale = Self {
            domain_start: start,
            domain_end: end,
            range_start: 0.0,
            range_end: 1.0,
        };
        scale.total_business_days()?;
        Ok(scale)
    }

    /// Business-day steps between the domain bounds.
    pub fn total_business_days(&self) -> ChartResult<i64> {
        let total = business_day_offset(self.domain_start.date(), self.domain_end.date());
        if total <= 0 {
            return Err(ChartError::InvalidDomain(format!(
                "no business day between {} and {}",
                self.domain_start, self.domain_end
            )));
        }
        Ok(total)
    }

    /// Evenly strided business-day ticks.
    ///
    /// Starts at the first business day on or after the domain start, walks in
    /// calendar-day strides and keeps business days only. The stride widens
    /// until at most `count` ticks remain.
    pub fn ticks(&self, count: usize) -> ChartResult<Vec<NaiveDateTime>> {
        self.total_business_days()?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let start_date = self.domain_start.date();
        let end_date = self.domain_end.date();
        let total_days = count_business_days(start_date, end_date) as usize;
        let tick_count = total_days.min(count).max(1);
        let mut step = (total_days / tick_count).max(1) as u64;

        let mut first = self.domain_start;
        while !is_business_day(first.date()) {
            first = first
                .checked_add_days(Days::new(1))
                .ok_or_else(|| ChartError::InvalidDomain("domain start overflows".to_owned()))?;
        }

        loop {
            let mut ticks = Vec::new();
            let mut current = Some(first);
            while let Some(day) = current {
                if day.date() > end_date {
                    break;
                }
                if is_business_day(day.date()) {
                    ticks.push(day);
                }
                current = day.checked_add_days(Days::new(step));
            }

            if ticks.len() <= count {
                return Ok(ticks);
            }
            step += 1;
        }
    }
}

impl Scale for BusinessDayScale {
    type Domain = NaiveDateTime;

    fn domain(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.domain_start, self.domain_end)
    }

    fn set_domain(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> ChartResult<&mut Self> {
        let candidate = Self {
            domain_start: start,
            domain_end: end,
            ..*self
        };
        candidate.total_business_days()?;
        *self = candidate;
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
        let total = self.total_business_days()? as f64;
        let offset = business_day_offset(self.domain_start.date(), value.date()) as f64;
        Ok(self.range_start + (offset / total) * (self.range_end - self.range_start))
    }

    fn invert(&self, pixel: f64) -> ChartResult<NaiveDateTime> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let total = self.total_business_days()? as f64;
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        let target = (normalized * total).round();
        if target.abs() > MAX_INVERT_STEPS {
            return Err(ChartError::InvalidData(
                "pixel maps too far outside the domain".to_owned(),
            ));
        }
        add_business_days(self.domain_start, target as i64).ok_or_else(|| {
            ChartError::InvalidData("pixel maps outside representable dates".to_owned())
        })
    }
}
