use chrono::NaiveDateTime;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// One sample of a price series.
///
/// `timestamp` is exchange-local wall time; calendar rules (business days,
/// session hours) are evaluated on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub index: usize,
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(index: usize, timestamp: NaiveDateTime, value: f64) -> Self {
        Self {
            index,
            timestamp,
            value,
        }
    }

    pub fn from_decimal(index: usize, timestamp: NaiveDateTime, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            index,
            timestamp,
            value: decimal_to_f64(value, "value")?,
        })
    }
}

/// Ordered, indexed price series.
///
/// Invariants:
/// - at least one point
/// - timestamps strictly increasing
/// - `points[i].index == i`
/// - all values finite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    /// Builds a series from already indexed points, validating every invariant.
    pub fn new(points: Vec<DataPoint>) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        for (position, point) in points.iter().enumerate() {
            if point.index != position {
                return Err(ChartError::InvalidData(format!(
                    "point index {} does not match its position {position}",
                    point.index
                )));
            }
            if !point.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "point {position} value must be finite"
                )));
            }
        }

        if let Some(pair) = points
            .windows(2)
            .find(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(ChartError::InvalidData(format!(
                "timestamps must be strictly increasing (at index {})",
                pair[1].index
            )));
        }

        Ok(Self { points })
    }

    /// Builds a series from raw `(timestamp, value)` samples, assigning indices
    /// by position.
    pub fn from_samples<I>(samples: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (NaiveDateTime, f64)>,
    {
        let points = samples
            .into_iter()
            .enumerate()
            .map(|(index, (timestamp, value))| DataPoint::new(index, timestamp, value))
            .collect();
        Self::new(points)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn first(&self) -> &DataPoint {
        &self.points[0]
    }

    #[must_use]
    pub fn last(&self) -> &DataPoint {
        &self.points[self.points.len() - 1]
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    /// `(first, last)` timestamps.
    #[must_use]
    pub fn time_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.first().timestamp, self.last().timestamp)
    }

    /// `(min, max)` of all values.
    #[must_use]
    pub fn value_bounds(&self) -> (f64, f64) {
        let min = self
            .points
            .iter()
            .map(|point| OrderedFloat(point.value))
            .min()
            .map_or(self.first().value, |value| value.0);
        let max = self
            .points
            .iter()
            .map(|point| OrderedFloat(point.value))
            .max()
            .map_or(self.first().value, |value| value.0);
        (min, max)
    }

    /// Hover needs at least two samples; a single point has nothing to compare.
    #[must_use]
    pub fn supports_hover(&self) -> bool {
        self.points.len() >= 2
    }

    /// Insertion point for `time` keeping equal timestamps on the left.
    #[must_use]
    pub fn bisect_time(&self, time: NaiveDateTime) -> usize {
        self.points.partition_point(|point| point.timestamp <= time)
    }

    /// Last point with `timestamp <= time`.
    #[must_use]
    pub fn at_or_before(&self, time: NaiveDateTime) -> Option<&DataPoint> {
        let insertion = self.bisect_time(time);
        insertion.checked_sub(1).and_then(|idx| self.points.get(idx))
    }

    /// Point whose timestamp equals `time` exactly.
    #[must_use]
    pub fn find_exact(&self, time: NaiveDateTime) -> Option<&DataPoint> {
        self.points
            .binary_search_by(|point| point.timestamp.cmp(&time))
            .ok()
            .map(|idx| &self.points[idx])
    }

    /// Point with the smallest absolute time distance; ties go to the earlier point.
    #[must_use]
    pub fn nearest_in_time(&self, time: NaiveDateTime) -> &DataPoint {
        let insertion = self.points.partition_point(|point| point.timestamp < time);
        let after = self.points.get(insertion);
        let before = insertion.checked_sub(1).and_then(|idx| self.points.get(idx));
        match (before, after) {
            (Some(left), Some(right)) => {
                if time - left.timestamp <= right.timestamp - time {
                    left
                } else {
                    right
                }
            }
            (Some(left), None) => left,
            (None, Some(right)) => right,
            (None, None) => self.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid datetime")
    }

    #[test]
    fn rejects_non_increasing_timestamps() {
        let result = Series::from_samples([(at(4, 10), 1.0), (at(4, 10), 2.0)]);
        assert!(matches!(result, Err(ChartError::InvalidData(_))));
    }

    #[test]
    fn rejects_empty_input() {
        let result = Series::from_samples(Vec::<(NaiveDateTime, f64)>::new());
        assert!(matches!(result, Err(ChartError::EmptySeries)));
    }

    #[test]
    fn rejects_mismatched_index() {
        let result = Series::new(vec![DataPoint::new(1, at(4, 10), 1.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn nearest_in_time_prefers_earlier_on_tie() {
        let series =
            Series::from_samples([(at(4, 10), 1.0), (at(4, 12), 2.0)]).expect("valid series");
        assert_eq!(series.nearest_in_time(at(4, 11)).index, 0);
        assert_eq!(series.nearest_in_time(at(4, 13)).index, 1);
        assert_eq!(series.nearest_in_time(at(3, 9)).index, 0);
    }

    #[test]
    fn decimal_values_convert_to_f64() {
        let point = DataPoint::from_decimal(0, at(4, 10), Decimal::new(18746, 2))
            .expect("representable");
        assert_eq!(point.value, 187.46);
    }

    #[test]
    fn value_bounds_cover_single_point() {
        let series = Series::from_samples([(at(4, 10), 42.0)]).expect("valid series");
        assert_eq!(series.value_bounds(), (42.0, 42.0));
        assert!(!series.supports_hover());
    }
}
