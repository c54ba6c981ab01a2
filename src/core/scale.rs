use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Invertible 1-D mapping between a domain and pixel offsets.
///
/// `domain` and `range` are independent configuration; setters return the
/// scale so configuration can be chained.
pub trait Scale {
    type Domain: Copy;

    fn domain(&self) -> (Self::Domain, Self::Domain);

    fn set_domain(&mut self, start: Self::Domain, end: Self::Domain) -> ChartResult<&mut Self>;

    fn range(&self) -> (f64, f64);

    fn set_range(&mut self, start: f64, end: f64) -> ChartResult<&mut Self>;

    /// Maps a domain value to a pixel offset.
    fn scale(&self, value: Self::Domain) -> ChartResult<f64>;

    /// Maps a pixel offset back to the domain.
    fn invert(&self, pixel: f64) -> ChartResult<Self::Domain>;
}

pub(crate) fn validate_range(start: f64, end: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() || start == end {
        return Err(ChartError::InvalidData(
            "scale range must be finite and non-zero".to_owned(),
        ));
    }
    Ok((start, end))
}

/// Linear numeric scale, used for series indices and prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        let (domain_start, domain_end) = validate_domain(domain_start, domain_end)?;
        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    /// Builds a scale with both domain and range in one call.
    pub fn with_range(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        let mut scale = Self::new(domain_start, domain_end)?;
        scale.set_range(range_start, range_end)?;
        Ok(scale)
    }

    /// Extends the domain outward to round multiples of a 1/2/5 step so that
    /// roughly `count` ticks cover it.
    pub fn nice(&mut self, count: usize) -> &mut Self {
        if count == 0 {
            return self;
        }

        let reversed = self.domain_end < self.domain_start;
        let (mut start, mut end) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        // A second pass can change the step once the domain grew; stop when stable.
        let mut previous_step = None;
        for _ in 0..10 {
            let step = nice_step((end - start) / count as f64);
            if !step.is_finite() || step <= 0.0 || previous_step == Some(step) {
                break;
            }
            start = (start / step).floor() * step;
            end = (end / step).ceil() * step;
            previous_step = Some(step);
        }

        if reversed {
            self.domain_start = end;
            self.domain_end = start;
        } else {
            self.domain_start = start;
            self.domain_end = end;
        }
        self
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    fn set_domain(&mut self, start: f64, end: f64) -> ChartResult<&mut Self> {
        let (start, end) = validate_domain(start, end)?;
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

    fn scale(&self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    fn invert(&self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

fn validate_domain(start: f64, end: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() || start == end {
        return Err(ChartError::InvalidDomain(
            "scale domain must be finite and non-zero".to_owned(),
        ));
    }
    Ok((start, end))
}

fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return f64::NAN;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let factor = if residual >= 7.5 {
        10.0
    } else if residual >= 3.5 {
        5.0
    } else if residual >= 1.5 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_extends_to_round_bounds() {
        let mut scale = LinearScale::new(0.3, 9.6).expect("valid scale");
        scale.nice(10);
        assert_eq!(scale.domain(), (0.0, 10.0));
    }

    #[test]
    fn nice_keeps_already_round_domain() {
        let mut scale = LinearScale::new(180.0, 200.0).expect("valid scale");
        scale.nice(10);
        assert_eq!(scale.domain(), (180.0, 200.0));
    }

    #[test]
    fn nice_preserves_reversed_orientation() {
        let mut scale = LinearScale::new(9.6, 0.3).expect("valid scale");
        scale.nice(10);
        assert_eq!(scale.domain(), (10.0, 0.0));
    }
}
