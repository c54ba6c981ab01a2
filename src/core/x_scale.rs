use serde::{Deserialize, Serialize};

use crate::core::{BusinessDayScale, DataPoint, LinearScale, Scale, TimeScale};
use crate::error::ChartResult;

/// Horizontal scale installed for one draw.
///
/// `Index` places samples at equal spacing by series position; the temporal
/// variants place them by timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum XScale {
    Index(LinearScale),
    BusinessDay(BusinessDayScale),
    WallClock(TimeScale),
}

impl XScale {
    /// Pixel x of a sample.
    pub fn position_of(&self, point: &DataPoint) -> ChartResult<f64> {
        match self {
            Self::Index(scale) => scale.scale(point.index as f64),
            Self::BusinessDay(scale) => scale.scale(point.timestamp),
            Self::WallClock(scale) => scale.scale(point.timestamp),
        }
    }
}
