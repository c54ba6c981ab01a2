use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::core::primitives::round_to_cents;
use crate::render::Color;

use super::engine_config::ChartPalette;
use super::label_format::{LABEL_SPACE, format_timestamp};

/// Sign of a comparison after rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl Direction {
    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Up => Some("\u{25b2}"),
            Self::Down => Some("\u{25bc}"),
            Self::Neutral => None,
        }
    }

    #[must_use]
    pub fn color(self, palette: &ChartPalette) -> Color {
        match self {
            Self::Up => palette.positive,
            Self::Down => palette.negative,
            Self::Neutral => palette.neutral,
        }
    }
}

/// Change between the drag start sample and the current sample.
///
/// `delta` keeps its sign (current minus start). `percentage` is the relative
/// gap between the two magnitudes and is always >= 0. Both are rounded to two
/// decimals and the direction follows the rounded delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeComparison {
    pub start: DataPoint,
    pub current: DataPoint,
    pub delta: f64,
    pub percentage: f64,
    pub direction: Direction,
}

impl RangeComparison {
    #[must_use]
    pub fn compare(start: DataPoint, current: DataPoint) -> Self {
        let delta = round_to_cents(current.value - start.value);

        let low = start.value.abs().min(current.value.abs());
        let high = start.value.abs().max(current.value.abs());
        let percentage = if high > 0.0 {
            round_to_cents((1.0 - low / high) * 100.0)
        } else {
            0.0
        };

        let direction = if delta > 0.0 {
            Direction::Up
        } else if delta < 0.0 {
            Direction::Down
        } else {
            Direction::Neutral
        };

        Self {
            start,
            current,
            delta,
            percentage,
            direction,
        }
    }

    /// The two samples ordered by series index, earlier first.
    #[must_use]
    pub fn chronological(&self) -> (DataPoint, DataPoint) {
        if self.start.index <= self.current.index {
            (self.start, self.current)
        } else {
            (self.current, self.start)
        }
    }

    #[must_use]
    pub fn color(&self, palette: &ChartPalette) -> Color {
        self.direction.color(palette)
    }

    /// `"+10.00 (9.09%) ▲  08 Mar - 12 Mar"`. The date range is always
    /// chronological regardless of drag direction.
    #[must_use]
    pub fn label(&self, date_format: &str) -> String {
        let (earlier, later) = self.chronological();
        let mut text = match self.direction {
            Direction::Neutral => format!("0.00{LABEL_SPACE}({:.2}%)", self.percentage),
            Direction::Up | Direction::Down => {
                format!("{:+.2}{LABEL_SPACE}({:.2}%)", self.delta, self.percentage)
            }
        };
        if let Some(marker) = self.direction.marker() {
            text.push(LABEL_SPACE);
            text.push_str(marker);
        }
        text.push(LABEL_SPACE);
        text.push(LABEL_SPACE);
        text.push_str(&format_timestamp(earlier.timestamp, date_format));
        text.push_str(" - ");
        text.push_str(&format_timestamp(later.timestamp, date_format));
        text
    }
}
