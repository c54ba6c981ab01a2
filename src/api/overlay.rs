use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, SurfaceLayout};

use super::engine_config::OverlayConfig;
use super::range_comparator::RangeComparison;

/// Vertical slot of the hover label box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayRow {
    Top,
    Bottom,
}

/// Fully derived hover geometry for one pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub anchor: DataPoint,
    pub dot_x: f64,
    pub dot_y: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub box_x: f64,
    pub box_y: f64,
    pub line_x: f64,
    pub line_y1: f64,
    pub line_y2: f64,
    pub row: OverlayRow,
}

/// Horizontal band shaded behind a drag comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightRegion {
    pub x_start: f64,
    pub x_end: f64,
}

impl HighlightRegion {
    #[must_use]
    pub fn full_width(layout: SurfaceLayout) -> Self {
        Self {
            x_start: 0.0,
            x_end: layout.plot_width(),
        }
    }

    #[must_use]
    pub fn between(a: f64, b: f64) -> Self {
        Self {
            x_start: a.min(b),
            x_end: a.max(b),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_end - self.x_start
    }
}

/// Text shown in the label box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OverlayLabel {
    /// Value fragment (primary color) followed by the date fragment.
    SinglePoint { value_text: String, date_text: String },
    /// Drag comparison readout, colored by its direction.
    Comparison {
        comparison: RangeComparison,
        text: String,
    },
}

/// What the host draws for the current pointer position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayState {
    pub tooltip: TooltipState,
    pub label: OverlayLabel,
    pub highlight: HighlightRegion,
}

/// Places the hover label box so it never hides the marker dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPositioner {
    config: OverlayConfig,
    layout: SurfaceLayout,
}

impl OverlayPositioner {
    #[must_use]
    pub fn new(config: OverlayConfig, layout: SurfaceLayout) -> Self {
        Self { config, layout }
    }

    /// Box width for a measured text width.
    #[must_use]
    pub fn box_width_for(&self, text_width: f64) -> f64 {
        text_width.max(0.0) + 2.0 * self.config.box_padding_x
    }

    #[must_use]
    pub fn bottom_row_y(&self) -> f64 {
        self.layout.plot_height() - self.layout.margins.bottom - self.config.bottom_row_inset
    }

    /// Bottom only when a top-row box would overlap the dot; a drag always
    /// keeps the top row so the comparison readout stays put.
    #[must_use]
    pub fn choose_row(&self, dot_y: f64, box_height: f64, drag_active: bool) -> OverlayRow {
        if drag_active {
            return OverlayRow::Top;
        }
        if self.config.top_row_y + box_height + self.config.overlap_guard_px > dot_y {
            OverlayRow::Bottom
        } else {
            OverlayRow::Top
        }
    }

    /// Left edge of a box centered on `dot_x`, clamped to the surface.
    #[must_use]
    pub fn box_x(&self, dot_x: f64, box_width: f64) -> f64 {
        let centered = dot_x - box_width / 2.0;
        centered
            .min(self.layout.plot_width() - box_width)
            .max(self.config.min_box_x)
    }

    pub fn position(
        &self,
        anchor: DataPoint,
        dot_x: f64,
        dot_y: f64,
        box_width: f64,
        drag_active: bool,
    ) -> TooltipState {
        let box_height = self.config.box_height;
        let row = self.choose_row(dot_y, box_height, drag_active);
        let top_margin = self.layout.margins.top;
        let plot_height = self.layout.plot_height();

        let (box_y, line_y1, line_y2) = match row {
            OverlayRow::Top => (self.config.top_row_y, top_margin * 2.0, plot_height),
            OverlayRow::Bottom => (self.bottom_row_y(), top_margin, plot_height - top_margin * 2.0),
        };

        TooltipState {
            anchor,
            dot_x,
            dot_y,
            box_width,
            box_height,
            box_x: self.box_x(dot_x, box_width),
            box_y,
            line_x: dot_x,
            line_y1,
            line_y2,
            row,
        }
    }
}
