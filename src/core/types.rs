use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Outer size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Surface margins reserved for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(10.0, 20.0, 30.0, 40.0)
    }
}

/// Plot area derived from the viewport and its margins.
///
/// The plot is translated by `margins.left`; every coordinate produced by the
/// engine is relative to that origin. `plot_width` drops the right margin and
/// `plot_height` drops the bottom margin, the top margin stays inside the plot
/// and is handled by the vertical scale range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    plot_width: f64,
    plot_height: f64,
}

impl SurfaceLayout {
    pub fn new(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate()?;

        let plot_width = f64::from(viewport.width) - margins.right;
        let plot_height = f64::from(viewport.height) - margins.bottom;
        if plot_width <= 0.0 || plot_height <= margins.top {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            viewport,
            margins,
            plot_width,
            plot_height,
        })
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.plot_width
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_height
    }
}
