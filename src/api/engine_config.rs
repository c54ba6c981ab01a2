use serde::{Deserialize, Serialize};

use crate::core::{Margins, SurfaceLayout, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::period::Period;

/// Constants that place the hover overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Y of the label box in the top row.
    pub top_row_y: f64,
    /// Distance kept between the bottom-row box and the bottom margin.
    pub bottom_row_inset: f64,
    /// Guard added to the overlap test so the row does not flicker.
    pub overlap_guard_px: f64,
    /// Leftmost x a label box may start at.
    pub min_box_x: f64,
    pub box_height: f64,
    pub box_padding_x: f64,
    pub text_baseline_y: f64,
    pub corner_radius: f64,
    pub dot_radius: f64,
    pub guide_line_opacity: f64,
    pub guide_line_dash_px: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            top_row_y: 12.0,
            bottom_row_inset: 6.0,
            overlap_guard_px: 5.0,
            min_box_x: -2.0,
            box_height: 22.0,
            box_padding_x: 8.0,
            text_baseline_y: 15.0,
            corner_radius: 4.0,
            dot_radius: 4.0,
            guide_line_opacity: 0.7,
            guide_line_dash_px: 3.0,
        }
    }
}

impl OverlayConfig {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top_row_y", self.top_row_y),
            ("bottom_row_inset", self.bottom_row_inset),
            ("overlap_guard_px", self.overlap_guard_px),
            ("min_box_x", self.min_box_x),
            ("text_baseline_y", self.text_baseline_y),
            ("corner_radius", self.corner_radius),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "overlay `{name}` must be finite"
                )));
            }
        }
        for (name, value) in [
            ("box_height", self.box_height),
            ("box_padding_x", self.box_padding_x),
            ("dot_radius", self.dot_radius),
            ("guide_line_dash_px", self.guide_line_dash_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "overlay `{name}` must be finite and > 0"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.guide_line_opacity) {
            return Err(ChartError::InvalidData(
                "overlay guide line opacity must be in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Colors handed to the render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_ternary: Color,
    pub label_background: Color,
    pub grid_line: Color,
    pub gradient_top: Color,
    pub gradient_bottom: Color,
    pub highlight: Color,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            positive: Color::rgb(0.05, 0.6, 0.51),
            negative: Color::rgb(0.95, 0.21, 0.27),
            neutral: Color::rgb(0.47, 0.49, 0.53),
            text_primary: Color::rgb(0.09, 0.1, 0.12),
            text_secondary: Color::rgb(0.36, 0.38, 0.42),
            text_ternary: Color::rgb(0.6, 0.62, 0.66),
            label_background: Color::rgb(0.94, 0.95, 0.96),
            grid_line: Color::rgb(0.9, 0.91, 0.92),
            gradient_top: Color::rgba(0.05, 0.6, 0.51, 0.35),
            gradient_bottom: Color::rgba(0.05, 0.6, 0.51, 0.0),
            highlight: Color::rgba(0.47, 0.49, 0.53, 0.12),
        }
    }
}

impl ChartPalette {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.positive,
            self.negative,
            self.neutral,
            self.text_primary,
            self.text_secondary,
            self.text_ternary,
            self.label_background,
            self.grid_line,
            self.gradient_top,
            self.gradient_bottom,
            self.highlight,
        ] {
            color.validate()?;
        }
        Ok(self)
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_initial_period")]
    pub initial_period: Period,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub palette: ChartPalette,
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_line_width_px")]
    pub line_width_px: f64,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            initial_period: default_initial_period(),
            overlay: OverlayConfig::default(),
            palette: ChartPalette::default(),
            currency_label: default_currency_label(),
            label_font_size_px: default_label_font_size_px(),
            line_width_px: default_line_width_px(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_initial_period(mut self, period: Period) -> Self {
        self.initial_period = period;
        self
    }

    #[must_use]
    pub fn with_overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_currency_label(mut self, currency_label: impl Into<String>) -> Self {
        self.currency_label = currency_label.into();
        self
    }

    /// Validates every section and derives the plot layout.
    pub fn validate(&self) -> ChartResult<SurfaceLayout> {
        self.overlay.validate()?;
        self.palette.validate()?;
        if self.currency_label.is_empty() {
            return Err(ChartError::InvalidData(
                "currency label must not be empty".to_owned(),
            ));
        }
        for (name, value) in [
            ("label_font_size_px", self.label_font_size_px),
            ("line_width_px", self.line_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        SurfaceLayout::new(self.viewport, self.margins)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_initial_period() -> Period {
    Period::Intraday
}

fn default_currency_label() -> String {
    "USD".to_owned()
}

fn default_label_font_size_px() -> f64 {
    13.0
}

fn default_line_width_px() -> f64 {
    2.0
}
