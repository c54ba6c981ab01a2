use tracing::{debug, trace, warn};

use crate::core::{DataPoint, Scale};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::label_format::{format_timestamp, format_tooltip_value};
use super::overlay::{HighlightRegion, OverlayLabel, OverlayPositioner, OverlayState};
use super::pointer_resolver::resolve_pointer;
use super::range_comparator::RangeComparison;
use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Resolves the pointer to a sample and recomputes the overlay.
    ///
    /// Returns `None` when the engine is loading, the series is too short to
    /// hover, or the pointer does not resolve to a sample. An unresolved
    /// pointer leaves the previous overlay in place, so the next
    /// [`render`](Self::render) still draws it; call
    /// [`pointer_leave`](Self::pointer_leave) to hide it.
    pub fn pointer_move(&mut self, x: f64) -> Option<&OverlayState> {
        if !self.session.is_ready() {
            trace!(x, "pointer ignored while loading");
            return None;
        }
        let scene = self.scene.as_ref()?;
        if !scene.series.supports_hover() {
            return None;
        }
        let Some(point) = resolve_pointer(&scene.series, &scene.x_scale, x).copied() else {
            trace!(x, "pointer resolved no sample");
            return None;
        };

        trace!(x, index = point.index, "pointer resolved");
        self.session.set_hovered(point);
        self.refresh_overlay(point)
    }

    /// Starts a drag comparison at the hovered sample.
    ///
    /// Returns `false` when nothing is hovered.
    pub fn pointer_down(&mut self) -> bool {
        let Some(drag) = self.session.begin_drag() else {
            return false;
        };
        debug!(
            index = drag.start.index,
            value = drag.start.value,
            "drag started"
        );
        self.refresh_overlay(drag.current);
        true
    }

    /// Ends the drag and puts the overlay back in single-point mode.
    pub fn pointer_up(&mut self) {
        let Some(drag) = self.session.end_drag() else {
            return;
        };
        debug!(
            start = drag.start.index,
            end = drag.current.index,
            "drag ended"
        );
        match self.session.hovered() {
            Some(point) => {
                self.refresh_overlay(point);
            }
            None => self.overlay = None,
        }
    }

    /// Hides the overlay. An active drag survives until `pointer_up`.
    pub fn pointer_leave(&mut self) {
        self.session.clear_hovered();
        self.overlay = None;
    }

    fn refresh_overlay(&mut self, anchor: DataPoint) -> Option<&OverlayState> {
        match self.compose_overlay(anchor) {
            Ok(state) => Some(&*self.overlay.insert(state)),
            Err(err) => {
                warn!(error = %err, index = anchor.index, "overlay update skipped");
                None
            }
        }
    }

    fn compose_overlay(&self, anchor: DataPoint) -> ChartResult<OverlayState> {
        let scene = self
            .scene
            .as_ref()
            .ok_or_else(|| ChartError::InvalidData("no series installed".to_owned()))?;
        let font_size = self.config.label_font_size_px;
        let dot_x = scene.x_scale.position_of(&anchor)?;
        let dot_y = scene.y_scale.scale(anchor.value)?;

        let drag = self.session.drag();
        let (label, text_width, highlight) = match drag {
            Some(drag) => {
                let comparison = RangeComparison::compare(drag.start, drag.current);
                let text = comparison.label(&scene.policy.tooltip_date_format);
                let width = self.renderer.measure_text(&text, font_size);
                let highlight = HighlightRegion::between(
                    scene.x_scale.position_of(&drag.start)?,
                    scene.x_scale.position_of(&drag.current)?,
                );
                (OverlayLabel::Comparison { comparison, text }, width, highlight)
            }
            None => {
                let value_text = format_tooltip_value(anchor.value, &self.config.currency_label);
                let date_text =
                    format_timestamp(anchor.timestamp, &scene.policy.tooltip_date_format);
                let width = self.renderer.measure_text(&value_text, font_size)
                    + self.renderer.measure_text(&date_text, font_size);
                (
                    OverlayLabel::SinglePoint {
                        value_text,
                        date_text,
                    },
                    width,
                    HighlightRegion::full_width(self.layout),
                )
            }
        };

        let positioner = OverlayPositioner::new(self.config.overlay, self.layout);
        let tooltip = positioner.position(
            anchor,
            dot_x,
            dot_y,
            positioner.box_width_for(text_width),
            drag.is_some(),
        );

        Ok(OverlayState {
            tooltip,
            label,
            highlight,
        })
    }
}
