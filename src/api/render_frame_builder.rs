use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::ChartEngine;

/// Plot placement shared by the primitive builders.
///
/// Scene and overlay coordinates are plot-relative; `origin_x` shifts them
/// into surface space.
#[derive(Debug, Clone, Copy)]
pub(super) struct PlotRenderContext {
    pub origin_x: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub plot_top: f64,
    pub font_size_px: f64,
}

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current scene and overlay into draw commands.
    ///
    /// While a period switch is in flight the frame is empty.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.layout.viewport);
        let Some(scene) = self.scene.as_ref() else {
            return Ok(frame);
        };

        let ctx = PlotRenderContext {
            origin_x: self.layout.margins.left,
            plot_width: self.layout.plot_width(),
            plot_height: self.layout.plot_height(),
            plot_top: self.layout.margins.top,
            font_size_px: self.config.label_font_size_px,
        };

        self.append_axis_primitives(&mut frame, scene, ctx);
        self.append_line_series_primitives(&mut frame, scene, ctx);
        if let Some(overlay) = self.overlay.as_ref() {
            self.append_overlay_primitives(&mut frame, overlay, ctx);
        }

        frame.validate()?;
        Ok(frame)
    }
}
