use crate::render::{LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::render_frame_builder::PlotRenderContext;
use super::{ChartEngine, ChartScene};

/// Tick mark length plus label padding left of the plot.
const VALUE_LABEL_OFFSET_PX: f64 = 9.0;
/// Gap between the plot bottom and the time label baseline, before the
/// font-relative ascent.
const TIME_LABEL_OFFSET_PX: f64 = 9.0;
const GRID_LINE_WIDTH_PX: f64 = 1.0;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn append_axis_primitives(
        &self,
        frame: &mut RenderFrame,
        scene: &ChartScene,
        ctx: PlotRenderContext,
    ) {
        let palette = self.config.palette;

        for tick in &scene.y_ticks {
            frame.lines.push(LinePrimitive::new(
                ctx.origin_x,
                tick.position,
                ctx.origin_x + ctx.plot_width,
                tick.position,
                GRID_LINE_WIDTH_PX,
                palette.grid_line,
            ));
            if tick.label.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                ctx.origin_x - VALUE_LABEL_OFFSET_PX,
                tick.position + ctx.font_size_px * 0.32,
                ctx.font_size_px,
                palette.text_secondary,
                TextHAlign::Right,
            ));
        }

        let label_y = ctx.plot_height + TIME_LABEL_OFFSET_PX + ctx.font_size_px * 0.71;
        for tick in scene.x_ticks.iter().filter(|tick| !tick.label.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                ctx.origin_x + tick.position,
                label_y,
                ctx.font_size_px,
                palette.text_secondary,
                TextHAlign::Center,
            ));
        }
    }
}
