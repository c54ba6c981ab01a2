use crate::core::Vertex;
use crate::render::{AreaPrimitive, LinePrimitive, RenderFrame, Renderer};

use super::render_frame_builder::PlotRenderContext;
use super::{ChartEngine, ChartScene};

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn append_line_series_primitives(
        &self,
        frame: &mut RenderFrame,
        scene: &ChartScene,
        ctx: PlotRenderContext,
    ) {
        let palette = self.config.palette;
        let shift = |vertex: &Vertex| Vertex {
            x: vertex.x + ctx.origin_x,
            y: vertex.y,
        };

        frame.areas.push(AreaPrimitive {
            vertices: scene.geometry.fill_polygon.iter().map(shift).collect(),
            top_color: palette.gradient_top,
            bottom_color: palette.gradient_bottom,
        });

        for pair in scene.geometry.line_points.windows(2) {
            let (from, to) = (shift(&pair[0]), shift(&pair[1]));
            frame.lines.push(LinePrimitive::new(
                from.x,
                from.y,
                to.x,
                to.y,
                self.config.line_width_px,
                palette.positive,
            ));
        }
    }
}
