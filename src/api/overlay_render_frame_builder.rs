use crate::render::{
    CirclePrimitive, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::overlay::{OverlayLabel, OverlayState};
use super::render_frame_builder::PlotRenderContext;
use super::ChartEngine;

const GUIDE_LINE_WIDTH_PX: f64 = 1.0;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn append_overlay_primitives(
        &self,
        frame: &mut RenderFrame,
        overlay: &OverlayState,
        ctx: PlotRenderContext,
    ) {
        let palette = self.config.palette;
        let style = self.config.overlay;
        let tooltip = overlay.tooltip;

        let accent = match &overlay.label {
            OverlayLabel::SinglePoint { .. } => palette.positive,
            OverlayLabel::Comparison { comparison, .. } => {
                let highlight = overlay.highlight;
                if highlight.width() > 0.0 {
                    frame.rects.push(RectPrimitive::new(
                        ctx.origin_x + highlight.x_start,
                        ctx.plot_top,
                        highlight.width(),
                        ctx.plot_height - ctx.plot_top,
                        palette.highlight,
                    ));
                }
                comparison.color(&palette)
            }
        };

        frame.lines.push(
            LinePrimitive::new(
                ctx.origin_x + tooltip.line_x,
                tooltip.line_y1,
                ctx.origin_x + tooltip.line_x,
                tooltip.line_y2,
                GUIDE_LINE_WIDTH_PX,
                palette
                    .text_ternary
                    .with_alpha(palette.text_ternary.alpha * style.guide_line_opacity),
            )
            .with_stroke_style(LineStrokeStyle::Dashed(style.guide_line_dash_px)),
        );
        frame.circles.push(CirclePrimitive::new(
            ctx.origin_x + tooltip.dot_x,
            tooltip.dot_y,
            style.dot_radius,
            accent,
        ));
        frame.rects.push(
            RectPrimitive::new(
                ctx.origin_x + tooltip.box_x,
                tooltip.box_y,
                tooltip.box_width,
                tooltip.box_height,
                palette.label_background,
            )
            .with_corner_radius(style.corner_radius),
        );

        let text_x = ctx.origin_x + tooltip.box_x + style.box_padding_x;
        let text_y = tooltip.box_y + style.text_baseline_y;
        match &overlay.label {
            OverlayLabel::SinglePoint {
                value_text,
                date_text,
            } => {
                frame.texts.push(TextPrimitive::new(
                    value_text.clone(),
                    text_x,
                    text_y,
                    ctx.font_size_px,
                    palette.text_primary,
                    TextHAlign::Left,
                ));
                frame.texts.push(TextPrimitive::new(
                    date_text.clone(),
                    text_x + self.renderer.measure_text(value_text, ctx.font_size_px),
                    text_y,
                    ctx.font_size_px,
                    palette.text_secondary,
                    TextHAlign::Left,
                ));
            }
            OverlayLabel::Comparison { text, .. } => {
                frame.texts.push(TextPrimitive::new(
                    text.clone(),
                    text_x,
                    text_y,
                    ctx.font_size_px,
                    accent,
                    TextHAlign::Left,
                ));
            }
        }
    }
}
