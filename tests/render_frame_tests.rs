use pricechart::core::Viewport;
use pricechart::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, NullRenderer, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive, estimate_text_width_px,
};
use pricechart::telemetry::init_default_tracing;

#[test]
fn null_renderer_counts_valid_frames() {
    let frame = RenderFrame::new(Viewport::new(800, 500))
        .with_line(LinePrimitive::new(
            0.0,
            10.0,
            760.0,
            10.0,
            1.0,
            Color::rgb(0.9, 0.9, 0.9),
        ))
        .with_rect(
            RectPrimitive::new(40.0, 12.0, 120.0, 22.0, Color::rgb(0.94, 0.95, 0.96))
                .with_corner_radius(4.0),
        )
        .with_text(TextPrimitive::new(
            "190",
            21.0,
            240.0,
            13.0,
            Color::rgb(0.3, 0.3, 0.3),
            TextHAlign::Right,
        ));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("valid frame");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn invalid_primitives_are_rejected_before_drawing() {
    let mut renderer = NullRenderer::default();

    let bad_dash = RenderFrame::new(Viewport::new(800, 500)).with_line(
        LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 1.0, Color::rgb(0.0, 0.0, 0.0))
            .with_stroke_style(LineStrokeStyle::Dashed(0.0)),
    );
    assert!(renderer.render(&bad_dash).is_err());

    let mut bad_circle = RenderFrame::new(Viewport::new(800, 500));
    bad_circle.circles.push(CirclePrimitive::new(
        10.0,
        10.0,
        4.0,
        Color::rgba(0.0, 0.6, 0.5, 1.5),
    ));
    assert!(renderer.render(&bad_circle).is_err());

    let empty_text = RenderFrame::new(Viewport::new(800, 500)).with_text(TextPrimitive::new(
        "",
        0.0,
        0.0,
        13.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Left,
    ));
    assert!(renderer.render(&empty_text).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn default_text_measurement_grows_with_content() {
    let renderer = NullRenderer::default();
    let short = renderer.measure_text("187.46", 13.0);
    let long = renderer.measure_text("187.46\u{a0}USD\u{a0}\u{a0}Fri, 08 Mar", 13.0);

    assert!(short > 0.0);
    assert!(long > short);
    assert_eq!(short, estimate_text_width_px("187.46", 13.0));
    // Never narrower than one em.
    assert_eq!(estimate_text_width_px("", 13.0), 13.0);
}

#[test]
fn tracing_init_is_opt_in() {
    let installed = init_default_tracing();
    if cfg!(not(feature = "telemetry")) {
        assert!(!installed);
    }
    // A second call never replaces the global subscriber.
    assert!(!init_default_tracing());
}
