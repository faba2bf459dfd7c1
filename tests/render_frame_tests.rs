use erlang_charts::ChartError;
use erlang_charts::core::Viewport;
use erlang_charts::render::{
    Color, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

fn sample_frame() -> RenderFrame {
    RenderFrame::new(Viewport::new(320, 200))
        .with_rect(RectPrimitive::new(0.0, 0.0, 320.0, 200.0, Color::WHITE))
        .with_line(LinePrimitive::new(10.0, 190.0, 310.0, 10.0, 1.5, Color::BLUE))
        .with_text(TextPrimitive::new(
            "0.5",
            20.0,
            20.0,
            11.0,
            Color::BLACK,
            TextHAlign::Right,
        ))
}

#[test]
fn null_renderer_counts_primitives() {
    let mut renderer = NullRenderer::default();
    renderer.render(&sample_frame()).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn extend_keeps_own_viewport_and_appends_primitives() {
    let mut frame = sample_frame();
    let other = RenderFrame::new(Viewport::new(10, 10))
        .with_line(LinePrimitive::new(0.0, 0.0, 5.0, 5.0, 1.0, Color::RED));
    frame.extend(other);

    assert_eq!(frame.viewport, Viewport::new(320, 200));
    assert_eq!(frame.lines.len(), 2);
    assert_eq!(frame.lines[1].color, Color::RED);
}

#[test]
fn empty_frame_is_reported_empty() {
    assert!(RenderFrame::new(Viewport::new(10, 10)).is_empty());
    assert!(!sample_frame().is_empty());
}

#[test]
fn invalid_primitives_fail_validation() {
    let frame = sample_frame().with_line(LinePrimitive::new(
        0.0,
        f64::INFINITY,
        1.0,
        1.0,
        1.0,
        Color::BLACK,
    ));
    let mut renderer = NullRenderer::default();
    let err = renderer.render(&frame).expect_err("non-finite line");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(renderer.frames_rendered, 0);

    let frame = sample_frame().with_text(TextPrimitive::new(
        "",
        0.0,
        0.0,
        11.0,
        Color::BLACK,
        TextHAlign::Left,
    ));
    assert!(frame.validate().is_err());

    let frame = sample_frame().with_rect(RectPrimitive::new(
        0.0,
        0.0,
        -1.0,
        10.0,
        Color::WHITE,
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn out_of_range_color_is_rejected() {
    let color = Color::rgba(1.2, 0.0, 0.0, 1.0);
    assert!(color.validate().is_err());
    assert!(Color::BLUE.validate().is_ok());
}

#[test]
fn zero_sized_viewport_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(0, 200));
    let err = frame.validate().expect_err("invalid viewport");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 200
        }
    ));
}

#[test]
fn rotated_text_keeps_rotation() {
    let text = TextPrimitive::new("A", 5.0, 5.0, 12.0, Color::BLACK, TextHAlign::Center)
        .with_rotation(-std::f64::consts::FRAC_PI_2);
    assert!(text.validate().is_ok());
    assert!((text.rotation_rad + std::f64::consts::FRAC_PI_2).abs() <= 1e-12);
}
