#![cfg(feature = "cairo-backend")]

use std::path::PathBuf;

use erlang_charts::ChartError;
use erlang_charts::api::{
    RenderStyle, ReportConfig, build_figure_frame, build_report, write_figure_png,
};
use erlang_charts::render::{CairoRenderer, Color, Renderer};

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("erlang-charts-{name}-{}", std::process::id()))
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_primitive_of_a_figure() {
    let figures = build_report(&ReportConfig::new(5).expect("config")).expect("report");
    let frame = build_figure_frame(&figures[0], &RenderStyle::default()).expect("frame");

    let mut renderer = CairoRenderer::for_frame(&frame).expect("renderer");
    assert_eq!(renderer.surface().width(), 1000);
    renderer.render(&frame).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, frame.lines.len());
    assert_eq!(stats.rects_drawn, frame.rects.len());
    assert_eq!(stats.texts_drawn, frame.texts.len());
}

#[test]
fn clear_color_is_validated() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    assert!(renderer.set_clear_color(Color::rgba(0.0, 0.0, 2.0, 1.0)).is_err());
    renderer.set_clear_color(Color::BLACK).expect("valid color");
    assert_eq!(renderer.clear_color(), Color::BLACK);
}

#[test]
fn report_figures_are_written_as_png() {
    let dir = scratch_dir("png");
    let figures = build_report(&ReportConfig::new(3).expect("config")).expect("report");

    for figure in &figures {
        let path = write_figure_png(figure, &RenderStyle::default(), &dir).expect("png");
        let bytes = std::fs::read(&path).expect("read png");
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        assert_eq!(path.file_stem().and_then(|s| s.to_str()), Some(figure.stem.as_str()));
    }

    let _ = std::fs::remove_dir_all(dir);
}
