#![cfg(feature = "cairo-backend")]

use arva_charts::ChartError;
use arva_charts::api::{
    BarChartOptions, ChartTheme, CircularProgressOptions, PieChartOptions, build_bar_chart_frame,
    build_circular_progress_frame, build_pie_chart_frame,
};
use arva_charts::core::DataPoint;
use arva_charts::render::{CairoContextRenderer, CairoRenderer, Renderer};
use cairo::{Context, Format, ImageSurface};

fn points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("T1", 1_200_000.0),
        DataPoint::new("T2", 1_320_000.0),
        DataPoint::new("T3", 1_260_000.0),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_bar_chart_primitives() {
    let theme = ChartTheme::default();
    let frame = build_bar_chart_frame(&points(), &BarChartOptions::default(), &theme)
        .expect("bar frame");
    let mut renderer = CairoRenderer::new(300, 200).expect("renderer");

    renderer.render(&frame).expect("render");
    let stats = renderer.last_stats();

    assert_eq!(stats.rects_drawn, 3);
    assert_eq!(stats.lines_drawn, 7);
    assert_eq!(stats.texts_drawn, frame.texts.len());
}

#[test]
fn cairo_renderer_draws_wedges_and_rings() {
    let theme = ChartTheme::default();
    let mut renderer = CairoRenderer::new(200, 300).expect("renderer");

    let pie = build_pie_chart_frame(&points(), &PieChartOptions::default(), &theme)
        .expect("pie frame");
    renderer.render(&pie).expect("render pie");
    assert_eq!(renderer.last_stats().wedges_drawn, 3);

    let gauge = build_circular_progress_frame(64.0, &CircularProgressOptions::default(), &theme)
        .expect("gauge frame");
    renderer.render(&gauge).expect("render gauge");
    assert_eq!(renderer.last_stats().circles_drawn, 2);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let theme = ChartTheme::default();
    let frame = build_bar_chart_frame(&points(), &BarChartOptions::default(), &theme)
        .expect("bar frame");
    let mut renderer = CairoRenderer::new(300, 200).expect("renderer");

    let surface = ImageSurface::create(Format::ARgb32, 300, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");

    assert_eq!(renderer.last_stats().rects_drawn, 3);
}
