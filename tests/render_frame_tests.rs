use arva_charts::api::{
    AnimatedBarChartOptions, BarChartOptions, ChartTheme, CircularProgressOptions,
    LineChartOptions, PieChartOptions, ProgressBarOptions, build_animated_bar_chart_frame,
    build_bar_chart_frame, build_circular_progress_frame, build_line_chart_frame,
    build_pie_chart_frame, build_progress_bar_frame, layout_animated_bar_chart,
};
use arva_charts::core::{Canvas, DataPoint};
use arva_charts::render::{
    Color, NullRenderer, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

fn three_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("A", 10.0),
        DataPoint::new("B", 30.0),
        DataPoint::new("C", 60.0),
    ]
}

fn battery_history() -> Vec<DataPoint> {
    (1..=30)
        .map(|day| DataPoint::new(day.to_string(), f64::from((day * 17) % 100)))
        .collect()
}

#[test]
fn bar_chart_frame_includes_grid_bars_and_labels() {
    let theme = ChartTheme::default();
    let frame = build_bar_chart_frame(&three_points(), &BarChartOptions::default(), &theme)
        .expect("bar frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.rects.len(), 3);
    assert_eq!(frame.lines.len(), 7, "expected 5 grid + 2 axis lines");
    assert_eq!(frame.texts.len(), 11, "expected 5 tick + 3 value + 3 x labels");
    assert!(frame.texts.iter().any(|t| t.text == "60"));
    assert!(frame.rects.iter().all(|r| r.fill_color == Color::from_rgba8(0xFF, 0x95, 0x00, 0xFF)));
}

#[test]
fn bar_chart_titles_add_text_primitives() {
    let theme = ChartTheme::default();
    let options = BarChartOptions::default()
        .with_title("Chi phí")
        .with_axis_titles("Tháng", "VND");
    let frame = build_bar_chart_frame(&three_points(), &options, &theme).expect("bar frame");

    assert_eq!(frame.texts.len(), 14);
    assert!(frame.texts.iter().any(|t| t.text == "Chi phí"));
}

#[test]
fn point_color_overrides_bar_color() {
    let theme = ChartTheme::default();
    let blue = Color::from_hex("#2196F3").expect("hex");
    let points = vec![DataPoint::new("a", 3.0).with_color(blue), DataPoint::new("b", 4.0)];
    let frame =
        build_bar_chart_frame(&points, &BarChartOptions::default(), &theme).expect("bar frame");

    assert_eq!(frame.rects[0].fill_color, blue);
    assert_ne!(frame.rects[1].fill_color, blue);
}

#[test]
fn line_chart_frame_connects_points() {
    let theme = ChartTheme::default();
    let frame = build_line_chart_frame(&three_points(), &LineChartOptions::default(), &theme)
        .expect("line frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.lines.len(), 9, "expected 5 grid + 2 axis + 2 segments");
    assert_eq!(frame.circles.len(), 3);
    assert_eq!(frame.texts.len(), 11);
    assert!(frame.texts.iter().any(|t| t.text == "60.0"));
}

#[test]
fn pie_chart_frame_draws_wedges_hole_and_legend() {
    let theme = ChartTheme::default();
    let frame = build_pie_chart_frame(&three_points(), &PieChartOptions::default(), &theme)
        .expect("pie frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.wedges.len(), 3);
    assert_eq!(frame.circles.len(), 1);
    assert_eq!(frame.rects.len(), 3);
    assert_eq!(frame.texts.len(), 4);
    assert!(frame.texts.iter().any(|t| t.text == "A: 10 (10.0%)"));
    assert!((frame.canvas.height - (200.0 + 3.0 * 18.0 + 8.0)).abs() <= 1e-9);
}

#[test]
fn pie_chart_skips_zero_share_wedges_but_keeps_legend_rows() {
    let theme = ChartTheme::default();
    let points = vec![
        DataPoint::new("a", 5.0),
        DataPoint::new("b", 0.0),
        DataPoint::new("c", 5.0),
    ];
    let frame =
        build_pie_chart_frame(&points, &PieChartOptions::default(), &theme).expect("pie frame");

    assert_eq!(frame.wedges.len(), 2);
    assert_eq!(frame.rects.len(), 3);
}

#[test]
fn circular_progress_frame_uses_dash_offset() {
    let theme = ChartTheme::default();
    let frame = build_circular_progress_frame(72.0, &CircularProgressOptions::default(), &theme)
        .expect("gauge frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.circles.len(), 2);
    let arc = frame.circles[1];
    let circumference = std::f64::consts::TAU * 69.0;
    assert_eq!(arc.stroke_color, Some(theme.accent));
    assert!((arc.dash_offset - circumference * 0.28).abs() <= 1e-9);
    assert!((arc.visible_stroke_length() - circumference * 0.72).abs() <= 1e-9);
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "72%");
}

#[test]
fn empty_gauge_draws_only_track() {
    let theme = ChartTheme::default();
    let frame = build_circular_progress_frame(0.0, &CircularProgressOptions::default(), &theme)
        .expect("gauge frame");

    assert_eq!(frame.circles.len(), 1);
    assert_eq!(frame.texts[0].text, "0%");
}

#[test]
fn progress_bar_frame_fills_track() {
    let theme = ChartTheme::default();
    let frame = build_progress_bar_frame(50.0, &ProgressBarOptions::default(), &theme)
        .expect("progress frame");

    assert_eq!(frame.rects.len(), 2);
    assert!((frame.rects[0].width - 300.0).abs() <= 1e-9);
    assert!((frame.rects[1].width - 150.0).abs() <= 1e-9);
}

#[test]
fn animated_bar_chart_samples_every_fifth_label() {
    let theme = ChartTheme::default();
    let points = battery_history();
    let frame = build_animated_bar_chart_frame(
        &points,
        &AnimatedBarChartOptions::default(),
        &theme,
        None,
    )
    .expect("animated frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.rects.len(), 30);
    assert_eq!(frame.lines.len(), 3, "grid lines between outer axis values");
    assert_eq!(frame.texts.len(), 12, "expected 5 axis + 7 sampled day labels");
    assert!(frame.texts.iter().any(|t| t.text == "30"));
    assert!(!frame.texts.iter().any(|t| t.text == "2"));
}

#[test]
fn animated_bar_chart_starts_flat_and_settles_on_projection() {
    let theme = ChartTheme::default();
    let options = AnimatedBarChartOptions::default();
    let points = battery_history();
    let layout = layout_animated_bar_chart(&points, &options).expect("layout");

    let start = build_animated_bar_chart_frame(&points, &options, &theme, Some(0))
        .expect("start frame");
    assert!(start.rects.iter().all(|r| r.height == 0.0));
    assert!(start.rects.iter().all(|r| r.fill_color.alpha == 0.0));

    let end_ms = layout.plan.total_duration_ms();
    let settled = build_animated_bar_chart_frame(&points, &options, &theme, Some(end_ms))
        .expect("settled frame");
    for (rect, bar) in settled.rects.iter().zip(&layout.bars) {
        assert!((rect.height - bar.height).abs() <= 1e-9);
        assert!((rect.y - bar.y).abs() <= 1e-9);
    }
}

#[test]
fn null_renderer_validates_and_counts() {
    let theme = ChartTheme::default();
    let frame = build_bar_chart_frame(&three_points(), &BarChartOptions::default(), &theme)
        .expect("bar frame");
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_primitive_count, frame.primitive_count());
    assert_eq!(renderer.last_text_count, 11);

    let broken = RenderFrame::new(Canvas::new(100.0, 100.0)).with_text(TextPrimitive::new(
        "",
        10.0,
        10.0,
        9.0,
        theme.text_primary,
        TextHAlign::Left,
    ));
    renderer.render(&broken).expect_err("empty text must fail");
    assert_eq!(renderer.frames_rendered, 1);
}
