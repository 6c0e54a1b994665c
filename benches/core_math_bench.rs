use arva_charts::api::{
    BarChartOptions, ChartTheme, PieChartOptions, build_bar_chart_frame, build_pie_chart_frame,
};
use arva_charts::core::{
    Canvas, DataPoint, Margins, compute_range, project_bars, project_line_points,
    project_line_segments, project_pie_segments,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_series(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(format!("{}", i + 1), 50.0 + (t * 0.37).sin() * 40.0)
        })
        .collect()
}

fn bench_bar_projection_10k(c: &mut Criterion) {
    let canvas = Canvas::new(1920.0, 1080.0).with_margins(Margins::new(10.0, 30.0, 50.0, 30.0));
    let points = generated_series(10_000);
    let range = compute_range(&points, 100.0).expect("valid range");

    c.bench_function("bar_projection_10k", |b| {
        b.iter(|| {
            let _ = project_bars(
                black_box(&points),
                black_box(range),
                black_box(canvas),
                black_box(0.0),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_line_projection_10k(c: &mut Criterion) {
    let canvas = Canvas::new(1920.0, 1080.0).with_margins(Margins::uniform(40.0));
    let points = generated_series(10_000);
    let range = compute_range(&points, 0.0).expect("valid range");

    c.bench_function("line_projection_10k", |b| {
        b.iter(|| {
            let plotted =
                project_line_points(black_box(&points), black_box(range), black_box(canvas))
                    .expect("projection should succeed");
            let _ = project_line_segments(&plotted);
        })
    });
}

fn bench_pie_projection_1k(c: &mut Criterion) {
    let points = generated_series(1_000);

    c.bench_function("pie_projection_1k", |b| {
        b.iter(|| {
            let _ = project_pie_segments(black_box(&points)).expect("projection should succeed");
        })
    });
}

fn bench_chart_frames(c: &mut Criterion) {
    let theme = ChartTheme::default();
    let bar_options = BarChartOptions::default();
    let pie_options = PieChartOptions::default();
    let points = generated_series(30);

    c.bench_function("bar_chart_frame_30", |b| {
        b.iter(|| {
            let _ = build_bar_chart_frame(black_box(&points), &bar_options, &theme)
                .expect("frame should build");
        })
    });

    c.bench_function("pie_chart_frame_30", |b| {
        b.iter(|| {
            let _ = build_pie_chart_frame(black_box(&points), &pie_options, &theme)
                .expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_bar_projection_10k,
    bench_line_projection_10k,
    bench_pie_projection_1k,
    bench_chart_frames
);
criterion_main!(benches);
