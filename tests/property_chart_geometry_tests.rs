use std::f64::consts::TAU;

use arva_charts::core::{
    Canvas, DataPoint, Margins, compute_range, project_bars, project_circular_progress,
    project_line_points, project_pie_segments,
};
use proptest::prelude::*;

fn canvas(width: f64, height: f64) -> Canvas {
    Canvas::new(width, height).with_margins(Margins::new(10.0, 30.0, 50.0, 30.0))
}

proptest! {
    #[test]
    fn equal_values_always_share_bar_height(
        value in 0.0f64..10_000.0,
        others in proptest::collection::vec(0.0f64..10_000.0, 0..20),
        width in 200.0f64..2_000.0,
        height in 100.0f64..1_000.0,
        gap in 0.0f64..6.0
    ) {
        let mut points: Vec<DataPoint> = others
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(i.to_string(), *v))
            .collect();
        points.insert(0, DataPoint::new("first", value));
        points.push(DataPoint::new("last", value));

        let range = compute_range(&points, 0.0).expect("range");
        let bars = project_bars(&points, range, canvas(width, height), gap).expect("bars");

        let first = bars[0];
        let last = bars[bars.len() - 1];
        prop_assert_eq!(first.height, last.height);
        prop_assert_eq!(first.y, last.y);
    }

    #[test]
    fn bars_stay_inside_plot_area(
        values in proptest::collection::vec(-100.0f64..10_000.0, 1..64),
        floor in 0.0f64..500.0,
        gap in 0.0f64..10.0
    ) {
        let points: Vec<DataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(i.to_string(), *v))
            .collect();
        let canvas = canvas(600.0, 300.0);
        let range = compute_range(&points, floor).expect("range");
        let bars = project_bars(&points, range, canvas, gap).expect("bars");

        for bar in bars {
            prop_assert!(bar.width >= 0.0);
            prop_assert!(bar.height >= 0.0);
            prop_assert!(bar.x >= canvas.margins.left - 1e-9);
            prop_assert!(bar.x + bar.width <= canvas.width - canvas.margins.right + 1e-9);
            prop_assert!(bar.y >= canvas.margins.top - 1e-9);
            prop_assert!((bar.bottom() - canvas.baseline_y()).abs() <= 1e-9);
        }
    }

    #[test]
    fn pie_sweeps_sum_to_full_turn(
        values in proptest::collection::vec(0.0f64..1_000_000.0, 1..32)
    ) {
        let points: Vec<DataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(i.to_string(), *v))
            .collect();
        let layout = project_pie_segments(&points).expect("pie");

        if layout.total > 0.0 {
            let sum: f64 = layout.segments.iter().map(|s| s.sweep_angle).sum();
            prop_assert!((sum - TAU).abs() <= 1e-9);
            for pair in layout.segments.windows(2) {
                prop_assert!((pair[0].end_angle - pair[1].start_angle).abs() <= 1e-12);
            }
        } else {
            prop_assert!(!layout.is_renderable());
        }
    }

    #[test]
    fn circular_progress_offset_stays_within_circumference(
        percentage in -1_000.0f64..1_000.0,
        radius in 1.0f64..500.0
    ) {
        let progress = project_circular_progress(percentage, radius).expect("progress");

        prop_assert!(progress.dash_offset >= -1e-9);
        prop_assert!(progress.dash_offset <= progress.circumference + 1e-9);
        if percentage >= 100.0 {
            prop_assert!(progress.dash_offset.abs() <= 1e-9);
        }
        if percentage <= 0.0 {
            prop_assert!((progress.dash_offset - progress.circumference).abs() <= 1e-9);
        }
    }

    #[test]
    fn line_points_advance_left_to_right(
        values in proptest::collection::vec(0.0f64..5_000.0, 2..64)
    ) {
        let points: Vec<DataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(i.to_string(), *v))
            .collect();
        let canvas = canvas(800.0, 400.0);
        let range = compute_range(&points, 0.0).expect("range");
        let plotted = project_line_points(&points, range, canvas).expect("line");

        prop_assert!((plotted[0].x - canvas.margins.left).abs() <= 1e-9);
        let last = plotted[plotted.len() - 1];
        prop_assert!((last.x - (canvas.width - canvas.margins.right)).abs() <= 1e-9);
        for pair in plotted.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
    }
}
