use arva_charts::ChartError;
use arva_charts::core::{
    BarLayout, Canvas, DataPoint, Margins, ValueRange, compute_range, project_bars, project_to_bar,
};

fn canvas() -> Canvas {
    // usable area 250 x 150, baseline at y = 170
    Canvas::new(300.0, 200.0).with_margins(Margins::new(20.0, 10.0, 30.0, 40.0))
}

#[test]
fn bars_are_slotted_centred_and_grow_from_baseline() {
    let points = vec![
        DataPoint::new("T1", 10.0),
        DataPoint::new("T2", 20.0),
        DataPoint::new("T3", 40.0),
    ];
    let range = compute_range(&points, 0.0).expect("range");
    let bars = project_bars(&points, range, canvas(), 5.0).expect("project");

    assert_eq!(bars.len(), 3);
    let slot = 250.0 / 3.0;
    for (index, bar) in bars.iter().enumerate() {
        assert_eq!(bar.source_index, index);
        assert!((bar.width - (slot - 5.0)).abs() <= 1e-9);
        let slot_center = 40.0 + slot * (index as f64 + 0.5);
        assert!((bar.center_x() - slot_center).abs() <= 1e-9);
        assert!((bar.bottom() - 170.0).abs() <= 1e-9);
    }

    assert!((bars[0].x - 42.5).abs() <= 1e-9);
    assert!((bars[0].height - 37.5).abs() <= 1e-9);
    assert!((bars[2].height - 150.0).abs() <= 1e-9);
    assert!((bars[2].y - 20.0).abs() <= 1e-9);
}

#[test]
fn equal_values_produce_equal_heights() {
    let points = vec![
        DataPoint::new("a", 42.0),
        DataPoint::new("b", 7.0),
        DataPoint::new("c", 42.0),
    ];
    let range = compute_range(&points, 100.0).expect("range");
    let bars = project_bars(&points, range, canvas(), 2.0).expect("project");

    assert_eq!(bars[0].height, bars[2].height);
    assert_eq!(bars[0].y, bars[2].y);
}

#[test]
fn all_zero_series_projects_flat_bars() {
    let points = vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)];
    let range = compute_range(&points, 0.0).expect("range");
    assert!(range.is_degenerate());

    let bars = project_bars(&points, range, canvas(), 0.0).expect("project");
    for bar in bars {
        assert_eq!(bar.height, 0.0);
        assert_eq!(bar.y, canvas().baseline_y());
    }
}

#[test]
fn degenerate_positive_range_projects_at_half_height() {
    let points = vec![DataPoint::new("a", 40.0), DataPoint::new("b", 40.0)];
    let range = ValueRange::new(40.0, 40.0).expect("range");

    let bars = project_bars(&points, range, canvas(), 0.0).expect("project");
    for bar in bars {
        assert!((bar.height - 75.0).abs() <= 1e-9);
    }
}

#[test]
fn gap_wider_than_slot_yields_zero_width() {
    let points: Vec<DataPoint> = (0..50)
        .map(|i| DataPoint::new(i.to_string(), 10.0))
        .collect();
    let range = compute_range(&points, 0.0).expect("range");
    let bars = project_bars(&points, range, canvas(), 8.0).expect("project");

    assert!(bars.iter().all(|bar| bar.width == 0.0));
}

#[test]
fn out_of_range_values_are_clamped_to_plot_area() {
    let range = ValueRange::new(0.0, 100.0).expect("range");
    let layout = BarLayout::new(2, 0.0).expect("layout");

    let tall = project_to_bar(&DataPoint::new("hi", 150.0), 0, layout, range, canvas())
        .expect("tall bar");
    let negative = project_to_bar(&DataPoint::new("lo", -20.0), 1, layout, range, canvas())
        .expect("negative bar");

    assert!((tall.height - 150.0).abs() <= 1e-9);
    assert_eq!(negative.height, 0.0);
    assert!((negative.y - 170.0).abs() <= 1e-9);
}

#[test]
fn bar_projection_rejects_bad_input() {
    let range = ValueRange::new(0.0, 10.0).expect("range");

    let err = project_bars(&[], range, canvas(), 5.0).expect_err("empty series must fail");
    assert!(matches!(err, ChartError::EmptySeries));

    let layout = BarLayout::new(1, 0.0).expect("layout");
    let err = project_to_bar(&DataPoint::new("x", 1.0), 3, layout, range, canvas())
        .expect_err("index beyond slot count must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = BarLayout::new(3, -1.0).expect_err("negative gap must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let cramped = Canvas::new(30.0, 200.0).with_margins(Margins::new(0.0, 20.0, 0.0, 20.0));
    let err = project_bars(&[DataPoint::new("x", 1.0)], range, cramped, 0.0)
        .expect_err("canvas without plot area must fail");
    assert!(matches!(err, ChartError::InvalidCanvas { .. }));
}
