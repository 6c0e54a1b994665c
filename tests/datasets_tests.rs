use arva_charts::ChartError;
use arva_charts::api::{ChartPresenter, ChartRequest, ChartView, LineChartOptions, RangeBaseline};
use arva_charts::core::{DataPoint, project_pie_segments};
use arva_charts::datasets::{
    BatteryPoint, DatasetSummary, TimeRange, report_dataset, w_to_ma, wh_to_mah,
};

#[test]
fn unit_conversions_assume_five_volts() {
    assert_eq!(wh_to_mah(8_200.0), 1_640_000.0);
    assert_eq!(wh_to_mah(1_580_000.0), 316_000_000.0);
    assert_eq!(w_to_ma(5.2), 1_040.0);
    assert_eq!(w_to_ma(2.8), 560.0);
}

#[test]
fn daily_energy_uses_day_of_month_labels() {
    let report = report_dataset().expect("report");
    let series = report.daily_energy_series();

    assert_eq!(series.len(), 7);
    assert_eq!(series[0], DataPoint::new("01", 1_640_000.0));
    assert_eq!(series[6].label, "07");
}

#[test]
fn power_time_samples_every_five_minutes() {
    let report = report_dataset().expect("report");
    let series = report.power_time_series();

    assert_eq!(series.len(), 13);
    assert_eq!(series[0], DataPoint::new("0", 1_360.0));
    assert_eq!(series[12], DataPoint::new("60", 560.0));
}

#[test]
fn cost_series_converts_decimal_totals() {
    let report = report_dataset().expect("report");
    let costs = report.total_cost_series().expect("costs");

    assert_eq!(costs.len(), 6);
    assert_eq!(costs[0], DataPoint::new("T1", 1_200_000.0));
    assert_eq!(costs[5].value, 1_560_000.0);
    assert_eq!(
        report.cost_analysis[3].savings_point().expect("savings").value,
        200_000.0
    );
}

#[test]
fn charging_series_is_coloured_by_time_range() {
    let report = report_dataset().expect("report");

    let daily = report.charging_series(TimeRange::Day);
    assert_eq!(daily.len(), 11);
    assert_eq!(daily[4].value, 5.0);
    assert!(daily.iter().all(|p| p.color.map(|c| c.to_hex()) == Some("#4CAF50".to_owned())));

    let weekly = report.charging_series(TimeRange::Week);
    assert_eq!(weekly.len(), 4);
    assert_eq!(weekly[0].label, "Tuần 1");
    assert_eq!(weekly[0].color.map(|c| c.to_hex()), Some("#2196F3".to_owned()));

    let monthly = report.charging_series(TimeRange::Month);
    assert_eq!(monthly.len(), 6);
    assert_eq!(monthly[5].value, 58.0);
    assert_eq!(monthly[5].color.map(|c| c.to_hex()), Some("#FF9800".to_owned()));
}

#[test]
fn summary_totals_monthly_energy() {
    let report = report_dataset().expect("report");
    let summary = DatasetSummary::of(&report.monthly_total_energy).expect("summary");

    assert_eq!(summary.count, 6);
    assert_eq!(summary.total, 1_656_000_000.0);
    assert_eq!(summary.average, 276_000_000.0);

    let err = DatasetSummary::of(&[]).expect_err("empty must fail");
    assert!(matches!(err, ChartError::EmptySeries));
}

#[test]
fn named_series_lists_every_chart_in_order() {
    let report = report_dataset().expect("report");
    let named = report.named_series().expect("named");

    assert_eq!(named.len(), 9);
    assert_eq!(named.get_index(0).map(|(k, _)| k.as_str()), Some("monthly_average_power"));
    assert_eq!(named["cost_total"].len(), 6);
}

#[test]
fn device_shares_form_a_renderable_pie() {
    let report = report_dataset().expect("report");
    let layout = project_pie_segments(&report.device_energy_series()).expect("pie");

    assert!(layout.is_renderable());
    assert_eq!(layout.segments[0].label, "Power Bank 20K");
    assert_eq!(layout.segments[0].percentage_label(), "57.1");
}

#[test]
fn report_series_render_through_presenter() {
    let report = report_dataset().expect("report");
    let presenter = ChartPresenter::default();
    let options = LineChartOptions::default().with_baseline(RangeBaseline::DataMin);
    let points = report.power_time_series();

    let view = presenter.present(ChartRequest::Line {
        points: &points,
        options: &options,
    });
    assert!(matches!(view, ChartView::Chart(_)));
}

#[test]
fn battery_points_use_day_number_labels() {
    let point = DataPoint::from(&BatteryPoint {
        day: 12,
        percentage: 64.0,
    });
    assert_eq!(point, DataPoint::new("12", 64.0));
}
