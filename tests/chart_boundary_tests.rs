use arva_charts::api::{
    BarChartOptions, ChartLocale, ChartMessages, ChartPresenter, ChartRequest, ChartTheme,
    ChartView, CircularProgressOptions, LineChartOptions, PieChartOptions,
};
use arva_charts::core::DataPoint;
use arva_charts::error::{ChartError, ChartResult};
use arva_charts::render::{NullRenderer, RenderFrame, Renderer};

#[derive(Default)]
struct FailingRenderer {
    attempts: usize,
}

impl Renderer for FailingRenderer {
    fn render(&mut self, _frame: &RenderFrame) -> ChartResult<()> {
        self.attempts += 1;
        Err(ChartError::InvalidData("surface lost".to_owned()))
    }
}

#[test]
fn empty_series_shows_no_data_placeholder() {
    let presenter = ChartPresenter::default();
    let options = BarChartOptions::default();
    let view = presenter.present(ChartRequest::Bar {
        points: &[],
        options: &options,
    });

    assert_eq!(
        view,
        ChartView::NoData {
            message: "Không có dữ liệu".to_owned()
        }
    );
    assert!(view.frame().is_none());
}

#[test]
fn placeholders_follow_locale() {
    let mut presenter = ChartPresenter::new(ChartTheme::default(), ChartLocale::En);
    let options = LineChartOptions::default();
    let request = ChartRequest::Line {
        points: &[],
        options: &options,
    };
    assert_eq!(presenter.present(request).placeholder(), Some("No data available"));

    presenter.set_locale(ChartLocale::from_code("fr"));
    assert_eq!(presenter.messages().no_data, "Không có dữ liệu");
}

#[test]
fn zero_total_pie_is_no_data_not_an_error() {
    let presenter = ChartPresenter::new(ChartTheme::default(), ChartLocale::En);
    let options = PieChartOptions::default();
    let points = vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)];
    let view = presenter.present(ChartRequest::Pie {
        points: &points,
        options: &options,
    });

    assert!(matches!(view, ChartView::NoData { .. }));
}

#[test]
fn layout_errors_become_unavailable_placeholder() {
    let presenter = ChartPresenter::default();
    let invalid = BarChartOptions::default().with_size(0.0, 200.0);
    let points = vec![DataPoint::new("a", 1.0)];
    let view = presenter.present(ChartRequest::Bar {
        points: &points,
        options: &invalid,
    });
    assert_eq!(view.placeholder(), Some("Không thể hiển thị biểu đồ"));

    let options = BarChartOptions::default();
    let bad_points = vec![DataPoint::new("a", f64::NAN)];
    let view = presenter.present(ChartRequest::Bar {
        points: &bad_points,
        options: &options,
    });
    assert!(matches!(view, ChartView::Unavailable { .. }));
}

#[test]
fn custom_messages_replace_defaults() {
    let presenter = ChartPresenter::default().with_messages(ChartMessages {
        no_data: "Chưa có lịch sử pin".to_owned(),
        chart_unavailable: "Lỗi".to_owned(),
    });
    let options = BarChartOptions::default();
    let view = presenter.present(ChartRequest::Bar {
        points: &[],
        options: &options,
    });
    assert_eq!(view.placeholder(), Some("Chưa có lịch sử pin"));
}

#[test]
fn gauges_always_render() {
    let presenter = ChartPresenter::default();
    let options = CircularProgressOptions::default();
    let request = ChartRequest::CircularProgress {
        percentage: 180.0,
        options: &options,
    };
    assert!(!request.is_empty());

    let view = presenter.present(request);
    let frame = view.frame().expect("gauge frame");
    assert_eq!(frame.texts[0].text, "100%");
}

#[test]
fn present_to_hands_frame_to_renderer() {
    let presenter = ChartPresenter::default();
    let options = BarChartOptions::default();
    let points = vec![DataPoint::new("T1", 1_200_000.0), DataPoint::new("T2", 1_320_000.0)];
    let mut renderer = NullRenderer::default();

    let view = presenter.present_to(
        &mut renderer,
        ChartRequest::Bar {
            points: &points,
            options: &options,
        },
    );
    assert!(matches!(view, ChartView::Chart(_)));
    assert_eq!(renderer.frames_rendered, 1);
}

#[test]
fn renderer_failure_becomes_unavailable() {
    let presenter = ChartPresenter::new(ChartTheme::default(), ChartLocale::En);
    let options = BarChartOptions::default();
    let points = vec![DataPoint::new("a", 1.0)];
    let mut renderer = FailingRenderer::default();

    let view = presenter.present_to(
        &mut renderer,
        ChartRequest::Bar {
            points: &points,
            options: &options,
        },
    );
    assert_eq!(view.placeholder(), Some("Unable to display chart"));
    assert_eq!(renderer.attempts, 1);
}

#[test]
fn all_zero_bar_series_draws_flat_bars() {
    let presenter = ChartPresenter::default();
    let options = BarChartOptions::default();
    let points = vec![DataPoint::new("Mon", 0.0), DataPoint::new("Tue", 0.0)];
    let view = presenter.present(ChartRequest::Bar {
        points: &points,
        options: &options,
    });

    let frame = view.frame().expect("zero values still chart");
    assert_eq!(frame.rects.len(), 2);
    assert!(frame.rects.iter().all(|rect| rect.height == 0.0));
}
