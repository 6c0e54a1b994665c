use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, warn};

use crate::api::{
    AnimatedBarChartOptions, BarChartOptions, ChartLocale, ChartMessages, ChartTheme,
    CircularProgressOptions, LineChartOptions, PieChartOptions, ProgressBarOptions,
    build_animated_bar_chart_frame, build_bar_chart_frame, build_circular_progress_frame,
    build_line_chart_frame, build_pie_chart_frame, build_progress_bar_frame,
};
use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

/// One chart to lay out, with the data and options it borrows.
#[derive(Debug, Clone, Copy)]
pub enum ChartRequest<'a> {
    Bar {
        points: &'a [DataPoint],
        options: &'a BarChartOptions,
    },
    Line {
        points: &'a [DataPoint],
        options: &'a LineChartOptions,
    },
    Pie {
        points: &'a [DataPoint],
        options: &'a PieChartOptions,
    },
    AnimatedBar {
        points: &'a [DataPoint],
        options: &'a AnimatedBarChartOptions,
        elapsed_ms: Option<u64>,
    },
    CircularProgress {
        percentage: f64,
        options: &'a CircularProgressOptions,
    },
    ProgressBar {
        progress: f64,
        options: &'a ProgressBarOptions,
    },
}

impl ChartRequest<'_> {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bar { .. } => "bar",
            Self::Line { .. } => "line",
            Self::Pie { .. } => "pie",
            Self::AnimatedBar { .. } => "animated_bar",
            Self::CircularProgress { .. } => "circular_progress",
            Self::ProgressBar { .. } => "progress_bar",
        }
    }

    /// `true` for series charts without any points; gauges always have data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bar { points, .. }
            | Self::Line { points, .. }
            | Self::Pie { points, .. }
            | Self::AnimatedBar { points, .. } => points.is_empty(),
            Self::CircularProgress { .. } | Self::ProgressBar { .. } => false,
        }
    }

    fn build(&self, theme: &ChartTheme) -> ChartResult<RenderFrame> {
        match *self {
            Self::Bar { points, options } => build_bar_chart_frame(points, options, theme),
            Self::Line { points, options } => build_line_chart_frame(points, options, theme),
            Self::Pie { points, options } => build_pie_chart_frame(points, options, theme),
            Self::AnimatedBar {
                points,
                options,
                elapsed_ms,
            } => build_animated_bar_chart_frame(points, options, theme, elapsed_ms),
            Self::CircularProgress {
                percentage,
                options,
            } => build_circular_progress_frame(percentage, options, theme),
            Self::ProgressBar { progress, options } => {
                build_progress_bar_frame(progress, options, theme)
            }
        }
    }
}

/// What a chart slot ends up showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    Chart(RenderFrame),
    NoData { message: String },
    Unavailable { message: String },
}

impl ChartView {
    #[must_use]
    pub fn frame(&self) -> Option<&RenderFrame> {
        match self {
            Self::Chart(frame) => Some(frame),
            Self::NoData { .. } | Self::Unavailable { .. } => None,
        }
    }

    /// Placeholder text shown instead of a chart, if any.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Chart(_) => None,
            Self::NoData { message } | Self::Unavailable { message } => Some(message),
        }
    }
}

/// Lays out charts behind a failure boundary.
///
/// No layout or render failure escapes `present`: empty series become the
/// "no data" placeholder and everything else the "chart unavailable" one.
#[derive(Debug, Clone, Default)]
pub struct ChartPresenter {
    theme: ChartTheme,
    messages: ChartMessages,
}

impl ChartPresenter {
    #[must_use]
    pub fn new(theme: ChartTheme, locale: ChartLocale) -> Self {
        Self {
            theme,
            messages: ChartMessages::for_locale(locale),
        }
    }

    /// Replaces the placeholder strings, e.g. with host translations.
    #[must_use]
    pub fn with_messages(mut self, messages: ChartMessages) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    #[must_use]
    pub fn messages(&self) -> &ChartMessages {
        &self.messages
    }

    pub fn set_locale(&mut self, locale: ChartLocale) {
        self.messages = ChartMessages::for_locale(locale);
    }

    #[must_use]
    pub fn present(&self, request: ChartRequest<'_>) -> ChartView {
        if request.is_empty() {
            debug!(kind = request.kind(), "chart has no data");
            return self.no_data();
        }

        let built = catch_unwind(AssertUnwindSafe(|| {
            request.build(&self.theme).and_then(|frame| {
                frame.validate()?;
                Ok(frame)
            })
        }));

        match built {
            Ok(Ok(frame)) => ChartView::Chart(frame),
            Ok(Err(ChartError::EmptySeries)) => {
                debug!(kind = request.kind(), "chart has nothing to draw");
                self.no_data()
            }
            Ok(Err(err)) => {
                warn!(kind = request.kind(), error = %err, "chart layout failed");
                self.unavailable()
            }
            Err(_) => {
                warn!(kind = request.kind(), "chart layout panicked");
                self.unavailable()
            }
        }
    }

    /// Presents the chart and hands a successful frame to `renderer`.
    ///
    /// A renderer failure downgrades the view to the "chart unavailable"
    /// placeholder.
    pub fn present_to<R: Renderer>(
        &self,
        renderer: &mut R,
        request: ChartRequest<'_>,
    ) -> ChartView {
        let view = self.present(request);
        if let ChartView::Chart(frame) = &view {
            if let Err(err) = renderer.render(frame) {
                warn!(kind = request.kind(), error = %err, "chart render failed");
                return self.unavailable();
            }
        }
        view
    }

    fn no_data(&self) -> ChartView {
        ChartView::NoData {
            message: self.messages.no_data.clone(),
        }
    }

    fn unavailable(&self) -> ChartView {
        ChartView::Unavailable {
            message: self.messages.chart_unavailable.clone(),
        }
    }
}
