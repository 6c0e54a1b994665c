//! Chart-level API: options, frame builders and the failure boundary.

mod animated_bar_chart_render_frame_builder;
mod bar_chart_render_frame_builder;
mod chart_boundary;
mod chart_options;
mod json_contract;
mod layout_helpers;
mod line_chart_render_frame_builder;
mod locale;
mod pie_chart_render_frame_builder;
mod progress_render_frame_builder;
mod theme;

pub use animated_bar_chart_render_frame_builder::{
    AnimatedBarChartLayout, build_animated_bar_chart_frame, build_frame_from_states,
    layout_animated_bar_chart,
};
pub use bar_chart_render_frame_builder::build_bar_chart_frame;
pub use chart_boundary::{ChartPresenter, ChartRequest, ChartView};
pub use chart_options::{
    AnimatedBarChartOptions, BarChartOptions, CircularProgressOptions, LineChartOptions,
    PieChartOptions, ProgressBarOptions, RangeBaseline,
};
pub use json_contract::{
    CHART_SETTINGS_JSON_SCHEMA_V1, ChartSettings, ChartSettingsJsonContractV1,
    DATASET_JSON_SCHEMA_V1, DatasetJsonContractV1, NamedSeries, dataset_from_json_compat_str,
    dataset_to_json_contract_v1_pretty,
};
pub use line_chart_render_frame_builder::build_line_chart_frame;
pub use locale::{ChartLocale, ChartMessages};
pub use pie_chart_render_frame_builder::build_pie_chart_frame;
pub use progress_render_frame_builder::{build_circular_progress_frame, build_progress_bar_frame};
pub use theme::ChartTheme;
