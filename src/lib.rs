//! arva-charts: chart geometry for battery and charging analytics.
//!
//! The crate is split the same way a chart is drawn:
//! - `core` projects labeled series into pixel-space bars, points, pie
//!   segments and ring gauges;
//! - `animation` decides how a chart reaches that geometry over time;
//! - `api` composes geometry into [`render::RenderFrame`]s behind a failure
//!   boundary that turns errors into placeholder views;
//! - `render` hands frames to a backend.
//!
//! Nothing here owns a clock, a window or a data source. `datasets` carries
//! the static report data the analytics screens chart.

pub mod animation;
pub mod api;
pub mod core;
pub mod datasets;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartPresenter, ChartRequest, ChartTheme, ChartView};
pub use error::{ChartError, ChartResult};
