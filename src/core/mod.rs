//! Pure chart geometry: ranges, projections and axis helpers.
//!
//! Every function here is deterministic and side-effect free; it borrows the
//! caller's series and returns freshly computed pixel-space descriptors.

pub mod axis;
pub mod bar_series;
pub mod color;
pub mod line_series;
pub mod pie_series;
pub mod primitives;
pub mod progress;
pub mod range;
pub mod types;

pub use axis::{
    AxisTick, AxisTicks, DEFAULT_TICK_RATIOS, format_grouped, sampled_label_indices, value_ticks,
};
pub use bar_series::{BarLayout, BarRect, project_bars, project_to_bar};
pub use color::Color;
pub use line_series::{LineSegment, project_line_points, project_line_segments};
pub use pie_series::{PieLayout, PieSegment, PieWedge, project_pie_segments};
pub use progress::{
    CircularProgress, clamp_percentage, project_circular_progress, project_progress_fill,
    ring_radius,
};
pub use range::{compute_extent, compute_range};
pub use types::{Canvas, DataPoint, Margins, PlottedPoint, ValueRange};
