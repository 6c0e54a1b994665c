//! Time-domain behavior layered over the static projections.
//!
//! Animations only decide how a chart reaches its projected geometry. The
//! clock lives behind [`InterpolationScheduler`].

mod bar_growth;
mod easing;
mod progress_fill;
mod scheduler;

pub use bar_growth::{
    BarFrameState, BarGrowthPlan, BarGrowthTiming, ScheduledBar, sample_scheduled_bars,
};
pub use easing::Easing;
pub use progress_fill::{
    PROGRESS_FILL_DURATION_MS, progress_fill_interpolation, schedule_progress_fill,
};
pub use scheduler::{
    InterpolationHandle, InterpolationScheduler, InterpolationSpec, ManualScheduler,
};
