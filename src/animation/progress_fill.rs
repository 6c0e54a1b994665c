use crate::animation::{Easing, InterpolationHandle, InterpolationScheduler, InterpolationSpec};
use crate::core::clamp_percentage;
use crate::error::ChartResult;

pub const PROGRESS_FILL_DURATION_MS: u64 = 300;

/// Tween of a progress track from `from` to `to` percent.
#[must_use]
pub fn progress_fill_interpolation(from: f64, to: f64) -> InterpolationSpec {
    InterpolationSpec::new(
        clamp_percentage(from),
        clamp_percentage(to),
        PROGRESS_FILL_DURATION_MS,
        Easing::CubicInOut,
    )
}

/// Schedules a progress fill, or jumps straight to `to` when `animated` is off.
pub fn schedule_progress_fill<S: InterpolationScheduler>(
    scheduler: &mut S,
    from: f64,
    to: f64,
    animated: bool,
) -> ChartResult<InterpolationHandle> {
    let mut spec = progress_fill_interpolation(from, to);
    if !animated {
        spec.from = spec.to;
        spec.duration_ms = 0;
    }
    scheduler.schedule_interpolation(spec)
}
