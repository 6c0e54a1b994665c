use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{Easing, InterpolationHandle, InterpolationScheduler, InterpolationSpec};
use crate::core::BarRect;
use crate::error::ChartResult;

/// Timing of a staggered bar-growth animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarGrowthTiming {
    pub stagger_ms: u64,
    pub growth_ms: u64,
    pub fade_ms: u64,
    pub easing: Easing,
}

impl Default for BarGrowthTiming {
    fn default() -> Self {
        Self {
            stagger_ms: 50,
            growth_ms: 800,
            fade_ms: 400,
            easing: Easing::CubicOut,
        }
    }
}

/// Sampled state of one bar at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarFrameState {
    pub height: f64,
    pub opacity: f64,
}

/// Handles of one bar registered on a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledBar {
    pub height: InterpolationHandle,
    pub opacity: InterpolationHandle,
}

/// Per-bar tweens from zero to the projected heights.
///
/// Bar `i` starts `i * stagger_ms` after the plan; the final frame equals the
/// static projection, so animation only changes the path, never the result.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGrowthPlan {
    targets: Vec<f64>,
    timing: BarGrowthTiming,
}

impl BarGrowthPlan {
    #[must_use]
    pub fn new(bars: &[BarRect], timing: BarGrowthTiming) -> Self {
        Self {
            targets: bars.iter().map(|bar| bar.height).collect(),
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> BarGrowthTiming {
        self.timing
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[must_use]
    pub fn delay_for(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.timing.stagger_ms)
    }

    fn height_spec(&self, index: usize, target: f64) -> InterpolationSpec {
        InterpolationSpec::new(0.0, target, self.timing.growth_ms, self.timing.easing)
            .with_delay(self.delay_for(index))
    }

    fn opacity_spec(&self, index: usize) -> InterpolationSpec {
        InterpolationSpec::new(0.0, 1.0, self.timing.fade_ms, self.timing.easing)
            .with_delay(self.delay_for(index))
    }

    /// Time after which every bar has settled.
    #[must_use]
    pub fn total_duration_ms(&self) -> u64 {
        let Some(last) = self.targets.len().checked_sub(1) else {
            return 0;
        };
        self.delay_for(last)
            .saturating_add(self.timing.growth_ms.max(self.timing.fade_ms))
    }

    /// Samples every bar `elapsed_ms` after the plan started.
    #[must_use]
    pub fn frame_at(&self, elapsed_ms: u64) -> Vec<BarFrameState> {
        self.targets
            .iter()
            .enumerate()
            .map(|(index, &target)| BarFrameState {
                height: self.height_spec(index, target).sample(elapsed_ms),
                opacity: self.opacity_spec(index).sample(elapsed_ms),
            })
            .collect()
    }

    /// Registers a height and an opacity tween per bar.
    pub fn schedule<S: InterpolationScheduler>(
        &self,
        scheduler: &mut S,
    ) -> ChartResult<Vec<ScheduledBar>> {
        debug!(
            bars = self.targets.len(),
            total_duration_ms = self.total_duration_ms(),
            "schedule bar growth"
        );
        self.targets
            .iter()
            .enumerate()
            .map(|(index, &target)| {
                Ok(ScheduledBar {
                    height: scheduler.schedule_interpolation(self.height_spec(index, target))?,
                    opacity: scheduler.schedule_interpolation(self.opacity_spec(index))?,
                })
            })
            .collect()
    }
}

/// Reads the current state of scheduled bars; unknown handles read as zero.
#[must_use]
pub fn sample_scheduled_bars<S: InterpolationScheduler>(
    scheduler: &S,
    bars: &[ScheduledBar],
) -> Vec<BarFrameState> {
    bars.iter()
        .map(|bar| BarFrameState {
            height: scheduler.value(bar.height).unwrap_or(0.0),
            opacity: scheduler.value(bar.opacity).unwrap_or(0.0),
        })
        .collect()
}
