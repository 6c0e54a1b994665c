use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::animation::Easing;
use crate::error::{ChartError, ChartResult};

/// One scalar tween: hold `from` for `delay_ms`, then ease to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolationSpec {
    pub from: f64,
    pub to: f64,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl InterpolationSpec {
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            delay_ms: 0,
            duration_ms,
            easing,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Time at which the tween reaches `to`.
    #[must_use]
    pub fn end_ms(self) -> u64 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ChartError::InvalidData(
                "interpolation endpoints must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Value of the tween `elapsed_ms` after it was scheduled.
    #[must_use]
    pub fn sample(self, elapsed_ms: u64) -> f64 {
        if elapsed_ms < self.delay_ms {
            return self.from;
        }
        let t = if self.duration_ms == 0 {
            1.0
        } else {
            (elapsed_ms - self.delay_ms) as f64 / self.duration_ms as f64
        };
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

/// Opaque reference to a scheduled interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterpolationHandle(usize);

/// Port between chart animations and whatever clock drives them.
///
/// Geometry never depends on an implementation: a UI host plugs in its
/// frame clock, tests use [`ManualScheduler`].
pub trait InterpolationScheduler {
    fn schedule_interpolation(
        &mut self,
        spec: InterpolationSpec,
    ) -> ChartResult<InterpolationHandle>;

    /// Current value, or `None` for an unknown handle.
    fn value(&self, handle: InterpolationHandle) -> Option<f64>;

    /// Stops the tween at its current value. Returns `false` for unknown or
    /// already cancelled handles.
    fn cancel(&mut self, handle: InterpolationHandle) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct ScheduledInterpolation {
    spec: InterpolationSpec,
    started_at_ms: u64,
    frozen: Option<f64>,
}

/// Deterministic scheduler advanced explicitly by the caller.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    entries: Vec<ScheduledInterpolation>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        trace!(now_ms = self.now_ms, "advance manual scheduler");
    }

    /// `true` once every tween has finished or been cancelled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.entries.iter().all(|entry| {
            entry.frozen.is_some()
                || self.now_ms.saturating_sub(entry.started_at_ms) >= entry.spec.end_ms()
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sample(&self, entry: &ScheduledInterpolation) -> f64 {
        entry.frozen.unwrap_or_else(|| {
            entry
                .spec
                .sample(self.now_ms.saturating_sub(entry.started_at_ms))
        })
    }
}

impl InterpolationScheduler for ManualScheduler {
    fn schedule_interpolation(
        &mut self,
        spec: InterpolationSpec,
    ) -> ChartResult<InterpolationHandle> {
        spec.validate()?;
        self.entries.push(ScheduledInterpolation {
            spec,
            started_at_ms: self.now_ms,
            frozen: None,
        });
        Ok(InterpolationHandle(self.entries.len() - 1))
    }

    fn value(&self, handle: InterpolationHandle) -> Option<f64> {
        self.entries.get(handle.0).map(|entry| self.sample(entry))
    }

    fn cancel(&mut self, handle: InterpolationHandle) -> bool {
        let Some(entry) = self.entries.get(handle.0).copied() else {
            return false;
        };
        if entry.frozen.is_some() {
            return false;
        }
        let current = self.sample(&entry);
        self.entries[handle.0].frozen = Some(current);
        trace!(handle = handle.0, value = current, "cancel interpolation");
        true
    }
}
