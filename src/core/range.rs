use ordered_float::OrderedFloat;

use crate::core::primitives::finite_values;
use crate::core::{DataPoint, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Computes the zero-anchored range used by bar, line and gauge charts.
///
/// `min` is always `0`; `max` is the larger of the series maximum and
/// `fallback`, so an all-zero series still gets a usable span when the caller
/// passes a domain floor (e.g. `100.0` for battery percentages).
///
/// Empty input fails with [`ChartError::EmptySeries`]; callers are expected
/// to short-circuit to their "no data" state before projecting.
pub fn compute_range(points: &[DataPoint], fallback: f64) -> ChartResult<ValueRange> {
    if !fallback.is_finite() {
        return Err(ChartError::InvalidData(
            "range fallback must be finite".to_owned(),
        ));
    }

    let values = finite_values(points)?;
    let max = values
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .ok_or(ChartError::EmptySeries)?
        .into_inner();

    ValueRange::new(0.0, max.max(fallback).max(0.0))
}

/// Computes the data `min..max` extent of a series.
///
/// Used by line charts that plot relative movement rather than magnitude.
/// A flat series yields a degenerate range that projects at mid-height.
pub fn compute_extent(points: &[DataPoint]) -> ChartResult<ValueRange> {
    let values = finite_values(points)?;
    let min = values.iter().copied().map(OrderedFloat).min();
    let max = values.iter().copied().map(OrderedFloat).max();

    match (min, max) {
        (Some(min), Some(max)) => ValueRange::new(min.into_inner(), max.into_inner()),
        _ => Err(ChartError::EmptySeries),
    }
}
