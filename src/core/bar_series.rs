use serde::{Deserialize, Serialize};

use crate::core::{Canvas, DataPoint, ValueRange};
use crate::error::{ChartError, ChartResult};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Horizontal slotting shared by every bar of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub count: usize,
    pub gap_px: f64,
}

impl BarLayout {
    pub fn new(count: usize, gap_px: f64) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::EmptySeries);
        }
        if !gap_px.is_finite() || gap_px < 0.0 {
            return Err(ChartError::InvalidData(
                "bar gap must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self { count, gap_px })
    }

    #[must_use]
    pub fn slot_width(self, canvas: Canvas) -> f64 {
        canvas.usable_width() / self.count as f64
    }

    #[must_use]
    pub fn bar_width(self, canvas: Canvas) -> f64 {
        (self.slot_width(canvas) - self.gap_px).max(0.0)
    }
}

/// Deterministic bar rectangle in pixel coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub source_index: usize,
}

impl BarRect {
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Projects one data point into its bar rectangle.
///
/// The bar is centred in slot `index` and grows upward from the canvas
/// baseline. Its height is the clamped range ratio of the value times the
/// usable height, so identical values always produce identical heights.
/// A degenerate range whose max sits on the zero baseline draws flat bars.
pub fn project_to_bar(
    point: &DataPoint,
    index: usize,
    layout: BarLayout,
    range: ValueRange,
    canvas: Canvas,
) -> ChartResult<BarRect> {
    canvas.validate()?;
    point.validate()?;
    if index >= layout.count {
        return Err(ChartError::InvalidData(format!(
            "bar index {index} out of bounds for {} slots",
            layout.count
        )));
    }

    let slot = layout.slot_width(canvas);
    let width = layout.bar_width(canvas);
    let x = canvas.margins.left + slot * index as f64 + (slot - width) * 0.5;

    let height = bar_ratio(range, point.value) * canvas.usable_height();
    Ok(BarRect {
        x,
        y: canvas.baseline_y() - height,
        width,
        height,
        source_index: index,
    })
}

fn bar_ratio(range: ValueRange, value: f64) -> f64 {
    if range.is_degenerate() && range.max <= 0.0 {
        return 0.0;
    }
    range.ratio(value).clamp(0.0, 1.0)
}

/// Projects a full series into bar rectangles in input order.
pub fn project_bars(
    points: &[DataPoint],
    range: ValueRange,
    canvas: Canvas,
    gap_px: f64,
) -> ChartResult<Vec<BarRect>> {
    let layout = BarLayout::new(points.len(), gap_px)?;

    // Large series may be projected in parallel; output order is preserved.
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .enumerate()
            .map(|(index, point)| project_to_bar(point, index, layout, range, canvas))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .enumerate()
            .map(|(index, point)| project_to_bar(point, index, layout, range, canvas))
            .collect()
    }
}
