use serde::{Deserialize, Serialize};

use crate::core::{Canvas, DataPoint, PlottedPoint, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Segment between two adjacent plotted points.
///
/// Besides endpoints it carries the length and screen-space angle so a
/// backend without path support can draw it as a rotated rectangle anchored
/// at `(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub length: f64,
    /// Degrees; 0 points right, positive values rotate clockwise.
    pub angle_degrees: f64,
}

impl LineSegment {
    #[must_use]
    pub fn between(from: PlottedPoint, to: PlottedPoint) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            length: dx.hypot(dy),
            angle_degrees: dy.atan2(dx).to_degrees(),
        }
    }
}

/// Projects a series into evenly spaced pixel points.
///
/// `x` is spread by index across the usable width; a single point sits at the
/// horizontal midpoint. `y` is inverted so larger values sit higher.
pub fn project_line_points(
    points: &[DataPoint],
    range: ValueRange,
    canvas: Canvas,
) -> ChartResult<Vec<PlottedPoint>> {
    canvas.validate()?;
    if points.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let usable_width = canvas.usable_width();
    let usable_height = canvas.usable_height();
    let last_index = points.len() - 1;

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            point.validate()?;
            let x_ratio = if last_index == 0 {
                0.5
            } else {
                index as f64 / last_index as f64
            };
            Ok(PlottedPoint {
                x: canvas.margins.left + x_ratio * usable_width,
                y: canvas.margins.top + (1.0 - range.ratio(point.value)) * usable_height,
                source_index: index,
            })
        })
        .collect()
}

/// Connects adjacent plotted points; fewer than two points yield no segments.
#[must_use]
pub fn project_line_segments(points: &[PlottedPoint]) -> Vec<LineSegment> {
    points
        .windows(2)
        .map(|pair| LineSegment::between(pair[0], pair[1]))
        .collect()
}
