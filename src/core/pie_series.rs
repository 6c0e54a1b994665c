use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{Color, DataPoint};
use crate::error::{ChartError, ChartResult};

/// One pie share, laid out clockwise from angle `0` (pointing right).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub sweep_angle: f64,
    pub large_arc: bool,
    pub percentage_of_total: f64,
    pub color: Option<Color>,
    pub source_index: usize,
}

impl PieSegment {
    /// Share of the total rounded to one decimal, for legends only.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage_of_total)
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle * 0.5
    }

    /// Closed wedge outline for this segment around `(center_x, center_y)`.
    #[must_use]
    pub fn wedge(&self, center_x: f64, center_y: f64, radius: f64) -> PieWedge {
        PieWedge {
            center_x,
            center_y,
            radius,
            start_angle: self.start_angle,
            sweep_angle: self.sweep_angle,
        }
    }
}

/// Segments of one pie plus the total they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub total: f64,
    pub segments: Vec<PieSegment>,
}

impl PieLayout {
    /// `false` when every share is zero and the chart should show "no data".
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.total > 0.0
    }
}

/// Splits a series into consecutive pie segments in input order.
///
/// Angles are computed from unrounded shares so the sweeps of a positive
/// total add up to a full turn. A zero total yields zero-sweep segments.
pub fn project_pie_segments(points: &[DataPoint]) -> ChartResult<PieLayout> {
    if points.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    for point in points {
        point.validate_non_negative()?;
    }

    let total: f64 = points.iter().map(|point| point.value).sum();
    let mut cursor = 0.0;
    let segments = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let share = if total > 0.0 { point.value / total } else { 0.0 };
            let sweep_angle = share * TAU;
            let start_angle = cursor;
            cursor += sweep_angle;
            PieSegment {
                label: point.label.clone(),
                value: point.value,
                start_angle,
                end_angle: cursor,
                sweep_angle,
                large_arc: sweep_angle > PI,
                percentage_of_total: share * 100.0,
                color: point.color,
                source_index: index,
            }
        })
        .collect();

    Ok(PieLayout { total, segments })
}

/// True wedge geometry for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieWedge {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl PieWedge {
    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    #[must_use]
    pub fn point_at(self, angle: f64) -> (f64, f64) {
        (
            self.center_x + self.radius * angle.cos(),
            self.center_y + self.radius * angle.sin(),
        )
    }

    #[must_use]
    pub fn is_full_circle(self) -> bool {
        self.sweep_angle >= TAU - 1e-9
    }

    /// SVG path data (`M L A Z`) for the wedge.
    ///
    /// A full turn is emitted as two half arcs since an SVG arc with equal
    /// endpoints draws nothing.
    #[must_use]
    pub fn to_svg_path(self) -> String {
        let (cx, cy, r) = (self.center_x, self.center_y, self.radius);
        let mut path = String::new();

        if self.is_full_circle() {
            let (sx, sy) = self.point_at(self.start_angle);
            let (hx, hy) = self.point_at(self.start_angle + PI);
            let _ = write!(
                path,
                "M {sx} {sy} A {r} {r} 0 1 1 {hx} {hy} A {r} {r} 0 1 1 {sx} {sy} Z"
            );
            return path;
        }

        let (x1, y1) = self.point_at(self.start_angle);
        let (x2, y2) = self.point_at(self.end_angle());
        let large_arc = u8::from(self.sweep_angle > PI);
        let _ = write!(
            path,
            "M {cx} {cy} L {x1} {y1} A {r} {r} 0 {large_arc} 1 {x2} {y2} Z"
        );
        path
    }
}
