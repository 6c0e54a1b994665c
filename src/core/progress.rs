use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Dash parameters for a ring gauge drawn as a stroked circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularProgress {
    /// Percentage after clamping to `[0, 100]`.
    pub percentage: f64,
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl CircularProgress {
    /// Visible stroke length along the ring.
    #[must_use]
    pub fn filled_length(self) -> f64 {
        self.circumference - self.dash_offset
    }

    /// Center label, e.g. `"72%"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}%", self.percentage.round())
    }
}

/// Clamps a percentage into `[0, 100]`; `NaN` counts as `0`.
#[must_use]
pub fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Radius of a ring whose stroke fits inside a `size` square.
pub fn ring_radius(size: f64, stroke_width: f64) -> ChartResult<f64> {
    let radius = (size - stroke_width) / 2.0;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "ring of size {size} cannot fit stroke width {stroke_width}"
        )));
    }
    Ok(radius)
}

/// Computes the dash offset that reveals `percentage` of a ring.
///
/// Out-of-range percentages are corrected silently, not rejected.
pub fn project_circular_progress(percentage: f64, radius: f64) -> ChartResult<CircularProgress> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ChartError::InvalidData(
            "progress radius must be finite and > 0".to_owned(),
        ));
    }

    let percentage = clamp_percentage(percentage);
    let circumference = TAU * radius;
    Ok(CircularProgress {
        percentage,
        radius,
        circumference,
        dash_offset: circumference * (1.0 - percentage / 100.0),
    })
}

/// Fill width of a horizontal progress track.
pub fn project_progress_fill(progress: f64, track_width: f64) -> ChartResult<f64> {
    if !track_width.is_finite() || track_width < 0.0 {
        return Err(ChartError::InvalidData(
            "progress track width must be finite and >= 0".to_owned(),
        ));
    }
    Ok(clamp_percentage(progress) / 100.0 * track_width)
}
