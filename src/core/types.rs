use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// One labeled observation feeding a chart.
///
/// Sequence order is x-axis order; labels are display-only and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn from_decimal(label: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(label, decimal_to_f64(value, "value")?))
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value of `{}` must be finite",
                self.label
            )));
        }
        Ok(())
    }

    /// Validates the point for series where only magnitudes make sense
    /// (energy, power, pie shares).
    pub fn validate_non_negative(&self) -> ChartResult<()> {
        self.validate()?;
        if self.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "value of `{}` must be >= 0",
                self.label
            )));
        }
        Ok(())
    }
}

/// Insets between the canvas edge and the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

/// Target drawing surface; every projected position is relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margins: Margins,
}

impl Canvas {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    #[must_use]
    pub const fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn usable_width(self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn usable_height(self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// Pixel y of the zero baseline (bottom edge of the plotting area).
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.height - self.margins.bottom
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let margins = self.margins;
        let finite = [
            self.width,
            self.height,
            margins.top,
            margins.right,
            margins.bottom,
            margins.left,
        ]
        .iter()
        .all(|value| value.is_finite());
        finite && self.usable_width() > 0.0 && self.usable_height() > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Value domain mapped onto the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Ratio used when the range collapses to a single value.
    pub const DEGENERATE_RATIO: f64 = 0.5;

    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(ChartError::InvalidData(
                "value range must be finite with max >= min".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Fixed `0..=100` range used by percentage charts.
    #[must_use]
    pub const fn percentage() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() <= 0.0
    }

    /// Normalized position of `value` inside the range; not clamped.
    #[must_use]
    pub fn ratio(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return Self::DEGENERATE_RATIO;
        }
        (value - self.min) / self.span()
    }

    /// Inverse of [`ValueRange::ratio`] for non-degenerate ranges.
    #[must_use]
    pub fn value_at(self, ratio: f64) -> f64 {
        self.min + ratio * self.span()
    }
}

/// Pixel-space projection of one [`DataPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    pub source_index: usize,
}
