use crate::core::PieWedge;
use crate::error::{ChartError, ChartResult};

pub use crate::core::Color;

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_positive(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )))
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        ensure_positive(self.stroke_width, "line stroke width")?;
        self.color.validate()
    }
}

/// Filled rectangle, optionally rounded and bordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub corner_radius: f64,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            corner_radius: 0.0,
            border_width: 0.0,
            border_color: fill_color,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(
            &[
                self.x,
                self.y,
                self.width,
                self.height,
                self.corner_radius,
                self.border_width,
            ],
            "rect geometry",
        )?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if self.corner_radius < 0.0 || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius and border width must be >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.x, self.y], "text coordinates")?;
        ensure_positive(self.font_size_px, "font size")?;
        self.color.validate()
    }
}

/// Circle that is filled, stroked, or both.
///
/// When `dash` is set the stroke is drawn as one dash of the given length
/// starting at 12 o'clock and running clockwise, shifted back by
/// `dash_offset`. Ring gauges use this to reveal a share of the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
    pub dash: Option<f64>,
    pub dash_offset: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn filled(center_x: f64, center_y: f64, radius: f64, color: Color) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            fill_color: Some(color),
            stroke_color: None,
            stroke_width: 0.0,
            dash: None,
            dash_offset: 0.0,
        }
    }

    #[must_use]
    pub const fn ring(
        center_x: f64,
        center_y: f64,
        radius: f64,
        stroke_width: f64,
        color: Color,
    ) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            fill_color: None,
            stroke_color: Some(color),
            stroke_width,
            dash: None,
            dash_offset: 0.0,
        }
    }

    #[must_use]
    pub const fn with_dash(mut self, dash: f64, dash_offset: f64) -> Self {
        self.dash = Some(dash);
        self.dash_offset = dash_offset;
        self
    }

    /// Stroke length that is actually painted.
    #[must_use]
    pub fn visible_stroke_length(self) -> f64 {
        let circumference = std::f64::consts::TAU * self.radius;
        match self.dash {
            Some(dash) => (dash.min(circumference) - self.dash_offset).clamp(0.0, circumference),
            None => circumference,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(
            &[
                self.center_x,
                self.center_y,
                self.dash_offset,
                self.dash.unwrap_or(0.0),
            ],
            "circle geometry",
        )?;
        ensure_positive(self.radius, "circle radius")?;
        if self.fill_color.is_none() && self.stroke_color.is_none() {
            return Err(ChartError::InvalidData(
                "circle must be filled or stroked".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke_color {
            ensure_positive(self.stroke_width, "circle stroke width")?;
            stroke.validate()?;
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Filled pie wedge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgePrimitive {
    pub wedge: PieWedge,
    pub fill_color: Color,
}

impl WedgePrimitive {
    #[must_use]
    pub const fn new(wedge: PieWedge, fill_color: Color) -> Self {
        Self { wedge, fill_color }
    }

    pub fn validate(self) -> ChartResult<()> {
        let wedge = self.wedge;
        ensure_finite(
            &[
                wedge.center_x,
                wedge.center_y,
                wedge.start_angle,
                wedge.sweep_angle,
            ],
            "wedge geometry",
        )?;
        ensure_positive(wedge.radius, "wedge radius")?;
        if wedge.sweep_angle <= 0.0 {
            return Err(ChartError::InvalidData(
                "wedge sweep must be > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}
