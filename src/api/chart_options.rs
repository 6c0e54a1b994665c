use serde::{Deserialize, Serialize};

use crate::animation::{
    BarGrowthTiming, InterpolationHandle, InterpolationScheduler, schedule_progress_fill,
};
use crate::core::{Canvas, Color, Margins};
use crate::error::{ChartError, ChartResult};

/// Which value the vertical axis of a line chart starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeBaseline {
    /// `0..max`, the same mapping bars use.
    #[default]
    Zero,
    /// `min..max` of the series, to emphasise relative movement.
    DataMin,
}

/// Options of the static bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartOptions {
    #[serde(default = "default_chart_width")]
    pub width: f64,
    #[serde(default = "default_chart_height")]
    pub height: f64,
    #[serde(default = "default_cartesian_margins")]
    pub margins: Margins,
    #[serde(default = "default_bar_gap_px")]
    pub bar_gap_px: f64,
    #[serde(default = "default_bar_color")]
    pub bar_color: Color,
    #[serde(default = "default_bar_corner_radius")]
    pub corner_radius: f64,
    #[serde(default)]
    pub value_floor: f64,
    #[serde(default)]
    pub value_axis_decimals: usize,
    #[serde(default = "default_true")]
    pub show_value_labels: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_axis_title: Option<String>,
    #[serde(default)]
    pub y_axis_title: Option<String>,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            margins: default_cartesian_margins(),
            bar_gap_px: default_bar_gap_px(),
            bar_color: default_bar_color(),
            corner_radius: default_bar_corner_radius(),
            value_floor: 0.0,
            value_axis_decimals: 0,
            show_value_labels: true,
            title: None,
            x_axis_title: None,
            y_axis_title: None,
        }
    }
}

impl BarChartOptions {
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub fn with_bar_gap(mut self, gap_px: f64) -> Self {
        self.bar_gap_px = gap_px;
        self
    }

    /// Sets the domain floor used when the series maximum is smaller.
    #[must_use]
    pub fn with_value_floor(mut self, floor: f64) -> Self {
        self.value_floor = floor;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_title = Some(x.into());
        self.y_axis_title = Some(y.into());
        self
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height).with_margins(self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas().validate()?;
        non_negative(self.bar_gap_px, "bar gap")?;
        non_negative(self.corner_radius, "bar corner radius")?;
        finite(self.value_floor, "value floor")?;
        self.bar_color.validate()
    }
}

/// Options of the line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartOptions {
    #[serde(default = "default_chart_width")]
    pub width: f64,
    #[serde(default = "default_chart_height")]
    pub height: f64,
    #[serde(default = "default_cartesian_margins")]
    pub margins: Margins,
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_line_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default)]
    pub baseline: RangeBaseline,
    #[serde(default)]
    pub value_floor: f64,
    #[serde(default = "default_line_value_axis_decimals")]
    pub value_axis_decimals: usize,
    #[serde(default = "default_true")]
    pub show_value_labels: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_axis_title: Option<String>,
    #[serde(default)]
    pub y_axis_title: Option<String>,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            margins: default_cartesian_margins(),
            line_color: default_line_color(),
            stroke_width: default_line_stroke_width(),
            point_radius: default_point_radius(),
            baseline: RangeBaseline::default(),
            value_floor: 0.0,
            value_axis_decimals: default_line_value_axis_decimals(),
            show_value_labels: true,
            title: None,
            x_axis_title: None,
            y_axis_title: None,
        }
    }
}

impl LineChartOptions {
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: RangeBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_title = Some(x.into());
        self.y_axis_title = Some(y.into());
        self
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height).with_margins(self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas().validate()?;
        positive(self.stroke_width, "line stroke width")?;
        positive(self.point_radius, "point radius")?;
        finite(self.value_floor, "value floor")?;
        self.line_color.validate()
    }
}

/// Options of the pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartOptions {
    #[serde(default = "default_pie_size")]
    pub size: f64,
    #[serde(default = "default_pie_radius_inset")]
    pub radius_inset: f64,
    /// Radius of the center hole relative to the pie radius; `0` draws a full pie.
    #[serde(default = "default_pie_hole_ratio")]
    pub hole_ratio: f64,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default = "default_legend_row_height")]
    pub legend_row_height: f64,
    /// Fill of segments without their own color; the theme accent when unset.
    #[serde(default)]
    pub fallback_color: Option<Color>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for PieChartOptions {
    fn default() -> Self {
        Self {
            size: default_pie_size(),
            radius_inset: default_pie_radius_inset(),
            hole_ratio: default_pie_hole_ratio(),
            show_legend: true,
            legend_row_height: default_legend_row_height(),
            fallback_color: None,
            title: None,
        }
    }
}

impl PieChartOptions {
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_hole_ratio(mut self, hole_ratio: f64) -> Self {
        self.hole_ratio = hole_ratio;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.size / 2.0 - self.radius_inset
    }

    pub fn validate(&self) -> ChartResult<()> {
        positive(self.size, "pie size")?;
        non_negative(self.radius_inset, "pie radius inset")?;
        positive(self.radius(), "pie radius")?;
        if !(0.0..1.0).contains(&self.hole_ratio) {
            return Err(ChartError::InvalidData(
                "pie hole ratio must be in [0, 1)".to_owned(),
            ));
        }
        positive(self.legend_row_height, "legend row height")?;
        if let Some(color) = self.fallback_color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Options of the staggered battery-history bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatedBarChartOptions {
    #[serde(default = "default_chart_width")]
    pub width: f64,
    #[serde(default = "default_chart_height")]
    pub height: f64,
    #[serde(default = "default_animated_margins")]
    pub margins: Margins,
    #[serde(default = "default_animated_bar_gap_px")]
    pub bar_gap_px: f64,
    /// Bar color; the theme accent when unset.
    #[serde(default)]
    pub bar_color: Option<Color>,
    #[serde(default = "default_percentage_floor")]
    pub value_floor: f64,
    #[serde(default = "default_label_every")]
    pub label_every: usize,
    #[serde(default = "default_percentage_axis_values")]
    pub axis_values: Vec<f64>,
    #[serde(default)]
    pub timing: BarGrowthTiming,
}

impl Default for AnimatedBarChartOptions {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            margins: default_animated_margins(),
            bar_gap_px: default_animated_bar_gap_px(),
            bar_color: None,
            value_floor: default_percentage_floor(),
            label_every: default_label_every(),
            axis_values: default_percentage_axis_values(),
            timing: BarGrowthTiming::default(),
        }
    }
}

impl AnimatedBarChartOptions {
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_timing(mut self, timing: BarGrowthTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn with_label_every(mut self, every: usize) -> Self {
        self.label_every = every;
        self
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height).with_margins(self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas().validate()?;
        non_negative(self.bar_gap_px, "bar gap")?;
        finite(self.value_floor, "value floor")?;
        if self.label_every == 0 {
            return Err(ChartError::InvalidData(
                "label sampling interval must be >= 1".to_owned(),
            ));
        }
        for value in &self.axis_values {
            finite(*value, "axis value")?;
        }
        if let Some(color) = self.bar_color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Options of the ring gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularProgressOptions {
    #[serde(default = "default_gauge_size")]
    pub size: f64,
    #[serde(default = "default_gauge_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_gauge_font_size")]
    pub label_font_size: f64,
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for CircularProgressOptions {
    fn default() -> Self {
        Self {
            size: default_gauge_size(),
            stroke_width: default_gauge_stroke_width(),
            label_font_size: default_gauge_font_size(),
            title: None,
        }
    }
}

impl CircularProgressOptions {
    #[must_use]
    pub fn with_size(mut self, size: f64, stroke_width: f64) -> Self {
        self.size = size;
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        positive(self.size, "gauge size")?;
        positive(self.stroke_width, "gauge stroke width")?;
        positive(self.label_font_size, "gauge label font size")?;
        crate::core::ring_radius(self.size, self.stroke_width).map(|_| ())
    }
}

/// Options of the horizontal progress track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBarOptions {
    #[serde(default = "default_chart_width")]
    pub width: f64,
    #[serde(default = "default_progress_bar_height")]
    pub height: f64,
    #[serde(default = "default_progress_bar_corner_radius")]
    pub corner_radius: f64,
    #[serde(default)]
    pub track_color: Option<Color>,
    #[serde(default)]
    pub fill_color: Option<Color>,
    #[serde(default = "default_true")]
    pub animated: bool,
}

impl Default for ProgressBarOptions {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_progress_bar_height(),
            corner_radius: default_progress_bar_corner_radius(),
            track_color: None,
            fill_color: None,
            animated: true,
        }
    }
}

impl ProgressBarOptions {
    #[must_use]
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Schedules the fill from `from` to `to`, tweened only when `animated` is set.
    pub fn schedule_fill<S: InterpolationScheduler>(
        &self,
        scheduler: &mut S,
        from: f64,
        to: f64,
    ) -> ChartResult<InterpolationHandle> {
        schedule_progress_fill(scheduler, from, to, self.animated)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas().validate()?;
        non_negative(self.corner_radius, "progress bar corner radius")?;
        for color in [self.track_color, self.fill_color].into_iter().flatten() {
            color.validate()?;
        }
        Ok(())
    }
}

fn finite(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn positive(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )))
    }
}

fn non_negative(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and >= 0"
        )))
    }
}

fn default_true() -> bool {
    true
}

fn default_chart_width() -> f64 {
    300.0
}

fn default_chart_height() -> f64 {
    200.0
}

fn default_cartesian_margins() -> Margins {
    Margins::new(30.0, 40.0, 70.0, 40.0)
}

fn default_animated_margins() -> Margins {
    Margins::new(10.0, 30.0, 50.0, 30.0)
}

fn default_bar_gap_px() -> f64 {
    5.0
}

fn default_animated_bar_gap_px() -> f64 {
    2.0
}

fn default_bar_color() -> Color {
    Color::from_rgba8(0xFF, 0x95, 0x00, 0xFF)
}

fn default_bar_corner_radius() -> f64 {
    4.0
}

fn default_line_color() -> Color {
    Color::from_rgba8(0x4C, 0xAF, 0x50, 0xFF)
}

fn default_line_stroke_width() -> f64 {
    2.0
}

fn default_point_radius() -> f64 {
    4.0
}

fn default_line_value_axis_decimals() -> usize {
    1
}

fn default_pie_size() -> f64 {
    200.0
}

fn default_pie_radius_inset() -> f64 {
    20.0
}

fn default_pie_hole_ratio() -> f64 {
    0.3
}

fn default_legend_row_height() -> f64 {
    18.0
}

fn default_percentage_floor() -> f64 {
    100.0
}

fn default_label_every() -> usize {
    5
}

fn default_percentage_axis_values() -> Vec<f64> {
    vec![0.0, 25.0, 50.0, 75.0, 100.0]
}

fn default_gauge_size() -> f64 {
    150.0
}

fn default_gauge_stroke_width() -> f64 {
    12.0
}

fn default_gauge_font_size() -> f64 {
    20.0
}

fn default_progress_bar_height() -> f64 {
    8.0
}

fn default_progress_bar_corner_radius() -> f64 {
    4.0
}
