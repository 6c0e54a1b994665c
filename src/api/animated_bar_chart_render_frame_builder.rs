use tracing::{debug, trace};

use crate::animation::{BarFrameState, BarGrowthPlan};
use crate::api::layout_helpers::{AXIS_LABEL_FONT_PX, push_label, push_value_grid};
use crate::api::{AnimatedBarChartOptions, ChartTheme};
use crate::core::{
    AxisTick, AxisTicks, BarRect, Canvas, DataPoint, ValueRange, compute_range, project_bars,
    sampled_label_indices,
};
use crate::error::ChartResult;
use crate::render::{RectPrimitive, RenderFrame, TextHAlign};

const BAR_CORNER_RADIUS_PX: f64 = 2.0;
const X_LABEL_OFFSET_PX: f64 = 14.0;

/// Projected bars and the growth plan that animates them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedBarChartLayout {
    pub canvas: Canvas,
    pub range: ValueRange,
    pub bars: Vec<BarRect>,
    pub plan: BarGrowthPlan,
}

/// Projects the battery-history bars and derives their growth plan.
pub fn layout_animated_bar_chart(
    points: &[DataPoint],
    options: &AnimatedBarChartOptions,
) -> ChartResult<AnimatedBarChartLayout> {
    options.validate()?;
    let canvas = options.canvas();
    let range = compute_range(points, options.value_floor)?;
    let bars = project_bars(points, range, canvas, options.bar_gap_px)?;
    let plan = BarGrowthPlan::new(&bars, options.timing);
    Ok(AnimatedBarChartLayout {
        canvas,
        range,
        bars,
        plan,
    })
}

/// Builds the animated bar chart as it looks `elapsed_ms` into its growth.
///
/// `None` renders the settled state, identical to the static projection.
pub fn build_animated_bar_chart_frame(
    points: &[DataPoint],
    options: &AnimatedBarChartOptions,
    theme: &ChartTheme,
    elapsed_ms: Option<u64>,
) -> ChartResult<RenderFrame> {
    let layout = layout_animated_bar_chart(points, options)?;
    let states = match elapsed_ms {
        Some(elapsed_ms) => {
            trace!(elapsed_ms, "sample bar growth");
            layout.plan.frame_at(elapsed_ms)
        }
        None => layout
            .bars
            .iter()
            .map(|bar| BarFrameState {
                height: bar.height,
                opacity: 1.0,
            })
            .collect(),
    };
    build_frame_from_states(points, options, theme, &layout, &states)
}

/// Builds a frame from externally sampled bar states, e.g. read from a
/// scheduler driving the growth tweens.
pub fn build_frame_from_states(
    points: &[DataPoint],
    options: &AnimatedBarChartOptions,
    theme: &ChartTheme,
    layout: &AnimatedBarChartLayout,
    states: &[BarFrameState],
) -> ChartResult<RenderFrame> {
    let canvas = layout.canvas;
    let ticks = axis_ticks(layout.range, canvas, &options.axis_values);

    let mut frame = RenderFrame::new(canvas);
    // Grid lines only between the outer axis values.
    let inner = ticks.len().saturating_sub(1);
    push_value_grid(
        &mut frame,
        ticks.iter().take(inner).skip(1),
        canvas,
        theme,
        false,
    );
    for tick in &ticks {
        push_label(
            &mut frame,
            &tick.label,
            canvas.margins.left - 5.0,
            tick.y,
            AXIS_LABEL_FONT_PX,
            theme.text_secondary,
            TextHAlign::Right,
        );
    }

    let color = options.bar_color.unwrap_or(theme.accent);
    for (bar, state) in layout.bars.iter().zip(states) {
        let height = state.height.clamp(0.0, canvas.usable_height());
        let opacity = state.opacity.clamp(0.0, 1.0);
        frame.rects.push(
            RectPrimitive::new(
                bar.x,
                canvas.baseline_y() - height,
                bar.width,
                height,
                color.with_alpha(color.alpha * opacity),
            )
            .with_corner_radius(BAR_CORNER_RADIUS_PX.min(bar.width * 0.5).min(height * 0.5)),
        );
    }

    let x_label_y = canvas.baseline_y() + X_LABEL_OFFSET_PX;
    for index in sampled_label_indices(points.len(), options.label_every) {
        if let (Some(bar), Some(point)) = (layout.bars.get(index), points.get(index)) {
            push_label(
                &mut frame,
                &point.label,
                bar.center_x(),
                x_label_y,
                AXIS_LABEL_FONT_PX,
                theme.text_secondary,
                TextHAlign::Center,
            );
        }
    }

    debug!(
        bars = layout.bars.len(),
        states = states.len(),
        "built animated bar chart frame"
    );
    Ok(frame)
}

fn axis_ticks(range: ValueRange, canvas: Canvas, values: &[f64]) -> AxisTicks {
    values
        .iter()
        .map(|&value| AxisTick {
            value,
            y: canvas.baseline_y() - range.ratio(value) * canvas.usable_height(),
            label: format!("{value:.0}"),
        })
        .collect()
}
