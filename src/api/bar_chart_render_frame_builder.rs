use tracing::debug;

use crate::api::layout_helpers::{
    AXIS_LABEL_FONT_PX, VALUE_LABEL_FONT_PX, push_axes, push_label, push_titles, push_value_grid,
};
use crate::api::{BarChartOptions, ChartTheme};
use crate::core::{
    DEFAULT_TICK_RATIOS, DataPoint, compute_range, format_grouped, project_bars, value_ticks,
};
use crate::error::ChartResult;
use crate::render::{RectPrimitive, RenderFrame, TextHAlign};

const VALUE_LABEL_OFFSET_PX: f64 = 5.0;
const X_LABEL_OFFSET_PX: f64 = 14.0;

/// Builds the static bar chart: grid, value axis, bars and their labels.
pub fn build_bar_chart_frame(
    points: &[DataPoint],
    options: &BarChartOptions,
    theme: &ChartTheme,
) -> ChartResult<RenderFrame> {
    options.validate()?;
    let canvas = options.canvas();
    let range = compute_range(points, options.value_floor)?;
    let bars = project_bars(points, range, canvas, options.bar_gap_px)?;
    let ticks = value_ticks(
        range,
        canvas,
        &DEFAULT_TICK_RATIOS,
        options.value_axis_decimals,
    )?;

    let mut frame = RenderFrame::new(canvas);
    push_value_grid(&mut frame, &ticks, canvas, theme, true);
    push_axes(&mut frame, canvas, theme);

    let x_label_y = canvas.baseline_y() + X_LABEL_OFFSET_PX;
    for (bar, point) in bars.iter().zip(points) {
        let radius = options
            .corner_radius
            .min(bar.width * 0.5)
            .min(bar.height * 0.5);
        frame.rects.push(
            RectPrimitive::new(
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                point.color.unwrap_or(options.bar_color),
            )
            .with_corner_radius(radius),
        );

        if options.show_value_labels {
            push_label(
                &mut frame,
                &format_grouped(point.value),
                bar.center_x(),
                bar.y - VALUE_LABEL_OFFSET_PX,
                VALUE_LABEL_FONT_PX,
                theme.text_primary,
                TextHAlign::Center,
            );
        }
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

    push_titles(
        &mut frame,
        canvas,
        theme,
        options.title.as_deref(),
        options.x_axis_title.as_deref(),
        options.y_axis_title.as_deref(),
    );

    debug!(
        bars = bars.len(),
        range_max = range.max,
        primitives = frame.primitive_count(),
        "built bar chart frame"
    );
    Ok(frame)
}
