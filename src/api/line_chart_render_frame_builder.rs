use tracing::debug;

use crate::api::layout_helpers::{
    AXIS_LABEL_FONT_PX, push_axes, push_label, push_titles, push_value_grid,
};
use crate::api::{ChartTheme, LineChartOptions, RangeBaseline};
use crate::core::{
    DEFAULT_TICK_RATIOS, DataPoint, compute_extent, compute_range, format_grouped,
    project_line_points, project_line_segments, value_ticks,
};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, LinePrimitive, RenderFrame, TextHAlign};

const VALUE_LABEL_OFFSET_PX: f64 = 15.0;
const X_LABEL_OFFSET_PX: f64 = 14.0;

/// Builds the line chart: grid, connecting segments, point markers and labels.
pub fn build_line_chart_frame(
    points: &[DataPoint],
    options: &LineChartOptions,
    theme: &ChartTheme,
) -> ChartResult<RenderFrame> {
    options.validate()?;
    let canvas = options.canvas();
    let range = match options.baseline {
        RangeBaseline::Zero => compute_range(points, options.value_floor)?,
        RangeBaseline::DataMin => compute_extent(points)?,
    };
    let plotted = project_line_points(points, range, canvas)?;
    let segments = project_line_segments(&plotted);
    let ticks = value_ticks(
        range,
        canvas,
        &DEFAULT_TICK_RATIOS,
        options.value_axis_decimals,
    )?;

    let mut frame = RenderFrame::new(canvas);
    push_value_grid(&mut frame, &ticks, canvas, theme, true);
    push_axes(&mut frame, canvas, theme);

    for segment in &segments {
        frame.lines.push(LinePrimitive::new(
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2,
            options.stroke_width,
            options.line_color,
        ));
    }

    let x_label_y = canvas.baseline_y() + X_LABEL_OFFSET_PX;
    for (plotted_point, point) in plotted.iter().zip(points) {
        frame.circles.push(CirclePrimitive::filled(
            plotted_point.x,
            plotted_point.y,
            options.point_radius,
            point.color.unwrap_or(options.line_color),
        ));
        if options.show_value_labels {
            push_label(
                &mut frame,
                &format_grouped(point.value),
                plotted_point.x,
                plotted_point.y + VALUE_LABEL_OFFSET_PX,
                AXIS_LABEL_FONT_PX,
                theme.text_primary,
                TextHAlign::Center,
            );
        }
        push_label(
            &mut frame,
            &point.label,
            plotted_point.x,
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
        points = plotted.len(),
        segments = segments.len(),
        baseline = ?options.baseline,
        "built line chart frame"
    );
    Ok(frame)
}
