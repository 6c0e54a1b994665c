use tracing::debug;

use crate::api::layout_helpers::{TITLE_FONT_PX, VALUE_LABEL_FONT_PX, push_label};
use crate::api::{ChartTheme, PieChartOptions};
use crate::core::{Canvas, DataPoint, format_grouped, project_pie_segments};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, RectPrimitive, RenderFrame, TextHAlign, WedgePrimitive};

const LEGEND_SWATCH_PX: f64 = 12.0;
const LEGEND_PADDING_PX: f64 = 8.0;
const CENTER_LABEL_FONT_PX: f64 = 14.0;

/// Builds the pie chart from true wedge paths plus a center total and legend.
///
/// A series whose values sum to zero has nothing to draw and is reported as
/// [`ChartError::EmptySeries`].
pub fn build_pie_chart_frame(
    points: &[DataPoint],
    options: &PieChartOptions,
    theme: &ChartTheme,
) -> ChartResult<RenderFrame> {
    options.validate()?;
    let layout = project_pie_segments(points)?;
    if !layout.is_renderable() {
        return Err(ChartError::EmptySeries);
    }

    let title_height = if options.title.is_some() {
        TITLE_FONT_PX * 2.0
    } else {
        0.0
    };
    let legend_height = if options.show_legend {
        layout.segments.len() as f64 * options.legend_row_height + LEGEND_PADDING_PX
    } else {
        0.0
    };
    let canvas = Canvas::new(options.size, title_height + options.size + legend_height);
    let center_x = options.size / 2.0;
    let center_y = title_height + options.size / 2.0;
    let radius = options.radius();
    let fallback_color = options.fallback_color.unwrap_or(theme.accent);

    let mut frame = RenderFrame::new(canvas);
    if let Some(title) = options.title.as_deref() {
        push_label(
            &mut frame,
            title,
            center_x,
            TITLE_FONT_PX,
            TITLE_FONT_PX,
            theme.text_primary,
            TextHAlign::Center,
        );
    }

    for segment in layout.segments.iter().filter(|segment| segment.sweep_angle > 0.0) {
        frame.wedges.push(WedgePrimitive::new(
            segment.wedge(center_x, center_y, radius),
            segment.color.unwrap_or(fallback_color),
        ));
    }

    if options.hole_ratio > 0.0 {
        frame.circles.push(CirclePrimitive::filled(
            center_x,
            center_y,
            radius * options.hole_ratio,
            theme.background,
        ));
    }
    push_label(
        &mut frame,
        &format_grouped(layout.total),
        center_x,
        center_y,
        CENTER_LABEL_FONT_PX,
        theme.text_primary,
        TextHAlign::Center,
    );

    if options.show_legend {
        let legend_top = title_height + options.size + LEGEND_PADDING_PX;
        for (row, segment) in layout.segments.iter().enumerate() {
            let y = legend_top + row as f64 * options.legend_row_height;
            frame.rects.push(
                RectPrimitive::new(
                    LEGEND_PADDING_PX,
                    y,
                    LEGEND_SWATCH_PX,
                    LEGEND_SWATCH_PX,
                    segment.color.unwrap_or(fallback_color),
                )
                .with_corner_radius(LEGEND_SWATCH_PX / 2.0),
            );
            push_label(
                &mut frame,
                &format!(
                    "{}: {} ({}%)",
                    segment.label,
                    format_grouped(segment.value),
                    segment.percentage_label()
                ),
                LEGEND_PADDING_PX * 2.0 + LEGEND_SWATCH_PX,
                y + LEGEND_SWATCH_PX - 2.0,
                VALUE_LABEL_FONT_PX,
                theme.text_secondary,
                TextHAlign::Left,
            );
        }
    }

    debug!(
        segments = layout.segments.len(),
        total = layout.total,
        "built pie chart frame"
    );
    Ok(frame)
}
