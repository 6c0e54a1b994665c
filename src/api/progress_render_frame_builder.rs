use tracing::debug;

use crate::api::layout_helpers::{TITLE_FONT_PX, push_label};
use crate::api::{ChartTheme, CircularProgressOptions, ProgressBarOptions};
use crate::core::{Canvas, project_circular_progress, project_progress_fill, ring_radius};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, RectPrimitive, RenderFrame, TextHAlign};

/// Builds the ring gauge: a border-colored track with the accent arc on top.
pub fn build_circular_progress_frame(
    percentage: f64,
    options: &CircularProgressOptions,
    theme: &ChartTheme,
) -> ChartResult<RenderFrame> {
    options.validate()?;
    let radius = ring_radius(options.size, options.stroke_width)?;
    let progress = project_circular_progress(percentage, radius)?;

    let title_height = if options.title.is_some() {
        TITLE_FONT_PX * 2.0
    } else {
        0.0
    };
    let canvas = Canvas::new(options.size, title_height + options.size);
    let center_x = options.size / 2.0;
    let center_y = title_height + options.size / 2.0;

    let mut frame = RenderFrame::new(canvas).with_circle(CirclePrimitive::ring(
        center_x,
        center_y,
        radius,
        options.stroke_width,
        theme.border,
    ));
    if progress.filled_length() > 0.0 {
        frame.circles.push(
            CirclePrimitive::ring(
                center_x,
                center_y,
                radius,
                options.stroke_width,
                theme.accent,
            )
            .with_dash(progress.circumference, progress.dash_offset),
        );
    }

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
    push_label(
        &mut frame,
        &progress.label(),
        center_x,
        center_y + options.label_font_size / 2.5,
        options.label_font_size,
        theme.text_primary,
        TextHAlign::Center,
    );

    debug!(
        percentage = progress.percentage,
        dash_offset = progress.dash_offset,
        "built circular progress frame"
    );
    Ok(frame)
}

/// Builds a horizontal progress track filled to `progress` percent.
///
/// Animated hosts pass the current value of the fill tween.
pub fn build_progress_bar_frame(
    progress: f64,
    options: &ProgressBarOptions,
    theme: &ChartTheme,
) -> ChartResult<RenderFrame> {
    options.validate()?;
    let canvas = options.canvas();
    let fill_width = project_progress_fill(progress, options.width)?;
    let radius = options.corner_radius.min(options.height / 2.0);

    let mut frame = RenderFrame::new(canvas).with_rect(
        RectPrimitive::new(
            0.0,
            0.0,
            options.width,
            options.height,
            options.track_color.unwrap_or(theme.border),
        )
        .with_corner_radius(radius),
    );
    frame.rects.push(
        RectPrimitive::new(
            0.0,
            0.0,
            fill_width,
            options.height,
            options.fill_color.unwrap_or(theme.accent),
        )
        .with_corner_radius(radius.min(fill_width / 2.0)),
    );
    Ok(frame)
}
