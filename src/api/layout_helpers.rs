use crate::api::ChartTheme;
use crate::core::{AxisTick, Canvas, Color};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

pub(crate) const AXIS_LABEL_FONT_PX: f64 = 9.0;
pub(crate) const VALUE_LABEL_FONT_PX: f64 = 10.0;
pub(crate) const AXIS_TITLE_FONT_PX: f64 = 11.0;
pub(crate) const TITLE_FONT_PX: f64 = 14.0;

const AXIS_STROKE_PX: f64 = 1.0;
const Y_LABEL_PADDING_PX: f64 = 5.0;

/// Pushes a label unless it is blank; blank labels are legal data.
pub(crate) fn push_label(
    frame: &mut RenderFrame,
    text: &str,
    x: f64,
    y: f64,
    font_size_px: f64,
    color: Color,
    h_align: TextHAlign,
) {
    if text.trim().is_empty() {
        return;
    }
    frame
        .texts
        .push(TextPrimitive::new(text, x, y, font_size_px, color, h_align));
}

/// Left and bottom axis lines of the plot area.
pub(crate) fn push_axes(frame: &mut RenderFrame, canvas: Canvas, theme: &ChartTheme) {
    let left = canvas.margins.left;
    let right = canvas.width - canvas.margins.right;
    let top = canvas.margins.top;
    let baseline = canvas.baseline_y();

    frame.lines.push(LinePrimitive::new(
        left,
        top,
        left,
        baseline,
        AXIS_STROKE_PX,
        theme.border,
    ));
    frame.lines.push(LinePrimitive::new(
        left,
        baseline,
        right,
        baseline,
        AXIS_STROKE_PX,
        theme.border,
    ));
}

/// Horizontal grid line per tick, optionally labelled left of the plot area.
pub(crate) fn push_value_grid<'a>(
    frame: &mut RenderFrame,
    ticks: impl IntoIterator<Item = &'a AxisTick>,
    canvas: Canvas,
    theme: &ChartTheme,
    with_labels: bool,
) {
    let left = canvas.margins.left;
    let right = canvas.width - canvas.margins.right;
    for tick in ticks {
        frame.lines.push(LinePrimitive::new(
            left,
            tick.y,
            right,
            tick.y,
            AXIS_STROKE_PX,
            theme.grid_color(),
        ));
        if with_labels {
            push_label(
                frame,
                &tick.label,
                left - Y_LABEL_PADDING_PX,
                tick.y,
                AXIS_LABEL_FONT_PX,
                theme.text_secondary,
                TextHAlign::Right,
            );
        }
    }
}

/// Chart title above the plot and axis titles along its edges.
pub(crate) fn push_titles(
    frame: &mut RenderFrame,
    canvas: Canvas,
    theme: &ChartTheme,
    title: Option<&str>,
    x_axis_title: Option<&str>,
    y_axis_title: Option<&str>,
) {
    if let Some(title) = title {
        push_label(
            frame,
            title,
            canvas.width / 2.0,
            TITLE_FONT_PX,
            TITLE_FONT_PX,
            theme.text_primary,
            TextHAlign::Center,
        );
    }
    if let Some(x_axis_title) = x_axis_title {
        push_label(
            frame,
            x_axis_title,
            canvas.margins.left + canvas.usable_width() / 2.0,
            canvas.height - AXIS_TITLE_FONT_PX,
            AXIS_TITLE_FONT_PX,
            theme.text_secondary,
            TextHAlign::Center,
        );
    }
    if let Some(y_axis_title) = y_axis_title {
        push_label(
            frame,
            y_axis_title,
            canvas.margins.left,
            (canvas.margins.top - AXIS_TITLE_FONT_PX).max(AXIS_TITLE_FONT_PX),
            AXIS_TITLE_FONT_PX,
            theme.text_secondary,
            TextHAlign::Left,
        );
    }
}
