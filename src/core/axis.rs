use num_format::{Locale, ToFormattedString};
use smallvec::SmallVec;

use crate::core::{Canvas, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Ratios of the value axis that receive a tick and a grid line.
pub const DEFAULT_TICK_RATIOS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// One value-axis tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

pub type AxisTicks = SmallVec<[AxisTick; 8]>;

/// Maps tick ratios to values, pixel rows and fixed-decimal labels.
///
/// Ticks follow the same inverted mapping as projected points, so ratio `0`
/// lands on the baseline and ratio `1` on the top edge of the plot area.
pub fn value_ticks(
    range: ValueRange,
    canvas: Canvas,
    ratios: &[f64],
    decimals: usize,
) -> ChartResult<AxisTicks> {
    canvas.validate()?;

    let usable_height = canvas.usable_height();
    ratios
        .iter()
        .map(|&ratio| {
            if !ratio.is_finite() {
                return Err(ChartError::InvalidData(
                    "tick ratio must be finite".to_owned(),
                ));
            }
            let value = range.value_at(ratio);
            Ok(AxisTick {
                value,
                y: canvas.baseline_y() - ratio * usable_height,
                label: format!("{value:.decimals$}"),
            })
        })
        .collect()
}

/// Indices whose x-axis label is shown: every `every`-th one plus the last.
///
/// Keeps dense day-by-day series readable without dropping the final day.
#[must_use]
pub fn sampled_label_indices(count: usize, every: usize) -> SmallVec<[usize; 16]> {
    let step = every.max(1);
    let mut indices: SmallVec<[usize; 16]> = (0..count).step_by(step).collect();
    if let Some(last) = count.checked_sub(1) {
        if indices.last() != Some(&last) {
            indices.push(last);
        }
    }
    indices
}

/// Formats a value with `,` thousands separators, e.g. `312000` -> `312,000`.
///
/// Fractional digits are kept up to three places with trailing zeros removed.
#[must_use]
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let grouped = integer
        .parse::<u128>()
        .map(|whole| whole.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| integer.to_owned());

    let sign = if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}
