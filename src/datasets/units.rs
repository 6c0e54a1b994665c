//! Unit conversions used by the report datasets.
//!
//! Energy and power are shown in battery units at an assumed 5 V.

pub const NOMINAL_VOLTAGE: f64 = 5.0;

/// Watt-hours to milliamp-hours, rounded to a whole number.
#[must_use]
pub fn wh_to_mah(wh: f64) -> f64 {
    (wh * 1000.0 / NOMINAL_VOLTAGE).round()
}

/// Watts to milliamps, rounded to a whole number.
#[must_use]
pub fn w_to_ma(w: f64) -> f64 {
    (w * 1000.0 / NOMINAL_VOLTAGE).round()
}
