use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Color, DataPoint};
use crate::error::ChartResult;

/// Battery level at the end of one day of the history window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryPoint {
    pub day: u32,
    pub percentage: f64,
}

impl From<&BatteryPoint> for DataPoint {
    fn from(point: &BatteryPoint) -> Self {
        DataPoint::new(point.day.to_string(), point.percentage)
    }
}

/// Charging power sampled during one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerSample {
    pub time_minutes: u32,
    /// Milliamps.
    pub power: f64,
}

impl From<&PowerSample> for DataPoint {
    fn from(sample: &PowerSample) -> Self {
        DataPoint::new(sample.time_minutes.to_string(), sample.power)
    }
}

/// Energy charged on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEnergy {
    pub date: NaiveDate,
    /// Milliamp-hours.
    pub energy: f64,
}

impl From<&DailyEnergy> for DataPoint {
    fn from(entry: &DailyEnergy) -> Self {
        DataPoint::new(day_label(entry.date), entry.energy)
    }
}

/// Monthly charging cost breakdown, in VND.
#[derive(Debug, Clone, PartialEq)]
pub struct CostEntry {
    pub month: String,
    pub total_cost: Decimal,
    pub savings: Decimal,
    pub peak_cost: Decimal,
    pub off_peak_cost: Decimal,
}

impl CostEntry {
    pub fn total_cost_point(&self) -> ChartResult<DataPoint> {
        DataPoint::from_decimal(self.month.clone(), self.total_cost)
    }

    pub fn savings_point(&self) -> ChartResult<DataPoint> {
        DataPoint::from_decimal(self.month.clone(), self.savings)
    }
}

/// Charging activity of one day.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingSession {
    pub date: NaiveDate,
    pub sessions: u32,
    pub total_energy: f64,
    pub avg_power: f64,
    pub avg_duration_minutes: u32,
    pub efficiency: f64,
}

/// Charging activity aggregated over a week or a month.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingAggregate {
    pub label: String,
    pub sessions: u32,
    pub total_energy: f64,
    pub avg_power: f64,
    pub avg_duration_minutes: u32,
    pub efficiency: f64,
}

/// Energy share of one charging device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceUsage {
    pub device: String,
    pub energy: f64,
    pub sessions: u32,
    pub avg_power: f64,
    pub efficiency: f64,
}

impl From<&DeviceUsage> for DataPoint {
    fn from(usage: &DeviceUsage) -> Self {
        DataPoint::new(usage.device.clone(), usage.energy)
    }
}

/// Granularity of the charging-sessions chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    Day,
    Week,
    Month,
}

impl TimeRange {
    /// Bar color used for each granularity.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Day => Color::from_rgba8(0x4C, 0xAF, 0x50, 0xFF),
            Self::Week => Color::from_rgba8(0x21, 0x96, 0xF3, 0xFF),
            Self::Month => Color::from_rgba8(0xFF, 0x98, 0x00, 0xFF),
        }
    }
}

/// Day-of-month label, zero padded (`2025-08-01` -> `"01"`).
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    format!("{:02}", date.day())
}
