use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::api::NamedSeries;
use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

use super::records::{
    ChargingAggregate, ChargingSession, CostEntry, DailyEnergy, DeviceUsage, PowerSample,
    TimeRange, day_label,
};
use super::units::{w_to_ma, wh_to_mah};

/// Headline figures shown above the report charts.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total_energy: f64,
    pub avg_power: f64,
    pub total_sessions: u32,
    pub efficiency: f64,
    pub cost: Decimal,
    pub savings: Decimal,
    pub peak_usage: f64,
    pub off_peak_usage: f64,
}

/// Static report data backing the analytics screens.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDataset {
    pub monthly_average_power: Vec<DataPoint>,
    pub monthly_total_energy: Vec<DataPoint>,
    pub daily_energy: Vec<DailyEnergy>,
    pub power_time: Vec<PowerSample>,
    pub cost_analysis: Vec<CostEntry>,
    pub charging_sessions: Vec<ChargingSession>,
    pub weekly_charging: Vec<ChargingAggregate>,
    pub monthly_charging: Vec<ChargingAggregate>,
    pub devices: Vec<DeviceUsage>,
    pub summary: ReportSummary,
}

impl ReportDataset {
    #[must_use]
    pub fn daily_energy_series(&self) -> Vec<DataPoint> {
        self.daily_energy.iter().map(DataPoint::from).collect()
    }

    #[must_use]
    pub fn power_time_series(&self) -> Vec<DataPoint> {
        self.power_time.iter().map(DataPoint::from).collect()
    }

    pub fn total_cost_series(&self) -> ChartResult<Vec<DataPoint>> {
        self.cost_analysis.iter().map(CostEntry::total_cost_point).collect()
    }

    #[must_use]
    pub fn device_energy_series(&self) -> Vec<DataPoint> {
        self.devices.iter().map(DataPoint::from).collect()
    }

    /// Session counts for the charging chart, coloured by granularity.
    #[must_use]
    pub fn charging_series(&self, range: TimeRange) -> Vec<DataPoint> {
        let color = range.color();
        match range {
            TimeRange::Day => self
                .charging_sessions
                .iter()
                .map(|s| DataPoint::new(day_label(s.date), f64::from(s.sessions)).with_color(color))
                .collect(),
            TimeRange::Week => aggregate_series(&self.weekly_charging, color),
            TimeRange::Month => aggregate_series(&self.monthly_charging, color),
        }
    }

    /// Every chartable series keyed by a stable name, in display order.
    pub fn named_series(&self) -> ChartResult<NamedSeries> {
        let mut series = NamedSeries::new();
        series.insert(
            "monthly_average_power".to_owned(),
            self.monthly_average_power.clone(),
        );
        series.insert(
            "monthly_total_energy".to_owned(),
            self.monthly_total_energy.clone(),
        );
        series.insert("daily_energy".to_owned(), self.daily_energy_series());
        series.insert("power_time".to_owned(), self.power_time_series());
        series.insert("cost_total".to_owned(), self.total_cost_series()?);
        series.insert(
            "charging_day".to_owned(),
            self.charging_series(TimeRange::Day),
        );
        series.insert(
            "charging_week".to_owned(),
            self.charging_series(TimeRange::Week),
        );
        series.insert(
            "charging_month".to_owned(),
            self.charging_series(TimeRange::Month),
        );
        series.insert("device_energy".to_owned(), self.device_energy_series());
        Ok(series)
    }
}

fn aggregate_series(rows: &[ChargingAggregate], color: crate::core::Color) -> Vec<DataPoint> {
    rows.iter()
        .map(|row| DataPoint::new(row.label.clone(), f64::from(row.sessions)).with_color(color))
        .collect()
}

/// Count, total and mean of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

impl DatasetSummary {
    pub fn of(points: &[DataPoint]) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        for point in points {
            point.validate()?;
        }
        let total: f64 = points.iter().map(|p| p.value).sum();
        Ok(Self {
            count: points.len(),
            total,
            average: total / points.len() as f64,
        })
    }
}

fn date(year: i32, month: u32, day: u32) -> ChartResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ChartError::InvalidData(format!("invalid calendar date {year}-{month:02}-{day:02}"))
    })
}

fn monthly(values: [f64; 6]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DataPoint::new(format!("T{}", i + 1), *value))
        .collect()
}

fn aggregate(
    label: impl Into<String>,
    sessions: u32,
    energy_wh: f64,
    power_w: f64,
    avg_duration_minutes: u32,
    efficiency: f64,
) -> ChargingAggregate {
    ChargingAggregate {
        label: label.into(),
        sessions,
        total_energy: wh_to_mah(energy_wh),
        avg_power: w_to_ma(power_w),
        avg_duration_minutes,
        efficiency,
    }
}

/// Builds the static report dataset.
pub fn report_dataset() -> ChartResult<ReportDataset> {
    let monthly_average_power = monthly([5.2, 5.2, 5.3, 5.0, 5.2, 5.1].map(w_to_ma));
    let monthly_total_energy = monthly(
        [1_200_000.0, 1_320_000.0, 1_260_000.0, 1_500_000.0, 1_440_000.0, 1_560_000.0]
            .map(wh_to_mah),
    );

    let daily_energy = [8200.0, 10100.0, 6500.0, 9300.0, 12000.0, 7800.0, 11200.0]
        .iter()
        .zip(1u32..)
        .map(|(wh, day)| -> ChartResult<DailyEnergy> {
            Ok(DailyEnergy {
                date: date(2025, 8, day)?,
                energy: wh_to_mah(*wh),
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;

    let power_time = [6.8, 6.5, 6.0, 5.5, 4.5, 4.0, 3.5, 3.2, 3.0, 2.8, 2.8, 2.8, 2.8]
        .iter()
        .zip((0u32..).step_by(5))
        .map(|(w, time_minutes)| PowerSample {
            time_minutes,
            power: w_to_ma(*w),
        })
        .collect();

    let cost_analysis = [
        (1_200_000, 150_000, 680_000, 520_000),
        (1_320_000, 180_000, 720_000, 600_000),
        (1_260_000, 160_000, 690_000, 570_000),
        (1_500_000, 200_000, 800_000, 700_000),
        (1_440_000, 190_000, 770_000, 670_000),
        (1_560_000, 210_000, 830_000, 730_000),
    ]
    .iter()
    .zip(1..)
    .map(|(&(total, savings, peak, off_peak), month)| CostEntry {
        month: format!("T{month}"),
        total_cost: Decimal::from(total),
        savings: Decimal::from(savings),
        peak_cost: Decimal::from(peak),
        off_peak_cost: Decimal::from(off_peak),
    })
    .collect();

    let charging_sessions = [
        (3, 8200.0, 6.1, 45, 92.5),
        (4, 10100.0, 6.3, 48, 93.1),
        (3, 6500.0, 5.8, 42, 91.8),
        (3, 9300.0, 6.0, 46, 92.9),
        (5, 12000.0, 6.5, 50, 94.2),
        (3, 7800.0, 5.9, 44, 91.5),
        (4, 11200.0, 6.2, 47, 93.4),
        (3, 9800.0, 6.1, 45, 92.7),
        (4, 10500.0, 6.4, 49, 93.8),
        (3, 7200.0, 5.7, 41, 91.2),
        (3, 8900.0, 6.0, 46, 92.3),
    ]
    .iter()
    .zip(1u32..)
    .map(|(&row, day)| charging_session(day, row))
    .collect::<ChartResult<Vec<_>>>()?;

    let weekly_charging = vec![
        aggregate("Tuần 1", 12, 38200.0, 6.1, 45, 92.5),
        aggregate("Tuần 2", 14, 42100.0, 6.3, 48, 93.1),
        aggregate("Tuần 3", 13, 39500.0, 6.0, 46, 92.8),
        aggregate("Tuần 4", 11, 38500.0, 5.9, 44, 91.9),
    ];

    let monthly_charging = vec![
        aggregate("T1", 45, 158_200.0, 6.1, 45, 92.5),
        aggregate("T2", 52, 172_100.0, 6.3, 48, 93.1),
        aggregate("T3", 48, 165_500.0, 6.0, 46, 92.8),
        aggregate("T4", 55, 182_500.0, 6.2, 47, 93.4),
        aggregate("T5", 51, 175_800.0, 6.1, 46, 92.9),
        aggregate("T6", 58, 190_200.0, 6.4, 49, 93.8),
    ];

    let devices = [
        ("Power Bank 20K", 20000.0, 25, 6.2, 94.5),
        ("Power Bank 10K", 10000.0, 15, 5.8, 92.1),
        ("Power Bank 5K", 5000.0, 5, 7.1, 96.2),
    ]
    .iter()
    .map(|&(device, energy_wh, sessions, power_w, efficiency)| DeviceUsage {
        device: device.to_owned(),
        energy: wh_to_mah(energy_wh),
        sessions,
        avg_power: w_to_ma(power_w),
        efficiency,
    })
    .collect();

    let summary = ReportSummary {
        total_energy: wh_to_mah(1_580_000.0),
        avg_power: w_to_ma(5.2),
        total_sessions: 45,
        efficiency: 92.5,
        cost: Decimal::from(1_250_000),
        savings: Decimal::from(180_000),
        peak_usage: wh_to_mah(850_000.0),
        off_peak_usage: wh_to_mah(730_000.0),
    };

    let dataset = ReportDataset {
        monthly_average_power,
        monthly_total_energy,
        daily_energy,
        power_time,
        cost_analysis,
        charging_sessions,
        weekly_charging,
        monthly_charging,
        devices,
        summary,
    };
    debug!(
        daily = dataset.daily_energy.len(),
        sessions = dataset.charging_sessions.len(),
        "report dataset built"
    );
    Ok(dataset)
}

fn charging_session(
    day: u32,
    (sessions, energy_wh, power_w, duration, efficiency): (u32, f64, f64, u32, f64),
) -> ChartResult<ChargingSession> {
    Ok(ChargingSession {
        date: date(2025, 8, day)?,
        sessions,
        total_energy: wh_to_mah(energy_wh),
        avg_power: w_to_ma(power_w),
        avg_duration_minutes: duration,
        efficiency,
    })
}
