//! Report datasets consumed by the analytics screens.
//!
//! Records keep their domain shape and convert into [`DataPoint`](crate::core::DataPoint)
//! series on demand.

mod records;
mod report;
mod units;

pub use records::{
    BatteryPoint, ChargingAggregate, ChargingSession, CostEntry, DailyEnergy, DeviceUsage,
    PowerSample, TimeRange, day_label,
};
pub use report::{DatasetSummary, ReportDataset, ReportSummary, report_dataset};
pub use units::{NOMINAL_VOLTAGE, w_to_ma, wh_to_mah};
