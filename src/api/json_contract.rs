use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::{
    AnimatedBarChartOptions, BarChartOptions, ChartLocale, ChartTheme, CircularProgressOptions,
    LineChartOptions, PieChartOptions, ProgressBarOptions,
};
use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

pub const CHART_SETTINGS_JSON_SCHEMA_V1: u32 = 1;
pub const DATASET_JSON_SCHEMA_V1: u32 = 1;

/// Named series in display order.
///
/// `IndexMap` keeps insertion order so serialized datasets stay stable.
pub type NamedSeries = IndexMap<String, Vec<DataPoint>>;

/// Every chart option a host can persist, with defaults for missing parts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub locale: ChartLocale,
    pub theme: ChartTheme,
    pub bar: BarChartOptions,
    pub line: LineChartOptions,
    pub pie: PieChartOptions,
    pub animated_bar: AnimatedBarChartOptions,
    pub circular_progress: CircularProgressOptions,
    pub progress_bar: ProgressBarOptions,
}

impl ChartSettings {
    pub fn validate(&self) -> ChartResult<()> {
        self.theme.validate()?;
        self.bar.validate()?;
        self.line.validate()?;
        self.pie.validate()?;
        self.animated_bar.validate()?;
        self.circular_progress.validate()?;
        self.progress_bar.validate()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSettingsJsonContractV1 {
            schema_version: CHART_SETTINGS_JSON_SCHEMA_V1,
            settings: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart settings contract v1: {e}"))
        })
    }

    /// Accepts either a versioned contract or bare settings; the result is validated.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value = parse_json_value(input, "chart settings")?;
        let settings = if is_versioned(&value) {
            let payload: ChartSettingsJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidData(format!(
                        "failed to parse chart settings contract v1: {e}"
                    ))
                })?;
            if payload.schema_version != CHART_SETTINGS_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported chart settings schema version: {}",
                    payload.schema_version
                )));
            }
            payload.settings
        } else {
            serde_json::from_value::<ChartSettings>(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse chart settings json payload: {e}"))
            })?
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettingsJsonContractV1 {
    pub schema_version: u32,
    pub settings: ChartSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetJsonContractV1 {
    pub schema_version: u32,
    pub series: NamedSeries,
}

pub fn dataset_to_json_contract_v1_pretty(series: &NamedSeries) -> ChartResult<String> {
    let payload = DatasetJsonContractV1 {
        schema_version: DATASET_JSON_SCHEMA_V1,
        series: series.clone(),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        ChartError::InvalidData(format!("failed to serialize dataset contract v1: {e}"))
    })
}

/// Parses a versioned dataset contract or a bare `{name: [points]}` map.
pub fn dataset_from_json_compat_str(input: &str) -> ChartResult<NamedSeries> {
    let value = parse_json_value(input, "dataset")?;
    let series = if is_versioned(&value) {
        let payload: DatasetJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse dataset contract v1: {e}"))
        })?;
        if payload.schema_version != DATASET_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported dataset schema version: {}",
                payload.schema_version
            )));
        }
        payload.series
    } else {
        serde_json::from_value::<NamedSeries>(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse dataset json payload: {e}"))
        })?
    };

    for point in series.values().flatten() {
        point.validate()?;
    }
    Ok(series)
}

// `serde_json` is built with `preserve_order`, so object keys keep document order.
fn parse_json_value(input: &str, what: &str) -> ChartResult<serde_json::Value> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse {what} json: {e}")))
}

fn is_versioned(value: &serde_json::Value) -> bool {
    value.get("schema_version").is_some()
}
