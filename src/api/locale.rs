use serde::{Deserialize, Serialize};

/// Languages the chart placeholders ship with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLocale {
    #[default]
    Vi,
    En,
}

impl ChartLocale {
    /// Parses a two-letter language code; unknown codes fall back to Vietnamese.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Self::En,
            _ => Self::Vi,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }
}

/// Display strings used when a chart cannot draw its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartMessages {
    pub no_data: String,
    pub chart_unavailable: String,
}

impl ChartMessages {
    #[must_use]
    pub fn for_locale(locale: ChartLocale) -> Self {
        let (no_data, chart_unavailable) = match locale {
            ChartLocale::Vi => ("Không có dữ liệu", "Không thể hiển thị biểu đồ"),
            ChartLocale::En => ("No data available", "Unable to display chart"),
        };
        Self {
            no_data: no_data.to_owned(),
            chart_unavailable: chart_unavailable.to_owned(),
        }
    }
}

impl Default for ChartMessages {
    fn default() -> Self {
        Self::for_locale(ChartLocale::default())
    }
}

impl From<ChartLocale> for ChartMessages {
    fn from(locale: ChartLocale) -> Self {
        Self::for_locale(locale)
    }
}
