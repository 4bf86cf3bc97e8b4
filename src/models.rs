use crate::errors::AggregationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
}

impl TimeRange {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Day => 0.3,
            Self::Week => 1.0,
            Self::Month => 4.2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub base_clicks: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductClickStat {
    pub product_id: u32,
    pub product_name: String,
    pub clicks: u64,
}

/// One aggregation outcome, replaced wholesale on every transition so
/// observers never see a half-updated record.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsResult {
    pub stats: Vec<ProductClickStat>,
    pub total_clicks: u64,
    pub is_loading: bool,
    pub error: Option<AggregationError>,
    pub generated_at: DateTime<Utc>,
}

impl AnalyticsResult {
    pub fn empty() -> Self {
        Self {
            stats: Vec::new(),
            total_clicks: 0,
            is_loading: false,
            error: None,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub range: Option<String>,
}
