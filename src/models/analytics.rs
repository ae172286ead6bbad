//! Analytics response types

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub total_volume: u64,
    /// Mean speed across all records, one decimal.
    pub average_speed: f64,
    /// Count of records at high or critical congestion.
    pub congestion_events: usize,
    pub analysis_period: String,
}

/// Mean volume for one hour of day, across all locations and days.
#[derive(Debug, Clone, Serialize)]
pub struct PeakHour {
    /// "HH:00" label.
    pub hour: String,
    pub average_volume: u32,
    /// Set when this hour's mean exceeds 1.2x the mean of all hourly means.
    pub peak_indicator: bool,
}

/// Mean volume under one weather condition, relative to the other conditions.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherImpact {
    /// Title-cased condition name.
    pub condition: String,
    pub average_volume: u32,
    /// Ratio of this condition's mean to the mean of all per-condition means.
    pub impact_factor: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trends {
    pub volume_trend: &'static str,
    pub speed_trend: &'static str,
    pub efficiency_score: f64,
}
