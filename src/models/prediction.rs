//! Prediction result types

use serde::Serialize;

/// The six multiplicative factors behind one estimate, rounded for display.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PredictionFactors {
    pub hour_impact: f64,
    pub day_impact: f64,
    pub weather_impact: f64,
    pub temperature_impact: f64,
    pub event_impact: f64,
    pub location_impact: f64,
}

/// Reported weighting of the input groups for a single prediction.
///
/// Display-only: these are the configured base weights with a little
/// per-request jitter, not learned values.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FeatureImportance {
    pub historical_patterns: f64,
    pub weather_conditions: f64,
    pub time_factors: f64,
    pub special_events: f64,
}

/// Outcome of one volume estimate.
///
/// Always well-formed: a degraded result (fallback volume, `error` set)
/// stands in when the computation itself faults.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub predicted_volume: u32,
    pub confidence: f64,
    pub feature_importance: FeatureImportance,
    pub factors: PredictionFactors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
