//! Prediction handlers

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::handlers::model::MODEL_ACCURACY;
use crate::models::{FeatureImportance, FeatureVector, PredictionFactors};
use crate::{AppError, AppResult, AppState};

/// Upper bound on the forecast horizon, one week of hourly estimates.
const MAX_HOURS_AHEAD: u32 = 168;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PredictionsRequest {
    pub location: Option<String>,
    pub hours_ahead: Option<u32>,
    pub weather_forecast: WeatherForecast,
    pub special_events: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WeatherForecast {
    pub temperature: Option<f64>,
    pub condition: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HourlyPrediction {
    pub timestamp: DateTime<Utc>,
    pub predicted_volume: u32,
    pub confidence: f64,
    pub factors: PredictionFactors,
    pub feature_importance: FeatureImportance,
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    #[serde(rename = "type")]
    pub model_type: &'static str,
    pub accuracy: f64,
    pub last_trained: DateTime<Utc>,
    pub features_used: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct PredictionsResponse {
    pub predictions: Vec<HourlyPrediction>,
    pub model_info: ModelInfo,
}

/// Hourly volume forecasts starting now.
///
/// The body is optional; every field has a default, matching the estimator's
/// lenient input contract.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<PredictionsRequest>>,
) -> AppResult<Json<PredictionsResponse>> {
    let Json(request) = body.unwrap_or_default();

    let location = request.location.unwrap_or_else(|| "urban".to_string());
    let hours_ahead = request.hours_ahead.unwrap_or(24);
    if hours_ahead > MAX_HOURS_AHEAD {
        return Err(AppError::ValidationError(format!(
            "hours_ahead must be at most {}",
            MAX_HOURS_AHEAD
        )));
    }

    let temperature = request.weather_forecast.temperature.unwrap_or(20.0);
    let condition = request
        .weather_forecast
        .condition
        .unwrap_or_else(|| "clear".to_string());
    let has_special_event = !request.special_events.is_empty();

    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let mut predictions = Vec::with_capacity(hours_ahead as usize);

    for i in 0..hours_ahead {
        let future_time = now + Duration::hours(i64::from(i));
        let features = FeatureVector {
            hour: Some(future_time.hour()),
            day_of_week: Some(future_time.weekday().num_days_from_monday()),
            temperature,
            weather_condition: condition.clone(),
            has_special_event,
            location_class: location.clone(),
        };

        let result = state.estimator.estimate(&features, &mut rng);
        predictions.push(HourlyPrediction {
            timestamp: future_time,
            predicted_volume: result.predicted_volume,
            confidence: result.confidence,
            factors: result.factors,
            feature_importance: result.feature_importance,
        });
    }

    Ok(Json(PredictionsResponse {
        predictions,
        model_info: ModelInfo {
            model_type: "ensemble",
            accuracy: MODEL_ACCURACY,
            last_trained: now - Duration::hours(2),
            features_used: state.estimator.weights().feature_names().to_vec(),
        },
    }))
}
