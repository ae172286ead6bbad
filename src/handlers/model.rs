//! Model lifecycle handlers

use axum::Json;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::AppResult;

/// Headline accuracy reported for the current model build.
pub const MODEL_ACCURACY: f64 = 94.2;

#[derive(Debug, Serialize)]
pub struct TrainingInfo {
    pub data_points_used: u32,
    pub training_time_seconds: f64,
    pub old_accuracy: f64,
    pub new_accuracy: f64,
    pub improvement: f64,
    pub retrained_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RetrainResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub training_info: TrainingInfo,
}

/// Simulate a retraining run. There is no real model behind this; the
/// response just mimics the shape a training pipeline would report.
pub async fn retrain() -> AppResult<Json<RetrainResponse>> {
    let mut rng = rand::thread_rng();

    let new_accuracy = (MODEL_ACCURACY + rng.gen_range(0.1..2.0)).min(99.0);

    Ok(Json(RetrainResponse {
        status: "success",
        message: "Model retrained successfully",
        training_info: TrainingInfo {
            data_points_used: rng.gen_range(10_000..50_000),
            training_time_seconds: (rng.gen_range(30.0..120.0) * 10.0_f64).round() / 10.0,
            old_accuracy: MODEL_ACCURACY,
            new_accuracy: (new_accuracy * 100.0).round() / 100.0,
            improvement: ((new_accuracy - MODEL_ACCURACY) * 100.0).round() / 100.0,
            retrained_at: Utc::now(),
        },
    }))
}
