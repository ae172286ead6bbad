//! HTTP handlers

pub mod alerts;
pub mod analytics;
pub mod health;
pub mod model;
pub mod predictions;
pub mod traffic_data;

use crate::AppError;

/// JSON 404 for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
