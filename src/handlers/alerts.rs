//! Alert handlers

use axum::Json;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

use crate::models::Alert;
use crate::AppResult;

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
    pub total_active_alerts: usize,
    pub last_updated: DateTime<Utc>,
}

/// Current traffic alerts. Alerts are canned and surface probabilistically,
/// standing in for a real detection pipeline.
pub async fn list() -> AppResult<Json<AlertsResponse>> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let mut alerts = Vec::new();

    if rng.gen_bool(0.3) {
        alerts.push(Alert {
            id: "alert_001",
            alert_type: "critical_congestion",
            severity: "high",
            location: "Highway A1",
            message: "Critical congestion detected - 85% above normal volume",
            timestamp: now,
            estimated_duration: "45 minutes",
            recommended_action: "Consider alternative routes",
        });
    }

    if rng.gen_bool(0.2) {
        alerts.push(Alert {
            id: "alert_002",
            alert_type: "weather_impact",
            severity: "medium",
            location: "Downtown Area",
            message: "Heavy rain expected to reduce traffic flow by 20%",
            timestamp: now + Duration::hours(2),
            estimated_duration: "2 hours",
            recommended_action: "Adjust signal timing for weather conditions",
        });
    }

    if rng.gen_bool(0.1) {
        alerts.push(Alert {
            id: "alert_003",
            alert_type: "maintenance",
            severity: "low",
            location: "Airport Road",
            message: "Scheduled maintenance will close one lane",
            timestamp: now + Duration::days(1),
            estimated_duration: "4 hours",
            recommended_action: "Plan traffic diversion routes",
        });
    }

    Ok(Json(AlertsResponse {
        total_active_alerts: alerts.len(),
        alerts,
        last_updated: now,
    }))
}
