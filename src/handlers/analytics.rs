//! Analytics handlers

use axum::extract::Query;
use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::{analytics, synthesizer};
use crate::models::{AnalyticsSummary, PeakHour, Trends, WeatherImpact};
use crate::AppResult;

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub period: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub summary: AnalyticsSummary,
    pub peak_hours: Vec<PeakHour>,
    pub weather_impact: Vec<WeatherImpact>,
    pub trends: Trends,
}

fn days_for_period(period: &str) -> u32 {
    match period {
        "7d" => 7,
        "30d" => 30,
        _ => 90,
    }
}

/// Traffic analytics and insights over a synthesized period.
pub async fn get(Query(query): Query<AnalyticsQuery>) -> AppResult<Json<AnalyticsResponse>> {
    let period = query.period.unwrap_or_else(|| "7d".to_string());

    let mut rng = rand::thread_rng();
    let records = synthesizer::generate(days_for_period(&period), &mut rng);

    let summary = analytics::summarize(&records, &period);
    let peak_hours = analytics::peak_hours(&records);
    let weather_impact = analytics::weather_impact(&records);

    let trends = Trends {
        volume_trend: if rng.gen_bool(0.5) { "increasing" } else { "stable" },
        speed_trend: if rng.gen_bool(0.5) { "improving" } else { "declining" },
        efficiency_score: (rng.gen_range(75.0..95.0) * 10.0_f64).round() / 10.0,
    };

    Ok(Json(AnalyticsResponse {
        summary,
        peak_hours,
        weather_impact,
        trends,
    }))
}
