//! Traffic data handler

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::engine::synthesizer;
use crate::models::TrafficRecord;
use crate::AppResult;

/// Records returned per response; synthesis can produce far more.
const MAX_RECORDS: usize = 100;

#[derive(Debug, Deserialize)]
pub struct TrafficDataQuery {
    pub location: Option<String>,
    pub time_range: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrafficDataResponse {
    pub data: Vec<TrafficRecord>,
    pub total_records: usize,
    pub time_range: String,
    pub location_filter: String,
}

/// Days of history to synthesize for a requested range token. Sub-day
/// ranges still need a full day; unknown tokens fall back to 24h.
fn days_for_range(time_range: &str) -> u32 {
    match time_range {
        "7d" => 7,
        "30d" => 30,
        _ => 1,
    }
}

/// Current traffic data, newest `MAX_RECORDS` records of the requested range.
pub async fn get(Query(query): Query<TrafficDataQuery>) -> AppResult<Json<TrafficDataResponse>> {
    let location = query.location.unwrap_or_else(|| "all".to_string());
    let time_range = query.time_range.unwrap_or_else(|| "24h".to_string());

    let mut rng = rand::thread_rng();
    let mut data = synthesizer::generate(days_for_range(&time_range), &mut rng);

    if location != "all" {
        let needle = location.to_lowercase();
        data.retain(|record| record.location.to_lowercase().contains(&needle));
    }

    data.sort_by_key(|record| record.timestamp);
    let total_records = data.len();
    if total_records > MAX_RECORDS {
        data.drain(..total_records - MAX_RECORDS);
    }

    Ok(Json(TrafficDataResponse {
        data,
        total_records,
        time_range,
        location_filter: location,
    }))
}
