//! Synthesized traffic records

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Four-tier congestion classification relative to a location's base volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl CongestionLevel {
    /// High or critical levels count as congestion events in analytics.
    pub fn is_congested(self) -> bool {
        matches!(self, CongestionLevel::High | CongestionLevel::Critical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoadType {
    Highway,
    Urban,
}

/// One hour of synthetic traffic at one location.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficRecord {
    /// Unique per (hour, location) within one generation run.
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub vehicle_count: u32,
    /// km/h, never below 20.
    pub average_speed: u32,
    pub congestion_level: CongestionLevel,
    pub weather_condition: String,
    /// °C
    pub temperature: i32,
    pub visibility: u32,
    pub road_type: RoadType,
    pub event_nearby: bool,
}
