//! Synthetic history generator
//!
//! Produces hourly traffic records for the monitored locations with
//! plausible daily shape: rush-hour peaks, quiet nights, lighter weekends.
//! Each record is independent; the caller owns the random source.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{CongestionLevel, RoadType, TrafficRecord};

/// Monitored locations and their nominal hourly volumes.
pub const LOCATIONS: [(&str, f64); 5] = [
    ("Highway A1", 400.0),
    ("Downtown Main St", 300.0),
    ("Airport Road", 350.0),
    ("Industrial Zone", 200.0),
    ("Residential Area", 150.0),
];

/// Conditions drawn for synthetic records.
const WEATHER_CONDITIONS: [&str; 4] = ["clear", "cloudy", "rainy", "foggy"];

/// Weekend traffic runs at 70% of the weekday level.
const WEEKEND_FACTOR: f64 = 0.7;

/// Generate `days` of hourly records for every monitored location, ending
/// at the current hour, ascending by timestamp.
pub fn generate<R: Rng + ?Sized>(days: u32, rng: &mut R) -> Vec<TrafficRecord> {
    let now = Utc::now();
    let total_hours = i64::from(days) * 24;
    let mut records = Vec::with_capacity(total_hours as usize * LOCATIONS.len());

    for i in 0..total_hours {
        let timestamp = now - Duration::hours(total_hours - i);
        for (location, base_volume) in LOCATIONS {
            records.push(synthesize_record(timestamp, location, base_volume, rng));
        }
    }

    records
}

fn synthesize_record<R: Rng + ?Sized>(
    timestamp: DateTime<Utc>,
    location: &str,
    base_volume: f64,
    rng: &mut R,
) -> TrafficRecord {
    let hour = timestamp.hour();
    let day_of_week = timestamp.weekday().num_days_from_monday();

    let mut volume_multiplier = match hour {
        7..=9 | 17..=19 => 1.6,
        10..=16 => 1.1,
        _ => 0.4,
    };
    if day_of_week >= 5 {
        volume_multiplier *= WEEKEND_FACTOR;
    }

    let vehicle_count = (base_volume * volume_multiplier * rng.gen_range(0.8..1.2)) as u32;

    // Speed drops as the road fills up, with some jitter, floored at 20.
    let speed = 80.0 - (f64::from(vehicle_count) / base_volume) * 30.0 + rng.gen_range(-10.0..10.0);
    let average_speed = (speed as i64).max(20) as u32;

    TrafficRecord {
        id: format!(
            "traffic_{}_{}",
            timestamp.format("%Y%m%d_%H"),
            location.replace(' ', "_")
        ),
        timestamp,
        location: location.to_string(),
        vehicle_count,
        average_speed,
        congestion_level: congestion_for(vehicle_count, base_volume),
        weather_condition: WEATHER_CONDITIONS
            .choose(rng)
            .copied()
            .unwrap_or("clear")
            .to_string(),
        temperature: rng.gen_range(5.0..35.0) as i32,
        visibility: rng.gen_range(1.0..10.0) as u32,
        road_type: if location.contains("Highway") {
            RoadType::Highway
        } else {
            RoadType::Urban
        },
        event_nearby: rng.gen_bool(0.2),
    }
}

/// Congestion tier of a volume relative to the location's nominal volume.
pub fn congestion_for(vehicle_count: u32, base_volume: f64) -> CongestionLevel {
    let volume = f64::from(vehicle_count);
    if volume > base_volume * 1.4 {
        CongestionLevel::Critical
    } else if volume > base_volume * 1.1 {
        CongestionLevel::High
    } else if volume > base_volume * 0.8 {
        CongestionLevel::Medium
    } else {
        CongestionLevel::Low
    }
}

// ============================================================================
// TESTS
// ============================================================================
