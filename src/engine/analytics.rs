//! Aggregations over synthesized history
//!
//! Thin, allocation-light passes over a record set. All functions tolerate
//! an empty input and return empty aggregates rather than dividing by zero.

use std::collections::BTreeMap;

use chrono::Timelike;

use crate::models::{AnalyticsSummary, PeakHour, TrafficRecord, WeatherImpact};

/// How far above the mean of hourly means an hour must sit to be flagged
/// as a peak.
const PEAK_THRESHOLD: f64 = 1.2;

/// Number of peak hours reported.
const PEAK_HOUR_LIMIT: usize = 5;

/// Totals and means across the whole record set.
pub fn summarize(records: &[TrafficRecord], period: &str) -> AnalyticsSummary {
    let total_volume = records.iter().map(|r| u64::from(r.vehicle_count)).sum();
    let average_speed = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| f64::from(r.average_speed)).sum::<f64>() / records.len() as f64
    };
    let congestion_events = records
        .iter()
        .filter(|r| r.congestion_level.is_congested())
        .count();

    AnalyticsSummary {
        total_volume,
        average_speed: (average_speed * 10.0).round() / 10.0,
        congestion_events,
        analysis_period: period.to_string(),
    }
}

/// Top hours of day by mean volume, descending, at most five entries.
pub fn peak_hours(records: &[TrafficRecord]) -> Vec<PeakHour> {
    let mut by_hour: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for record in records {
        by_hour
            .entry(record.timestamp.hour())
            .or_default()
            .push(record.vehicle_count);
    }
    if by_hour.is_empty() {
        return Vec::new();
    }

    let hourly_means: Vec<(u32, f64)> = by_hour
        .iter()
        .map(|(hour, volumes)| (*hour, mean(volumes)))
        .collect();
    let overall = hourly_means.iter().map(|(_, m)| m).sum::<f64>() / hourly_means.len() as f64;

    let mut peaks: Vec<PeakHour> = hourly_means
        .into_iter()
        .map(|(hour, avg)| PeakHour {
            hour: format!("{:02}:00", hour),
            average_volume: avg as u32,
            peak_indicator: avg > overall * PEAK_THRESHOLD,
        })
        .collect();

    peaks.sort_by(|a, b| b.average_volume.cmp(&a.average_volume));
    peaks.truncate(PEAK_HOUR_LIMIT);
    peaks
}

/// Mean volume per weather condition, each related to the mean of all
/// per-condition means.
pub fn weather_impact(records: &[TrafficRecord]) -> Vec<WeatherImpact> {
    let mut by_condition: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    for record in records {
        by_condition
            .entry(record.weather_condition.as_str())
            .or_default()
            .push(record.vehicle_count);
    }
    if by_condition.is_empty() {
        return Vec::new();
    }

    let condition_means: Vec<(&str, f64)> = by_condition
        .iter()
        .map(|(condition, volumes)| (*condition, mean(volumes)))
        .collect();
    let overall = condition_means.iter().map(|(_, m)| m).sum::<f64>() / condition_means.len() as f64;

    condition_means
        .into_iter()
        .map(|(condition, avg)| WeatherImpact {
            condition: title_case(condition),
            average_volume: avg as u32,
            impact_factor: avg / overall,
        })
        .collect()
}

fn mean(volumes: &[u32]) -> f64 {
    volumes.iter().map(|v| f64::from(*v)).sum::<f64>() / volumes.len() as f64
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoadType;
    use chrono::{TimeZone, Utc};

    fn record(hour: u32, volume: u32, speed: u32, weather: &str) -> TrafficRecord {
        TrafficRecord {
            id: format!("traffic_20250101_{:02}_Test_Rd", hour),
            timestamp: Utc.with_ymd_and_hms(2025, 1, 1, hour, 0, 0).unwrap(),
            location: "Test Rd".to_string(),
            vehicle_count: volume,
            average_speed: speed,
            congestion_level: crate::engine::synthesizer::congestion_for(volume, 300.0),
            weather_condition: weather.to_string(),
            temperature: 20,
            visibility: 8,
            road_type: RoadType::Urban,
            event_nearby: false,
        }
    }

    #[test]
    fn summary_totals_and_means() {
        let records = vec![
            record(8, 500, 40, "clear"),  // critical vs base 300
            record(9, 350, 50, "clear"),  // high
            record(3, 100, 70, "cloudy"), // low
        ];

        let summary = summarize(&records, "7d");
        assert_eq!(summary.total_volume, 950);
        assert_eq!(summary.average_speed, 53.3);
        assert_eq!(summary.congestion_events, 2);
        assert_eq!(summary.analysis_period, "7d");
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let summary = summarize(&[], "30d");
        assert_eq!(summary.total_volume, 0);
        assert_eq!(summary.average_speed, 0.0);
        assert_eq!(summary.congestion_events, 0);
    }

    #[test]
    fn peak_hours_are_capped_and_sorted() {
        let records: Vec<TrafficRecord> = (0..24)
            .map(|hour| record(hour, 100 + hour * 10, 50, "clear"))
            .collect();

        let peaks = peak_hours(&records);
        assert_eq!(peaks.len(), 5);
        assert!(peaks
            .windows(2)
            .all(|w| w[0].average_volume >= w[1].average_volume));
        assert_eq!(peaks[0].hour, "23:00");
        assert_eq!(peaks[0].average_volume, 330);
    }

    #[test]
    fn peak_indicator_flags_hours_well_above_norm() {
        // Hour 8 carries four times the volume of every other hour.
        let mut records: Vec<TrafficRecord> =
            (0..24).map(|hour| record(hour, 100, 50, "clear")).collect();
        records.push(record(8, 700, 30, "clear"));

        let peaks = peak_hours(&records);
        let rush = peaks.iter().find(|p| p.hour == "08:00").unwrap();
        assert!(rush.peak_indicator);
        assert!(peaks
            .iter()
            .filter(|p| p.hour != "08:00")
            .all(|p| !p.peak_indicator));
    }

    #[test]
    fn weather_impact_relates_conditions_to_each_other() {
        let records = vec![
            record(8, 400, 40, "clear"),
            record(9, 400, 40, "clear"),
            record(10, 200, 55, "rainy"),
        ];

        let impacts = weather_impact(&records);
        assert_eq!(impacts.len(), 2);

        let clear = impacts.iter().find(|i| i.condition == "Clear").unwrap();
        let rainy = impacts.iter().find(|i| i.condition == "Rainy").unwrap();
        // Means are 400 and 200, mean of means 300.
        assert_eq!(clear.average_volume, 400);
        assert!((clear.impact_factor - 400.0 / 300.0).abs() < 1e-9);
        assert_eq!(rainy.average_volume, 200);
        assert!((rainy.impact_factor - 200.0 / 300.0).abs() < 1e-9);
    }

    #[test]
    fn single_condition_has_unit_impact() {
        let records = vec![record(8, 123, 40, "foggy")];
        let impacts = weather_impact(&records);
        assert_eq!(impacts.len(), 1);
        assert_eq!(impacts[0].condition, "Foggy");
        assert!((impacts[0].impact_factor - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_empty_aggregates() {
        assert!(peak_hours(&[]).is_empty());
        assert!(weather_impact(&[]).is_empty());
    }
}
