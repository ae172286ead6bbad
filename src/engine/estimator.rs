//! Volume estimator
//!
//! Heuristic scoring: a fixed base volume scaled by six independent
//! multipliers, then perturbed with Gaussian noise. There are no learned
//! parameters anywhere in here.

use chrono::{Datelike, Timelike, Utc};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

use super::weights::FeatureWeights;
use crate::models::{FeatureImportance, FeatureVector, PredictionFactors, PredictionResult};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Nominal hourly volume before any scaling.
const BASE_VOLUME: f64 = 200.0;

/// Estimates never drop below this, whatever the noise draw.
const VOLUME_FLOOR: i64 = 50;

/// Noise standard deviation as a fraction of the pre-noise volume.
const NOISE_RATIO: f64 = 0.1;

/// Degraded-result values when the computation itself faults.
const FALLBACK_VOLUME: u32 = 200;
const FALLBACK_CONFIDENCE: f64 = 0.5;

// ============================================================================
// ESTIMATOR
// ============================================================================

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("invalid noise distribution: {0}")]
    Noise(#[from] rand_distr::NormalError),
}

/// Stateless volume estimator. Cheap to clone; safe to share across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct VolumeEstimator {
    weights: FeatureWeights,
}

impl VolumeEstimator {
    pub fn new(weights: FeatureWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &FeatureWeights {
        &self.weights
    }

    /// Estimate traffic volume for one feature vector.
    ///
    /// Never fails: an internal fault degrades to a fixed fallback result
    /// carrying an `error` marker instead of propagating to the caller.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        features: &FeatureVector,
        rng: &mut R,
    ) -> PredictionResult {
        match self.try_estimate(features, rng) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("estimation fault, returning degraded result: {}", e);
                PredictionResult {
                    predicted_volume: FALLBACK_VOLUME,
                    confidence: FALLBACK_CONFIDENCE,
                    feature_importance: FeatureImportance::default(),
                    factors: PredictionFactors::default(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn try_estimate<R: Rng + ?Sized>(
        &self,
        features: &FeatureVector,
        rng: &mut R,
    ) -> Result<PredictionResult, EstimateError> {
        let now = Utc::now();
        let hour = features.hour.unwrap_or_else(|| now.hour());
        let day_of_week = features
            .day_of_week
            .unwrap_or_else(|| now.weekday().num_days_from_monday());
        let weather = features.weather_condition.to_lowercase();

        let hour_m = hour_multiplier(hour);
        let day_m = day_multiplier(day_of_week);
        let weather_m = weather_multiplier(&weather);
        let temp_m = temperature_multiplier(features.temperature);
        let event_m = if features.has_special_event { 1.3 } else { 1.0 };
        let location_m = location_multiplier(&features.location_class);

        let raw_volume =
            (BASE_VOLUME * hour_m * day_m * weather_m * temp_m * event_m * location_m).trunc();

        // An extreme temperature can push the product negative, which is not
        // a valid noise scale. That is the one fault the degraded path covers.
        let noise = Normal::new(0.0, raw_volume * NOISE_RATIO)?;
        let predicted_volume = ((raw_volume + noise.sample(rng)) as i64).max(VOLUME_FLOOR) as u32;

        let w = &self.weights;
        let feature_importance = FeatureImportance {
            historical_patterns: w.historical_avg + rng.gen_range(-0.05..0.05),
            weather_conditions: w.weather_condition + w.weather_temp + rng.gen_range(-0.03..0.03),
            time_factors: w.hour_of_day + w.day_of_week + rng.gen_range(-0.02..0.02),
            special_events: w.special_events + rng.gen_range(-0.02..0.02),
        };

        Ok(PredictionResult {
            predicted_volume,
            confidence: confidence(hour, day_of_week, &weather),
            feature_importance,
            factors: PredictionFactors {
                hour_impact: round2(hour_m),
                day_impact: round2(day_m),
                weather_impact: round2(weather_m),
                temperature_impact: round2(temp_m),
                event_impact: round2(event_m),
                location_impact: round2(location_m),
            },
            error: None,
        })
    }
}

// ============================================================================
// MULTIPLIERS
// ============================================================================

/// Rush hours carry the most traffic, nights the least.
fn hour_multiplier(hour: u32) -> f64 {
    match hour {
        7..=9 | 17..=19 => 1.8,
        10..=16 => 1.2,
        20..=22 => 1.1,
        _ => 0.6,
    }
}

fn day_multiplier(day_of_week: u32) -> f64 {
    if day_of_week < 5 {
        1.3
    } else if day_of_week == 5 {
        1.5
    } else {
        0.8
    }
}

/// Expects an already-lowercased condition; unknown conditions are neutral.
fn weather_multiplier(condition: &str) -> f64 {
    match condition {
        "clear" => 1.0,
        "cloudy" => 0.95,
        "rainy" => 0.75,
        "snowy" => 0.5,
        "foggy" => 0.65,
        _ => 1.0,
    }
}

/// Traffic thins out once temperatures leave the comfortable band.
fn temperature_multiplier(temperature: f64) -> f64 {
    if (-10.0..=30.0).contains(&temperature) {
        1.0
    } else if temperature > 30.0 {
        0.9 - (temperature - 30.0) * 0.01
    } else {
        0.9 - (temperature + 10.0).abs() * 0.02
    }
}

/// Unknown classes are neutral.
fn location_multiplier(location_class: &str) -> f64 {
    match location_class {
        "highway" => 1.5,
        "urban" => 1.2,
        "suburban" => 1.0,
        "rural" => 0.7,
        _ => 1.0,
    }
}

/// Mean of three reliability flags, rounded to three decimals.
fn confidence(hour: u32, day_of_week: u32, weather: &str) -> f64 {
    let time_reliability = if (6..=22).contains(&hour) { 0.9 } else { 0.7 };
    let day_reliability = if day_of_week < 5 { 0.85 } else { 0.75 };
    let weather_reliability = if matches!(weather, "clear" | "cloudy") {
        0.8
    } else {
        0.6
    };

    let mean: f64 = (time_reliability + day_reliability + weather_reliability) / 3.0;
    (mean * 1000.0).round() / 1000.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn estimator() -> VolumeEstimator {
        VolumeEstimator::new(FeatureWeights::default())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Wednesday 8am, clear, 20°C, urban, no event.
    fn rush_hour_features() -> FeatureVector {
        FeatureVector {
            hour: Some(8),
            day_of_week: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn rush_hour_volume_stays_near_raw_estimate() {
        let estimator = estimator();
        let mut rng = rng();

        // 200 * 1.8 * 1.3 * 1.0 * 1.0 * 1.0 * 1.2 = 561.6, truncated to 561.
        // Noise sigma is 56.1; five sigmas either side bounds every draw.
        for _ in 0..100 {
            let result = estimator.estimate(&rush_hour_features(), &mut rng);
            assert!(result.error.is_none());
            assert!(result.predicted_volume >= 280);
            assert!(result.predicted_volume <= 842);
        }
    }

    #[test]
    fn volume_never_drops_below_floor() {
        let estimator = estimator();
        let mut rng = rng();

        // Night, weekend, snow, hot, rural: raw volume is 26 before noise.
        let features = FeatureVector {
            hour: Some(3),
            day_of_week: Some(6),
            temperature: 35.0,
            weather_condition: "snowy".to_string(),
            location_class: "rural".to_string(),
            ..Default::default()
        };

        for _ in 0..100 {
            let result = estimator.estimate(&features, &mut rng);
            assert!(result.predicted_volume >= 50);
        }
    }

    #[test]
    fn confidence_is_mean_of_reliability_flags() {
        let estimator = estimator();
        let result = estimator.estimate(&rush_hour_features(), &mut rng());
        // (0.9 + 0.85 + 0.8) / 3
        assert_eq!(result.confidence, 0.85);
    }

    #[test]
    fn confidence_stays_in_unit_interval() {
        let estimator = estimator();
        let mut rng = rng();

        for hour in [0, 5, 8, 13, 21, 23] {
            for day in 0..7 {
                let features = FeatureVector {
                    hour: Some(hour),
                    day_of_week: Some(day),
                    weather_condition: "foggy".to_string(),
                    ..Default::default()
                };
                let result = estimator.estimate(&features, &mut rng);
                assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
            }
        }
    }

    #[test]
    fn weather_lookup_ignores_case() {
        let estimator = estimator();
        let mut rng = rng();

        let upper = FeatureVector {
            weather_condition: "RAINY".to_string(),
            ..rush_hour_features()
        };
        let lower = FeatureVector {
            weather_condition: "rainy".to_string(),
            ..rush_hour_features()
        };

        let a = estimator.estimate(&upper, &mut rng);
        let b = estimator.estimate(&lower, &mut rng);
        assert_eq!(a.factors.weather_impact, 0.75);
        assert_eq!(b.factors.weather_impact, 0.75);
    }

    #[test]
    fn unknown_location_class_is_neutral() {
        let estimator = estimator();
        let features = FeatureVector {
            location_class: "spaceport".to_string(),
            ..rush_hour_features()
        };

        let result = estimator.estimate(&features, &mut rng());
        assert_eq!(result.factors.location_impact, 1.0);
    }

    #[test]
    fn unknown_weather_is_neutral() {
        let estimator = estimator();
        let features = FeatureVector {
            weather_condition: "hailstorm".to_string(),
            ..rush_hour_features()
        };

        let result = estimator.estimate(&features, &mut rng());
        assert_eq!(result.factors.weather_impact, 1.0);
    }

    #[test]
    fn extreme_temperature_degrades_instead_of_panicking() {
        let estimator = estimator();
        // 0.9 - (500 - 30) * 0.01 is far below zero, so the multiplier
        // product turns negative and the noise scale is rejected.
        let features = FeatureVector {
            temperature: 500.0,
            ..rush_hour_features()
        };

        let result = estimator.estimate(&features, &mut rng());
        assert_eq!(result.predicted_volume, 200);
        assert_eq!(result.confidence, 0.5);
        assert!(result.error.is_some());
    }

    #[test]
    fn importance_groups_stay_within_jitter_bounds() {
        let estimator = estimator();
        let mut rng = rng();

        // Base weights plus the documented jitter, with float slack.
        for _ in 0..100 {
            let imp = estimator
                .estimate(&rush_hour_features(), &mut rng)
                .feature_importance;
            assert!(imp.historical_patterns >= 0.049 && imp.historical_patterns <= 0.151);
            assert!(imp.weather_conditions >= 0.239 && imp.weather_conditions <= 0.301);
            assert!(imp.time_factors >= 0.509 && imp.time_factors <= 0.551);
            assert!(imp.special_events >= 0.079 && imp.special_events <= 0.121);
        }
    }

    #[test]
    fn factors_are_rounded_for_display() {
        let estimator = estimator();
        let features = FeatureVector {
            temperature: 40.0,
            ..rush_hour_features()
        };

        let result = estimator.estimate(&features, &mut rng());
        // 0.9 - 10 * 0.01
        assert_eq!(result.factors.temperature_impact, 0.8);
        assert_eq!(result.factors.hour_impact, 1.8);
        assert_eq!(result.factors.event_impact, 1.0);
    }
}
