//! Prediction input features

use serde::Deserialize;

/// Input features for a single volume estimate.
///
/// Every field may be omitted on the wire. Missing fields fall back to
/// documented defaults: the current UTC hour/weekday, 20°C, clear weather,
/// no special event, urban location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeatureVector {
    /// Hour of day, 0-23. `None` means "now".
    pub hour: Option<u32>,
    /// Day of week, 0 = Monday. `None` means "today".
    pub day_of_week: Option<u32>,
    /// Ambient temperature in °C.
    pub temperature: f64,
    /// Free-form condition name, matched case-insensitively.
    pub weather_condition: String,
    pub has_special_event: bool,
    /// Road class: highway, urban, suburban or rural. Unknown classes
    /// are accepted and scored neutrally.
    pub location_class: String,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            hour: None,
            day_of_week: None,
            temperature: 20.0,
            weather_condition: "clear".to_string(),
            has_special_event: false,
            location_class: "urban".to_string(),
        }
    }
}
