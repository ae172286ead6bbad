//! Traffic alert types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single alert in the feed.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub alert_type: &'static str,
    pub severity: &'static str,
    pub location: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
    pub estimated_duration: &'static str,
    pub recommended_action: &'static str,
}
