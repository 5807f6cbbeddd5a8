//! Listing configuration
//!
//! Loaded by the UI from an optional JSON override; every field has a default.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings for the listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingConfig {
    /// Base URL of the REST API, with trailing slash
    pub api_base_url: String,
    /// Seconds between automatic reloads of the whole listing
    pub refresh_interval_secs: u64,
    /// Notes attached to every reservation request
    pub reservation_notes: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api/".to_string(),
            refresh_interval_secs: 30,
            reservation_notes: "Sent from the web listing".to_string(),
        }
    }
}

impl ListingConfig {
    /// Parse a JSON override, keeping defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        if !config.api_base_url.ends_with('/') {
            config.api_base_url.push('/');
        }
        Ok(config)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}
