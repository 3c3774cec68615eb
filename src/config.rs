//! Configuration for the `Surfcast` skill
//!
//! The spot and API settings are constructed once at startup and passed by
//! parameter into every component that needs them. There is no file or
//! environment based configuration and no process-wide mutable state.

use serde::{Deserialize, Serialize};

use crate::error::SurfcastError;
use crate::Result;

/// The surf spot the skill reports on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotConfig {
    /// Display name used in spoken sentences
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Outbound weather API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the Open-Meteo marine API
    #[serde(default = "default_marine_base_url")]
    pub marine_base_url: String,
    /// Base URL for the Open-Meteo forecast API
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Root configuration for the skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfcastConfig {
    pub spot: SpotConfig,
    pub api: ApiConfig,
}

fn default_marine_base_url() -> String {
    "https://marine-api.open-meteo.com/v1/marine".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl SpotConfig {
    /// The fixed spot this skill was built for
    #[must_use]
    pub fn beit_yanai() -> Self {
        Self {
            name: "Beit Yanai".to_string(),
            latitude: 32.38,
            longitude: 34.86,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            marine_base_url: default_marine_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for SurfcastConfig {
    fn default() -> Self {
        Self {
            spot: SpotConfig::beit_yanai(),
            api: ApiConfig::default(),
        }
    }
}

impl SurfcastConfig {
    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.spot.name.trim().is_empty() {
            return Err(SurfcastError::validation("Spot name cannot be empty"));
        }

        if !(-90.0..=90.0).contains(&self.spot.latitude) {
            return Err(SurfcastError::validation(format!(
                "Latitude {} is outside the range -90 to 90",
                self.spot.latitude
            )));
        }

        if !(-180.0..=180.0).contains(&self.spot.longitude) {
            return Err(SurfcastError::validation(format!(
                "Longitude {} is outside the range -180 to 180",
                self.spot.longitude
            )));
        }

        if self.api.timeout_seconds == 0 {
            return Err(SurfcastError::validation("Request timeout cannot be zero"));
        }

        for url in [&self.api.marine_base_url, &self.api.forecast_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(SurfcastError::validation(format!(
                    "API base URL must be a valid HTTP or HTTPS URL, got '{url}'"
                )));
            }
        }

        Ok(())
    }
}
