//! Open-Meteo client for marine and weather data
//!
//! Issues plain GET requests against the marine and forecast endpoints with
//! an explicit timeout. Each fetch either yields a fully decoded payload or
//! a single fetch error; there are no partial results and no retries.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::SurfcastConfig;
use crate::Result;

/// Hourly wave heights from the marine API
#[derive(Debug, Clone, Deserialize)]
pub struct MarineResponse {
    pub hourly: MarineHourly,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarineHourly {
    pub time: Vec<String>,
    pub wave_height: Vec<f64>,
}

/// Hourly wind speed and direction from the forecast API
#[derive(Debug, Clone, Deserialize)]
pub struct WindResponse {
    pub hourly: WindHourly,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindHourly {
    pub time: Vec<String>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Vec<f64>,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: Vec<f64>,
}

/// Daily forecast from the forecast API, first entry is today
#[derive(Debug, Clone, Deserialize)]
pub struct DailyResponse {
    pub daily: DailySeries,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weather_code: Vec<i64>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<f64>,
    #[serde(rename = "precipitation_probability_max")]
    pub precipitation_probability: Vec<f64>,
    #[serde(rename = "wind_speed_10m_max")]
    pub wind_speed_max: Vec<f64>,
}

/// HTTP client for the Open-Meteo marine and forecast endpoints
pub struct MeteoClient {
    client: reqwest::Client,
    marine_url: String,
    wind_url: String,
    daily_url: String,
}

impl MeteoClient {
    /// Create a new client with the request URLs baked from the spot config.
    pub fn new(config: &SurfcastConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .user_agent(concat!("surfcast/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let lat = config.spot.latitude;
        let lon = config.spot.longitude;

        let marine_url = format!(
            "{}?latitude={lat}&longitude={lon}&hourly=wave_height&timezone=auto",
            config.api.marine_base_url
        );
        let wind_url = format!(
            "{}?latitude={lat}&longitude={lon}&hourly=wind_speed_10m,wind_direction_10m&timezone=auto",
            config.api.forecast_base_url
        );
        let daily_url = format!(
            "{}?latitude={lat}&longitude={lon}&daily=weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max,wind_speed_10m_max&timezone=auto",
            config.api.forecast_base_url
        );

        Ok(Self {
            client,
            marine_url,
            wind_url,
            daily_url,
        })
    }

    /// Fetch hourly wave heights for the spot.
    #[instrument(skip(self))]
    pub async fn fetch_wave_heights(&self) -> Result<MarineResponse> {
        debug!("GET {}", self.marine_url);
        let response = self
            .client
            .get(&self.marine_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch hourly wind speed and direction for the spot.
    #[instrument(skip(self))]
    pub async fn fetch_wind(&self) -> Result<WindResponse> {
        debug!("GET {}", self.wind_url);
        let response = self
            .client
            .get(&self.wind_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch the daily forecast for the spot.
    #[instrument(skip(self))]
    pub async fn fetch_daily_forecast(&self) -> Result<DailyResponse> {
        debug!("GET {}", self.daily_url);
        let response = self
            .client
            .get(&self.daily_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
