//! `Surfcast` - Spoken surf and weather reports for Beit Yanai
//!
//! This library provides the core functionality for a voice-assistant skill:
//! fetching marine and weather data from Open-Meteo, resolving the hour
//! closest to "now", converting units, and formatting short spoken sentences.

pub mod config;
pub mod error;
pub mod meteo;
pub mod report;
pub mod skill;
pub mod timeline;
pub mod units;

// Re-export core types for public API
pub use config::{ApiConfig, SpotConfig, SurfcastConfig};
pub use error::SurfcastError;
pub use meteo::MeteoClient;
pub use skill::{Intent, RequestEnvelope, Skill, SkillResponse};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SurfcastError>;
