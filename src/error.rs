//! Error types and handling for the `Surfcast` skill

use thiserror::Error;

/// Spoken apology used when surf or forecast data cannot be retrieved.
pub const REPORT_UNAVAILABLE: &str =
    "Sorry, I was unable to retrieve the surf report right now. Please try again later.";

/// Spoken apology used for any other failure during dispatch.
pub const GENERIC_APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Main error type for the `Surfcast` skill
#[derive(Error, Debug)]
pub enum SurfcastError {
    /// Outbound request failed: transport error, non-2xx status, or a
    /// payload that did not decode into the expected shape
    #[error("Weather API request failed: {source}")]
    Fetch {
        #[from]
        source: reqwest::Error,
    },

    /// Fetch succeeded but the payload is unusable: missing fields, empty
    /// time axis, or value arrays shorter than the time axis
    #[error("Upstream data error: {message}")]
    Upstream { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl SurfcastError {
    /// Create a new upstream-data error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get the spoken sentence presented to the user for this error.
    ///
    /// Data failures collapse to the surf-report apology; everything else
    /// collapses to the generic apology. Raw errors never reach the user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            SurfcastError::Fetch { .. } | SurfcastError::Upstream { .. } => REPORT_UNAVAILABLE,
            SurfcastError::Validation { .. } => GENERIC_APOLOGY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let upstream_err = SurfcastError::upstream("empty time axis");
        assert!(matches!(upstream_err, SurfcastError::Upstream { .. }));

        let validation_err = SurfcastError::validation("latitude out of range");
        assert!(matches!(validation_err, SurfcastError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let upstream_err = SurfcastError::upstream("test");
        assert_eq!(upstream_err.user_message(), REPORT_UNAVAILABLE);

        let validation_err = SurfcastError::validation("test");
        assert_eq!(validation_err.user_message(), GENERIC_APOLOGY);
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = SurfcastError::upstream("wave_height shorter than time axis");
        assert!(err.to_string().contains("wave_height shorter than time axis"));
    }
}
