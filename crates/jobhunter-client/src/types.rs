//! JobHunter API types.

use crate::error::ApiError;
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Success payload, passed through from the backend without validation.
pub type ApiResponse = serde_json::Value;

/// Signup request body.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub job_keywords: Vec<String>,
    pub country: String,
}

/// Acknowledgement returned by `/api/signup`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupAck {
    pub message: String,
    pub trial_end: String,
}

impl SignupAck {
    pub fn trial_end_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.trial_end)
    }
}

/// Trial state returned by `/api/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrialStatus {
    pub trial_active: bool,
    pub trial_end: String,
}

impl TrialStatus {
    pub fn trial_end_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.trial_end)
    }
}

/// Health report returned by `/api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub status: String,

    /// Database connectivity, when reported
    #[serde(default)]
    pub database: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Decode an opaque success payload into one of the typed views.
pub fn decode<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ApiError> {
    Ok(serde_json::from_value(response)?)
}

/// Parse a backend timestamp (ISO-8601, UTC, no offset).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    value.parse::<NaiveDateTime>().ok()
}
