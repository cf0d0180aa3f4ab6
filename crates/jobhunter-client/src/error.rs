//! JobHunter client errors.

use thiserror::Error;

/// A failed request.
///
/// Every variant means the request did not produce a success payload. The
/// `Display` output of the backend-facing variants is exactly the message
/// reported by the backend (or the operation's fallback message).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response with a JSON body.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Non-2xx response whose body could not be parsed as JSON.
    #[error("{message}")]
    MalformedErrorBody { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Human-readable message for display.
    pub fn message(&self) -> String {
        match self {
            ApiError::Api { message, .. } | ApiError::MalformedErrorBody { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    /// HTTP status of the failed response, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } | ApiError::MalformedErrorBody { status, .. } => {
                Some(*status)
            }
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Json(_) => None,
        }
    }
}
