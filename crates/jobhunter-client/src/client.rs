//! JobHunter HTTP client.

use crate::error::ApiError;
use crate::types::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

const SIGNUP_FALLBACK: &str = "Failed to sign up";
const STATUS_FALLBACK: &str = "Failed to check status";
const HEALTH_FALLBACK: &str = "Failed to check health";

/// JobHunter backend client.
///
/// Every call issues exactly one request. Nothing is retried or cached, and
/// calls share no state beyond the underlying connection pool.
#[derive(Clone, Debug)]
pub struct JobHunterClient {
    client: Client,
    base_url: String,
}

impl JobHunterClient {
    /// Create a new client.
    ///
    /// An empty `base_url` produces relative request URLs, which fail at
    /// request time with [`ApiError::Http`] outside a browser origin.
    /// Without a `timeout` the transport default applies.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register interest in job alerts for `email`.
    #[instrument(skip(self, email, job_keywords, country), fields(keyword_count = job_keywords.len()))]
    pub async fn register_interest(
        &self,
        email: &str,
        job_keywords: &[String],
        country: &str,
    ) -> Result<ApiResponse, ApiError> {
        let request = SignupRequest {
            email: email.to_string(),
            job_keywords: job_keywords.to_vec(),
            country: country.to_string(),
        };

        self.sign_up(&request).await
    }

    /// Submit a prepared signup request.
    #[instrument(skip(self, request))]
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/signup"))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let body = self.handle_response(response, SIGNUP_FALLBACK).await?;
        debug!("Signup accepted");
        Ok(body)
    }

    /// Check the trial status registered for `email`.
    #[instrument(skip(self, email))]
    pub async fn check_status(&self, email: &str) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/status?email={}", self.base_url, encode(email)))
            .send()
            .await?;

        self.handle_response(response, STATUS_FALLBACK).await
    }

    /// Check backend and database health.
    #[instrument(skip(self))]
    pub async fn check_health(&self) -> Result<ApiResponse, ApiError> {
        let response = self.client.get(self.url("/api/health")).send().await?;

        self.handle_response(response, HEALTH_FALLBACK).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Pass a 2xx JSON body through, or turn the error body into an [`ApiError`].
    async fn handle_response(
        &self,
        response: Response,
        fallback: &str,
    ) -> Result<ApiResponse, ApiError> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let error = error_from_body(status.as_u16(), &body, fallback);
        warn!("Request failed: {} - {}", status, error);
        Err(error)
    }
}

fn error_from_body(status: u16, body: &[u8], fallback: &str) -> ApiError {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => ApiError::Api {
            status,
            message: error_message(&value).unwrap_or_else(|| fallback.to_string()),
        },
        Err(e) => {
            debug!("Error body is not JSON: {}", e);
            ApiError::MalformedErrorBody {
                status,
                message: fallback.to_string(),
            }
        }
    }
}

/// The `error` field of an error body, unless it is missing or falsy.
fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_string() {
        let body = json!({"error": "User not found"});
        assert_eq!(error_message(&body), Some("User not found".into()));
    }

    #[test]
    fn test_error_message_falsy_values() {
        for value in [json!(null), json!(""), json!(false), json!(0)] {
            assert_eq!(error_message(&json!({ "error": value })), None);
        }
        assert_eq!(error_message(&json!({"message": "nope"})), None);
        assert_eq!(error_message(&json!(["error"])), None);
    }

    #[test]
    fn test_error_message_non_string() {
        assert_eq!(error_message(&json!({"error": 42})), Some("42".into()));
        assert_eq!(
            error_message(&json!({"error": {"code": "X"}})),
            Some(r#"{"code":"X"}"#.into())
        );
    }

    #[test]
    fn test_error_from_html_body() {
        let err = error_from_body(502, b"<html>Bad Gateway</html>", SIGNUP_FALLBACK);
        assert!(matches!(
            err,
            ApiError::MalformedErrorBody { status: 502, .. }
        ));
        assert_eq!(err.to_string(), "Failed to sign up");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = JobHunterClient::new("http://localhost:5000/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/health"), "http://localhost:5000/api/health");
    }
}
