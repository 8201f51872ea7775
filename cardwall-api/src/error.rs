//! Error type for backend requests

use cardwall_board::BoardError;
use thiserror::Error;

/// Errors from talking to the board backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection failure
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// 401, the session cookie is missing or expired
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// 404
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The configured server address is unusable
    #[error("invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// Response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Convert into the board error reported for `operation`
    pub fn into_board_error(self, operation: &str) -> BoardError {
        BoardError::backend(operation, self.to_string())
    }
}

/// Result type for backend requests
pub type ApiResult<T> = Result<T, ApiError>;

/// Pull a human-readable message out of an error body.
///
/// Tries `error`, then `message`, then falls back to the raw body.
pub(crate) fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = json.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.to_string()
}
