//! Request pipeline error taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a request issued through the [`crate::ApiClient`].
///
/// Nothing is swallowed at this layer: the 401 path performs its
/// session-clearing side effect and then still surfaces as
/// [`ApiError::Unauthorized`] so the calling view can show a message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the credentials; the session (if any) has
    /// already been invalidated by the time the caller sees this. The
    /// message is the server's, so a rejected login can still show
    /// "Invalid credentials" on the open form.
    #[error("authorization failed: {message}")]
    Unauthorized { message: String },

    /// Any other non-success status. The message is the server's
    /// `message` field when present, otherwise a generic fallback.
    #[error("request failed ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// No usable response at all (connection refused, timeout, …).
    /// Never retried automatically.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response arrived but did not match the expected envelope.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized { message } => message.clone(),
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}
