use std::fmt;

use async_trait::async_trait;

use super::types::{CorrectionResponse, ErrorPayload, MessageRequest, Mode};

/// Errors that can occur while talking to the correction service.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteError {
    /// Client misconfigured (bad base URL, unusable header value).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, payload: ErrorPayload },
    /// The service answered 2xx but the body was not what we expected.
    Parse(String),
}

impl RemoteError {
    /// Human-readable message for the user: the payload's `error`, then its
    /// `message`, then `fallback`. Transport-level errors use their own text.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            RemoteError::Api { payload, .. } => payload.best_message(),
            RemoteError::Config(msg) | RemoteError::Network(msg) | RemoteError::Parse(msg) => {
                Some(msg.as_str()).filter(|m| !m.is_empty())
            }
        };
        message.unwrap_or(fallback).to_string()
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Config(msg) => write!(f, "config error: {msg}"),
            RemoteError::Network(msg) => write!(f, "network error: {msg}"),
            RemoteError::Api { status, payload } => write!(
                f,
                "API error (HTTP {status}): {}",
                payload.best_message().unwrap_or("no details")
            ),
            RemoteError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for RemoteError {}

/// The three remote capabilities the corrector consumes.
#[async_trait]
pub trait CorrectionService: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    /// Fetches the mode catalog, ascending on the catalog's sort key.
    async fn list_modes(&self) -> Result<Vec<Mode>, RemoteError>;

    /// Resolves once the client is usable, or fails with the init error.
    async fn connect(&self) -> Result<(), RemoteError>;

    /// Sends one correction request and returns the structured result.
    async fn send_message(
        &self,
        request: &MessageRequest,
    ) -> Result<CorrectionResponse, RemoteError>;
}
