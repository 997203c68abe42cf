use serde::{Deserialize, Serialize};

/// A named correction preset, as returned by the mode catalog endpoint.
///
/// The catalog may carry more fields than these; unknown ones are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Mode {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// One detected mistake in the submitted text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Annotation {
    /// Category reported by the service ("spelling", "grammar", ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// The offending snippet of the original text.
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub description: String,
}

/// Structured result of a correction request.
///
/// Only optional-field access is performed on it; a missing `body` deserializes
/// to an empty string and simply hides the result panel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CorrectionResponse {
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Annotation>>,
}

impl CorrectionResponse {
    /// Annotations, treating an absent list as empty.
    pub fn annotations(&self) -> &[Annotation] {
        self.errors.as_deref().unwrap_or(&[])
    }
}

/// What the user asked to have corrected. The service id and the featured
/// flag are added when this is turned into a [`MessageRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionRequest {
    pub message: String,
    pub mode: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageParams {
    pub mode: String,
}

/// Request body for the messaging endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageRequest {
    pub service: String,
    /// Priority/routing hint owned by the remote service. Always set for corrections.
    pub featured: bool,
    pub message: String,
    pub params: MessageParams,
}

impl MessageRequest {
    pub fn featured(service: &str, request: CorrectionRequest) -> Self {
        Self {
            service: service.to_string(),
            featured: true,
            message: request.message,
            params: MessageParams { mode: request.mode },
        }
    }
}

/// Error body shape shared by every endpoint: `{error}` and/or `{message}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorPayload {
    /// Parses an error response body. A body that is not the expected JSON
    /// shape is kept verbatim as the `message` when it has any content.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<ErrorPayload>(body) {
            Ok(payload) if payload.best_message().is_some() => payload,
            _ => {
                let trimmed = body.trim();
                ErrorPayload {
                    error: None,
                    message: (!trimmed.is_empty()).then(|| trimmed.to_string()),
                }
            }
        }
    }

    /// `error` wins over `message`; empty strings count as absent.
    pub fn best_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.message.as_deref().filter(|s| !s.is_empty()))
    }
}
