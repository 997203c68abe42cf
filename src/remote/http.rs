//! HTTP implementation of [`CorrectionService`].
//!
//! Endpoints, relative to the configured base URL:
//!
//! ```text
//! GET  /public-text-modes?sort={"sort":1}   → [Mode]
//! GET  /client/ready                        → 2xx when the client may send
//! POST /messages                            → CorrectionResponse
//! ```
//!
//! Any non-2xx answer carries an `{error}` / `{message}` body.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::service::{CorrectionService, RemoteError};
use super::types::{CorrectionResponse, ErrorPayload, MessageRequest, Mode};

/// Sort order sent with the catalog request: ascending on `sort`.
pub const MODE_SORT_SPEC: &str = r#"{"sort":1}"#;

const MODES_PATH: &str = "public-text-modes";
const READY_PATH: &str = "client/ready";
const MESSAGES_PATH: &str = "messages";

pub struct HttpCorrectionService {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpCorrectionService {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, RemoteError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    RemoteError::Config(e.to_string())
                } else {
                    RemoteError::Network(e.to_string())
                }
            })?;

        debug!("{} {}", response.status(), response.url());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Correction service error: {} - {}", status, body);
            return Err(RemoteError::Api {
                status,
                payload: ErrorPayload::from_body(&body),
            });
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RemoteError> {
        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| RemoteError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CorrectionService for HttpCorrectionService {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_modes(&self) -> Result<Vec<Mode>, RemoteError> {
        let request = self
            .client
            .get(self.url(MODES_PATH))
            .query(&[("sort", MODE_SORT_SPEC)]);
        let response = self.send(request).await?;
        let modes: Vec<Mode> = Self::read_json(response).await?;
        info!("Fetched {} modes from {}", modes.len(), self.base_url);
        Ok(modes)
    }

    async fn connect(&self) -> Result<(), RemoteError> {
        self.send(self.client.get(self.url(READY_PATH))).await?;
        info!("Correction client ready");
        Ok(())
    }

    async fn send_message(
        &self,
        request: &MessageRequest,
    ) -> Result<CorrectionResponse, RemoteError> {
        info!(
            "Sending message: service={}, mode={}, chars={}",
            request.service,
            request.params.mode,
            request.message.chars().count()
        );
        let response = self
            .send(self.client.post(self.url(MESSAGES_PATH)).json(request))
            .await?;
        let correction: CorrectionResponse = Self::read_json(response).await?;
        debug!(
            "Correction received: body_len={}, annotations={}",
            correction.body.len(),
            correction.annotations().len()
        );
        Ok(correction)
    }
}
