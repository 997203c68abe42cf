//! # Remote Tasks
//!
//! The two pieces of async work the adapter spawns. Each resolves to the
//! `Action` that reports its outcome, so the reducer stays the only place
//! state changes.
//!
//! Startup is strictly sequential: the readiness call starts only after the
//! catalog call succeeded.

use std::fmt;

use log::info;

use crate::core::action::Action;
use crate::remote::{CorrectionRequest, CorrectionService, MessageRequest, Mode, RemoteError};

pub const CATALOG_FALLBACK: &str = "Error loading data";
pub const CLIENT_FALLBACK: &str = "Client init error";
pub const SEND_FALLBACK: &str = "Sending message error";

#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    /// Fetching the mode catalog failed.
    Catalog(RemoteError),
    /// The client never became ready.
    Client(RemoteError),
}

impl InitError {
    pub fn user_message(&self) -> String {
        match self {
            InitError::Catalog(e) => e.user_message(CATALOG_FALLBACK),
            InitError::Client(e) => e.user_message(CLIENT_FALLBACK),
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Catalog(e) => write!(f, "mode catalog: {e}"),
            InitError::Client(e) => write!(f, "client init: {e}"),
        }
    }
}

impl std::error::Error for InitError {}

/// Loads the mode catalog, then waits for the client to be ready.
pub async fn initialize(service: &dyn CorrectionService) -> Result<Vec<Mode>, InitError> {
    info!("Initializing against '{}' backend", service.name());
    let modes = service.list_modes().await.map_err(InitError::Catalog)?;
    service.connect().await.map_err(InitError::Client)?;
    Ok(modes)
}

pub async fn initialize_action(service: &dyn CorrectionService) -> Action {
    Action::Initialized(initialize(service).await.map_err(|e| {
        log::warn!("Startup failed: {}", e);
        e.user_message()
    }))
}

/// Sends one featured correction request for `service_id`.
pub async fn correct(
    service: &dyn CorrectionService,
    service_id: &str,
    request: CorrectionRequest,
) -> Action {
    let message = MessageRequest::featured(service_id, request);
    match service.send_message(&message).await {
        Ok(response) => Action::CorrectionReceived(response),
        Err(e) => {
            log::warn!("Correction failed: {}", e);
            Action::CorrectionFailed(e.user_message(SEND_FALLBACK))
        }
    }
}
