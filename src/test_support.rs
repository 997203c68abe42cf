//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::notice::Notifier;
use crate::core::prefs::MemoryPreferenceStore;
use crate::core::state::App;
use crate::remote::{CorrectionResponse, CorrectionService, MessageRequest, Mode, RemoteError};

/// Notifier that remembers every message it was given.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Scripted service: returns the configured results and records calls.
pub struct FakeService {
    pub modes: Result<Vec<Mode>, RemoteError>,
    pub ready: Result<(), RemoteError>,
    pub reply: Result<CorrectionResponse, RemoteError>,
    calls: Mutex<Vec<&'static str>>,
    sent: Mutex<Vec<MessageRequest>>,
}

impl FakeService {
    pub fn new(modes: Vec<Mode>) -> Self {
        Self {
            modes: Ok(modes),
            ready: Ok(()),
            reply: Ok(CorrectionResponse::default()),
            calls: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<MessageRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl CorrectionService for FakeService {
    fn name(&self) -> &str {
        "fake"
    }

    async fn list_modes(&self) -> Result<Vec<Mode>, RemoteError> {
        self.calls.lock().unwrap().push("list_modes");
        self.modes.clone()
    }

    async fn connect(&self) -> Result<(), RemoteError> {
        self.calls.lock().unwrap().push("connect");
        self.ready.clone()
    }

    async fn send_message(
        &self,
        request: &MessageRequest,
    ) -> Result<CorrectionResponse, RemoteError> {
        self.calls.lock().unwrap().push("send_message");
        self.sent.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

/// Creates a test App (still initializing) with an empty in-memory store.
pub fn test_app() -> App {
    test_app_with_store(MemoryPreferenceStore::new()).0
}

pub fn test_app_with_store(store: MemoryPreferenceStore) -> (App, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = App::new(Box::new(store), notifier.clone());
    (app, notifier)
}

/// Creates a test App that finished startup with the given catalog.
pub fn ready_app(mode_names: &[&str]) -> (App, Arc<RecordingNotifier>) {
    let (mut app, notifier) = test_app_with_store(MemoryPreferenceStore::new());
    let modes = mode_names.iter().map(|n| Mode::named(*n)).collect();
    update(&mut app, Action::Initialized(Ok(modes)));
    (app, notifier)
}
