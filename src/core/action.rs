//! # Actions
//!
//! Everything that can happen in the corrector becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The service answers? That's `Action::CorrectionReceived(response)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter must carry out. No I/O here apart from the
//! preference write and the notifier, both injected.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Submission lifecycle:
//!
//! ```text
//! Idle ──Submit──▶ Submitting ──CorrectionReceived──▶ Idle (new response)
//!                       └───────CorrectionFailed────▶ Idle (previous response)
//! ```

use log::{debug, info, warn};

use crate::core::prefs::MODE_PREFERENCE_KEY;
use crate::core::state::{App, Submission, cap_draft, seed_selected_mode};
use crate::remote::{CorrectionRequest, CorrectionResponse, Mode};

pub const EMPTY_DRAFT_NOTICE: &str = "Please, input text";
pub const NOTHING_TO_COPY_NOTICE: &str = "Nothing to copy";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Startup finished: the catalog, or the message for the error banner.
    Initialized(Result<Vec<Mode>, String>),
    /// The editor's full text after a change.
    EditDraft(String),
    ClearDraft,
    SelectMode(String),
    Submit,
    CorrectionReceived(CorrectionResponse),
    CorrectionFailed(String),
    CopyResult,
    Quit,
}

/// Side effects `update` asks the adapter to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SendCorrection(CorrectionRequest),
    CopyToClipboard(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Initialized(result) => {
            if !app.initializing {
                warn!("Ignoring duplicate initialization result");
                return Effect::None;
            }
            app.initializing = false;
            match result {
                Ok(modes) => {
                    let stored = Some(app.selected_mode.as_str()).filter(|s| !s.is_empty());
                    app.selected_mode = seed_selected_mode(stored, &modes);
                    info!(
                        "Initialized with {} modes, selected '{}'",
                        modes.len(),
                        app.selected_mode
                    );
                    app.modes = modes;
                    app.status_message = String::from("Ready");
                }
                Err(message) => {
                    warn!("Initialization failed: {}", message);
                    app.error = Some(message);
                    app.status_message = String::from("Unavailable");
                }
            }
            Effect::None
        }
        Action::EditDraft(text) => {
            if !app.can_edit() {
                debug!("Draft edit ignored while locked");
                return Effect::None;
            }
            let text = cap_draft(&text);
            if text != app.draft {
                app.draft = text.to_string();
                app.dirty = true;
            }
            Effect::None
        }
        Action::ClearDraft => {
            if !app.can_edit() {
                return Effect::None;
            }
            app.draft.clear();
            app.response = None;
            app.stashed_response = None;
            Effect::None
        }
        Action::SelectMode(name) => {
            if !app.can_edit() {
                debug!("Mode change ignored while locked");
                return Effect::None;
            }
            if !app.modes.iter().any(|m| m.name == name) {
                warn!("Ignoring selection of unknown mode '{}'", name);
                return Effect::None;
            }
            if let Err(e) = app.prefs.set(MODE_PREFERENCE_KEY, &name) {
                warn!("Failed to persist mode preference: {}", e);
            }
            app.status_message = format!("Mode: {name}");
            app.selected_mode = name;
            app.dirty = true;
            Effect::None
        }
        Action::Submit => {
            if app.is_submitting() {
                warn!("Submit rejected: a correction is already in flight");
                return Effect::None;
            }
            if !app.is_ready() {
                return Effect::None;
            }
            if app.draft.trim().is_empty() {
                app.notifier.warn(EMPTY_DRAFT_NOTICE);
                return Effect::None;
            }
            if !app.dirty {
                debug!("Submit ignored: draft unchanged since last submission");
                return Effect::None;
            }

            app.error = None;
            app.stashed_response = app.response.take();
            app.dirty = false;
            app.submission = Submission::Submitting;
            app.status_message = String::from("Correcting...");
            info!(
                "Submitting {} chars with mode '{}'",
                app.draft_chars(),
                app.selected_mode
            );
            Effect::SendCorrection(CorrectionRequest {
                message: app.draft.clone(),
                mode: app.selected_mode.clone(),
            })
        }
        Action::CorrectionReceived(response) => {
            if !app.is_submitting() {
                warn!("Dropping correction that arrived with no submission in flight");
                return Effect::None;
            }
            info!(
                "Correction received: {} annotations",
                response.annotations().len()
            );
            app.status_message = response
                .summary
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| String::from("Corrected"));
            app.response = Some(response);
            app.stashed_response = None;
            app.submission = Submission::Idle;
            Effect::None
        }
        Action::CorrectionFailed(message) => {
            if !app.is_submitting() {
                warn!("Dropping failure that arrived with no submission in flight");
                return Effect::None;
            }
            app.notifier.warn(&message);
            app.response = app.stashed_response.take();
            app.submission = Submission::Idle;
            app.status_message = String::from("Correction failed");
            Effect::None
        }
        Action::CopyResult => match app.shown_response() {
            Some(response) => Effect::CopyToClipboard(response.body.clone()),
            None => {
                app.notifier.warn(NOTHING_TO_COPY_NOTICE);
                Effect::None
            }
        },
        Action::Quit => Effect::Quit,
    }
}
