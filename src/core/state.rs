//! # Application State
//!
//! Core business state for the corrector. This module contains domain logic
//! only, no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── modes: Vec<Mode>                  // catalog, in server order
//! ├── selected_mode: String             // mirrored into the preference store
//! ├── draft: String                     // text to correct (≤ MAX_DRAFT_CHARS)
//! ├── dirty: bool                       // edited since the last submission
//! ├── initializing: bool                // startup sequence still running
//! ├── error: Option<String>             // fatal startup error banner
//! ├── submission: Submission            // Idle | Submitting
//! ├── response: Option<CorrectionResponse>
//! ├── status_message: String            // title bar text
//! ├── prefs: Box<dyn PreferenceStore>
//! └── notifier: Arc<dyn Notifier>
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::notice::Notifier;
use crate::core::prefs::{MODE_PREFERENCE_KEY, PreferenceStore};
use crate::remote::{Annotation, CorrectionResponse, Mode};

/// Editor cap on the draft, in characters.
pub const MAX_DRAFT_CHARS: usize = 5000;

/// Whether a correction request is in flight. At most one ever is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

/// What the review banner shows for the current response.
#[derive(Debug, Clone, PartialEq)]
pub struct Review<'a> {
    pub summary: &'a str,
    pub severity: Severity,
    pub annotations: &'a [Annotation],
}

pub struct App {
    pub modes: Vec<Mode>,
    pub selected_mode: String,
    pub draft: String,
    pub dirty: bool,
    pub initializing: bool,
    pub error: Option<String>,
    pub submission: Submission,
    pub response: Option<CorrectionResponse>,
    /// Response hidden while a submission is in flight, restored if it fails.
    pub(crate) stashed_response: Option<CorrectionResponse>,
    pub status_message: String,
    pub(crate) prefs: Box<dyn PreferenceStore>,
    pub(crate) notifier: Arc<dyn Notifier>,
}

impl App {
    /// Fresh state, still initializing. The selected mode starts from the
    /// stored preference and is settled once the catalog arrives.
    pub fn new(prefs: Box<dyn PreferenceStore>, notifier: Arc<dyn Notifier>) -> Self {
        let selected_mode = prefs.get(MODE_PREFERENCE_KEY).unwrap_or_default();
        Self {
            modes: Vec::new(),
            selected_mode,
            draft: String::new(),
            dirty: false,
            initializing: true,
            error: None,
            submission: Submission::Idle,
            response: None,
            stashed_response: None,
            status_message: String::from("Loading modes..."),
            prefs,
            notifier,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    /// The form is on screen: startup finished without error.
    pub fn is_ready(&self) -> bool {
        !self.initializing && self.error.is_none()
    }

    /// The submit control is visible at all.
    pub fn show_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// The submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_ready() && self.show_submit() && self.dirty && !self.is_submitting()
    }

    /// Mode selector and text editor accept input.
    pub fn can_edit(&self) -> bool {
        self.is_ready() && !self.is_submitting()
    }

    pub fn draft_chars(&self) -> usize {
        self.draft.chars().count()
    }

    /// The response worth rendering: one with a non-empty body.
    pub fn shown_response(&self) -> Option<&CorrectionResponse> {
        self.response.as_ref().filter(|r| !r.body.is_empty())
    }

    /// The review banner, present only when the shown response has a summary.
    pub fn review(&self) -> Option<Review<'_>> {
        let response = self.shown_response()?;
        let summary = response.summary.as_deref().filter(|s| !s.is_empty())?;
        let annotations = response.annotations();
        let severity = if annotations.is_empty() {
            Severity::Success
        } else {
            Severity::Error
        };
        Some(Review {
            summary,
            severity,
            annotations,
        })
    }
}

/// Picks the initial mode: a stored preference that names a catalog entry,
/// else the first entry, else whatever was stored.
pub fn seed_selected_mode(stored: Option<&str>, modes: &[Mode]) -> String {
    match stored {
        Some(name) if modes.iter().any(|m| m.name == name) => name.to_string(),
        _ => modes
            .first()
            .map(|m| m.name.clone())
            .or_else(|| stored.map(str::to_string))
            .unwrap_or_default(),
    }
}

/// Truncates `text` to at most [`MAX_DRAFT_CHARS`] characters.
pub fn cap_draft(text: &str) -> &str {
    match text.char_indices().nth(MAX_DRAFT_CHARS) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
