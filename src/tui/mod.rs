//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (loading modes, correction in flight, notice on screen):
//!   draws every ~80ms so the progress bar and spinner move.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod clipboard;
mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::notice::{NoticeBoard, Notifier};
use crate::core::prefs::PreferenceStore;
use crate::core::state::App;
use crate::core::tasks;
use crate::remote::{CorrectionRequest, CorrectionService, HttpCorrectionService};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ModePickerEvent, ModePickerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const COPIED_STATUS: &str = "Copied to clipboard";
const COPY_FAILED_NOTICE: &str = "Copy failed";

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub input_box: InputBox,
    pub result_scroll: ScrollViewState,
    // Mode picker overlay (None = hidden)
    pub mode_picker: Option<ModePickerState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            result_scroll: ScrollViewState::default(),
            mode_picker: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals without it
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Everything the event loop hands to background tasks.
struct Runtime {
    service: Arc<dyn CorrectionService>,
    service_id: String,
    tx: mpsc::Sender<Action>,
}

impl Runtime {
    fn spawn_startup(&self) {
        info!("Spawning startup task");
        let service = self.service.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let action = tasks::initialize_action(service.as_ref()).await;
            if tx.send(action).is_err() {
                warn!("Failed to send startup result: receiver dropped");
            }
        });
    }

    fn spawn_correction(&self, request: CorrectionRequest) {
        info!(
            "Spawning correction request (mode={}, {} chars)",
            request.mode,
            request.message.chars().count()
        );
        let service = self.service.clone();
        let service_id = self.service_id.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let action = tasks::correct(service.as_ref(), &service_id, request).await;
            if tx.send(action).is_err() {
                warn!("Failed to send correction result: receiver dropped");
            }
        });
    }
}

pub fn run(config: ResolvedConfig, prefs: Box<dyn PreferenceStore>) -> std::io::Result<()> {
    let service: Arc<dyn CorrectionService> = Arc::new(HttpCorrectionService::new(
        config.base_url.clone(),
        config.api_key.clone(),
    ));
    let notices = Arc::new(NoticeBoard::new());
    let notifier: Arc<dyn Notifier> = notices.clone();
    let mut app = App::new(prefs, notifier);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let runtime = Runtime {
        service,
        service_id: config.service_id,
        tx,
    };
    runtime.spawn_startup();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();

    let result = event_loop(&mut terminal, &mut app, &mut tui, &notices, &runtime, &rx);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Corrector exited");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    notices: &NoticeBoard,
    runtime: &Runtime,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with App state
        tui.input_box.disabled = !app.can_edit();

        let notice = notices.current(Instant::now());
        let animating = app.initializing || app.is_submitting() || notice.is_some();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let message = notice.as_ref().map(|n| n.message.as_str());
            terminal.draw(|f| ui::draw_ui(f, app, tui, message, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(event, app, tui, runtime) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (startup, correction results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if matches!(action, Action::CorrectionReceived(_)) {
                tui.result_scroll = ScrollViewState::default();
            }
            let effect = update(app, action);
            if apply_effect(effect, app, runtime) {
                return Ok(());
            }
        }
    }

    Ok(())
}

/// Routes one terminal event. Returns true when the app should quit.
fn handle_event(event: TuiEvent, app: &mut App, tui: &mut TuiState, runtime: &Runtime) -> bool {
    match event {
        // Resize just needs a redraw (already flagged)
        TuiEvent::Resize => return false,
        TuiEvent::ForceQuit => return apply_effect(update(app, Action::Quit), app, runtime),
        _ => {}
    }

    // When the mode picker is open, route all events to it
    if let Some(picker) = tui.mode_picker.as_mut() {
        match picker.handle_event(&event) {
            Some(ModePickerEvent::Select(name)) => {
                tui.mode_picker = None;
                return apply_effect(update(app, Action::SelectMode(name)), app, runtime);
            }
            Some(ModePickerEvent::Dismiss) => tui.mode_picker = None,
            None => {}
        }
        return false;
    }

    match event {
        TuiEvent::Escape => apply_effect(update(app, Action::Quit), app, runtime),
        TuiEvent::OpenModePicker => {
            if app.can_edit() {
                tui.mode_picker = Some(ModePickerState::new(app.modes.clone(), &app.selected_mode));
            }
            false
        }
        TuiEvent::CopyResult => apply_effect(update(app, Action::CopyResult), app, runtime),
        TuiEvent::ScrollResultUp => {
            tui.result_scroll.scroll_page_up();
            false
        }
        TuiEvent::ScrollResultDown => {
            tui.result_scroll.scroll_page_down();
            false
        }
        _ => {
            let action = match tui.input_box.handle_event(&event) {
                Some(InputEvent::TextChanged) => Action::EditDraft(tui.input_box.buffer.clone()),
                Some(InputEvent::Clear) => Action::ClearDraft,
                Some(InputEvent::Submit) => Action::Submit,
                Some(InputEvent::CursorMoved) | None => return false,
            };
            apply_effect(update(app, action), app, runtime)
        }
    }
}

/// Carries out a reducer effect. Returns true when the app should quit.
fn apply_effect(effect: Effect, app: &mut App, runtime: &Runtime) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SendCorrection(request) => {
            runtime.spawn_correction(request);
            false
        }
        Effect::CopyToClipboard(text) => {
            match clipboard::copy_to_clipboard(&text) {
                Ok(()) => {
                    info!("Copied {} chars to clipboard", text.chars().count());
                    app.status_message = COPIED_STATUS.to_string();
                }
                Err(e) => {
                    warn!("Clipboard write failed: {}", e);
                    app.notifier.warn(COPY_FAILED_NOTICE);
                }
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeService, ready_app};

    fn runtime() -> (Runtime, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let runtime = Runtime {
            service: Arc::new(FakeService::new(vec![])),
            service_id: "proofreader".to_string(),
            tx,
        };
        (runtime, rx)
    }

    #[test]
    fn test_typing_mirrors_draft() {
        let (mut app, _) = ready_app(&["grammar"]);
        let mut tui = TuiState::new();
        let (runtime, _rx) = runtime();

        for c in "teh".chars() {
            assert!(!handle_event(TuiEvent::InputChar(c), &mut app, &mut tui, &runtime));
        }
        assert_eq!(app.draft, "teh");
        assert!(app.dirty);

        handle_event(TuiEvent::ClearDraft, &mut app, &mut tui, &runtime);
        assert!(app.draft.is_empty());
        assert!(tui.input_box.buffer.is_empty());
    }

    #[test]
    fn test_mode_picker_selects_and_persists() {
        let (mut app, _) = ready_app(&["grammar", "style"]);
        let mut tui = TuiState::new();
        let (runtime, _rx) = runtime();

        handle_event(TuiEvent::OpenModePicker, &mut app, &mut tui, &runtime);
        assert!(tui.mode_picker.is_some());

        // Keys go to the picker, not the editor
        handle_event(TuiEvent::CursorDown, &mut app, &mut tui, &runtime);
        handle_event(TuiEvent::Submit, &mut app, &mut tui, &runtime);

        assert!(tui.mode_picker.is_none());
        assert_eq!(app.selected_mode, "style");
        assert_eq!(
            app.prefs.get(crate::core::prefs::MODE_PREFERENCE_KEY).as_deref(),
            Some("style")
        );
    }

    #[test]
    fn test_escape_closes_picker_before_quitting() {
        let (mut app, _) = ready_app(&["grammar"]);
        let mut tui = TuiState::new();
        let (runtime, _rx) = runtime();

        handle_event(TuiEvent::OpenModePicker, &mut app, &mut tui, &runtime);
        assert!(!handle_event(TuiEvent::Escape, &mut app, &mut tui, &runtime));
        assert!(tui.mode_picker.is_none());
        assert!(handle_event(TuiEvent::Escape, &mut app, &mut tui, &runtime));
    }

    #[test]
    fn test_picker_unavailable_before_ready() {
        let (mut app, _) = crate::test_support::test_app_with_store(
            crate::core::prefs::MemoryPreferenceStore::new(),
        );
        let mut tui = TuiState::new();
        let (runtime, _rx) = runtime();

        handle_event(TuiEvent::OpenModePicker, &mut app, &mut tui, &runtime);
        assert!(tui.mode_picker.is_none());
    }

    #[test]
    fn test_copy_without_result_warns() {
        let (mut app, notices) = ready_app(&["grammar"]);
        let mut tui = TuiState::new();
        let (runtime, _rx) = runtime();

        assert!(!handle_event(TuiEvent::CopyResult, &mut app, &mut tui, &runtime));
        assert_eq!(
            notices.messages(),
            vec![crate::core::action::NOTHING_TO_COPY_NOTICE.to_string()]
        );
    }

    #[tokio::test]
    async fn test_submit_round_trip_through_channel() {
        let (mut app, _) = ready_app(&["grammar"]);
        let mut tui = TuiState::new();
        let (runtime, rx) = runtime();

        handle_event(TuiEvent::Paste("teh cat".into()), &mut app, &mut tui, &runtime);
        handle_event(TuiEvent::Submit, &mut app, &mut tui, &runtime);
        assert!(app.is_submitting());
        assert!(tui.input_box.buffer == "teh cat");

        let action = tokio::task::spawn_blocking(move || rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(action, Action::CorrectionReceived(_)));
        update(&mut app, action);
        assert!(!app.is_submitting());
    }
}
