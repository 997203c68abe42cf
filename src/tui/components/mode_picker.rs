//! # Mode Picker Component
//!
//! Overlay for choosing the correction mode. Opened with Ctrl+P, closed with
//! Esc or by picking an entry.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ModePickerState` lives in `TuiState` while the overlay is open
//! - `ModePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::remote::Mode;
use crate::tui::event::TuiEvent;

/// Persistent state for the mode picker overlay.
pub struct ModePickerState {
    pub modes: Vec<Mode>,
    pub selected: usize,
    pub list_state: ListState,
}

impl ModePickerState {
    /// Opens on the currently selected mode, or the first one.
    pub fn new(modes: Vec<Mode>, current: &str) -> Self {
        let selected = modes.iter().position(|m| m.name == current).unwrap_or(0);
        let mut list_state = ListState::default();
        if !modes.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            modes,
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a ModePickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ModePickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::OpenModePicker => Some(ModePickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.modes.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.modes.is_empty() {
                    self.selected = (self.selected + 1).min(self.modes.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .modes
                .get(self.selected)
                .map(|mode| ModePickerEvent::Select(mode.name.clone())),
            _ => None,
        }
    }
}

/// Events emitted by the mode picker.
#[derive(Debug, Clone, PartialEq)]
pub enum ModePickerEvent {
    Select(String),
    Dismiss,
}

/// Transient render wrapper for the mode picker overlay.
pub struct ModePicker<'a> {
    state: &'a mut ModePickerState,
    current_mode: &'a str,
}

impl<'a> ModePicker<'a> {
    pub fn new(state: &'a mut ModePickerState, current_mode: &'a str) -> Self {
        Self {
            state,
            current_mode,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 50, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Mode ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.state.modes.is_empty() {
            let empty = Paragraph::new("The service offers no modes.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let inner_width = overlay.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .state
            .modes
            .iter()
            .enumerate()
            .map(|(i, mode)| {
                let is_active = mode.name == self.current_mode;
                let marker = if is_active { " *" } else { "" };

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let desc = mode
                    .description
                    .as_deref()
                    .map(|d| format!("  {d}"))
                    .unwrap_or_default();
                let name_width = inner_width
                    .saturating_sub(marker.len())
                    .saturating_sub(desc.width());
                let name = truncate_str(&mode.name, name_width);
                let padded = format!("{:<width$}", name, width = name_width);

                let mut spans = vec![Span::styled(padded, style)];
                if !desc.is_empty() {
                    let desc_style = if i == self.state.selected {
                        style
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    spans.push(Span::styled(desc, desc_style));
                }
                if !marker.is_empty() {
                    spans.push(Span::styled(marker, style));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.to_string().width() > max_width - 3 {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
