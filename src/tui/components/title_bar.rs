//! # TitleBar Component
//!
//! Top status bar: application name, selected mode, and the status message.
//!
//! Purely presentational. All fields are props set by the parent each frame:
//!
//! 1. **Mode + status**: `"Corrector (mode: grammar) | 1 issue found"`
//! 2. **Mode only**: `"Corrector (mode: grammar)"`
//! 3. **No mode yet**: `"Corrector | Loading modes..."`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub mode_name: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(mode_name: String, status_message: String) -> Self {
        Self {
            mode_name,
            status_message,
        }
    }

    fn text(&self) -> String {
        let head = if self.mode_name.is_empty() {
            String::from("Corrector")
        } else {
            format!("Corrector (mode: {})", self.mode_name)
        };
        if self.status_message.is_empty() {
            head
        } else {
            format!("{head} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD).fg(Color::White),
        ));
        frame.render_widget(line, area);
    }
}
