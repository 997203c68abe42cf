use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const LABEL: &str = "Correct mistakes";
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The "Correct mistakes" control under the editor.
///
/// Transient: built each frame from application state. Renders nothing when
/// `visible` is false (blank draft).
pub struct SubmitButton {
    pub visible: bool,
    pub enabled: bool,
    pub submitting: bool,
    pub spinner_frame: usize,
}

impl SubmitButton {
    pub fn new(visible: bool, enabled: bool, submitting: bool, spinner_frame: usize) -> Self {
        Self {
            visible,
            enabled,
            submitting,
            spinner_frame,
        }
    }

    fn line(&self) -> Line<'static> {
        if self.submitting {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            return Line::from(vec![
                Span::styled(format!("[ {glyph} "), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{LABEL}... ]"),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
        }

        let style = if self.enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        Line::from(Span::styled(format!("[ {LABEL} ]"), style))
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }
        frame.render_widget(self.line().right_aligned(), area);
    }
}
