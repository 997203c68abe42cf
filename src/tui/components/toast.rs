use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Widest a toast gets before wrapping.
const MAX_WIDTH: u16 = 48;

/// A transient notice drawn over the top-right corner of the screen.
pub struct Toast<'a> {
    message: &'a str,
}

impl<'a> Toast<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Where the toast goes inside `area`, sized to the message.
    pub fn placement(&self, area: Rect) -> Rect {
        let wanted = self.message.width() as u16 + 4;
        let width = wanted.min(MAX_WIDTH).min(area.width);
        let inner = width.saturating_sub(4).max(1) as usize;
        let rows = textwrap::wrap(self.message, inner).len().max(1) as u16;
        let height = (rows + 2).min(area.height);
        Rect {
            x: area.x + area.width - width,
            y: area.y + 1u16.min(area.height.saturating_sub(height)),
            width,
            height,
        }
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = self.placement(area);
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .padding(Padding::horizontal(1));
        let paragraph = Paragraph::new(self.message)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_placement_hugs_top_right() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = Toast::new("Please, input text").placement(area);
        assert_eq!(rect.width, 22);
        assert_eq!(rect.height, 3);
        assert_eq!(rect.x + rect.width, 80);
        assert_eq!(rect.y, 1);
    }

    #[test]
    fn test_long_message_wraps() {
        let area = Rect::new(0, 0, 80, 24);
        let message = "Sending message error: the service answered with an unexpected status";
        let rect = Toast::new(message).placement(area);
        assert_eq!(rect.width, MAX_WIDTH);
        assert!(rect.height > 3);
    }

    #[test]
    fn test_render() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| Toast::new("Nothing to copy").render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Nothing to copy"));
    }
}
