//! # Result Panel
//!
//! Read-only view of the corrected text. Content taller than the panel
//! scrolls inside a `ScrollView`; the offset survives across frames in
//! `ScrollViewState`, owned by `TuiState`.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;

const TITLE: &str = " Corrected text ";
const HINTS: &str = " Ctrl+Y copy  PgUp/PgDn scroll ";

pub struct ResultPanel<'a> {
    body: &'a str,
    state: &'a mut ScrollViewState,
}

impl<'a> ResultPanel<'a> {
    pub fn new(body: &'a str, state: &'a mut ScrollViewState) -> Self {
        Self { body, state }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.body)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(TITLE)
            .title_bottom(Line::from(HINTS).right_aligned())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        // One column is reserved for the vertical scrollbar
        let content_width = inner.width - 1;
        let paragraph = self.paragraph();
        let height = (paragraph.line_count(content_width) as u16).max(1);

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, self.state);
    }
}
