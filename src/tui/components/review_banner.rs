//! # Review Banner
//!
//! Shows the response summary as the banner title, with one line per
//! annotation: `[type] context  -  description`. The border is red when the
//! service reported mistakes and green otherwise.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::state::{Review, Severity};
use crate::remote::Annotation;
use crate::tui::component::Component;

/// Borders (2) + horizontal padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;
const VERTICAL_OVERHEAD: u16 = 2;

pub struct ReviewBanner<'a> {
    review: &'a Review<'a>,
}

impl<'a> ReviewBanner<'a> {
    pub fn new(review: &'a Review<'a>) -> Self {
        Self { review }
    }

    /// Rows needed to show every annotation at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD);
        let body = self.paragraph().line_count(inner) as u16;
        body.max(1) + VERTICAL_OVERHEAD
    }

    fn border_color(&self) -> Color {
        match self.review.severity {
            Severity::Error => Color::Red,
            Severity::Success => Color::Green,
        }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let lines: Vec<Line> = self.review.annotations.iter().map(annotation_line).collect();
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }
}

fn kind_color(kind: &str) -> Color {
    match kind {
        "spelling" => Color::Red,
        "grammar" => Color::Yellow,
        "punctuation" => Color::Magenta,
        "style" => Color::Blue,
        _ => Color::Cyan,
    }
}

fn annotation_line(annotation: &Annotation) -> Line<'_> {
    let mut spans = Vec::with_capacity(4);
    if !annotation.kind.is_empty() {
        spans.push(Span::styled(
            format!("[{}] ", annotation.kind),
            Style::default().fg(kind_color(&annotation.kind)),
        ));
    }
    spans.push(Span::styled(
        annotation.context.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED),
    ));
    spans.push(Span::raw("  -  "));
    spans.push(Span::styled(
        annotation.description.as_str(),
        Style::default().fg(Color::Gray),
    ));
    Line::from(spans)
}

impl Component for ReviewBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = self.border_color();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.review.summary),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));
        frame.render_widget(self.paragraph().block(block), area);
    }
}
