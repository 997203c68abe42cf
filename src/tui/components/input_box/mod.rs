//! # InputBox Component
//!
//! The draft editor: multi-line text with a 5000-character cap, a live
//! `n / 5000` counter and a clear affordance.
//!
//! ## Responsibilities
//!
//! - Capture text input (keys, bracketed paste), never past the cap
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on Enter and `Clear` on Ctrl+L
//! - Render placeholder, counter, hints, and the locked look while submitting
//!
//! ## State Management
//!
//! The buffer is internal state; the parent mirrors it into `App::draft` on
//! every `TextChanged`. `disabled` is a prop from the application state.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::state::MAX_DRAFT_CHARS;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    inner_width, next_char_boundary, prev_char_boundary, take_chars, visible_lines,
    wrap_line_count, wrap_options,
};

const PLACEHOLDER: &str = "Type the text...";
const HINTS: &str = " Enter correct  Ctrl+J newline  Ctrl+P mode  Esc quit ";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User asked for a correction (Enter pressed)
    Submit,
    /// Buffer content changed
    TextChanged,
    /// Only the cursor moved
    CursorMoved,
    /// Buffer was emptied via the clear affordance
    Clear,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Locked while a correction is in flight (Prop)
    pub disabled: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            cursor: CursorState::new(),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Inserts as much of `text` as fits under the cap. Returns whether
    /// anything was inserted.
    fn insert(&mut self, text: &str) -> bool {
        let room = MAX_DRAFT_CHARS.saturating_sub(self.char_count());
        let accepted = take_chars(text, room);
        if accepted.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor.pos, accepted);
        self.cursor.pos += accepted.len();
        true
    }

    /// The wrapped lines that fit in `area`, starting at the scroll offset.
    fn visible_text(&self, area: Rect) -> String {
        let width = inner_width(area.width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + visible_lines(area.height) as usize).min(lines.len());
        lines[start..end].join("\n")
    }

    /// Render scrollbar when content exceeds visible area
    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let visible = visible_lines(area.height);
        let total = wrap_line_count(&self.buffer, inner_width(area.width));
        if total <= visible {
            return;
        }

        // content_length is the max scroll position, not the total line count
        let mut state = ScrollbarState::default()
            .content_length(total.saturating_sub(visible) as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut state,
        );
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_width = area.width;
        self.cursor
            .update_scroll_offset(&self.buffer, area.width, visible_lines(area.height));

        let border_color = if self.disabled { Color::DarkGray } else { Color::Cyan };
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .padding(Padding::horizontal(1))
            .title(" Text ");

        // Bottom border between the corners; the counter wins when both don't fit
        let room = area.width.saturating_sub(2) as usize;
        let hints = Line::from(HINTS).left_aligned();
        let counter = (!self.buffer.is_empty()).then(|| {
            Line::from(format!(" {} / {}  Ctrl+L clear ", self.char_count(), MAX_DRAFT_CHARS))
                .right_aligned()
        });
        let needed = hints.width() + counter.as_ref().map_or(0, Line::width);
        if needed <= room {
            block = block.title_bottom(hints);
        }
        if let Some(counter) = counter {
            block = block.title_bottom(counter);
        }

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let fg = if self.disabled { Color::DarkGray } else { Color::White };
            Paragraph::new(self.visible_text(area)).style(Style::default().fg(fg))
        };

        frame.render_widget(paragraph.block(block), area);
        self.render_scrollbar(frame, area);

        if !self.disabled {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                self.insert(c.encode_utf8(&mut encoded))
                    .then_some(InputEvent::TextChanged)
            }
            TuiEvent::Paste(text) => self.insert(text).then_some(InputEvent::TextChanged),
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::TextChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::TextChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::Submit => Some(InputEvent::Submit),
            TuiEvent::ClearDraft => {
                self.clear();
                Some(InputEvent::Clear)
            }
            _ => None,
        }
    }
}
