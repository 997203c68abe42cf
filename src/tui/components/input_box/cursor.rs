//! Cursor position tracking for the draft editor.
//!
//! `CursorState` owns the cursor byte offset, scroll offset, and the geometry
//! seen at the last render. Navigation methods take `buffer: &str` explicitly;
//! the text itself is owned by `InputBox`.

use super::text_wrap::{LEFT_INSET, TOP_INSET, inner_width, wrap_line_count, wrap_options};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First wrapped line shown (0 when content fits)
    pub scroll_offset: u16,
    /// Area width at the last render (used for vertical movement)
    pub last_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Move up (`direction < 0`) or down one wrapped line, keeping the column
    /// where possible. Returns `false` at the first/last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16) -> bool {
        let width = inner_width(self.last_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        // Byte length of a wrapped line including its trailing newline, if any
        let line_byte_span = |line: &str, offset: usize| -> usize {
            let has_newline = offset + line.len() < buffer.len()
                && buffer.as_bytes()[offset + line.len()] == b'\n';
            line.len() + usize::from(has_newline)
        };

        let mut byte_offset = 0;
        let mut current_line = 0;
        let mut column = 0;
        for (idx, line) in lines.iter().enumerate() {
            if byte_offset + line.len() >= self.pos {
                current_line = idx;
                column = self.pos - byte_offset;
                break;
            }
            byte_offset += line_byte_span(line, byte_offset);
        }

        let target_line = if direction < 0 {
            match current_line.checked_sub(1) {
                Some(line) => line,
                None => return false,
            }
        } else if current_line + 1 < lines.len() {
            current_line + 1
        } else {
            return false;
        };

        let mut target_start = 0;
        for line in lines.iter().take(target_line) {
            target_start += line_byte_span(line, target_start);
        }

        let target = target_start + column.min(lines[target_line].len());
        // Clamp onto a char boundary; wrapped lines can differ in byte width
        let mut pos = target.min(buffer.len());
        while !buffer.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
        true
    }

    /// Which wrapped line (0-based) the cursor is on.
    pub fn current_line(&self, buffer: &str, area_width: u16) -> u16 {
        let width = inner_width(area_width);
        if width == 0 {
            return 0;
        }

        let before = &buffer[..self.pos];
        let lines = textwrap::wrap(before, wrap_options(width));
        let mut line = lines.len().saturating_sub(1) as u16;

        // Right after a newline that textwrap didn't represent
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            line += 1;
        }

        line
    }

    /// Keep the cursor line inside a window of `visible` lines.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16, visible: u16) {
        let total = wrap_line_count(buffer, inner_width(area_width));
        if total <= visible {
            self.scroll_offset = 0;
            return;
        }

        let line = self.current_line(buffer, area_width);
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + visible {
            self.scroll_offset = line.saturating_sub(visible - 1);
        }
    }

    /// Screen (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + LEFT_INSET, area.y + TOP_INSET);
        }

        let options = wrap_options(width);
        let before = &buffer[..self.pos];
        let line = self.current_line(buffer, area.width);

        // Count chars from the last newline: textwrap trims trailing spaces,
        // so wrapped line lengths would misplace the cursor.
        let line_start = before.rfind('\n').map(|p| p + 1).unwrap_or(0);
        let logical = &before[line_start..];
        let segments = textwrap::wrap(logical, options);

        let column = if segments.is_empty() {
            0
        } else {
            let earlier: usize = segments
                .iter()
                .take(segments.len() - 1)
                .map(|seg| seg.chars().count())
                .sum();
            logical.chars().count().saturating_sub(earlier) as u16
        };

        let row = line.saturating_sub(self.scroll_offset);
        (area.x + LEFT_INSET + column, area.y + TOP_INSET + row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_movement_across_newlines() {
        let buffer = "abc\ndef";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();

        assert!(cursor.move_vertically(buffer, -1));
        assert_eq!(cursor.pos, 3);
        assert!(!cursor.move_vertically(buffer, -1));
        assert!(cursor.move_vertically(buffer, 1));
        assert_eq!(cursor.pos, buffer.len());
        assert!(!cursor.move_vertically(buffer, 1));
    }

    #[test]
    fn test_current_line_after_trailing_newline() {
        let buffer = "abc\n";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        assert_eq!(cursor.current_line(buffer, 40), 1);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let buffer = "1\n2\n3\n4\n5\n6";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(buffer, 40, 3);
        assert_eq!(cursor.scroll_offset, 3);

        cursor.pos = 0;
        cursor.update_scroll_offset(buffer, 40, 3);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn test_screen_pos_accounts_for_insets() {
        let area = Rect::new(0, 5, 40, 10);
        let mut cursor = CursorState::new();
        cursor.pos = 3;
        assert_eq!(cursor.screen_pos("teh cat", area), (5, 6));
    }
}
