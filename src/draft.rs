//! Single-line draft buffer for the cell editor
//!
//! Positions are char offsets. `anchor` marks the fixed end of a text
//! selection; the selection is empty when it is `None` or equals `cursor`.

use std::ops::Range;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftBuffer {
    text: String,
    cursor: usize,
    anchor: Option<usize>,
}

impl DraftBuffer {
    /// Buffer with the cursor at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            anchor: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0 && !self.has_selection()
    }

    pub fn at_end(&self) -> bool {
        self.cursor == self.len_chars() && !self.has_selection()
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Selected char range, `None` when empty
    pub fn selection(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some(anchor.min(self.cursor)..anchor.max(self.cursor))
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn selected_text(&self) -> String {
        match self.selection() {
            Some(range) => {
                let start = self.byte_offset(range.start);
                let end = self.byte_offset(range.end);
                self.text[start..end].to_string()
            }
            None => String::new(),
        }
    }

    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = self.len_chars();
    }

    fn begin_motion(&mut self, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
    }

    pub fn move_left(&mut self, extend: bool) {
        if !extend {
            if let Some(range) = self.selection() {
                self.cursor = range.start;
                self.anchor = None;
                return;
            }
        }
        self.begin_motion(extend);
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Without `extend`, a selection collapses to its end
    pub fn move_right(&mut self, extend: bool) {
        if !extend {
            if let Some(range) = self.selection() {
                self.cursor = range.end;
                self.anchor = None;
                return;
            }
        }
        self.begin_motion(extend);
        self.cursor = (self.cursor + 1).min(self.len_chars());
    }

    pub fn move_home(&mut self, extend: bool) {
        self.begin_motion(extend);
        self.cursor = 0;
    }

    pub fn move_end(&mut self, extend: bool) {
        self.begin_motion(extend);
        self.cursor = self.len_chars();
    }

    fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection() else {
            return false;
        };
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        self.text.replace_range(start..end, "");
        self.cursor = range.start;
        self.anchor = None;
        true
    }

    /// Insert at the cursor, replacing any selection
    pub fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        self.anchor = None;
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf));
    }

    /// Backspace. Returns whether the text changed.
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        self.anchor = None;
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete. Returns whether the text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        self.anchor = None;
        if self.cursor >= self.len_chars() {
            return false;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    /// Remove and return the selected text
    pub fn cut(&mut self) -> String {
        let taken = self.selected_text();
        self.delete_selection();
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_puts_cursor_at_end() {
        let buf = DraftBuffer::new("Jeff");
        assert_eq!(buf.cursor(), 4);
        assert!(buf.at_end());
    }

    #[test]
    fn test_select_all_then_right_collapses_to_end() {
        let mut buf = DraftBuffer::new("Jeff");
        buf.select_all();
        assert_eq!(buf.selected_text(), "Jeff");
        buf.move_right(false);
        assert!(!buf.has_selection());
        assert_eq!(buf.cursor(), 4);
        buf.insert_text("rey");
        assert_eq!(buf.text(), "Jeffrey");
    }

    #[test]
    fn test_typing_replaces_selection() {
        let mut buf = DraftBuffer::new("Elon");
        buf.select_all();
        buf.insert_char('K');
        assert_eq!(buf.text(), "K");
    }

    #[test]
    fn test_left_collapses_to_start() {
        let mut buf = DraftBuffer::new("abc");
        buf.select_all();
        buf.move_left(false);
        assert_eq!(buf.cursor(), 0);
        assert!(buf.at_start());
    }

    #[test]
    fn test_extend_and_delete() {
        let mut buf = DraftBuffer::new("hello");
        buf.move_left(true);
        buf.move_left(true);
        assert_eq!(buf.selected_text(), "lo");
        assert!(buf.delete_backward());
        assert_eq!(buf.text(), "hel");
        assert!(buf.delete_backward());
        assert_eq!(buf.text(), "he");
        buf.move_home(false);
        assert!(!buf.delete_backward());
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "e");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut buf = DraftBuffer::new("née");
        buf.move_left(false);
        buf.delete_backward();
        assert_eq!(buf.text(), "ne");
        buf.insert_char('ü');
        assert_eq!(buf.text(), "nüe");
    }

    #[test]
    fn test_cut_returns_selection() {
        let mut buf = DraftBuffer::new("Branson");
        buf.move_home(false);
        buf.move_right(true);
        buf.move_right(true);
        assert_eq!(buf.cut(), "Br");
        assert_eq!(buf.text(), "anson");
    }
}
