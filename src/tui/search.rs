//! Search input editing
//!
//! The text lives in the filter widget; this tracks the cursor and turns
//! edit keys into the new text value.

use unicode_width::UnicodeWidthStr;

/// Cursor into the search text, as a byte offset on a char boundary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchCursor {
    pub pos: usize,
}

impl SearchCursor {
    /// Insert `c` at the cursor and return the new text.
    pub fn insert(&mut self, text: &str, c: char) -> String {
        let pos = self.clamped(text);
        let mut next = String::with_capacity(text.len() + c.len_utf8());
        next.push_str(&text[..pos]);
        next.push(c);
        next.push_str(&text[pos..]);
        self.pos = pos + c.len_utf8();
        next
    }

    /// Remove the char before the cursor. `None` if there is nothing to remove.
    pub fn backspace(&mut self, text: &str) -> Option<String> {
        let pos = self.clamped(text);
        if pos == 0 {
            return None;
        }
        let prev = prev_boundary(text, pos);
        let mut next = text.to_string();
        next.replace_range(prev..pos, "");
        self.pos = prev;
        Some(next)
    }

    /// Remove the char under the cursor. `None` at the end of the text.
    pub fn delete(&mut self, text: &str) -> Option<String> {
        let pos = self.clamped(text);
        if pos >= text.len() {
            return None;
        }
        let mut next = text.to_string();
        next.remove(pos);
        self.pos = pos;
        Some(next)
    }

    pub fn move_left(&mut self, text: &str) {
        let pos = self.clamped(text);
        self.pos = prev_boundary(text, pos);
    }

    pub fn move_right(&mut self, text: &str) {
        let pos = self.clamped(text);
        self.pos = text[pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| pos + i)
            .unwrap_or(text.len());
    }

    pub fn home(&mut self) {
        self.pos = 0;
    }

    pub fn end(&mut self, text: &str) {
        self.pos = text.len();
    }

    /// Terminal columns between the start of the text and the cursor
    pub fn display_column(&self, text: &str) -> u16 {
        let pos = self.clamped(text);
        text[..pos].width().min(u16::MAX as usize) as u16
    }

    fn clamped(&self, text: &str) -> usize {
        let mut pos = self.pos.min(text.len());
        while !text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

fn prev_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_in_the_middle() {
        let mut cursor = SearchCursor { pos: 1 };
        let text = cursor.insert("ac", 'b');
        assert_eq!(text, "abc");
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn backspace_handles_multibyte() {
        let mut cursor = SearchCursor::default();
        cursor.end("añ");
        let text = cursor.backspace("añ").unwrap();
        assert_eq!(text, "a");
        assert_eq!(cursor.pos, 1);
        cursor.home();
        assert_eq!(cursor.backspace("a"), None);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut cursor = SearchCursor { pos: 2 };
        assert_eq!(cursor.delete("ab"), None);
        cursor.home();
        assert_eq!(cursor.delete("ab").as_deref(), Some("b"));
    }

    #[test]
    fn movement_stays_on_boundaries() {
        let text = "ñu";
        let mut cursor = SearchCursor::default();
        cursor.move_right(text);
        assert_eq!(cursor.pos, 2);
        cursor.move_right(text);
        assert_eq!(cursor.pos, 3);
        cursor.move_right(text);
        assert_eq!(cursor.pos, 3);
        cursor.move_left(text);
        assert_eq!(cursor.pos, 2);
        cursor.move_left(text);
        assert_eq!(cursor.pos, 0);
    }

    #[test]
    fn stale_cursor_is_clamped() {
        let cursor = SearchCursor { pos: 10 };
        assert_eq!(cursor.display_column("abc"), 3);
        assert_eq!(cursor.display_column(""), 0);
    }
}
