//! Locating the matched part of a result for display

use std::ops::Range;

/// A result split around its first match. Slices borrow the original text,
/// so casing is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight<'a> {
    /// Query empty or not found: render as is
    Plain(&'a str),
    Marked {
        before: &'a str,
        matched: &'a str,
        after: &'a str,
    },
}

impl<'a> Highlight<'a> {
    /// Split `text` around the first case-insensitive occurrence of `query`.
    pub fn new(text: &'a str, query: &str) -> Self {
        match find_match(text, query) {
            Some(range) => Highlight::Marked {
                before: &text[..range.start],
                matched: &text[range.clone()],
                after: &text[range.end..],
            },
            None => Highlight::Plain(text),
        }
    }

    pub fn matched(&self) -> Option<&'a str> {
        match self {
            Highlight::Plain(_) => None,
            Highlight::Marked { matched, .. } => Some(matched),
        }
    }
}

/// Byte range of the first case-insensitive occurrence of `query` in `text`.
///
/// Comparison is per character on lowercase expansions; the returned range
/// always falls on character boundaries of `text`.
pub fn find_match(text: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    text.char_indices()
        .find_map(|(start, _)| match_at(text, start, &needle).map(|end| start..end))
}

fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut pos = 0;
    for (offset, ch) in text[start..].char_indices() {
        for lower in ch.to_lowercase() {
            // needle ran out inside this character's expansion
            if pos == needle.len() || lower != needle[pos] {
                return None;
            }
            pos += 1;
        }
        if pos == needle.len() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}
