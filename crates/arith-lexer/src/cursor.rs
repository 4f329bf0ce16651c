use std::str::Chars;

use text_size::{TextLen as _, TextSize};

pub(crate) const EOF_CHAR: char = '\0';

pub(crate) struct Cursor<'a> {
    text: &'a str,
    chars: Chars<'a>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, chars: text.chars() }
    }

    /// Byte offset of the next unread character.
    pub(crate) fn offset(&self) -> TextSize {
        self.text.text_len() - self.chars.as_str().text_len()
    }

    /// Moves back (or forward) to `offset`. An offset past the end or off a
    /// char boundary lands at the end of input.
    pub(crate) fn reset(&mut self, offset: TextSize) {
        let offset: usize = offset.into();
        self.chars = self.text.get(offset..).unwrap_or_default().chars();
    }

    /// Text consumed since `start`.
    pub(crate) fn slice_from(&self, start: TextSize) -> &'a str {
        let start: usize = start.into();
        let end: usize = self.offset().into();
        &self.text[start..end]
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub(crate) fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn advance(&mut self) -> char {
        self.chars.next().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn advance_while(&mut self, mut f: impl FnMut(char) -> bool) {
        while !self.is_eof() && f(self.peek()) {
            self.advance();
        }
    }
}
