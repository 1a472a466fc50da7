//! Forward-only scan position over a source string.

/// A byte offset into `src` that only ever moves forward.
///
/// Every highlighter owns one `Cursor` for the duration of a call; the
/// offset always sits on a char boundary and never exceeds `src.len()`.
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The unconsumed remainder of the input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// The input between `start` and the current position.
    pub(crate) fn since(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Looks `n` chars ahead of the current one (`peek_nth(0) == peek()`).
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// ASCII case-insensitive prefix test.
    pub(crate) fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.rest()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    /// Consumes one char and returns it.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances by `len` bytes, clamped to the end of input.
    ///
    /// Callers pass lengths of matched prefixes, which always end on a
    /// char boundary.
    pub(crate) fn advance(&mut self, len: usize) -> &'a str {
        let start = self.pos;
        self.pos = (self.pos + len).min(self.src.len());
        self.since(start)
    }

    /// Consumes chars while `pred` holds and returns the consumed slice.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.since(start)
    }

    /// Consumes up to and including the first occurrence of `terminator`,
    /// or to end of input when it never appears.
    pub(crate) fn eat_through(&mut self, terminator: &str) -> &'a str {
        let start = self.pos;
        self.pos = match self.rest().find(terminator) {
            Some(idx) => self.pos + idx + terminator.len(),
            None => self.src.len(),
        };
        self.since(start)
    }

    /// Consumes a quote-delimited literal starting at the current quote
    /// char. Backslash escapes the next char. Stops after the matching
    /// quote, at end of input, or (when `stop_at_newline`) just before an
    /// unescaped newline.
    pub(crate) fn eat_quoted(&mut self, stop_at_newline: bool) -> &'a str {
        let start = self.pos;
        let Some(quote) = self.bump() else {
            return "";
        };
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.bump();
                self.bump();
                continue;
            }
            if c == '\n' && stop_at_newline {
                break;
            }
            self.bump();
            if c == quote {
                break;
            }
        }
        self.since(start)
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
