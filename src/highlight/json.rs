//! JSON highlighter.
//!
//! A character scanner rather than a parser, so partial or invalid JSON
//! still gets highlighted.

use std::sync::LazyLock;

use regex::Regex;

use super::cursor::Cursor;
use super::{Markup, SyntaxClass};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?").expect("valid JSON number regex")
});

/// A string followed by optional whitespace and a colon is an object key.
static KEY_LOOKAHEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*:").expect("valid key lookahead regex"));

/// Highlights JSON source.
pub fn highlight_json(code: &str) -> String {
    let mut out = Markup::with_capacity(code.len());
    let mut cur = Cursor::new(code);

    while let Some(c) = cur.peek() {
        if c == '"' {
            let literal = cur.eat_quoted(false);
            let class = if KEY_LOOKAHEAD.is_match(cur.rest()) {
                SyntaxClass::Key
            } else {
                SyntaxClass::String
            };
            out.span(class, literal);
            continue;
        }

        if let Some(m) = NUMBER.find(cur.rest()) {
            out.span(SyntaxClass::Number, cur.advance(m.end()));
            continue;
        }

        if cur.starts_with("true") {
            out.span(SyntaxClass::Boolean, cur.advance(4));
            continue;
        }
        if cur.starts_with("false") {
            out.span(SyntaxClass::Boolean, cur.advance(5));
            continue;
        }
        if cur.starts_with("null") {
            out.span(SyntaxClass::Null, cur.advance(4));
            continue;
        }

        if matches!(c, '{' | '}' | '[' | ']' | ',' | ':') {
            out.span(SyntaxClass::Punctuation, cur.advance(1));
            continue;
        }

        let start = cur.pos();
        cur.bump();
        out.text(cur.since(start));
    }

    out.finish()
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
