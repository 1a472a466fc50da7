//! JavaScript highlighter.
//!
//! There is no context enum here. The scanner remembers the last
//! significant token it emitted and uses it to decide whether a `/`
//! starts a regex literal or is a division operator.
//!
//! That rule is a heuristic. Input such as `a++ / 2 / 3` can still be
//! misread, and that limitation is accepted: a full JS grammar is out of
//! scope for a highlighter.

use std::sync::LazyLock;

use regex::Regex;

use super::cursor::Cursor;
use super::{Markup, SyntaxClass};

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from",
    "function", "get", "if", "import", "in", "instanceof", "let", "new", "of", "return",
    "set", "static", "super", "switch", "this", "throw", "try", "typeof", "var", "void",
    "while", "with", "yield",
];

const BOOLEANS: &[&str] = &["true", "false"];
const NULLS: &[&str] = &["null", "undefined"];

/// Longest first so that `starts_with` finds the longest match.
const OPERATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "**", "<<", ">>", "+", "-", "*", "/", "%", "=", "<", ">", "!", "~", "?", ":",
    "&", "|", "^",
];

const PUNCTUATION: &[char] = &['{', '}', '(', ')', '[', ']', ';', ',', '.'];

/// Tokens after which an expression (and therefore a regex) may begin.
const REGEX_PRECEDERS: &[&str] = &[
    "(", ",", "=", ":", "[", "!", "&", "|", "?", "{", "}", ";", "+", "-", "*", "%", "<", ">",
    "~", "^", "=>", "==", "===", "!=", "!==", "&&", "||", "??", "+=", "-=", "*=", "/=", "%=",
    "<=", ">=", "**", "**=", "...", "&=", "|=", "^=", "&&=", "||=", "??=", "<<", ">>", ">>>",
    "<<=", ">>=", ">>>=",
];

const REGEX_KEYWORDS: &[&str] = &[
    "return", "throw", "case", "delete", "void", "typeof", "instanceof", "in", "of", "new",
];

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:0[xX][0-9a-fA-F_]+n?|0[oO][0-7_]+n?|0[bB][01_]+n?|(?:\d[\d_]*(?:\.\d[\d_]*)?|\.\d[\d_]*)(?:[eE][+-]?\d+)?n?)",
    )
    .expect("valid JS number regex")
});

/// Whether a `/` following `last_token` may open a regex literal.
pub fn can_precede_regex(last_token: &str) -> bool {
    last_token.is_empty()
        || REGEX_PRECEDERS.contains(&last_token)
        || REGEX_KEYWORDS.contains(&last_token)
}

/// Highlights JavaScript source.
pub fn highlight_javascript(code: &str) -> String {
    let mut out = Markup::with_capacity(code.len());
    let mut cur = Cursor::new(code);
    let mut last_token: &str = "";

    while let Some(c) = cur.peek() {
        if cur.starts_with("//") {
            out.span(SyntaxClass::Comment, cur.eat_while(|c| c != '\n'));
            continue;
        }
        if cur.starts_with("/*") {
            out.span(SyntaxClass::Comment, cur.eat_through("*/"));
            continue;
        }

        if c == '`' {
            last_token = eat_template(&mut cur);
            out.span(SyntaxClass::Template, last_token);
            continue;
        }

        if c == '"' || c == '\'' {
            last_token = cur.eat_quoted(true);
            out.span(SyntaxClass::String, last_token);
            continue;
        }

        // Comments were ruled out above, so the next char is not `/` or `*`.
        if c == '/' && can_precede_regex(last_token) {
            if let Some(len) = regex_literal_len(cur.rest()) {
                last_token = cur.advance(len);
                out.span(SyntaxClass::Regex, last_token);
                continue;
            }
        }

        if c.is_ascii_digit() || (c == '.' && cur.peek_nth(1).is_some_and(|n| n.is_ascii_digit()))
        {
            if let Some(m) = NUMBER.find(cur.rest()) {
                last_token = cur.advance(m.end());
                out.span(SyntaxClass::Number, last_token);
                continue;
            }
        }

        if is_ident_start(c) {
            let word = cur.eat_while(is_ident_continue);
            let class = if KEYWORDS.contains(&word) {
                Some(SyntaxClass::Keyword)
            } else if BOOLEANS.contains(&word) {
                Some(SyntaxClass::Boolean)
            } else if NULLS.contains(&word) {
                Some(SyntaxClass::Null)
            } else {
                None
            };
            match class {
                Some(class) => out.span(class, word),
                None => out.text(word),
            }
            last_token = word;
            continue;
        }

        if let Some(op) = OPERATORS.iter().find(|op| cur.starts_with(op)) {
            last_token = cur.advance(op.len());
            out.span(SyntaxClass::Operator, last_token);
            continue;
        }

        if PUNCTUATION.contains(&c) {
            last_token = cur.advance(1);
            out.span(SyntaxClass::Punctuation, last_token);
            continue;
        }

        if c.is_whitespace() {
            out.text(cur.eat_while(char::is_whitespace));
            continue;
        }

        let start = cur.pos();
        cur.bump();
        last_token = cur.since(start);
        out.text(last_token);
    }

    out.finish()
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Consumes a template literal. `${ ... }` interpolations are skipped by
/// brace counting; their contents are not highlighted.
fn eat_template<'a>(cur: &mut Cursor<'a>) -> &'a str {
    let start = cur.pos();
    cur.bump();
    let mut depth = 0usize;
    while let Some(c) = cur.bump() {
        match c {
            '\\' => {
                cur.bump();
            }
            '$' if depth == 0 && cur.peek() == Some('{') => {
                cur.bump();
                depth = 1;
            }
            '{' if depth > 0 => depth += 1,
            '}' if depth > 0 => depth -= 1,
            '`' if depth == 0 => break,
            _ => {}
        }
    }
    cur.since(start)
}

/// Byte length of the regex literal at the start of `rest` (which begins
/// with `/`), flags included. `None` when the literal does not close on
/// the same line.
fn regex_literal_len(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices().skip(1);
    let mut in_class = false;
    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return None,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                let body_end = idx + 1;
                let flags = rest[body_end..]
                    .bytes()
                    .take_while(u8::is_ascii_alphabetic)
                    .count();
                return Some(body_end + flags);
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "javascript_tests.rs"]
mod tests;
