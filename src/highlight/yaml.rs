//! YAML highlighter.
//!
//! Works line by line. Block scalars, multi-line quoted strings and
//! multi-line plain scalars span several lines, so a small `Multiline`
//! state is carried from one line to the next. The output always has
//! exactly as many lines as the input.

use std::sync::LazyLock;

use regex::Regex;

use super::{Markup, SyntaxClass};

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(#.*)$").expect("valid comment regex"));
static DOCUMENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(---|\.\.\.)(\s*)$").expect("valid marker regex"));
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([^:]+?)(:)(\s*)(.*)$").expect("valid key-value regex")
});
static ARRAY_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(-)(\s*)(.*)$").expect("valid array item regex"));
static BLOCK_SCALAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[|>][-+]?\d*$").expect("valid block scalar regex"));

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["'].*["']$"#).expect("valid quoted regex"));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?$").expect("valid number regex")
});
static BOOLEAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:true|false|yes|no|on|off)$").expect("valid boolean regex")
});
static NULL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:null|~)$").expect("valid null regex"));
static EMPTY_FLOW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\[\s*\]|\{\s*\})$").expect("valid flow regex"));

/// A construct that continues onto following lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Multiline {
    None,
    /// `|` or `>` scalar; continues while lines are indented past `indent`.
    BlockScalar { indent: usize },
    /// A quoted value whose closing quote has not been seen yet.
    Quoted { quote: char },
    /// A plain value continued on more-indented lines.
    Unquoted { key_indent: usize },
}

/// Highlights YAML source.
pub fn highlight_yaml(code: &str) -> String {
    let lines: Vec<&str> = code.split('\n').collect();
    let mut rendered: Vec<String> = Vec::with_capacity(lines.len());
    let mut state = Multiline::None;

    for (idx, raw) in lines.iter().enumerate() {
        let (line, cr) = match raw.strip_suffix('\r') {
            Some(line) => (line, "\r"),
            None => (*raw, ""),
        };
        let next = lines
            .get(idx + 1)
            .map(|l| l.strip_suffix('\r').unwrap_or(*l));
        let mut out = Markup::with_capacity(line.len());

        state = match state {
            Multiline::BlockScalar { indent } | Multiline::Unquoted { key_indent: indent }
                if line.trim().is_empty() || indent_of(line) > indent =>
            {
                continuation(&mut out, line);
                state
            }
            Multiline::Quoted { quote } => quoted_continuation(&mut out, line, quote),
            _ => highlight_line(&mut out, line, next),
        };

        out.text(cr);
        rendered.push(out.finish());
    }

    rendered.join("\n")
}

/// Classifies a single scalar value (the part after `key:` or `- `).
pub fn highlight_yaml_value(value: &str) -> String {
    let mut out = Markup::with_capacity(value.len());
    push_value(&mut out, value);
    out.finish()
}

fn push_value(out: &mut Markup, value: &str) {
    if value.is_empty() {
        return;
    }
    let class = if QUOTED.is_match(value) {
        SyntaxClass::String
    } else if NUMBER.is_match(value) {
        SyntaxClass::Number
    } else if BOOLEAN.is_match(value) {
        SyntaxClass::Boolean
    } else if NULL.is_match(value) {
        SyntaxClass::Null
    } else if BLOCK_SCALAR.is_match(value) || EMPTY_FLOW.is_match(value) {
        SyntaxClass::Punctuation
    } else {
        SyntaxClass::String
    };
    out.span(class, value);
}

/// Highlights a line that is not inside a multi-line construct and
/// returns the state for the following line.
fn highlight_line(out: &mut Markup, line: &str, next: Option<&str>) -> Multiline {
    if let Some(caps) = DOCUMENT_MARKER.captures(line) {
        out.span(SyntaxClass::Punctuation, &caps[1]);
        out.text(&caps[2]);
        return Multiline::None;
    }

    if let Some(caps) = COMMENT.captures(line) {
        out.text(&caps[1]);
        out.span(SyntaxClass::Comment, &caps[2]);
        return Multiline::None;
    }

    // "- key: value" is an item holding a mapping, not a key named "- key".
    if let Some(caps) = ARRAY_ITEM.captures(line) {
        if !caps[3].is_empty() || caps[4].is_empty() {
            return array_item(out, &caps[1], &caps[3], &caps[4], next);
        }
    }

    if let Some(caps) = KEY_VALUE.captures(line) {
        let indent = &caps[1];
        out.text(indent);
        return pair(out, indent.len(), &caps[2], &caps[4], &caps[5], next);
    }

    if let Some(caps) = ARRAY_ITEM.captures(line) {
        return array_item(out, &caps[1], &caps[3], &caps[4], next);
    }

    out.text(line);
    Multiline::None
}

fn array_item(
    out: &mut Markup,
    indent: &str,
    space: &str,
    rest: &str,
    next: Option<&str>,
) -> Multiline {
    out.text(indent);
    out.span(SyntaxClass::Punctuation, "-");
    out.text(space);

    let column = indent.len() + 1 + space.len();
    if let Some(caps) = KEY_VALUE.captures(rest) {
        out.text(&caps[1]);
        return pair(out, column + caps[1].len(), &caps[2], &caps[4], &caps[5], next);
    }
    scalar(out, rest, indent.len(), next)
}

fn pair(
    out: &mut Markup,
    indent: usize,
    key: &str,
    space: &str,
    value: &str,
    next: Option<&str>,
) -> Multiline {
    out.span(SyntaxClass::Key, key);
    out.span(SyntaxClass::Punctuation, ":");
    out.text(space);
    scalar(out, value, indent, next)
}

/// Writes a value and detects whether it opens a multi-line construct.
fn scalar(out: &mut Markup, value: &str, indent: usize, next: Option<&str>) -> Multiline {
    let trimmed = value.trim_end();
    let trailing = &value[trimmed.len()..];

    let state = if BLOCK_SCALAR.is_match(trimmed) {
        out.span(SyntaxClass::Punctuation, trimmed);
        Multiline::BlockScalar { indent }
    } else if let Some(quote) = unclosed_quote(trimmed) {
        out.span(SyntaxClass::String, trimmed);
        Multiline::Quoted { quote }
    } else if !trimmed.is_empty() && continues_plain(next, indent) {
        out.span(SyntaxClass::String, trimmed);
        Multiline::Unquoted { key_indent: indent }
    } else {
        push_value(out, trimmed);
        Multiline::None
    };

    out.text(trailing);
    state
}

/// Returns the quote char when `value` opens a quoted string that does not
/// close on the same line.
fn unclosed_quote(value: &str) -> Option<char> {
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    match find_closing_quote(&value[1..], quote) {
        Some(_) => None,
        None => Some(quote),
    }
}

/// Byte index of the first unescaped `quote` in `s`.
///
/// Double-quoted strings escape with a backslash; single-quoted strings
/// escape a quote by doubling it.
fn find_closing_quote(s: &str, quote: char) -> Option<usize> {
    let mut chars = s.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if quote == '"' && c == '\\' {
            chars.next();
        } else if c == quote {
            if quote == '\'' && chars.peek().is_some_and(|(_, n)| *n == '\'') {
                chars.next();
                continue;
            }
            return Some(idx);
        }
    }
    None
}

/// Whether a plain value continues on the next line: that line must be
/// more indented and must not start a key, an item or a comment.
fn continues_plain(next: Option<&str>, indent: usize) -> bool {
    let Some(next) = next else {
        return false;
    };
    let body = next.trim_start();
    !body.is_empty()
        && indent_of(next) > indent
        && !body.starts_with('#')
        && !(body == "-" || body.starts_with("- "))
        && !KEY_VALUE.is_match(next)
}

fn continuation(out: &mut Markup, line: &str) {
    let body = line.trim_start();
    out.text(&line[..line.len() - body.len()]);
    out.span(SyntaxClass::String, body);
}

fn quoted_continuation(out: &mut Markup, line: &str, quote: char) -> Multiline {
    match find_closing_quote(line, quote) {
        Some(end) => {
            let close = end + quote.len_utf8();
            continuation(out, &line[..close]);
            out.text(&line[close..]);
            Multiline::None
        }
        None => {
            continuation(out, line);
            Multiline::Quoted { quote }
        }
    }
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

#[cfg(test)]
#[path = "yaml_tests.rs"]
mod tests;
