//! HTML highlighter.
//!
//! A state machine over text, tag names and attributes. The bodies of
//! `<style>` and `<script>` elements are handed to the CSS and JavaScript
//! highlighters as opaque substrings; they are never re-parsed as HTML.

use std::sync::LazyLock;

use regex::Regex;

use super::cursor::Cursor;
use super::{Markup, SyntaxClass, highlight_css, highlight_javascript};

static STYLE_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(\s*)/(\s*)(style)(\s*)>").expect("valid style close regex")
});
static SCRIPT_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(\s*)/(\s*)(script)(\s*)>").expect("valid script close regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    TagName,
    AttributeName,
    AttributeEquals,
    AttributeValue,
}

/// Elements whose content belongs to another language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Embedded {
    Style,
    Script,
}

impl Embedded {
    fn from_tag(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("style") {
            Some(Self::Style)
        } else if name.eq_ignore_ascii_case("script") {
            Some(Self::Script)
        } else {
            None
        }
    }

    fn close_tag(self) -> &'static Regex {
        match self {
            Self::Style => &STYLE_CLOSE,
            Self::Script => &SCRIPT_CLOSE,
        }
    }

    fn highlight(self, body: &str) -> String {
        match self {
            Self::Style => highlight_css(body),
            Self::Script => highlight_javascript(body),
        }
    }
}

struct HtmlScanner<'a> {
    cur: Cursor<'a>,
    out: Markup,
    state: State,
    closing: bool,
}

impl<'a> HtmlScanner<'a> {
    fn new(code: &'a str) -> Self {
        Self {
            cur: Cursor::new(code),
            out: Markup::with_capacity(code.len()),
            state: State::Text,
            closing: false,
        }
    }

    fn run(mut self) -> String {
        while !self.cur.is_eof() {
            match self.state {
                State::Text => self.text(),
                State::TagName => self.tag_name(),
                State::AttributeName => self.attribute_name(),
                State::AttributeEquals => self.attribute_equals(),
                State::AttributeValue => self.attribute_value(),
            }
        }
        self.out.finish()
    }

    fn text(&mut self) {
        if self.cur.starts_with("<!--") {
            let comment = self.cur.eat_through("-->");
            self.out.span(SyntaxClass::Comment, comment);
            return;
        }
        if self.cur.starts_with_ignore_case("<!DOCTYPE") {
            let doctype = self.cur.eat_through(">");
            self.out.span(SyntaxClass::Doctype, doctype);
            return;
        }
        if self.cur.starts_with("<![CDATA[") {
            let cdata = self.cur.eat_through("]]>");
            self.out.span(SyntaxClass::Comment, cdata);
            return;
        }

        if self.cur.peek() != Some('<') {
            let run = self.cur.eat_while(|c| c != '<');
            self.out.text(run);
            return;
        }

        let opens_tag = self.cur.peek_nth(1).is_some_and(|c| c.is_ascii_alphabetic());
        let closes_tag = self.cur.peek_nth(1) == Some('/')
            && self.cur.peek_nth(2).is_some_and(|c| c.is_ascii_alphabetic());

        if opens_tag || closes_tag {
            let open = self.cur.advance(if closes_tag { 2 } else { 1 });
            self.out.span(SyntaxClass::Punctuation, open);
            self.closing = closes_tag;
            self.state = State::TagName;
        } else {
            let lone = self.cur.advance(1);
            self.out.text(lone);
        }
    }

    fn tag_name(&mut self) {
        let name = self.cur.eat_while(is_tag_name_char);
        self.out.span(SyntaxClass::Tag, name);
        self.state = State::AttributeName;

        if !self.closing {
            if let Some(kind) = Embedded::from_tag(name) {
                self.embedded(kind);
            }
        }
    }

    /// Highlights the rest of a `<style>`/`<script>` opening tag, delegates
    /// the element body and emits the closing tag. Does nothing when the
    /// opening tag never ends, is self-closing, or has no closing tag, in
    /// which case scanning continues as ordinary HTML.
    fn embedded(&mut self, kind: Embedded) {
        let rest = self.cur.rest();
        let Some(tag_len) = opening_tag_len(rest) else {
            return;
        };
        if rest[..tag_len].ends_with("/>") {
            return;
        }
        let Some(close) = kind.close_tag().captures(&rest[tag_len..]) else {
            return;
        };
        let Some(whole) = close.get(0) else {
            return;
        };

        let attributes = self.cur.advance(tag_len);
        self.out.raw(&highlight_tag_attributes(attributes));

        let body = self.cur.advance(whole.start());
        tracing::trace!(?kind, len = body.len(), "delegating embedded content");
        self.out.raw(&kind.highlight(body));

        let (ws_open, ws_slash, name, ws_close) = (&close[1], &close[2], &close[3], &close[4]);
        if ws_open.is_empty() {
            self.out.span(SyntaxClass::Punctuation, "</");
        } else {
            self.out.span(SyntaxClass::Punctuation, "<");
            self.out.text(ws_open);
            self.out.span(SyntaxClass::Punctuation, "/");
        }
        self.out.text(ws_slash);
        self.out.span(SyntaxClass::Tag, name);
        self.out.text(ws_close);
        self.out.span(SyntaxClass::Punctuation, ">");

        self.cur.advance(whole.len());
        self.state = State::Text;
    }

    fn attribute_name(&mut self) {
        match self.cur.peek() {
            Some(c) if c.is_whitespace() => {
                let ws = self.cur.eat_while(char::is_whitespace);
                self.out.text(ws);
            }
            Some('>') => self.close_tag(1),
            Some('/') if self.cur.starts_with("/>") => self.close_tag(2),
            // A new tag before this one closed: give up on the broken tag.
            Some('<') => self.state = State::Text,
            Some('=') => self.state = State::AttributeEquals,
            Some(_) => {
                let name = self.cur.eat_while(is_attribute_name_char);
                if name.is_empty() {
                    let start = self.cur.pos();
                    self.cur.bump();
                    let stray = self.cur.since(start);
                    self.out.text(stray);
                } else {
                    self.out.span(SyntaxClass::Attribute, name);
                    self.state = State::AttributeEquals;
                }
            }
            None => {}
        }
    }

    fn attribute_equals(&mut self) {
        match self.cur.peek() {
            Some(c) if c.is_whitespace() => {
                let ws = self.cur.eat_while(char::is_whitespace);
                self.out.text(ws);
            }
            Some('=') => {
                let eq = self.cur.advance(1);
                self.out.span(SyntaxClass::Punctuation, eq);
                self.state = State::AttributeValue;
            }
            _ => self.state = State::AttributeName,
        }
    }

    fn attribute_value(&mut self) {
        match self.cur.peek() {
            Some(c) if c.is_whitespace() => {
                let ws = self.cur.eat_while(char::is_whitespace);
                self.out.text(ws);
            }
            Some('"' | '\'') => {
                let value = eat_quoted_value(&mut self.cur);
                self.out.span(SyntaxClass::String, value);
                self.state = State::AttributeName;
            }
            Some('>') | None => self.state = State::AttributeName,
            Some(_) => {
                let value = eat_unquoted_value(&mut self.cur);
                self.out.span(SyntaxClass::String, value);
                self.state = State::AttributeName;
            }
        }
    }

    fn close_tag(&mut self, len: usize) {
        let close = self.cur.advance(len);
        self.out.span(SyntaxClass::Punctuation, close);
        self.state = State::Text;
    }
}

/// Highlights HTML source.
pub fn highlight_html(code: &str) -> String {
    HtmlScanner::new(code).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrState {
    Space,
    AttributeName,
    Equals,
    Value,
}

/// Highlights the attribute part of an opening tag: everything after the
/// tag name up to and including its closing `>` or `/>`.
pub fn highlight_tag_attributes(range: &str) -> String {
    let mut out = Markup::with_capacity(range.len());
    let mut cur = Cursor::new(range);
    let mut state = AttrState::Space;

    while let Some(c) = cur.peek() {
        if c.is_whitespace() {
            out.text(cur.eat_while(char::is_whitespace));
            continue;
        }
        state = match state {
            AttrState::Space => {
                if cur.starts_with("/>") {
                    out.span(SyntaxClass::Punctuation, cur.advance(2));
                    AttrState::Space
                } else if c == '>' {
                    out.span(SyntaxClass::Punctuation, cur.advance(1));
                    AttrState::Space
                } else {
                    AttrState::AttributeName
                }
            }
            AttrState::AttributeName => {
                let name = cur.eat_while(is_attribute_name_char);
                if name.is_empty() {
                    let start = cur.pos();
                    cur.bump();
                    out.text(cur.since(start));
                    AttrState::Space
                } else {
                    out.span(SyntaxClass::Attribute, name);
                    AttrState::Equals
                }
            }
            AttrState::Equals if c == '=' => {
                out.span(SyntaxClass::Punctuation, cur.advance(1));
                AttrState::Value
            }
            AttrState::Equals => AttrState::Space,
            AttrState::Value if c == '"' || c == '\'' => {
                out.span(SyntaxClass::String, eat_quoted_value(&mut cur));
                AttrState::Space
            }
            AttrState::Value if c == '>' => AttrState::Space,
            AttrState::Value => {
                out.span(SyntaxClass::String, eat_unquoted_value(&mut cur));
                AttrState::Space
            }
        };
    }

    out.finish()
}

fn is_tag_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | ':' | '_' | '.')
}

fn is_attribute_name_char(c: char) -> bool {
    !(c.is_whitespace() || matches!(c, '=' | '>' | '<' | '/' | '"' | '\''))
}

/// Attribute values in quotes end only at the matching quote, so they may
/// contain `>` and newlines.
fn eat_quoted_value<'a>(cur: &mut Cursor<'a>) -> &'a str {
    let start = cur.pos();
    let quote = if cur.bump() == Some('\'') { "'" } else { "\"" };
    cur.eat_through(quote);
    cur.since(start)
}

fn eat_unquoted_value<'a>(cur: &mut Cursor<'a>) -> &'a str {
    cur.eat_while(|c| !(c.is_whitespace() || c == '>'))
}

/// Byte length of an opening tag's remainder, through its closing `>`,
/// skipping over quoted attribute values.
fn opening_tag_len(rest: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (idx, c) in rest.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(idx + 1),
            (None, _) => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
