//! CSS highlighter.
//!
//! One forward pass. Plain characters collect in a buffer that is flushed
//! at each token boundary and classified by the current `Context`.

use super::cursor::Cursor;
use super::{Markup, SyntaxClass};

/// What the scanner expects the buffered token to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Selector,
    Property,
    Value,
    AtRule,
}

impl Context {
    fn class(self) -> SyntaxClass {
        match self {
            Context::Selector => SyntaxClass::Selector,
            Context::Property => SyntaxClass::Property,
            Context::Value => SyntaxClass::Value,
            Context::AtRule => SyntaxClass::AtRule,
        }
    }
}

struct CssScanner<'a> {
    cur: Cursor<'a>,
    out: Markup,
    context: Context,
    depth: usize,
    buffer: String,
}

impl<'a> CssScanner<'a> {
    fn new(code: &'a str) -> Self {
        Self {
            cur: Cursor::new(code),
            out: Markup::with_capacity(code.len()),
            context: Context::Selector,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.out.span(self.context.class(), &self.buffer);
            self.buffer.clear();
        }
    }

    fn punctuation(&mut self, c: char) {
        self.flush();
        let start = self.cur.pos();
        self.cur.advance(c.len_utf8());
        self.out.span(SyntaxClass::Punctuation, self.cur.since(start));
    }

    fn run(mut self) -> String {
        while let Some(c) = self.cur.peek() {
            if self.cur.starts_with("/*") {
                self.flush();
                let comment = self.cur.eat_through("*/");
                self.out.span(SyntaxClass::Comment, comment);
                continue;
            }

            match c {
                '"' | '\'' => {
                    self.flush();
                    let literal = self.cur.eat_quoted(false);
                    self.out.span(SyntaxClass::String, literal);
                }
                '@' => {
                    self.flush();
                    self.context = Context::AtRule;
                    let name = self
                        .cur
                        .eat_while(|c| !(c.is_whitespace() || c == '{' || c == ';'));
                    self.buffer.push_str(name);
                    self.flush();
                    self.context = Context::Selector;
                }
                '{' => {
                    self.punctuation(c);
                    self.depth += 1;
                    self.context = Context::Property;
                }
                '}' => {
                    self.punctuation(c);
                    self.depth = self.depth.saturating_sub(1);
                    self.context = Context::Selector;
                }
                // Inside a selector a colon belongs to a pseudo-class.
                ':' if self.context == Context::Selector => {
                    self.buffer.push(c);
                    self.cur.bump();
                }
                ':' => {
                    self.punctuation(c);
                    self.context = Context::Value;
                }
                ';' => {
                    self.punctuation(c);
                    self.context = if self.depth > 0 {
                        Context::Property
                    } else {
                        Context::Selector
                    };
                }
                ',' | '(' | ')' => self.punctuation(c),
                c if c.is_whitespace() => {
                    self.flush();
                    let ws = self.cur.eat_while(char::is_whitespace);
                    self.out.text(ws);
                }
                c => {
                    self.buffer.push(c);
                    self.cur.bump();
                }
            }
        }

        self.flush();
        self.out.finish()
    }
}

/// Highlights CSS source.
pub fn highlight_css(code: &str) -> String {
    CssScanner::new(code).run()
}

#[cfg(test)]
#[path = "css_tests.rs"]
mod tests;
