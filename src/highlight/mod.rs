//! Syntax highlighting: converts source text into HTML with `syntax-*` spans.
//!
//! Each language has its own hand-written scanner. None of them builds a
//! token list; they write escaped text runs and classed spans straight
//! into a `Markup` buffer as they go. Stripping the spans from any output
//! and unescaping it gives back the input byte for byte.
//!
//! Scanners never fail. Malformed or half-typed input only degrades the
//! classification, which is what a live editor needs.

mod css;
mod cursor;
mod html;
mod javascript;
mod json;
mod yaml;

use serde::Deserialize;

use crate::escape::{escape_html, push_escaped};

pub use css::highlight_css;
pub use html::{highlight_html, highlight_tag_attributes};
pub use javascript::{can_precede_regex, highlight_javascript};
pub use json::highlight_json;
pub use yaml::{highlight_yaml, highlight_yaml_value};

/// Source languages understood by `highlight_syntax()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Format {
    Json,
    Yaml,
    /// Escaped plain text, no spans.
    #[default]
    Text,
    /// Treated like `Text`; markdown is rendered, not highlighted.
    Markdown,
    Html,
    Css,
    JavaScript,
}

impl Format {
    /// Resolves a format name, case-insensitively.
    ///
    /// Unknown names resolve to `Format::Text` so that callers always get
    /// safely escaped output.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            "markdown" | "md" => Self::Markdown,
            "html" | "htm" => Self::Html,
            "css" => Self::Css,
            "javascript" | "js" => Self::JavaScript,
            _ => Self::Text,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Css => "css",
            Self::JavaScript => "javascript",
        }
    }
}

impl From<String> for Format {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Options for `highlight_syntax()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HighlightOptions {
    pub format: Format,
}

/// Highlights `code` according to `options.format`.
///
/// `Text` and `Markdown` produce exactly the escaped input.
pub fn highlight_syntax(code: &str, options: &HighlightOptions) -> String {
    tracing::debug!(format = options.format.name(), len = code.len(), "highlighting");
    match options.format {
        Format::Json => highlight_json(code),
        Format::Yaml => highlight_yaml(code),
        Format::Html => highlight_html(code),
        Format::Css => highlight_css(code),
        Format::JavaScript => highlight_javascript(code),
        Format::Text | Format::Markdown => escape_html(code),
    }
}

/// The fixed CSS class vocabulary emitted by the highlighters.
///
/// Stylesheets target these names directly; they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxClass {
    Selector,
    Property,
    Value,
    Comment,
    AtRule,
    String,
    Tag,
    Attribute,
    Punctuation,
    Doctype,
    Key,
    Number,
    Boolean,
    Null,
    Keyword,
    Template,
    Regex,
    Operator,
}

impl SyntaxClass {
    pub const ALL: [SyntaxClass; 18] = [
        Self::Selector,
        Self::Property,
        Self::Value,
        Self::Comment,
        Self::AtRule,
        Self::String,
        Self::Tag,
        Self::Attribute,
        Self::Punctuation,
        Self::Doctype,
        Self::Key,
        Self::Number,
        Self::Boolean,
        Self::Null,
        Self::Keyword,
        Self::Template,
        Self::Regex,
        Self::Operator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Selector => "syntax-selector",
            Self::Property => "syntax-property",
            Self::Value => "syntax-value",
            Self::Comment => "syntax-comment",
            Self::AtRule => "syntax-at-rule",
            Self::String => "syntax-string",
            Self::Tag => "syntax-tag",
            Self::Attribute => "syntax-attribute",
            Self::Punctuation => "syntax-punctuation",
            Self::Doctype => "syntax-doctype",
            Self::Key => "syntax-key",
            Self::Number => "syntax-number",
            Self::Boolean => "syntax-boolean",
            Self::Null => "syntax-null",
            Self::Keyword => "syntax-keyword",
            Self::Template => "syntax-template",
            Self::Regex => "syntax-regex",
            Self::Operator => "syntax-operator",
        }
    }
}

/// Output buffer shared by the scanners.
pub(crate) struct Markup {
    out: String,
}

impl Markup {
    pub(crate) fn with_capacity(input_len: usize) -> Self {
        // Spans roughly double typical source.
        Self {
            out: String::with_capacity(input_len * 2),
        }
    }

    /// Writes `text` wrapped in a span of the given class. Empty text
    /// writes nothing.
    pub(crate) fn span(&mut self, class: SyntaxClass, text: &str) {
        if text.is_empty() {
            return;
        }
        self.out.push_str("<span class=\"");
        self.out.push_str(class.as_str());
        self.out.push_str("\">");
        push_escaped(&mut self.out, text);
        self.out.push_str("</span>");
    }

    /// Writes unclassified, escaped text.
    pub(crate) fn text(&mut self, text: &str) {
        push_escaped(&mut self.out, text);
    }

    /// Writes markup produced by another highlighter.
    pub(crate) fn raw(&mut self, html: &str) {
        self.out.push_str(html);
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
