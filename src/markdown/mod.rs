//! Lightweight markdown → HTML renderer.
//!
//! Two stages: `parser::tokenize_blocks()` splits the source into block
//! tokens, then `renderer::render_tokens()` turns each token into one
//! HTML element, running `inline::parse_inline()` on its text.
//!
//! The dialect is deliberately small: ATX headings, fenced code,
//! blockquotes, flat lists, rules and paragraphs. Anything else renders
//! as paragraph text.

mod inline;
mod parser;
mod renderer;

use serde::Deserialize;

pub use inline::parse_inline;
pub use parser::{BlockToken, tokenize_blocks};
pub use renderer::render_tokens;

/// Options for `render_markdown()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Escape raw HTML in the source. Code blocks are escaped either way.
    pub sanitize: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self { sanitize: true }
    }
}

/// Renders markdown to HTML.
pub fn render_markdown(markdown: &str, options: &MarkdownOptions) -> String {
    tracing::debug!(len = markdown.len(), sanitize = options.sanitize, "rendering markdown");
    let tokens = tokenize_blocks(markdown);
    render_tokens(&tokens, options)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
