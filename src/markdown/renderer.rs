//! Renderer: turns `BlockToken`s into HTML, one element per token.
//!
//! This is the second stage of the markdown pipeline. Elements are joined
//! with newlines; blockquotes recurse into the full pipeline.

use crate::escape::escape_html;

use super::inline::parse_inline;
use super::parser::BlockToken;
use super::{MarkdownOptions, render_markdown};

/// Renders block tokens to HTML.
pub fn render_tokens(tokens: &[BlockToken], options: &MarkdownOptions) -> String {
    tokens
        .iter()
        .map(|token| render_token(token, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_token(token: &BlockToken, options: &MarkdownOptions) -> String {
    let sanitize = options.sanitize;
    match token {
        BlockToken::Heading { level, content } => {
            format!("<h{level}>{}</h{level}>", parse_inline(content, sanitize))
        }
        // Code is always escaped, whatever `sanitize` says.
        BlockToken::CodeBlock { language, content } => {
            let class = if language.is_empty() {
                String::new()
            } else {
                format!(" class=\"language-{}\"", escape_html(language))
            };
            format!("<pre><code{class}>{}</code></pre>", escape_html(content))
        }
        BlockToken::Blockquote { content } => {
            tracing::trace!(len = content.len(), "rendering nested blockquote");
            format!("<blockquote>{}</blockquote>", render_markdown(content, options))
        }
        BlockToken::UnorderedList { items } => {
            format!("<ul>{}</ul>", list_items(items, sanitize))
        }
        BlockToken::OrderedList { items, start } => {
            let start_attr = if *start == 1 {
                String::new()
            } else {
                format!(" start=\"{start}\"")
            };
            format!("<ol{start_attr}>{}</ol>", list_items(items, sanitize))
        }
        BlockToken::HorizontalRule => "<hr />".to_string(),
        BlockToken::Paragraph { content } => {
            format!("<p>{}</p>", parse_inline(content, sanitize).replace('\n', "<br/>"))
        }
    }
}

fn list_items(items: &[String], sanitize: bool) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", parse_inline(item, sanitize)))
        .collect()
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
