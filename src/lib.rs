//! Text → HTML utilities: syntax highlighters and a markdown renderer.
//!
//! Every public function here is pure and synchronous. It owns only its
//! input and local scan state, so calls are safe from any thread.
//!
//! - `highlight` converts JSON, YAML, HTML, CSS or JavaScript into HTML
//!   with `syntax-*` classed spans.
//! - `markdown` renders a small markdown dialect to escaped HTML.
//! - `fenced` parses JSON/YAML payloads that may be wrapped in a code fence.
//!
//! Callers insert the returned HTML with a raw-HTML API. These functions
//! guarantee the content is escaped; the sink is the caller's concern.

pub mod escape;
pub mod fenced;
pub mod highlight;
pub mod markdown;

pub use escape::{escape_html, unescape_html};
pub use fenced::{ParseError, parse_markdown_json, parse_markdown_yaml, strip_code_fence};
pub use highlight::{Format, HighlightOptions, SyntaxClass, highlight_syntax};
pub use markdown::{BlockToken, MarkdownOptions, render_markdown};
