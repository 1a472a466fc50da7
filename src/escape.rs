//! HTML escaping shared by every highlighter and the markdown renderer.
//!
//! This is a **leaf module**. Everything that reaches an output string
//! without markup goes through `push_escaped()`, so the five characters
//! below never appear raw in generated HTML.

/// Escapes `&`, `<`, `>`, `"` and `'` for safe inclusion in HTML text
/// and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Appends `text` to `out`, escaping as in `escape_html()`.
pub fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
}

/// Reverses `escape_html()`.
///
/// Only the five entities produced by `escape_html()` are recognised.
/// `&amp;` is replaced last so that an escaped entity such as `&amp;lt;`
/// comes back as the literal text `&lt;`.
pub fn unescape_html(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
