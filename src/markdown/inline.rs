//! Inline markdown: images, links, code spans and emphasis.
//!
//! Rules run as whole-string regex substitutions in a fixed order. The
//! order matters: escaping comes first so the tags inserted by later rules
//! are the only raw markup in the result.
//!
//! Images, link targets and code spans are parked in a [`Stash`] as soon as
//! they are built, so the emphasis rules never see their URLs or code text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;

struct Rule {
    pattern: &'static LazyLock<Regex>,
    replacement: &'static str,
}

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("valid image regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid code span regex"));
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}(\d+)\x{E001}").expect("valid placeholder regex"));
static BOLD_ITALIC_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").expect("valid bold italic regex"));
static BOLD_ITALIC_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"___(.+?)___").expect("valid bold italic regex"));
static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("valid bold regex"));
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid italic regex"));
// `_` is a word character, so `\b_` only matches after a non-word char.
// This keeps snake_case_names intact.
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b_([^_]+)_\b").expect("valid italic regex"));

static EMPHASIS: [Rule; 6] = [
    Rule {
        pattern: &BOLD_ITALIC_STARS,
        replacement: "<strong><em>${1}</em></strong>",
    },
    Rule {
        pattern: &BOLD_ITALIC_UNDERSCORES,
        replacement: "<strong><em>${1}</em></strong>",
    },
    Rule {
        pattern: &BOLD_STARS,
        replacement: "<strong>${1}</strong>",
    },
    Rule {
        pattern: &BOLD_UNDERSCORES,
        replacement: "<strong>${1}</strong>",
    },
    Rule {
        pattern: &ITALIC_STAR,
        replacement: "<em>${1}</em>",
    },
    Rule {
        pattern: &ITALIC_UNDERSCORE,
        replacement: "<em>${1}</em>",
    },
];

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

/// Finished markup held out of the text while the emphasis rules run.
///
/// Each fragment is replaced by `OPEN index CLOSE`. A fragment may itself
/// contain placeholders, but only for fragments stashed before it.
#[derive(Default)]
struct Stash {
    fragments: Vec<String>,
}

impl Stash {
    fn hold(&mut self, fragment: String) -> String {
        let placeholder = format!("{OPEN}{}{CLOSE}", self.fragments.len());
        self.fragments.push(fragment);
        placeholder
    }

    fn restore(&self, text: &str) -> String {
        self.restore_below(text, self.fragments.len())
    }

    // A fragment only refers to fragments stashed before it.
    fn restore_below(&self, text: &str, limit: usize) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                match caps[1].parse::<usize>() {
                    Ok(index) if index < limit => {
                        self.restore_below(&self.fragments[index], index)
                    }
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Converts inline markdown in `text` to HTML.
///
/// With `sanitize` the text is HTML-escaped before any rule runs; without
/// it, raw HTML in `text` passes through untouched.
pub fn parse_inline(text: &str, sanitize: bool) -> String {
    let html = if sanitize {
        escape_html(text)
    } else {
        text.to_string()
    };
    let mut stash = Stash::default();
    // Literal marker chars in the input become placeholders too, so every
    // `OPEN` left in the text belongs to the stash.
    let html = if html.contains(OPEN) {
        let literal = stash.hold(OPEN.to_string());
        html.replace(OPEN, &literal)
    } else {
        html
    };

    let html = IMAGE.replace_all(&html, |caps: &Captures<'_>| {
        stash.hold(format!(r#"<img src="{}" alt="{}" />"#, &caps[2], &caps[1]))
    });
    // Link text stays visible so it can still carry emphasis.
    let html = LINK.replace_all(&html, |caps: &Captures<'_>| {
        let open = stash.hold(format!(r#"<a href="{}">"#, &caps[2]));
        format!("{open}{}</a>", &caps[1])
    });
    let mut html = CODE
        .replace_all(&html, |caps: &Captures<'_>| {
            stash.hold(format!("<code>{}</code>", &caps[1]))
        })
        .into_owned();

    for rule in &EMPHASIS {
        let regex: &Regex = rule.pattern;
        html = regex.replace_all(&html, rule.replacement).into_owned();
    }
    stash.restore(&html)
}

#[cfg(test)]
#[path = "inline_tests.rs"]
mod tests;
