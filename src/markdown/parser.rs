//! Block tokenizer: splits markdown source into `BlockToken`s.
//!
//! This is the first stage of the markdown pipeline. It is line-oriented
//! and greedy: at each position the first matching block kind wins, and
//! anything that matches nothing becomes part of a paragraph.

use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid heading regex"));
static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").expect("valid rule regex"));
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").expect("valid list item regex"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s+(.*)$").expect("valid ordered item regex"));

const FENCE: &str = "```";

/// One structural unit of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockToken {
    /// `#` through `######`; `content` is still inline markdown.
    Heading { level: u8, content: String },
    /// Fenced code; `content` is raw and `language` may be empty.
    CodeBlock { language: String, content: String },
    /// `>`-prefixed lines with the markers stripped; a nested document.
    Blockquote { content: String },
    UnorderedList { items: Vec<String> },
    /// `start` is the number of the first item.
    OrderedList { items: Vec<String>, start: u64 },
    HorizontalRule,
    /// Consecutive plain lines joined with `\n`.
    Paragraph { content: String },
}

/// Splits `markdown` into block tokens.
pub fn tokenize_blocks(markdown: &str) -> Vec<BlockToken> {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].trim();

        if trimmed.is_empty() {
            i += 1;
            continue;
        }

        if let Some(language) = trimmed.strip_prefix(FENCE) {
            let (content, next) = collect_fenced(&lines, i + 1);
            tokens.push(BlockToken::CodeBlock {
                language: language.trim().to_string(),
                content,
            });
            i = next;
            continue;
        }

        if let Some(caps) = HEADING.captures(trimmed) {
            tokens.push(BlockToken::Heading {
                level: caps[1].len() as u8,
                content: caps[2].trim().to_string(),
            });
            i += 1;
            continue;
        }

        if HORIZONTAL_RULE.is_match(trimmed) {
            tokens.push(BlockToken::HorizontalRule);
            i += 1;
            continue;
        }

        if trimmed.starts_with('>') {
            let mut quoted = Vec::new();
            while let Some(rest) = lines.get(i).and_then(|l| l.trim_start().strip_prefix('>')) {
                quoted.push(rest.strip_prefix(' ').unwrap_or(rest));
                i += 1;
            }
            tokens.push(BlockToken::Blockquote {
                content: quoted.join("\n"),
            });
            continue;
        }

        if UNORDERED_ITEM.is_match(lines[i]) {
            let (items, next) = collect_list(&lines, i, &UNORDERED_ITEM, 1);
            tokens.push(BlockToken::UnorderedList { items });
            i = next;
            continue;
        }

        if let Some(caps) = ORDERED_ITEM.captures(lines[i]) {
            let start = caps[1].parse().unwrap_or(1);
            let (items, next) = collect_list(&lines, i, &ORDERED_ITEM, 2);
            tokens.push(BlockToken::OrderedList { items, start });
            i = next;
            continue;
        }

        let mut paragraph = vec![trimmed];
        i += 1;
        while let Some(line) = lines.get(i) {
            if line.trim().is_empty() || starts_block(line) {
                break;
            }
            paragraph.push(line.trim());
            i += 1;
        }
        tokens.push(BlockToken::Paragraph {
            content: paragraph.join("\n"),
        });
    }

    tokens
}

/// Whether `line` would open a block other than a paragraph.
fn starts_block(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(FENCE)
        || trimmed.starts_with('>')
        || HEADING.is_match(trimmed)
        || HORIZONTAL_RULE.is_match(trimmed)
        || UNORDERED_ITEM.is_match(line)
        || ORDERED_ITEM.is_match(line)
}

/// Collects raw lines up to the closing fence (or end of input) and
/// returns them with the index of the line after the fence.
fn collect_fenced(lines: &[&str], from: usize) -> (String, usize) {
    let mut i = from;
    let mut body = Vec::new();
    while let Some(line) = lines.get(i) {
        i += 1;
        if line.trim().starts_with(FENCE) {
            break;
        }
        body.push(*line);
    }
    (body.join("\n"), i)
}

/// Collects consecutive list items matching `item`, whose text is capture
/// group `group`. A blank line continues the list only when the next
/// non-blank line is another item.
fn collect_list(lines: &[&str], from: usize, item: &Regex, group: usize) -> (Vec<String>, usize) {
    let mut items = Vec::new();
    let mut i = from;
    while let Some(line) = lines.get(i) {
        if let Some(caps) = item.captures(line) {
            items.push(caps[group].trim().to_string());
            i += 1;
            continue;
        }
        if line.trim().is_empty() {
            let next = (i + 1..lines.len()).find(|&j| !lines[j].trim().is_empty());
            if let Some(j) = next.filter(|&j| item.is_match(lines[j])) {
                i = j;
                continue;
            }
        }
        break;
    }
    (items, i)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
