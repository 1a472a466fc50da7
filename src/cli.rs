//! CLI argument definition for danx-text.
//!
//! This module is intentionally free of non-clap dependencies apart from
//! `Format`, so the argument surface can be read in one place.

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use danx_text::Format;

/// Source text → HTML.
#[derive(Parser)]
#[command(name = "danx-text", version, about = "Syntax highlighting and markdown rendering to HTML")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "danx_text=trace").
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Highlight source code into HTML with syntax-* spans.
    Highlight {
        /// json, yaml, text, markdown, html, css or javascript.
        /// Inferred from the file extension when omitted.
        #[arg(short, long, value_parser = parse_format)]
        format: Option<Format>,

        /// Input file (use "-" or omit for stdin).
        file: Option<PathBuf>,
    },
    /// Render markdown into HTML.
    Render {
        /// Let raw HTML in the markdown through unescaped.
        #[arg(long)]
        no_sanitize: bool,

        /// Input file (use "-" or omit for stdin).
        file: Option<PathBuf>,
    },
    /// Parse a JSON or YAML payload, optionally wrapped in a code fence,
    /// and print it as JSON.
    Parse {
        #[arg(long = "as", value_enum)]
        kind: PayloadKind,

        /// Input file (use "-" or omit for stdin).
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PayloadKind {
    Json,
    Yaml,
}

/// Unknown names become `Format::Text`, same as the library.
fn parse_format(name: &str) -> Result<Format, Infallible> {
    Ok(Format::from_name(name))
}
