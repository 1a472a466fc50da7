//! Entry point: wires CLI → input → highlighter/renderer → stdout.
//!
//! This is the thin orchestrator around the library. It handles argument
//! parsing, logging setup, file/stdin I/O and error reporting.

mod cli;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use danx_text::{
    Format, HighlightOptions, MarkdownOptions, highlight_syntax, parse_markdown_json,
    parse_markdown_yaml, render_markdown,
};

use crate::cli::{Cli, Command, PayloadKind};

fn main() -> color_eyre::Result<()> {
    // Install color_eyre error/panic hooks for pretty backtraces.
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let output = match cli.command {
        Command::Highlight { format, file } => {
            let source = read_input(file.as_deref())?;
            let format = format.unwrap_or_else(|| infer_format(file.as_deref()));
            highlight_syntax(&source, &HighlightOptions { format })
        }
        Command::Render { no_sanitize, file } => {
            let source = read_input(file.as_deref())?;
            let options = MarkdownOptions {
                sanitize: !no_sanitize,
            };
            render_markdown(&source, &options)
        }
        Command::Parse { kind, file } => {
            let source = read_input(file.as_deref())?;
            let parsed = match kind {
                PayloadKind::Json => parse_markdown_json(&source),
                PayloadKind::Yaml => parse_markdown_yaml(&source),
            }
            .wrap_err("input is not a valid payload")?;
            serde_json::to_string_pretty(&parsed)?
        }
    };

    tracing::debug!(bytes = output.len(), "writing output");
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    writeln!(stdout)?;
    Ok(())
}

/// Logs go to stderr so stdout carries only the generated HTML.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Reads the named file, or stdin when no file (or "-") is given.
fn read_input(file: Option<&Path>) -> color_eyre::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .wrap_err("failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Picks a format from the file extension; stdin and unknown extensions
/// fall back to plain text.
fn infer_format(file: Option<&Path>) -> Format {
    file.and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .map(Format::from_name)
        .unwrap_or_default()
}
