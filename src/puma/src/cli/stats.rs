// src/cli/stats.rs

use crate::cli::scan::describe_unknown;
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use puma_scanner::{scan, TokenKind, TokenSummary};
use std::io::Write;
use std::path::Path;

/// Summarize the tokens of a source file
pub fn stats_file(path: &Path, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let source = fs_err::read_to_string(path)
        .context(format!("Error reading source file {}", path.display()))?;
    stats_source(&source, format, out)
}

pub fn stats_source(source: &str, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let summary = TokenSummary::from_tokens(scan(source));

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &summary)
                .context("Error serializing token summary")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "tokens: {}", summary.total)?;
            writeln!(out, "lines: {}", summary.lines)?;
            for kind in TokenKind::ALL {
                writeln!(out, "  {:<12}{}", kind.name(), summary.count(kind))?;
            }
            if summary.has_unknown() {
                writeln!(out, "{}", describe_unknown(&summary.unknown))?;
            }
        }
    }

    Ok(())
}
