// src/cli/scan.rs

use crate::config::{OutputFormat, ScanConfig};
use anyhow::{Context, Result};
use log::info;
use puma_scanner::{scan, Token, TokenKind};
use std::io::Write;
use std::path::Path;

/// Scan a source file and write its tokens
pub fn scan_file(path: &Path, config: &ScanConfig, out: &mut dyn Write) -> Result<()> {
    let source = fs_err::read_to_string(path)
        .context(format!("Error reading source file {}", path.display()))?;
    info!("Scanning {}", path.display());
    scan_source(&source, config, out)
}

/// Scan `source` and write the tokens that pass the config's filters.
///
/// With `deny_unknown`, every token is still written before the command
/// fails on the first reported `Unknown`.
pub fn scan_source(source: &str, config: &ScanConfig, out: &mut dyn Write) -> Result<()> {
    let mut shown: Vec<Token> = Vec::new();
    let mut unknown: Vec<Token> = Vec::new();

    for token in scan(source) {
        if token.kind() == TokenKind::Unknown {
            unknown.push(token.clone());
        }
        if !config.shows(&token) {
            continue;
        }
        match config.format() {
            OutputFormat::Text => write_token_line(out, &token)?,
            OutputFormat::Json => shown.push(token),
        }
    }

    if config.format() == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &shown).context("Error serializing tokens")?;
        writeln!(out)?;
    }

    if config.deny_unknown() && !unknown.is_empty() {
        anyhow::bail!("{}", describe_unknown(&unknown));
    }

    Ok(())
}

fn write_token_line(out: &mut dyn Write, token: &Token) -> Result<()> {
    writeln!(out, "{}\t{}\t{:?}", token.offset(), token.kind(), token.text())?;
    Ok(())
}

pub(crate) fn describe_unknown(unknown: &[Token]) -> String {
    let listed: Vec<String> = unknown
        .iter()
        .map(|t| format!("{:?} at offset {}", t.text(), t.offset()))
        .collect();
    format!(
        "{} unrecognized character(s): {}",
        unknown.len(),
        listed.join(", ")
    )
}
