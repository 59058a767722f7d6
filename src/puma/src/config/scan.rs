// src/config/scan.rs

use crate::config::format::OutputFormat;
use anyhow::Context;
use puma_scanner::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output settings for the `scan` and `stats` commands.
///
/// Loaded from an optional YAML file; every field has a default, and flags
/// given on the command line take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    format: OutputFormat,
    skip_eol: bool,
    deny_unknown: bool,
    kinds: Vec<TokenKind>,
}

impl ScanConfig {
    /// Load the config file if one is given, defaults otherwise
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::try_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn skip_eol(&self) -> bool {
        self.skip_eol
    }

    pub fn deny_unknown(&self) -> bool {
        self.deny_unknown
    }

    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    pub fn with_skip_eol(mut self, skip_eol: bool) -> Self {
        self.skip_eol |= skip_eol;
        self
    }

    pub fn with_deny_unknown(mut self, deny_unknown: bool) -> Self {
        self.deny_unknown |= deny_unknown;
        self
    }

    /// Replace the kind filter; an empty list keeps the current one
    pub fn with_kinds(mut self, kinds: Vec<TokenKind>) -> Self {
        if !kinds.is_empty() {
            self.kinds = kinds;
        }
        self
    }

    /// Whether a token passes the output filters
    pub fn shows(&self, token: &Token) -> bool {
        if self.skip_eol && token.kind() == TokenKind::EndOfLine {
            return false;
        }
        self.kinds.is_empty() || self.kinds.contains(&token.kind())
    }
}

impl TryFrom<&Path> for ScanConfig {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs_err::read_to_string(path)
            .context(format!("Error reading {} to string.", path.display()))?;

        serde_saphyr::from_str::<ScanConfig>(&content)
            .context(format!("Error parsing YAML file: {}", path.display()))
    }
}

impl TryFrom<&PathBuf> for ScanConfig {
    type Error = anyhow::Error;

    fn try_from(path: &PathBuf) -> anyhow::Result<Self> {
        Self::try_from(path.as_path())
    }
}
