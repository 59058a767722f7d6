// src/config/format.rs

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How tokens and statistics are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated line per token
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
