// puma_scanner/src/summary.rs

//! Aggregate statistics over a token sequence.

use crate::scanner::{Token, TokenKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-kind token counts for one scanned source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenSummary {
    /// Number of tokens, `EndOfLine` and `Unknown` included
    pub total: usize,
    /// Logical lines: `EndOfLine` tokens plus one, or zero for no tokens
    pub lines: usize,
    pub counts: BTreeMap<TokenKind, usize>,
    /// Every `Unknown` token, in source order
    pub unknown: Vec<Token>,
}

impl TokenSummary {
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut summary = Self::default();

        for token in tokens {
            summary.total += 1;
            *summary.counts.entry(token.kind()).or_insert(0) += 1;
            if token.kind() == TokenKind::Unknown {
                summary.unknown.push(token);
            }
        }

        if summary.total > 0 {
            summary.lines = summary.count(TokenKind::EndOfLine) + 1;
        }

        summary
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }
}
