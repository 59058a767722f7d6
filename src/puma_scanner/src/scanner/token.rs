// puma_scanner/src/scanner/token.rs

//! Token types and structures for Puma lexical analysis.

use crate::error::{Result, ScannerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A classified, positioned piece of Puma source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact matched text, quotes and escapes included.
    ///
    /// `EndOfLine` tokens always carry `"\n"` whatever sequence produced them.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Zero-based character offset where the match began.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Character offset one past the last character of the text.
    ///
    /// For a `"\r\n"` line ending this undercounts the source span by one,
    /// since the text is normalized.
    pub fn end(&self) -> usize {
        self.offset + self.char_len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.text, self.offset)
    }
}

/// Kinds of tokens the scanner produces. The set is fixed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TokenKind {
    /// Reserved identifier spelling
    Keyword,
    /// Integer literal (`42`)
    Integer,
    /// Float literal (`3.14`)
    Float,
    /// Boolean literal (`true`, `false`)
    Boolean,
    /// Double-quoted string literal
    String,
    /// Single-quoted character literal
    Char,
    /// Identifier
    Identifier,
    /// Normalized line break
    EndOfLine,
    /// Single unrecognized character
    Unknown,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Keyword,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::Boolean,
        TokenKind::String,
        TokenKind::Char,
        TokenKind::Identifier,
        TokenKind::EndOfLine,
        TokenKind::Unknown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::Boolean => "Boolean",
            TokenKind::String => "String",
            TokenKind::Char => "Char",
            TokenKind::Identifier => "Identifier",
            TokenKind::EndOfLine => "EndOfLine",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = ScannerError;

    /// Accepts variant names in any case, with or without `_`/`-` separators.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        if normalized == "eol" {
            return Ok(TokenKind::EndOfLine);
        }

        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ScannerError::UnknownTokenKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str_spellings() {
        assert_eq!("Keyword".parse::<TokenKind>(), Ok(TokenKind::Keyword));
        assert_eq!("float".parse::<TokenKind>(), Ok(TokenKind::Float));
        assert_eq!("end_of_line".parse::<TokenKind>(), Ok(TokenKind::EndOfLine));
        assert_eq!("end-of-line".parse::<TokenKind>(), Ok(TokenKind::EndOfLine));
        assert_eq!("EOL".parse::<TokenKind>(), Ok(TokenKind::EndOfLine));
        assert_eq!(
            "comment".parse::<TokenKind>(),
            Err(ScannerError::UnknownTokenKind("comment".to_string()))
        );
    }

    #[test]
    fn test_kind_display_round_trips_through_from_str() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.to_string().parse::<TokenKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_token_char_len_counts_characters() {
        let token = Token::new(TokenKind::String, "\"héllo\"", 4);
        assert_eq!(token.char_len(), 7);
        assert_eq!(token.end(), 11);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::EndOfLine, "\n", 1);
        assert_eq!(token.to_string(), "EndOfLine(\"\\n\")@1");
    }

    #[test]
    fn test_token_serializes_kind_by_name() {
        let token = Token::new(TokenKind::Identifier, "x", 0);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"Identifier","text":"x","offset":0}"#);
    }
}
