// puma_scanner/src/scanner/mod.rs

//! Lexical scanner for Puma source text.
//!
//! At each position the scanner tries, in order:
//! 1. a line ending (`\r\n`, `\r`, `\n`), emitted as a normalized `EndOfLine`
//!    token unless the preceding character is a backslash
//! 2. whitespace, which is skipped
//! 3. the recognition [`rules`] (Float, Integer, Boolean, String, Char,
//!    Identifier), first match wins, with identifiers that spell a keyword
//!    reclassified as `Keyword`
//! 4. otherwise a single-character `Unknown` token
//!
//! Scanning never fails.

pub mod keywords;
pub mod rules;
pub mod scanner;
pub mod token;

// Re-export main types and functions
pub use keywords::{is_keyword, KEYWORDS};
pub use scanner::{line_ending_len, Scanner};
pub use token::{Token, TokenKind};

/// Lazily scan `source` into tokens.
pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// Convenience function to scan a whole string into a vector of tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    scan(source).collect()
}
