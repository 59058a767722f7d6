// puma_scanner/src/lib.rs

//! Lexical scanner for the Puma programming language.
//!
//! This library turns Puma source text into a lazy sequence of classified,
//! positioned tokens for a parser to consume:
//! - Keywords, identifiers, and integer, float, boolean, string and char literals
//! - Normalized `EndOfLine` tokens, with backslash line continuation
//! - `Unknown` tokens for anything unrecognized, so a scan always completes
//!
//! # Examples
//!
//! ```
//! use puma_scanner::{scan, TokenKind};
//!
//! let kinds: Vec<TokenKind> = scan("if x").map(|t| t.kind()).collect();
//! assert_eq!(kinds, vec![TokenKind::Keyword, TokenKind::Identifier]);
//! ```

pub mod error;
pub mod scanner;
pub mod summary;

pub use error::{Result, ScannerError};
pub use scanner::{is_keyword, scan, tokenize, Scanner, Token, TokenKind};
pub use summary::TokenSummary;
