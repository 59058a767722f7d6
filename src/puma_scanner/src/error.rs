// puma_scanner/src/error.rs

//! Error types for the Puma scanner.
//!
//! Scanning itself never fails: unrecognized input is reported as
//! [`TokenKind::Unknown`](crate::scanner::TokenKind::Unknown) tokens. The
//! errors here cover the library's auxiliary surfaces only.

use thiserror::Error;

/// Result type alias for puma_scanner operations.
pub type Result<T> = std::result::Result<T, ScannerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScannerError {
    #[error("Unknown token kind: '{0}'")]
    UnknownTokenKind(String),
}
