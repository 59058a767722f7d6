// puma_scanner/src/scanner/keywords.rs

//! Reserved identifier spellings of the Puma language.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Every reserved spelling, case-sensitive.
pub const KEYWORDS: &[&str] = &[
    "using", "as", "type", "trait", "module", "is", "has", "value", "object", "base",
    "number", "optional", "enums", "records", "properties", "functions", "start",
    "initialize", "finalize", "return", "yield", "public", "private", "internal",
    "override", "delegate", "constant", "readonly", "readwrite", "int128", "int64",
    "int32", "int16", "int8", "uint128", "uint64", "uint32", "uint16", "uint8", "flt128",
    "flt64", "flt32", "fix128", "fix64", "fix32", "char", "str", "fstr", "vstr", "bool",
    "true", "false", "hex", "oct", "bin", "implicit", "explicit", "operator", "get",
    "set", "with", "self", "if", "else", "and", "or", "not", "for", "in", "while",
    "repeat", "forall", "begin", "end", "break", "continue", "match", "when", "error",
    "catch", "multithread", "multiprocess",
];

lazy_static! {
    static ref KEYWORD_SET: HashSet<&'static str> = KEYWORDS.iter().copied().collect();
}

/// Whether `word` is a reserved spelling.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_has_no_duplicates() {
        assert_eq!(KEYWORDS.len(), 82);
        assert_eq!(KEYWORD_SET.len(), KEYWORDS.len());
    }

    #[test]
    fn test_keyword_membership_is_case_sensitive() {
        assert!(is_keyword("multiprocess"));
        assert!(is_keyword("uint128"));
        assert!(!is_keyword("If"));
        assert!(!is_keyword("iff"));
        assert!(!is_keyword(""));
    }
}
