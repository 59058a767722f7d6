// puma_scanner/src/scanner/rules.rs

//! Pattern-based recognition rules, tried in a fixed priority order.

use super::keywords::is_keyword;
use super::token::TokenKind;
use lazy_static::lazy_static;
use regex::Regex;

/// A token kind paired with a pattern anchored at the cursor.
#[derive(Debug)]
pub struct Rule {
    kind: TokenKind,
    pattern: Regex,
}

impl Rule {
    fn new(kind: TokenKind, pattern: &str) -> Self {
        // Patterns are constants below.
        let pattern = Regex::new(pattern).expect("recognition rule pattern is valid");
        Self { kind, pattern }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The non-empty prefix of `rest` this rule matches, if any.
    pub fn find<'a>(&self, rest: &'a str) -> Option<&'a str> {
        self.pattern
            .find(rest)
            .map(|m| m.as_str())
            .filter(|text| !text.is_empty())
    }
}

lazy_static! {
    /// Rules in priority order. Float precedes Integer so `3.14` stays whole;
    /// Boolean precedes Identifier so `true`/`false` never become keywords.
    pub static ref RULES: Vec<Rule> = vec![
        Rule::new(TokenKind::Float, r"^\d+\.\d+"),
        Rule::new(TokenKind::Integer, r"^\d+"),
        Rule::new(TokenKind::Boolean, r"^(?:true|false)"),
        Rule::new(TokenKind::String, r#"^"(?:\\.|[^"])*""#),
        Rule::new(TokenKind::Char, r"^'(?:\\.|.)'"),
        Rule::new(TokenKind::Identifier, r"^[\p{L}_][\p{L}\p{Nd}_]*"),
    ];
}

/// Classify the text at the start of `rest`. First rule to match wins.
pub fn recognize(rest: &str) -> Option<(TokenKind, &str)> {
    RULES.iter().find_map(|rule| {
        rule.find(rest).map(|text| {
            let kind = match rule.kind() {
                TokenKind::Identifier if is_keyword(text) => TokenKind::Keyword,
                kind => kind,
            };
            (kind, text)
        })
    })
}
