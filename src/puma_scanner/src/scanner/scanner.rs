// puma_scanner/src/scanner/scanner.rs

//! Core scanner implementation: a lazy, forward-only token sequence.

use super::rules::recognize;
use super::token::{Token, TokenKind};
use log::{debug, trace};
use std::iter::FusedIterator;

/// Lexical scanner over one Puma source string.
///
/// Tokens are produced on demand, one per call to [`Scanner::next_token`] (or
/// [`Iterator::next`]). The source is only borrowed and never modified. A
/// scanner is consumed by a single traversal; scanning again means creating a
/// new one.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    // Byte index into `source`, always on a char boundary.
    cursor: usize,
    // Character index matching `cursor`.
    offset: usize,
    emitted: usize,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'src str) -> Self {
        debug!("Scanning {} bytes of source", source.len());
        Self {
            source,
            cursor: 0,
            offset: 0,
            emitted: 0,
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Character offset of the cursor.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Scan the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        while let Some(rest) = self.remaining() {
            if let Some(len) = line_ending_len(rest) {
                let start = self.offset;
                let escaped = self.previous_char() == Some('\\');
                // Line endings are ASCII: bytes and chars coincide.
                self.advance(len, len);
                if escaped {
                    trace!("Suppressed escaped line ending at {}", start);
                    continue;
                }
                return Some(self.emit(Token::new(TokenKind::EndOfLine, "\n", start)));
            }

            let ch = rest.chars().next()?;
            if ch.is_whitespace() {
                self.advance(ch.len_utf8(), 1);
                continue;
            }

            let start = self.offset;
            let token = match recognize(rest) {
                Some((kind, text)) => {
                    self.advance(text.len(), text.chars().count());
                    Token::new(kind, text, start)
                }
                None => {
                    self.advance(ch.len_utf8(), 1);
                    Token::new(TokenKind::Unknown, ch.to_string(), start)
                }
            };
            return Some(self.emit(token));
        }

        if !self.finished {
            self.finished = true;
            debug!("Scan complete: {} tokens", self.emitted);
        }
        None
    }

    fn remaining(&self) -> Option<&'src str> {
        if self.is_finished() {
            None
        } else {
            Some(&self.source[self.cursor..])
        }
    }

    fn previous_char(&self) -> Option<char> {
        self.source[..self.cursor].chars().next_back()
    }

    fn advance(&mut self, bytes: usize, chars: usize) {
        self.cursor += bytes;
        self.offset += chars;
    }

    fn emit(&mut self, token: Token) -> Token {
        trace!("{}", token);
        self.emitted += 1;
        token
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one token per remaining byte.
        (0, Some(self.source.len() - self.cursor))
    }
}

impl FusedIterator for Scanner<'_> {}

/// Length of the line ending at the start of `rest`: `\r\n`, `\r` or `\n`.
pub fn line_ending_len(rest: &str) -> Option<usize> {
    if rest.starts_with("\r\n") {
        Some(2)
    } else if rest.starts_with('\r') || rest.starts_with('\n') {
        Some(1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_texts(input: &str) -> Vec<(TokenKind, String)> {
        Scanner::new(input)
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    #[test]
    fn test_scan_simple_statement() {
        let tokens = kinds_and_texts("if count > 3.5 return \"big\"");

        let expected = vec![
            (TokenKind::Keyword, "if"),
            (TokenKind::Identifier, "count"),
            (TokenKind::Unknown, ">"),
            (TokenKind::Float, "3.5"),
            (TokenKind::Keyword, "return"),
            (TokenKind::String, "\"big\""),
        ];

        assert_eq!(tokens.len(), expected.len());
        for ((kind, text), (expected_kind, expected_text)) in tokens.iter().zip(expected) {
            assert_eq!(*kind, expected_kind);
            assert_eq!(text, expected_text);
        }
    }

    #[test]
    fn test_offsets_are_character_indices() {
        let tokens: Vec<Token> = Scanner::new("é x\n'ü' 7").collect();
        let offsets: Vec<usize> = tokens.iter().map(Token::offset).collect();
        // é(0) x(2) \n(3) 'ü'(4) 7(8)
        assert_eq!(offsets, vec![0, 2, 3, 4, 8]);
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[3].kind(), TokenKind::Char);
    }

    #[test]
    fn test_crlf_is_one_end_of_line() {
        let tokens: Vec<Token> = Scanner::new("a\r\n\r\nb").collect();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1], Token::new(TokenKind::EndOfLine, "\n", 1));
        assert_eq!(tokens[2], Token::new(TokenKind::EndOfLine, "\n", 3));
        assert_eq!(tokens[3], Token::new(TokenKind::Identifier, "b", 5));
    }

    #[test]
    fn test_escaped_crlf_is_suppressed() {
        let tokens = kinds_and_texts("a\\\r\nb");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "a".to_string()),
                (TokenKind::Unknown, "\\".to_string()),
                (TokenKind::Identifier, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_only_first_line_ending_after_backslash_is_suppressed() {
        // Only the first line ending follows the backslash.
        let tokens = kinds_and_texts("\\\r\r");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Unknown, "\\".to_string()),
                (TokenKind::EndOfLine, "\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_scanner_is_lazy() {
        let mut scanner = Scanner::new("one two");
        assert_eq!(scanner.offset(), 0);

        let first = scanner.next_token().unwrap();
        assert_eq!(first.text(), "one");
        assert_eq!(scanner.offset(), 3);
        assert!(!scanner.is_finished());

        let second = scanner.next_token().unwrap();
        assert_eq!(second.offset(), 4);
        assert!(scanner.is_finished());

        assert_eq!(scanner.next_token(), None);
        assert_eq!(scanner.next_token(), None);
    }

    #[test]
    fn test_trailing_whitespace_yields_no_token() {
        let mut scanner = Scanner::new("x \t ");
        assert_eq!(scanner.next(), Some(Token::new(TokenKind::Identifier, "x", 0)));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.offset(), 4);
    }

    #[test]
    fn test_unknown_multibyte_character() {
        let tokens: Vec<Token> = Scanner::new("→1").collect();
        assert_eq!(tokens[0], Token::new(TokenKind::Unknown, "→", 0));
        assert_eq!(tokens[1], Token::new(TokenKind::Integer, "1", 1));
    }

    #[test]
    fn test_line_ending_len() {
        assert_eq!(line_ending_len("\r\nx"), Some(2));
        assert_eq!(line_ending_len("\rx"), Some(1));
        assert_eq!(line_ending_len("\n\r"), Some(1));
        assert_eq!(line_ending_len(" \n"), None);
        assert_eq!(line_ending_len(""), None);
    }
}
