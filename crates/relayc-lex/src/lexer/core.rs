//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use relayc_util::{CompileError, CompileResult, Position};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Relay rule language.
///
/// The lexer transforms source text into a stream of classified tokens,
/// pulled one at a time with [`Lexer::next_token`]. It handles whitespace,
/// the three comment forms, identifiers and keywords, operators, and
/// literals.
///
/// A lexer owns its scan state (cursor position over the source buffer)
/// and nothing else, so independent lexers over independent buffers run
/// concurrently without shared state. A single instance is not safe for
/// concurrent use.
pub struct Lexer<'a> {
    /// Character cursor over the source buffer.
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token from the source.
    ///
    /// This is the main entry point for tokenization. Each call skips
    /// trivia (whitespace and comments), captures the start position, and
    /// dispatches to exactly one classifier based on the current
    /// character. Once the source is exhausted every further call returns
    /// the end-of-input token with the same position.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] for unrecoverable scan failures:
    /// operator text no registry prefix matches, unterminated string or
    /// character literals, and malformed literals. Errors abort the call
    /// at the point of detection; no partial token is produced, and the
    /// lexer makes no attempt to resynchronize.
    pub fn next_token(&mut self) -> CompileResult<Token> {
        self.skip_trivia();

        let start = self.cursor.position();

        if self.cursor.is_at_end() {
            return Ok(Token::new(start, TokenKind::Eof, None, ""));
        }

        let c = self.cursor.peek();
        if c.is_alphabetic() {
            self.lex_identifier(start)
        } else if c.is_ascii_digit() {
            self.lex_number(start)
        } else if c == '"' {
            self.lex_string(start)
        } else if c == '\'' {
            self.lex_char(start)
        } else if c == '$' {
            self.lex_hardware_ref(start)
        } else {
            self.lex_operator(start)
        }
    }

    /// Builds a lexical error at the given token start position.
    pub(crate) fn error(&self, start: Position, message: impl Into<String>) -> CompileError {
        CompileError::new("Lexer", start, message)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte offset in the source.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = CompileResult<Token>;

    /// Pulls tokens until the end-of-input marker, which ends iteration.
    ///
    /// A scan failure is yielded as `Some(Err(..))`. The failing text is
    /// not skipped, so callers should stop at the first error rather than
    /// keep polling.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => None,
            result => Some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenValue;

    #[test]
    fn test_single_token_stream() {
        let mut lexer = Lexer::new("when");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::When);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::NameId);

        let first = lexer.next_token().unwrap();
        assert_eq!(first.kind, TokenKind::Eof);
        for _ in 0..3 {
            let again = lexer.next_token().unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_token_positions() {
        let mut lexer = Lexer::new("when X\n  -> 5");

        let when = lexer.next_token().unwrap();
        assert_eq!((when.position.line, when.position.column), (1, 1));

        let state = lexer.next_token().unwrap();
        assert_eq!((state.position.line, state.position.column), (1, 6));

        let arrow = lexer.next_token().unwrap();
        assert_eq!(arrow.kind, TokenKind::ChangeTo);
        assert_eq!((arrow.position.line, arrow.position.column), (2, 3));

        let five = lexer.next_token().unwrap();
        assert_eq!(five.value, Some(TokenValue::Int(5)));
        assert_eq!((five.position.line, five.position.column), (2, 6));
    }

    #[test]
    fn test_iterator_stops_at_eof() {
        let lexer = Lexer::new("always tick");
        let tokens: Vec<_> = lexer.collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Always);
        assert_eq!(tokens[1].kind, TokenKind::NameId);
    }

    #[test]
    fn test_error_carries_lexer_phase() {
        let mut lexer = Lexer::new("@@@");
        let error = lexer.next_token().unwrap_err();
        assert_eq!(error.phase, "Lexer");
        assert_eq!(error.line, 1);
        assert_eq!(error.column, 1);
    }
}
