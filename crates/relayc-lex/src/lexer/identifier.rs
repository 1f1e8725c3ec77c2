//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers, reserved words, and the
//! boolean literals.

use relayc_util::{CompileResult, Position};

use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, reserved word, or boolean literal.
    ///
    /// Consumes a maximal run of alphabetic letters. Relay identifiers
    /// contain no digits or underscores; the run may include letters such
    /// as `µ` (the microsecond suffix is `µs`).
    ///
    /// `true` and `false` are reserved literal words and produce a boolean
    /// literal. Any other run that exactly matches a registered code
    /// (rule keywords, type names, duration suffixes) produces that fixed
    /// kind; reserved words always win over identifier classification.
    /// Everything else is an identifier, classified by the case of its
    /// first letter: upper-case names states, lower-case names values.
    pub(crate) fn lex_identifier(&mut self, start: Position) -> CompileResult<Token> {
        while self.cursor.peek().is_alphabetic() {
            self.cursor.advance(0);
        }

        let text = self.cursor.slice_from(start.offset);

        if text == "true" || text == "false" {
            return Ok(Token::new(
                start,
                TokenKind::LitBool,
                Some(TokenValue::Bool(text == "true")),
                text,
            ));
        }

        if let Some(kind) = TokenKind::from_code(text) {
            return Ok(Token::new(
                start,
                kind,
                Some(TokenValue::Str(text.to_string())),
                text,
            ));
        }

        let kind = if text.chars().next().is_some_and(char::is_uppercase) {
            TokenKind::StateId
        } else {
            TokenKind::NameId
        };
        Ok(Token::new(
            start,
            kind,
            Some(TokenValue::Str(text.to_string())),
            text,
        ))
    }
}
