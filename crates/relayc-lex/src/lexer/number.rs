//! Numeric and hardware-reference literal lexing.
//!
//! This module handles decimal, hexadecimal (`0x`), and binary (`0b`)
//! integer literals, plus the hardware reference literals: pin references
//! (`$13`) and serial-port references (`$$0`).

use relayc_util::{CompileResult, Position};

use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal.
    ///
    /// A `0x`/`0X` prefix selects hexadecimal, `0b`/`0B` binary; anything
    /// else is a maximal run of decimal digits. The literal ends at the
    /// first character outside its digit set, so `5s` lexes as the number
    /// `5` followed by the seconds suffix.
    ///
    /// # Errors
    ///
    /// A prefix with no digits after it, or a value that overflows the
    /// widest Relay integer type, is a lexical error.
    pub(crate) fn lex_number(&mut self, start: Position) -> CompileResult<Token> {
        if self.cursor.peek_str("0x") || self.cursor.peek_str("0X") {
            self.cursor.advance(1);
            return self.lex_radix(start, 16, TokenKind::LitHex);
        }
        if self.cursor.peek_str("0b") || self.cursor.peek_str("0B") {
            self.cursor.advance(1);
            return self.lex_radix(start, 2, TokenKind::LitBin);
        }

        while self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(0);
        }

        let text = self.cursor.slice_from(start.offset);
        let value = text
            .parse::<i64>()
            .map_err(|e| self.error(start, format!("integer literal overflow: {e}")))?;
        Ok(Token::new(
            start,
            TokenKind::LitDec,
            Some(TokenValue::Int(value)),
            text,
        ))
    }

    /// Lexes the digits of a prefixed integer literal in the given radix.
    fn lex_radix(&mut self, start: Position, radix: u32, kind: TokenKind) -> CompileResult<Token> {
        let digits_start = self.cursor.offset();
        while self.cursor.peek().is_digit(radix) {
            self.cursor.advance(0);
        }

        let digits = self.cursor.slice_from(digits_start);
        if digits.is_empty() {
            return Err(self.error(start, format!("no digits after base-{radix} prefix")));
        }

        let value = i64::from_str_radix(digits, radix)
            .map_err(|e| self.error(start, format!("integer literal overflow: {e}")))?;
        let lexeme = self.cursor.slice_from(start.offset);
        Ok(Token::new(start, kind, Some(TokenValue::Int(value)), lexeme))
    }

    /// Lexes a hardware reference literal.
    ///
    /// `$` followed by a pin number references a pin (`$13`); `$$`
    /// followed by a port number references a serial port (`$$0`).
    ///
    /// # Errors
    ///
    /// A `$` or `$$` prefix not followed by a decimal digit is a lexical
    /// error.
    pub(crate) fn lex_hardware_ref(&mut self, start: Position) -> CompileResult<Token> {
        self.cursor.advance(0);
        let (kind, what) = if self.cursor.peek() == '$' {
            self.cursor.advance(0);
            (TokenKind::LitSerial, "serial port")
        } else {
            (TokenKind::LitPin, "pin")
        };

        let digits_start = self.cursor.offset();
        while self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(0);
        }

        let digits = self.cursor.slice_from(digits_start);
        if digits.is_empty() {
            let prefix = self.cursor.slice_from(start.offset);
            return Err(self.error(start, format!("expected a {what} number after '{prefix}'")));
        }

        let value = digits
            .parse::<i64>()
            .map_err(|e| self.error(start, format!("{what} number out of range: {e}")))?;
        let lexeme = self.cursor.slice_from(start.offset);
        Ok(Token::new(start, kind, Some(TokenValue::Int(value)), lexeme))
    }
}
