//! String and character literal lexing.
//!
//! This module handles lexing of string and character literals, including
//! escape sequences.

use relayc_util::{CompileResult, Position};

use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Parses the characters between a pair of `"` delimiters, processing
    /// escape sequences; an escaped quote does not terminate the literal.
    /// Strings are single-line.
    ///
    /// # Errors
    ///
    /// A raw newline or the end of input before the closing quote, or an
    /// unknown escape sequence, is a lexical error.
    pub(crate) fn lex_string(&mut self, start: Position) -> CompileResult<Token> {
        self.cursor.advance(0);

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(start, "unterminated string literal"));
            }

            let c = self.cursor.peek();
            if c == '"' {
                self.cursor.advance(0);
                break;
            }
            if c == '\n' {
                return Err(self.error(start, "unterminated string literal"));
            }
            if c == '\\' {
                self.cursor.advance(0);
                content.push(self.lex_escape(start)?);
            } else {
                content.push(c);
                self.cursor.advance(0);
            }
        }

        let lexeme = self.cursor.slice_from(start.offset);
        Ok(Token::new(
            start,
            TokenKind::LitString,
            Some(TokenValue::Str(content)),
            lexeme,
        ))
    }

    /// Lexes a character literal.
    ///
    /// Exactly one character, possibly escaped, between `'` delimiters.
    ///
    /// # Errors
    ///
    /// An empty literal, more than one character before the closing
    /// quote, an unknown escape sequence, or the end of input before the
    /// closing quote is a lexical error.
    pub(crate) fn lex_char(&mut self, start: Position) -> CompileResult<Token> {
        self.cursor.advance(0);

        if self.cursor.is_at_end() {
            return Err(self.error(start, "unterminated character literal"));
        }

        let c = match self.cursor.peek() {
            '\'' => return Err(self.error(start, "empty character literal")),
            '\n' => return Err(self.error(start, "unterminated character literal")),
            '\\' => {
                self.cursor.advance(0);
                self.lex_escape(start)?
            },
            c => {
                self.cursor.advance(0);
                c
            },
        };

        if self.cursor.is_at_end() {
            return Err(self.error(start, "unterminated character literal"));
        }
        if self.cursor.peek() != '\'' {
            return Err(self.error(
                start,
                "character literal may hold only one character",
            ));
        }
        self.cursor.advance(0);

        let lexeme = self.cursor.slice_from(start.offset);
        Ok(Token::new(
            start,
            TokenKind::LitChar,
            Some(TokenValue::Char(c)),
            lexeme,
        ))
    }

    /// Parses one escape sequence, after the `\` has been consumed.
    ///
    /// Handles: `\n`, `\t`, `\r`, `\0`, `\\`, `\"`, `\'`
    fn lex_escape(&mut self, start: Position) -> CompileResult<char> {
        if self.cursor.is_at_end() {
            return Err(self.error(start, "unterminated escape sequence"));
        }

        let c = self.cursor.peek();
        self.cursor.advance(0);
        match c {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '0' => Ok('\0'),
            '\\' => Ok('\\'),
            '"' => Ok('"'),
            '\'' => Ok('\''),
            _ => Err(self.error(start, format!("unknown escape sequence: \\{c}"))),
        }
    }
}
