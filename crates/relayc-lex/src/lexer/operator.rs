//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators and parentheses with a
//! maximal-munch scan: a greedy run of operator characters is measured
//! first, then shrunk from the right until it matches a registered code.

use relayc_util::{CompileResult, Position};

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Returns whether `c` can appear in an operator run.
///
/// Operator runs end at whitespace, letters, digits, quotes, and end of
/// input (the `'\0'` sentinel is not whitespace, but the run is measured
/// over the remaining source, which is empty at end of input).
fn is_operator_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_alphabetic() && !c.is_ascii_digit() && c != '"' && c != '\''
}

impl<'a> Lexer<'a> {
    /// Lexes an operator or parenthesis.
    ///
    /// Measures the greedy run of operator characters by lookahead, then
    /// tests ever-shorter prefixes of the run against the registry and
    /// keeps the longest one that matches. This resolves operators that
    /// share a prefix (`>`, `>=`, `>>`) in favor of the longest
    /// registered code. Only the matched code is consumed, so the
    /// remainder of the run is re-scanned on the next call.
    ///
    /// The shrink is a loop bounded by the run length; the cursor itself
    /// never moves backward.
    ///
    /// # Errors
    ///
    /// If no prefix of the run is a registered code, a lexical error
    /// identifying the whole run at its start position.
    pub(crate) fn lex_operator(&mut self, start: Position) -> CompileResult<Token> {
        let run: String = self
            .cursor
            .remaining()
            .chars()
            .take_while(|&c| is_operator_char(c))
            .collect();

        let mut end = run.len();
        loop {
            if end == 0 {
                return Err(self.error(start, format!("this operator does not exist: \"{run}\"")));
            }
            if run.is_char_boundary(end) {
                if let Some(kind) = TokenKind::from_code(&run[..end]) {
                    let matched = &run[..end];
                    self.cursor.advance(matched.chars().count() - 1);
                    return Ok(Token::new(start, kind, None, matched));
                }
            }
            end -= 1;
        }
    }
}
