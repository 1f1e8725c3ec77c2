//! Trivia skipping.
//!
//! This module handles whitespace and the three Relay comment forms:
//! `#` line comments, `//` line comments, and `/* */` block comments.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Consumes, producing no token, any run of whitespace characters and
    /// comments. Block comments do not nest: the first `*/` closes the
    /// comment. A comment left unterminated at the end of input is
    /// consumed to the end of input without error.
    ///
    /// A `/` that begins neither `//` nor `/*` is not trivia (it is the
    /// division operator) and terminates the skipper.
    pub(crate) fn skip_trivia(&mut self) {
        loop {
            let c = self.cursor.peek();
            if c.is_whitespace() {
                self.cursor.advance(0);
            } else if c == '#' || self.cursor.peek_str("//") {
                self.skip_until("\n");
            } else if self.cursor.peek_str("/*") {
                self.skip_until("*/");
            } else {
                return;
            }
        }
    }

    /// Skips up to and including the next occurrence of `limit`.
    ///
    /// Stops at the end of input if `limit` never occurs.
    fn skip_until(&mut self, limit: &str) {
        while !self.cursor.is_at_end() && !self.cursor.peek_str(limit) {
            self.cursor.advance(0);
        }
        if !self.cursor.is_at_end() {
            self.cursor.advance(limit.len() - 1);
        }
    }
}
