//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while scanning through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

use relayc_util::Position;

/// A cursor for traversing source code character by character.
///
/// The cursor owns the scan position over an immutable source buffer and
/// provides single-character and fixed-length string lookahead without
/// consuming input. Advancement is strictly forward: the cursor never moves
/// backward, and classifiers that need to reconsider input do so with their
/// own lookahead bookkeeping rather than by rewinding.
///
/// It correctly handles UTF-8 encoded text (the Relay alphabet includes
/// multi-byte characters such as `µ` and `§`) and tracks 1-based
/// line/column numbers.
///
/// # Example
///
/// ```
/// use relayc_lex::cursor::Cursor;
///
/// let source = "when X -> 5";
/// let mut cursor = Cursor::new(source);
///
/// assert_eq!(cursor.peek(), 'w');
/// cursor.advance(0);
/// assert_eq!(cursor.peek(), 'h');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte offset in the source.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position without consuming it.
    ///
    /// Returns `'\0'` (the null sentinel) at the end of the source. The
    /// sentinel compares unequal to every real source character and matches
    /// no token classifier's start condition.
    ///
    /// # Example
    ///
    /// ```
    /// use relayc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert_eq!(cursor.peek(), 'a');
    /// cursor.advance(0);
    /// assert_eq!(cursor.peek(), '\0');
    /// ```
    #[inline]
    pub fn peek(&self) -> char {
        if self.offset >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[self.offset];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[self.offset..].chars().next().unwrap_or('\0')
    }

    /// Returns whether the upcoming characters equal `expected` exactly.
    ///
    /// Returns `false` (rather than erroring) when fewer than
    /// `expected.len()` bytes remain.
    ///
    /// # Example
    ///
    /// ```
    /// use relayc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("/* note */");
    /// assert!(cursor.peek_str("/*"));
    /// assert!(!cursor.peek_str("//"));
    /// ```
    #[inline]
    pub fn peek_str(&self, expected: &str) -> bool {
        self.remaining().starts_with(expected)
    }

    /// Consumes `n + 1` characters, one at a time.
    ///
    /// Callers that want to consume exactly one character pass `0`; callers
    /// that want to consume exactly `k` characters pass `k - 1`. Every call
    /// site in this crate is written against that contract.
    ///
    /// Each consumed character updates the position: a newline bumps the
    /// line and resets the column to 1, any other character bumps the
    /// column. Consuming past the end of the source is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use relayc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abcdef");
    /// cursor.advance(2); // consumes "abc"
    /// assert_eq!(cursor.peek(), 'd');
    /// ```
    pub fn advance(&mut self, n: usize) {
        for _ in 0..=n {
            self.bump();
        }
    }

    /// Consumes a single character, updating line/column tracking.
    fn bump(&mut self) {
        if self.offset >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.offset];
        if b < 128 {
            self.offset += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.offset..].chars().next() {
            self.offset += c.len_utf8();
            self.column += 1;
        }
    }

    /// Returns true if the cursor has consumed the entire source.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns the current byte offset in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Captures the current location as a [`Position`].
    ///
    /// Token classifiers call this once, before consuming, so the token
    /// carries the position of its first character.
    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    /// Returns the source slice from the given byte offset to the current
    /// position.
    ///
    /// # Example
    ///
    /// ```
    /// use relayc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("when X");
    /// let start = cursor.offset();
    /// cursor.advance(3);
    /// assert_eq!(cursor.slice_from(start), "when");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }
}
