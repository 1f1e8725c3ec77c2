//! relayc-lex - Lexical Analyzer for the Relay Rule Language
//!
//! This crate provides the lexer (tokenizer) for Relay, a small rule
//! language describing stateful reactive behavior. It transforms source
//! text into a stream of classified tokens, each carrying the exact
//! source position of its first character for downstream diagnostics.
//!
//! # Overview
//!
//! The lexer is pull-based: each call to [`Lexer::next_token`] skips
//! trivia (whitespace and comments), then produces exactly one token.
//! Repeated calls yield the full stream, terminated by an end-of-input
//! token that further calls keep returning. Scan failures are reported as
//! [`relayc_util::CompileError`] values and abort the call; the lexer
//! never produces a partial token and never resynchronizes on its own.
//!
//! # Example Usage
//!
//! ```
//! use relayc_lex::{tokenize, Lexer, TokenKind};
//!
//! let source = "when Heating temp >= 30 -> Idle";
//!
//! // Tokenize a whole buffer at once
//! let tokens = tokenize(source).unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::When);
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::When);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::StateId);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, kind, and value definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! ## Rule keywords
//!
//! `when`, `always`, `every`, `after`, `onenter`
//!
//! ## Type names
//!
//! `long`, `int`, `short`, `bool`, `string`, `char`, `proc`, `func`
//!
//! ## Duration suffixes
//!
//! `d`, `h`, `m`, `s`, `ms`, `µs`
//!
//! ## Identifiers
//!
//! Maximal runs of letters (no digits or underscores). An identifier
//! starting with an upper-case letter names a state; one starting with a
//! lower-case letter names a value.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0x2A`, `0b1010`
//! - **Boolean**: `true`, `false`
//! - **String**: `"hello\n"`
//! - **Character**: `'a'`, `'\t'`
//! - **Pin reference**: `$13`
//! - **Serial-port reference**: `$$0`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Boolean**: `&&`, `||`, `^^`, `!`
//! - **Bitwise**: `&`, `|`, `^`, `~`, `<<`, `>>`
//! - **Comparison**: `>`, `>=`, `<`, `<=`, `==`, `!=`
//! - **Change detection**: `->` ("changed to"), `!>` ("did not change to")
//! - **Old value**: `§`
//! - **Grouping**: `(`, `)`
//!
//! ## Trivia
//!
//! Whitespace and comments (`# ...`, `// ...`, `/* ... */`) are skipped
//! between tokens and never tokenized. Block comments do not nest, and a
//! comment left open at the end of input simply runs to the end.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind, TokenValue};

use relayc_util::CompileResult;

/// Tokenizes an entire source buffer.
///
/// Drives a fresh [`Lexer`] until the end-of-input marker and returns the
/// tokens before it (the marker itself is not included).
///
/// # Errors
///
/// The first lexical error aborts tokenization and is returned as-is.
///
/// # Example
///
/// ```
/// use relayc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("every 10 ms").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Every, TokenKind::LitDec, TokenKind::UnitMilli]);
/// ```
pub fn tokenize(source: &str) -> CompileResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.kind == TokenKind::Eof {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}
