//! Core error type shared by the relayc compiler phases.
//!
//! Every phase reports unrecoverable failures as a [`CompileError`] tagged
//! with the phase name and the source position the failure was detected at.

use thiserror::Error;

use crate::position::Position;

/// An unrecoverable failure raised by a compiler phase.
///
/// The error carries the name of the phase that raised it (for example
/// `"Lexer"`), the line and column of the offending source text, and a
/// human-readable message. How the error is displayed or aggregated is the
/// caller's concern; phases only detect and report.
///
/// # Examples
///
/// ```
/// use relayc_util::{CompileError, Position};
///
/// let error = CompileError::new("Lexer", Position::new(5, 1, 6), "unterminated string literal");
/// assert_eq!(error.phase, "Lexer");
/// assert_eq!(error.line, 1);
/// assert_eq!(error.column, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{phase}] : <line:{line},column:{column}> {message}")]
pub struct CompileError {
    /// Name of the phase that raised the error.
    pub phase: &'static str,
    /// Line number of the offending source text (1-based).
    pub line: u32,
    /// Column number of the offending source text (1-based).
    pub column: u32,
    /// Human-readable description of the failure.
    pub message: String,
}

impl CompileError {
    /// Creates a new error for the given phase at the given position.
    pub fn new(phase: &'static str, position: Position, message: impl Into<String>) -> Self {
        Self {
            phase,
            line: position.line,
            column: position.column,
            message: message.into(),
        }
    }
}

/// Result type alias for phase operations.
pub type CompileResult<T> = std::result::Result<T, CompileError>;
