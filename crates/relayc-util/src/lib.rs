//! relayc-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by the relayc compiler
//! phases: source positions and the phase-tagged error type that every
//! phase reports failures through.
//!
//! # Overview
//!
//! Compilation is organized as a pipeline of phases (lexing, parsing, and
//! so on). Two concerns cut across all of them:
//!
//! - **Source positions**: every construct a phase produces must be
//!   traceable back to the exact place in the source it came from, so that
//!   diagnostics can point at real code. [`Position`] is the value type
//!   carrying that information.
//! - **Failure reporting**: every phase fails the same way, with a
//!   [`CompileError`] naming the phase, the offending position, and a
//!   human-readable message. Downstream tooling can format or aggregate
//!   these without knowing which phase produced them.
//!
//! # Example
//!
//! ```
//! use relayc_util::{CompileError, Position};
//!
//! let position = Position::new(14, 3, 7);
//! let error = CompileError::new("Lexer", position, "unexpected character");
//!
//! assert_eq!(
//!     error.to_string(),
//!     "[Lexer] : <line:3,column:7> unexpected character"
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod position;

// Re-export main types for convenience
pub use error::{CompileError, CompileResult};
pub use position::Position;
