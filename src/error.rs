//! Errors raised at the crate's boundaries.
//!
//! Indentation, routing and highlighting queries never fail; these variants
//! only cover loading grammars, reading input and writing output.

use thiserror::Error;

/// Result type alias for fallible nestml-lang operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boundary error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A grammar's tree-sitter language cannot be loaded by the linked runtime.
    #[error("Incompatible grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// Serializing command output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A requested offset is not a character boundary inside the document.
    #[error("Offset {offset} is outside the document (length {len})")]
    OffsetOutOfRange {
        /// The offending byte offset.
        offset: usize,
        /// Document length in bytes.
        len: usize,
    },
}
