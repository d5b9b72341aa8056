//! Cross-cutting error types for docgen.
//!
//! Domain-specific errors (e.g., `ParserError`, `GraphError`) are defined in
//! their respective crates. They converge into `anyhow` in `docgen-cli`.

use thiserror::Error;

/// Errors that can be raised while assembling the core model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two type declarations resolved to the same qualified name.
    #[error("Duplicate type declaration: {0}")]
    DuplicateType(String),

    /// The designated root type is not part of the set.
    #[error("Root type {0} is missing from the resolved set")]
    MissingRoot(String),

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
