//! Parser error types for docgen-parser.

use std::path::PathBuf;

/// Errors that can occur while loading Go modules.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("No Go source files found in {}", .0.display())]
    NoSources(PathBuf),

    #[error("Malformed go.mod at {}: {message}", .path.display())]
    MalformedGoMod { path: PathBuf, message: String },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
