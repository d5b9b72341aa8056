//! Graph error types.

use docgen_core::CoreError;

/// Fatal failures of a discovery pass.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Type {0} not found in the root package")]
    RootNotFound(String),

    #[error("No root package loaded")]
    NoRootModule,

    #[error(transparent)]
    Core(#[from] CoreError),
}
