use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format output: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
