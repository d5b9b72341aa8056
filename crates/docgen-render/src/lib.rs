//! # docgen-render
//!
//! Final stage of the docgen pipeline: a synthesized [`DocumentSet`] is
//! turned into output text by a [`Renderer`].
//!
//! - [`GoRenderer`] emits Go source registering `yamldoc-go` `encoder.Doc`
//!   values, one per documented type.
//! - [`JsonRenderer`] emits the document set as pretty-printed JSON.

pub mod error;
mod escape;
pub mod go;
pub mod json;

use docgen_config::{OutputConfig, OutputFormat};
use docgen_core::DocumentSet;

pub use error::RenderError;
pub use escape::escape;
pub use go::GoRenderer;
pub use json::JsonRenderer;

/// Output backend for a synthesized document set.
pub trait Renderer {
    /// Render `docs` to the backend's text format.
    ///
    /// # Errors
    /// Returns [`RenderError`] if the document cannot be encoded.
    fn render(&self, docs: &DocumentSet) -> Result<String, RenderError>;
}

/// The renderer selected by `output.format`.
#[must_use]
pub fn for_output(output: &OutputConfig) -> Box<dyn Renderer> {
    match output.format {
        OutputFormat::Go => Box::new(GoRenderer::new(output.banner.clone())),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
