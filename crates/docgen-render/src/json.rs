//! JSON output.

use docgen_core::DocumentSet;

use crate::{RenderError, Renderer};

/// Pretty-printed JSON of the whole document set.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, docs: &DocumentSet) -> Result<String, RenderError> {
        let mut out = serde_json::to_string_pretty(docs)?;
        out.push('\n');
        Ok(out)
    }
}
