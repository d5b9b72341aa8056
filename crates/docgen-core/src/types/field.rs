use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;

/// One documentable member of a [`TypeDecl`](super::TypeDecl).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Source identifier of the field (`BulkSize`).
    pub ident: String,
    /// Exposed name derived from the serialization tag (`bulk-size`).
    pub name: String,
    /// Human-readable type signature (`map[string]string`, `[]Other`).
    pub type_signature: String,
    /// Qualified name of the referenced struct, when the field points at one.
    pub type_ref: Option<String>,
    pub text: Annotation,
    /// Constant names collected for discriminator (`mapping`) fields.
    pub enum_values: Vec<String>,
}

impl Field {
    /// The referenced struct name, if any. Empty references never count.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.type_ref.as_deref().filter(|r| !r.is_empty())
    }
}
