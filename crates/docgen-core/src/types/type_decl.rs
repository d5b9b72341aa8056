use serde::{Deserialize, Serialize};

use super::Field;
use crate::annotation::{Annotation, Example};
use crate::naming;

/// How a type entered the resolved set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// The entry point requested by the caller.
    Root,
    /// Reached from another type.
    Transitive,
}

/// A named struct-like declaration with its documentable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Local name as declared (`Options`).
    pub name: String,
    /// Short name of the declaring module; empty for the root module.
    pub module_prefix: String,
    pub text: Annotation,
    /// Fields in declaration order, with embedded types already spliced in.
    pub fields: Vec<Field>,
    /// Key/value part definitions (only populated for `Request` types).
    pub part_definitions: Vec<Example>,
    pub origin: Origin,
}

impl TypeDecl {
    /// `prefix.Name`, or the bare name for root-module types.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        naming::qualify(&self.module_prefix, &self.name)
    }

    /// `PREFIXName`, usable as an identifier in generated code.
    #[must_use]
    pub fn escaped_name(&self) -> String {
        naming::escape(&self.module_prefix, &self.name)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.origin == Origin::Root
    }
}
