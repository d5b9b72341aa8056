//! Synthesized documentation objects handed to renderers.

use serde::{Deserialize, Serialize};

use crate::annotation::Example;
use crate::types::Appearance;

/// Documentation for one field of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDoc {
    /// Exposed (tag) name.
    pub name: String,
    pub type_signature: String,
    pub summary: String,
    pub description: String,
    /// Own examples followed by the examples declared on the referenced type.
    pub examples: Vec<Example>,
    /// Allowed values declared in the field comment.
    pub values: Vec<String>,
    /// Constant names discovered for discriminator fields.
    pub enum_values: Vec<String>,
}

/// Documentation for one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDoc {
    /// Qualified name (`prefix.Name`).
    pub name: String,
    /// Identifier-safe name (`PREFIXName`).
    pub escaped_name: String,
    pub summary: String,
    pub description: String,
    /// Own examples followed by examples supplied at every reference site.
    pub examples: Vec<Example>,
    pub values: Vec<String>,
    pub part_definitions: Vec<Example>,
    pub fields: Vec<FieldDoc>,
    pub appears_in: Vec<Appearance>,
}

/// The complete output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    /// Package (namespace) of the generated code.
    pub package: String,
    /// Requested root type name.
    pub name: String,
    /// Output file the document is written to.
    pub file: String,
    /// Free-text description of the whole file.
    pub header: String,
    /// One entry per discovered type; the root comes first.
    pub types: Vec<TypeDoc>,
}

impl DocumentSet {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDoc> {
        self.types.iter().find(|t| t.name == name)
    }
}

impl TypeDoc {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDoc> {
        self.fields.iter().find(|f| f.name == name)
    }
}
