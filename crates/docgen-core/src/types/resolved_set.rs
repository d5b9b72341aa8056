use indexmap::IndexMap;

use super::{Diagnostic, TypeDecl};
use crate::errors::CoreError;

/// Every type discovered from one root, unique by qualified name, in discovery order.
#[derive(Debug, Clone)]
pub struct ResolvedSet {
    types: IndexMap<String, TypeDecl>,
    root: String,
    diagnostics: Vec<Diagnostic>,
}

impl ResolvedSet {
    /// Assemble a set from discovered declarations.
    ///
    /// # Errors
    /// Returns `CoreError::DuplicateType` if two declarations share a qualified
    /// name, or `CoreError::MissingRoot` if `root` is not among them.
    pub fn from_parts(
        decls: impl IntoIterator<Item = TypeDecl>,
        root: impl Into<String>,
        diagnostics: Vec<Diagnostic>,
    ) -> Result<Self, CoreError> {
        let root = root.into();
        let mut types = IndexMap::new();
        for decl in decls {
            let name = decl.qualified_name();
            if types.contains_key(&name) {
                return Err(CoreError::DuplicateType(name));
            }
            types.insert(name, decl);
        }
        if !types.contains_key(&root) {
            return Err(CoreError::MissingRoot(root));
        }
        Ok(Self {
            types,
            root,
            diagnostics,
        })
    }

    /// The entry-point type, independent of its position.
    #[must_use]
    pub fn root(&self) -> &TypeDecl {
        &self.types[&self.root]
    }

    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn get(&self, qualified_name: &str) -> Option<&TypeDecl> {
        self.types.get(qualified_name)
    }

    #[must_use]
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    /// Types in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Recoverable problems recorded while discovering the set.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
