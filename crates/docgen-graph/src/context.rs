//! Mutable state of one discovery pass.

use std::collections::{HashMap, HashSet};

use docgen_core::{Diagnostic, DiagnosticKind, TypeDecl};
use indexmap::IndexMap;

/// Outcome of [`ResolutionContext::visit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Visit {
    First,
    Again,
    /// The qualified name already belongs to the type at this full reference.
    Taken(String),
}

/// Dedup set, discovery order and diagnostics, scoped to a single
/// [`discover`](crate::discover) call.
#[derive(Debug, Default)]
pub(crate) struct ResolutionContext {
    /// Qualified name (`prefix.Name`) to full reference (`import/path.Name`).
    visited: HashMap<String, String>,
    /// One slot per discovered type, reserved on entry and filled on completion.
    slots: IndexMap<String, Option<TypeDecl>>,
    diagnostics: Vec<Diagnostic>,
    /// Package identifiers and import paths already reported as unresolvable.
    reported: HashSet<String>,
}

impl ResolutionContext {
    /// Mark a type as discovered under its qualified name.
    pub(crate) fn visit(&mut self, qualified: &str, full: &str) -> Visit {
        match self.visited.get(qualified) {
            Some(existing) if existing == full => Visit::Again,
            Some(existing) => Visit::Taken(existing.clone()),
            None => {
                self.visited.insert(qualified.to_string(), full.to_string());
                Visit::First
            }
        }
    }

    pub(crate) fn reserve(&mut self, qualified: &str) {
        self.slots.entry(qualified.to_string()).or_insert(None);
    }

    pub(crate) fn complete(&mut self, decl: TypeDecl) {
        self.slots.insert(decl.qualified_name(), Some(decl));
    }

    /// A completed declaration; `None` while the type is still being resolved.
    pub(crate) fn completed(&self, qualified: &str) -> Option<&TypeDecl> {
        self.slots.get(qualified).and_then(Option::as_ref)
    }

    /// Record a recoverable problem once, logging it at `warn`.
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        if self.diagnostics.contains(&diagnostic) {
            return;
        }
        tracing::warn!(
            kind = %diagnostic.kind,
            type_name = %diagnostic.type_name,
            field = diagnostic.field.as_deref().unwrap_or_default(),
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    /// Report an unresolvable package the first time `key` is seen.
    pub(crate) fn report_unresolved(&mut self, key: &str, diagnostic: Diagnostic) {
        debug_assert_eq!(diagnostic.kind, DiagnosticKind::UnresolvedImport);
        if self.reported.insert(key.to_string()) {
            self.report(diagnostic);
        }
    }

    /// Completed declarations in discovery order, plus diagnostics.
    pub(crate) fn finish(self) -> (Vec<TypeDecl>, Vec<Diagnostic>) {
        let decls = self.slots.into_values().flatten().collect();
        (decls, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgen_core::{Annotation, Origin};

    fn decl(name: &str) -> TypeDecl {
        TypeDecl {
            name: name.to_string(),
            module_prefix: String::new(),
            text: Annotation::default(),
            fields: Vec::new(),
            part_definitions: Vec::new(),
            origin: Origin::Transitive,
        }
    }

    #[test]
    fn visit_tracks_owner_of_qualified_name() {
        let mut ctx = ResolutionContext::default();
        assert_eq!(
            ctx.visit("network.Options", "example.com/pkg/network.Options"),
            Visit::First
        );
        assert_eq!(
            ctx.visit("network.Options", "example.com/pkg/network.Options"),
            Visit::Again
        );
        assert_eq!(
            ctx.visit("network.Options", "other.com/network.Options"),
            Visit::Taken("example.com/pkg/network.Options".to_string())
        );
    }

    #[test]
    fn slots_keep_reservation_order() {
        let mut ctx = ResolutionContext::default();
        ctx.reserve("Job");
        ctx.reserve("Options");
        ctx.complete(decl("Options"));
        assert!(ctx.completed("Job").is_none());
        ctx.complete(decl("Job"));

        let (decls, _) = ctx.finish();
        let names: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Job", "Options"]);
    }

    #[test]
    fn identical_diagnostics_are_reported_once() {
        let mut ctx = ResolutionContext::default();
        let diagnostic = Diagnostic {
            kind: DiagnosticKind::MissingDocumentation,
            type_name: "Job".to_string(),
            field: Some("Name".to_string()),
            message: "field is missing documentation".to_string(),
        };
        ctx.report(diagnostic.clone());
        ctx.report(diagnostic);
        let (_, diagnostics) = ctx.finish();
        assert_eq!(diagnostics.len(), 1);
    }
}
