//! Type graph discovery.
//!
//! Starting from a root struct, every struct reachable through fields,
//! pointers, slices, arrays and map values is resolved once and recorded in
//! discovery order (pre-order, root first). Embedded structs are flattened
//! into their owner and also documented on their own.

use docgen_core::naming::qualify;
use docgen_core::{
    Diagnostic, DiagnosticKind, Example, Field, Origin, ResolvedSet, TypeDecl, annotation,
};
use docgen_parser::{ModuleId, ModuleSet, PackageResolution, StructDecl, TypeSignature};

use crate::classifier::{Candidate, Classification, SkipReason, classify};
use crate::context::{ResolutionContext, Visit};
use crate::error::GraphError;
use crate::options::DiscoverOptions;

const REQUEST_TYPE: &str = "Request";

/// Discover every type reachable from `root` (matched case-insensitively
/// against the exported structs of the root packages).
///
/// # Errors
/// Returns `GraphError::RootNotFound` if no root package declares the type.
pub fn discover(
    modules: &ModuleSet,
    root: &str,
    options: &DiscoverOptions,
) -> Result<ResolvedSet, GraphError> {
    if modules.roots().is_empty() {
        return Err(GraphError::NoRootModule);
    }
    let (module, decl) = modules
        .roots()
        .iter()
        .find_map(|&id| modules.get(id).find_struct(root).map(|decl| (id, decl)))
        .ok_or_else(|| GraphError::RootNotFound(root.to_string()))?;

    tracing::info!(type_name = %decl.name, "generating docs for type");

    let mut resolver = Resolver {
        modules,
        options,
        ctx: ResolutionContext::default(),
    };
    let root_name = resolver.qualified(module, &decl.name);
    let root_full = resolver.full_reference(module, &decl.name);
    resolver.ctx.visit(&root_name, &root_full);
    resolver.resolve_type(module, decl, Origin::Root, &mut Vec::new());

    let (decls, diagnostics) = resolver.ctx.finish();
    tracing::debug!(types = decls.len(), diagnostics = diagnostics.len(), "discovery finished");
    Ok(ResolvedSet::from_parts(decls, root_name, diagnostics)?)
}

/// A resolved type signature.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolved {
    rendered: String,
    type_ref: Option<String>,
}

impl Resolved {
    fn plain(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            type_ref: None,
        }
    }
}

/// Owner and field a signature is resolved for, used in diagnostics.
#[derive(Debug, Clone, Copy)]
struct Site<'s> {
    owner: &'s str,
    field: &'s str,
}

struct Resolver<'a> {
    modules: &'a ModuleSet,
    options: &'a DiscoverOptions,
    ctx: ResolutionContext,
}

impl<'a> Resolver<'a> {
    /// Types of root packages keep bare names; others are prefixed with the
    /// package's short name.
    fn prefix(&self, module: ModuleId) -> &'a str {
        if self.modules.roots().contains(&module) {
            ""
        } else {
            self.modules.get(module).short_name()
        }
    }

    fn qualified(&self, module: ModuleId, name: &str) -> String {
        qualify(self.prefix(module), name)
    }

    fn full_reference(&self, module: ModuleId, name: &str) -> String {
        format!("{}.{name}", self.modules.get(module).import_path)
    }

    /// Resolve `decl` into a [`TypeDecl`]. `chain` holds the types whose
    /// fields are being flattened into one another.
    fn resolve_type(
        &mut self,
        module: ModuleId,
        decl: &'a StructDecl,
        origin: Origin,
        chain: &mut Vec<String>,
    ) {
        let qualified = self.qualified(module, &decl.name);
        tracing::debug!(type_name = %qualified, "resolving type");
        self.ctx.reserve(&qualified);

        chain.push(qualified.clone());
        let fields = self.resolve_fields(module, decl, &qualified, chain);
        chain.pop();

        let part_definitions = if decl.name == REQUEST_TYPE {
            self.modules
                .get(module)
                .part_definitions
                .iter()
                .map(|(key, value)| Example::new(key, value))
                .collect()
        } else {
            Vec::new()
        };

        self.ctx.complete(TypeDecl {
            name: decl.name.clone(),
            module_prefix: self.prefix(module).to_string(),
            text: annotation::parse(&decl.doc),
            fields,
            part_definitions,
            origin,
        });
    }

    fn resolve_fields(
        &mut self,
        module: ModuleId,
        decl: &'a StructDecl,
        owner: &str,
        chain: &mut Vec<String>,
    ) -> Vec<Field> {
        let mut fields = Vec::new();
        for raw in &decl.fields {
            match classify(raw, &self.options.tags) {
                Classification::Skip(SkipReason::MissingDocumentation) => {
                    let field = raw.ident.clone().unwrap_or_default();
                    self.ctx.report(Diagnostic {
                        kind: DiagnosticKind::MissingDocumentation,
                        type_name: owner.to_string(),
                        message: format!("field {field:?} is missing documentation"),
                        field: Some(field),
                    });
                }
                Classification::Skip(reason) => {
                    tracing::trace!(type_name = owner, field = ?raw.ident, ?reason, "field skipped");
                }
                Classification::Inline(signature) => {
                    fields.extend(self.inline(module, decl.file, &signature, owner, chain));
                }
                Classification::Field(candidate) => {
                    fields.push(self.resolve_field(module, decl.file, candidate, owner));
                }
            }
        }
        fields
    }

    /// Fields of the embedded struct `signature`, which is also resolved as a
    /// standalone type when first seen.
    fn inline(
        &mut self,
        module: ModuleId,
        file: usize,
        signature: &TypeSignature,
        owner: &str,
        chain: &mut Vec<String>,
    ) -> Vec<Field> {
        let Some((target, decl)) = self.locate(module, file, signature) else {
            self.ctx.report(Diagnostic {
                kind: DiagnosticKind::UnresolvedEmbed,
                type_name: owner.to_string(),
                field: None,
                message: format!("embedded type {signature} is not a known struct"),
            });
            return Vec::new();
        };

        let qualified = self.qualified(target, &decl.name);
        let visit = self.claim(target, &decl.name, owner, None);
        if matches!(visit, Visit::Taken(_)) {
            return Vec::new();
        }
        if chain.contains(&qualified) {
            self.ctx.report(Diagnostic {
                kind: DiagnosticKind::CyclicEmbedding,
                type_name: owner.to_string(),
                field: None,
                message: format!("embedding {qualified} would form a cycle"),
            });
            return Vec::new();
        }

        if visit == Visit::First {
            self.resolve_type(target, decl, Origin::Transitive, chain);
        }
        if let Some(done) = self.ctx.completed(&qualified) {
            return done.fields.clone();
        }

        // Still in progress higher up the stack through a plain reference.
        chain.push(qualified.clone());
        let fields = self.resolve_fields(target, decl, &qualified, chain);
        chain.pop();
        fields
    }

    /// Module and declaration of the struct named by a (pointee) signature.
    fn locate(
        &self,
        module: ModuleId,
        file: usize,
        signature: &TypeSignature,
    ) -> Option<(ModuleId, &'a StructDecl)> {
        let modules = self.modules;
        match signature.pointee() {
            TypeSignature::Named(name) => modules
                .get(module)
                .lookup_struct(name)
                .map(|decl| (module, decl)),
            TypeSignature::Qualified { package, name } => {
                match modules.resolve_package(module, file, package) {
                    PackageResolution::Loaded(target) => modules
                        .get(target)
                        .lookup_struct(name)
                        .map(|decl| (target, decl)),
                    PackageResolution::Unloaded { .. } | PackageResolution::Unknown => None,
                }
            }
            _ => None,
        }
    }

    fn resolve_field(
        &mut self,
        module: ModuleId,
        file: usize,
        candidate: Candidate,
        owner: &str,
    ) -> Field {
        let site = Site {
            owner,
            field: &candidate.name,
        };
        let resolved = self.resolve_signature(module, file, &candidate.signature, true, site);
        let enum_values = if candidate.discriminator {
            self.enum_values(module, file, &candidate.signature)
        } else {
            Vec::new()
        };

        Field {
            ident: candidate.ident,
            name: candidate.name,
            type_signature: resolved.rendered,
            type_ref: resolved.type_ref,
            text: candidate.annotation,
            enum_values,
        }
    }

    /// Render `signature` and, when `follow` is set, discover the struct it
    /// refers to. Map keys are rendered but never followed.
    fn resolve_signature(
        &mut self,
        module: ModuleId,
        file: usize,
        signature: &TypeSignature,
        follow: bool,
        site: Site<'_>,
    ) -> Resolved {
        match signature {
            TypeSignature::Named(name) => self.resolve_named(module, name, follow, site),
            TypeSignature::Qualified { package, name } => {
                self.resolve_qualified(module, file, package, name, follow, site)
            }
            TypeSignature::Pointer(inner) => {
                let inner = self.resolve_signature(module, file, inner, follow, site);
                Resolved {
                    rendered: format!("*{}", inner.rendered),
                    type_ref: inner.type_ref,
                }
            }
            TypeSignature::Array(element) => {
                let element = self.resolve_signature(module, file, element, follow, site);
                Resolved {
                    rendered: format!("[]{}", element.rendered),
                    type_ref: element.type_ref,
                }
            }
            TypeSignature::Map { key, value } => {
                let key = self.resolve_signature(module, file, key, false, site);
                let value = self.resolve_signature(module, file, value, follow, site);
                Resolved {
                    rendered: format!("map[{}]{}", key.rendered, value.rendered),
                    type_ref: value.type_ref,
                }
            }
            TypeSignature::Struct => Resolved::plain("struct"),
            TypeSignature::Interface => Resolved::plain("interface{}"),
            TypeSignature::Other(text) => Resolved::plain(text.clone()),
        }
    }

    fn resolve_named(
        &mut self,
        module: ModuleId,
        name: &str,
        follow: bool,
        site: Site<'_>,
    ) -> Resolved {
        let Some(decl) = self.modules.get(module).lookup_struct(name) else {
            return Resolved::plain(name);
        };
        self.follow(module, decl, follow, site)
    }

    fn resolve_qualified(
        &mut self,
        module: ModuleId,
        file: usize,
        package: &str,
        name: &str,
        follow: bool,
        site: Site<'_>,
    ) -> Resolved {
        let target = match self.modules.resolve_package(module, file, package) {
            PackageResolution::Loaded(target) => target,
            PackageResolution::Unloaded { import_path } => {
                if follow {
                    self.ctx.report_unresolved(
                        &import_path,
                        Diagnostic {
                            kind: DiagnosticKind::UnresolvedImport,
                            type_name: site.owner.to_string(),
                            field: Some(site.field.to_string()),
                            message: format!("package {import_path} is not loaded"),
                        },
                    );
                }
                return Resolved::plain(format!("{package}.{name}"));
            }
            PackageResolution::Unknown => {
                if follow {
                    self.ctx.report_unresolved(
                        package,
                        Diagnostic {
                            kind: DiagnosticKind::UnresolvedImport,
                            type_name: site.owner.to_string(),
                            field: Some(site.field.to_string()),
                            message: format!("package {package} is not imported"),
                        },
                    );
                }
                return Resolved::plain(format!("{package}.{name}"));
            }
        };

        let Some(decl) = self.modules.get(target).lookup_struct(name) else {
            return Resolved::plain(qualify(self.modules.get(target).short_name(), name));
        };
        self.follow(target, decl, follow, site)
    }

    /// Render a reference to the struct `decl` and, when `follow` is set,
    /// discover it. A reference whose name is taken by another type is
    /// rendered without a link.
    fn follow(
        &mut self,
        module: ModuleId,
        decl: &'a StructDecl,
        follow: bool,
        site: Site<'_>,
    ) -> Resolved {
        let qualified = self.qualified(module, &decl.name);
        if !follow {
            return Resolved::plain(qualified);
        }
        match self.claim(module, &decl.name, site.owner, Some(site.field)) {
            Visit::First => {
                self.resolve_type(module, decl, Origin::Transitive, &mut Vec::new());
            }
            Visit::Again => {}
            Visit::Taken(_) => return Resolved::plain(qualified),
        }
        Resolved {
            rendered: qualified.clone(),
            type_ref: Some(qualified),
        }
    }

    /// Mark the type `name` of `module` as discovered, reporting a name
    /// collision when its qualified name already belongs to another type.
    fn claim(&mut self, module: ModuleId, name: &str, owner: &str, field: Option<&str>) -> Visit {
        let qualified = self.qualified(module, name);
        let full = self.full_reference(module, name);
        let visit = self.ctx.visit(&qualified, &full);
        if let Visit::Taken(existing) = &visit {
            self.ctx.report(Diagnostic {
                kind: DiagnosticKind::NameCollision,
                type_name: owner.to_string(),
                field: field.map(str::to_string),
                message: format!("{full} and {existing} are both documented as {qualified}"),
            });
        }
        visit
    }

    /// Values of the constant group marked for the discriminator's type.
    fn enum_values(&self, module: ModuleId, file: usize, signature: &TypeSignature) -> Vec<String> {
        let enums = &self.options.enums;
        let (target, name) = match signature {
            TypeSignature::Named(name) => (module, name),
            TypeSignature::Qualified { package, name } => {
                match self.modules.resolve_package(module, file, package) {
                    PackageResolution::Loaded(target) => (target, name),
                    PackageResolution::Unloaded { .. } | PackageResolution::Unknown => {
                        return Vec::new();
                    }
                }
            }
            _ => return Vec::new(),
        };
        self.modules
            .get(target)
            .enum_values(name, &enums.marker_prefix, &enums.excluded)
    }
}
