//! The resolved type graph produced by one discovery pass.

mod appearance;
mod diagnostic;
mod field;
mod resolved_set;
mod type_decl;

pub use appearance::Appearance;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use field::Field;
pub use resolved_set::ResolvedSet;
pub use type_decl::{Origin, TypeDecl};
