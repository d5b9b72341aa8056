//! Owned syntax model extracted from Go sources.

mod decl;
mod signature;

pub use decl::{ConstGroup, ConstSpec, GoFile, ImportSpec, RawField, StructDecl};
pub use signature::TypeSignature;
