//! # docgen-core
//!
//! Core types and error types for docgen.
//!
//! This crate provides the foundational types shared across all docgen crates:
//! - The resolved type graph (`TypeDecl`, `Field`, `ResolvedSet`)
//! - The synthesized documentation objects (`DocumentSet`, `TypeDoc`, `FieldDoc`)
//! - Comment annotation parsing (free text or structured YAML blocks)
//! - Per-field diagnostics collected during resolution
//! - Cross-cutting error types

pub mod annotation;
pub mod document;
pub mod errors;
pub mod naming;
pub mod types;

pub use annotation::{Annotation, Example};
pub use document::{DocumentSet, FieldDoc, TypeDoc};
pub use errors::CoreError;
pub use types::{Appearance, Diagnostic, DiagnosticKind, Field, Origin, ResolvedSet, TypeDecl};
