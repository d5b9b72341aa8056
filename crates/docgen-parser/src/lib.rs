//! # docgen-parser
//!
//! ast-grep-based Go source loading for docgen.
//!
//! Turns a directory of Go packages into a [`ModuleSet`]: per package, the
//! exported struct declarations (fields, tags, doc comments, structured type
//! signatures), the marked constant groups used for enum discovery, and the
//! import table needed to follow qualified types across packages.

pub mod error;
pub mod extractors;
pub mod gomod;
pub mod module;
pub mod parser;
pub mod tag;
pub mod test_files;
pub mod types;
pub mod walk;

pub use error::ParserError;
pub use module::{LoadOptions, Module, ModuleId, ModuleSet, PackageResolution};
pub use tag::StructTag;
pub use test_files::{is_test_dir, is_test_file};
pub use types::{ConstGroup, ConstSpec, GoFile, ImportSpec, RawField, StructDecl, TypeSignature};
