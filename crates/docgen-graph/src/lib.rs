//! # docgen-graph
//!
//! Turns loaded Go packages into documentation in two explicit phases:
//!
//! 1. [`discover`] walks the type graph from a root struct, classifying every
//!    field, flattening embedded structs and following references across
//!    packages, and yields a [`ResolvedSet`](docgen_core::ResolvedSet).
//! 2. [`synthesize`] computes example propagation and the "appears in" index
//!    over the completed set and yields a [`DocumentSet`](docgen_core::DocumentSet).

pub mod classifier;
mod context;
pub mod error;
pub mod options;
pub mod resolver;
pub mod synthesize;

pub use classifier::{Candidate, Classification, SkipReason, classify};
pub use error::GraphError;
pub use options::{DiscoverOptions, DocumentOptions};
pub use resolver::discover;
pub use synthesize::synthesize;
