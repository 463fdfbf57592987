//! Dependency resolution engine for modkit.
//!
//! Walks a root manifest's declared dependencies depth-first, fetching each
//! dependent manifest through a [`source::ManifestSource`], and merges every
//! discovery into a flat [`resolver::DependencySet`]. The first constraint
//! discovered for a repo is canonical; later discoveries must satisfy it or
//! resolution fails with a version conflict. A repo is fetched at most once
//! per resolution call, so dependency cycles terminate.

pub mod conflict;
pub mod resolver;
pub mod source;

pub use resolver::{DependencySet, Resolved, Resolver};
pub use source::ManifestSource;
