//! Core data types for the modkit mod manager.
//!
//! This crate defines the fundamental types that represent a mod release:
//! the manifest document, GitHub repo identifiers, release file descriptors,
//! and game/age-rating metadata.
//!
//! This crate is intentionally free of async code and network I/O.

/// The manifest asset name published with every mod release.
pub const MANIFEST_NAME: &str = "modkit.toml";

/// Filename of the local project manifest.
pub const PROJECT_MANIFEST: &str = "Modkit.toml";

pub mod manifest;
pub mod repo;
