//! GitHub releases client for modkit.
//!
//! Mods are distributed as GitHub releases: every release that modkit can
//! install carries a manifest asset (`modkit.toml`) listing the mod's own
//! dependencies, alongside the archive assets holding the mod content. This
//! crate lists releases through the GitHub REST API, locates and parses
//! manifest assets, and downloads release archives to disk.

pub mod client;
pub mod download;
pub mod release;

pub use client::{GitHubClient, GITHUB_API_URL};
pub use release::{Release, ReleaseAsset};
