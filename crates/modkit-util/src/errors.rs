use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all modkit operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ModkitError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (neither TOML nor JSON decoded).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Modkit.toml for syntax errors"))]
    Manifest { message: String },

    /// No release publishing a manifest asset could be located.
    #[error("No manifest found for '{repo}' at version '{version}'")]
    ManifestNotFound { repo: String, version: String },

    /// A release exists but carries no asset with the expected name.
    #[error("Release '{version}' of '{repo}' has no asset named '{asset}'")]
    MissingAsset {
        repo: String,
        version: String,
        asset: String,
    },

    /// Two constraints on the same dependency are mutually incompatible.
    #[error(
        "Version conflict on '{repo}': existing constraint '{existing}' \
         is incompatible with '{requested}'"
    )]
    #[diagnostic(help(
        "Two mods require different versions of the same dependency; \
         pin a version both accept"
    ))]
    VersionConflict {
        repo: String,
        existing: String,
        requested: String,
    },

    /// Network request or download failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Archive file format not recognized or not supported.
    #[error("Unsupported archive format: {path}")]
    #[diagnostic(help("Supported formats: .zip, .tar.gz, .tgz"))]
    UnsupportedArchive { path: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
