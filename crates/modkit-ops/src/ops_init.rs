//! Operation: scaffold a new Modkit.toml in a directory.

use std::path::{Path, PathBuf};

use modkit_core::manifest::{Game, Manifest};
use modkit_core::PROJECT_MANIFEST;
use modkit_util::errors::ModkitError;
use modkit_util::progress::status;

/// Options for `modkit init`.
pub struct InitOptions {
    pub name: String,
    pub description: String,
    /// Game executable the mod targets, e.g. `skyrim.exe`.
    pub game_executable: String,
    /// Supported game version constraint. `>=v0.0.0` matches everything.
    pub game_version: String,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            game_executable: String::new(),
            game_version: ">=v0.0.0".to_string(),
        }
    }
}

/// Create a fresh project manifest in `dir`.
///
/// Fails if the directory already contains one; init never overwrites.
pub fn init(dir: &Path, opts: &InitOptions) -> miette::Result<PathBuf> {
    let manifest_path = dir.join(PROJECT_MANIFEST);
    if manifest_path.exists() {
        return Err(ModkitError::Generic {
            message: format!("{PROJECT_MANIFEST} already exists in this directory"),
        }
        .into());
    }

    let mut manifest = Manifest::new();
    if !opts.name.is_empty() {
        manifest.name = Some(opts.name.clone());
    }
    if !opts.description.is_empty() {
        manifest.description = Some(opts.description.clone());
    }
    if !opts.game_executable.is_empty() {
        manifest.game = Some(Game {
            executable: Some(opts.game_executable.clone()),
            version: Some(opts.game_version.clone()),
        });
    }

    manifest.write_to(&manifest_path)?;
    status("Created", &manifest_path.display().to_string());
    Ok(manifest_path)
}
