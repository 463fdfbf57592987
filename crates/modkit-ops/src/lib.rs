//! High-level modkit operations, one module per command.

pub mod ops_add;
pub mod ops_init;
pub mod ops_install;

use std::path::{Path, PathBuf};

use modkit_core::PROJECT_MANIFEST;
use modkit_util::errors::ModkitError;

/// Locate the project root by walking up from `start` to the nearest
/// directory containing `Modkit.toml`.
pub fn find_project_root(start: &Path) -> miette::Result<PathBuf> {
    modkit_util::fs::find_ancestor_with(start, PROJECT_MANIFEST).ok_or_else(|| {
        ModkitError::Generic {
            message: format!(
                "No {PROJECT_MANIFEST} found in '{}' or any parent directory; \
                 run `modkit init` first",
                start.display()
            ),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_manifest_in_parent() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(PROJECT_MANIFEST), "name = \"x\"\n").unwrap();
        let nested = tmp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let root = find_project_root(&nested).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn missing_manifest_suggests_init() {
        let tmp = tempfile::tempdir().unwrap();
        let err = find_project_root(tmp.path()).unwrap_err();
        assert!(format!("{err}").contains("modkit init"));
    }
}
