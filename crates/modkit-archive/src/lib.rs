//! Release archive unpacking for modkit.
//!
//! Mod release assets are zip or gzipped tar archives. A manifest's file
//! entry may name a `source` path inside the archive; only content under
//! that prefix is installed, with the prefix stripped, so archives can
//! carry documentation or loose files next to the installable payload.

use std::path::{Component, Path, PathBuf};

use modkit_util::errors::ModkitError;

mod tarball;
mod zipfile;

/// Supported archive container formats, detected from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    TarGz,
}

/// A downloaded release archive on disk.
#[derive(Debug, Clone)]
pub struct Archive {
    path: PathBuf,
}

impl Archive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detect the container format from the file name extension.
    pub fn format(&self) -> miette::Result<ArchiveFormat> {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if name.ends_with(".zip") {
            Ok(ArchiveFormat::Zip)
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Ok(ArchiveFormat::TarGz)
        } else {
            Err(ModkitError::UnsupportedArchive {
                path: self.path.display().to_string(),
            }
            .into())
        }
    }

    /// Extract the archive into `dest`.
    ///
    /// When `source_prefix` is non-empty, only entries under that path are
    /// extracted, relocated to `dest` with the prefix removed; everything
    /// else in the archive is skipped. Returns the number of files written.
    pub fn unpack(&self, dest: &Path, source_prefix: &str) -> miette::Result<usize> {
        match self.format()? {
            ArchiveFormat::Zip => zipfile::unpack(&self.path, dest, source_prefix),
            ArchiveFormat::TarGz => tarball::unpack(&self.path, dest, source_prefix),
        }
    }
}

/// Relocate an archive entry path under the destination, applying the
/// source prefix filter.
///
/// Returns `None` when the entry falls outside the prefix (skip it), or an
/// error when the path escapes the destination via `..` or an absolute
/// component.
fn relocated(entry: &Path, source_prefix: &str) -> miette::Result<Option<PathBuf>> {
    for component in entry.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => {
                return Err(ModkitError::Generic {
                    message: format!("Archive entry '{}' escapes the destination", entry.display()),
                }
                .into())
            }
        }
    }

    if source_prefix.is_empty() {
        return Ok(Some(entry.to_path_buf()));
    }

    match entry.strip_prefix(source_prefix) {
        Ok(rest) if rest.as_os_str().is_empty() => Ok(None),
        Ok(rest) => Ok(Some(rest.to_path_buf())),
        Err(_) => Ok(None),
    }
}
