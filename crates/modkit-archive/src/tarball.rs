use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::trace;

use modkit_util::errors::ModkitError;

use crate::relocated;

/// Extract a gzipped tar archive into `dest`, filtering by `source_prefix`.
pub(crate) fn unpack(path: &Path, dest: &Path, source_prefix: &str) -> miette::Result<usize> {
    let file = fs::File::open(path).map_err(ModkitError::Io)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));

    let entries = archive.entries().map_err(|e| ModkitError::Generic {
        message: format!("Failed to open tar '{}': {e}", path.display()),
    })?;

    let mut written = 0;
    for entry in entries {
        let mut entry = entry.map_err(|e| ModkitError::Generic {
            message: format!("Tar entry error in '{}': {e}", path.display()),
        })?;

        let entry_path = entry
            .path()
            .map_err(|e| ModkitError::Generic {
                message: format!("Invalid tar entry path: {e}"),
            })?
            .into_owned();

        let Some(rel) = relocated(&entry_path, source_prefix)? else {
            continue;
        };
        let out_path = dest.join(rel);

        if entry.header().entry_type().is_dir() {
            fs::create_dir_all(&out_path).map_err(ModkitError::Io)?;
            continue;
        }
        if !entry.header().entry_type().is_file() {
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(ModkitError::Io)?;
        }
        let mut buf = Vec::new();
        entry
            .read_to_end(&mut buf)
            .map_err(|e| ModkitError::Generic {
                message: format!("Failed to read tar entry: {e}"),
            })?;
        fs::write(&out_path, &buf).map_err(ModkitError::Io)?;
        trace!(path = %out_path.display(), "extracted");
        written += 1;
    }

    Ok(written)
}
