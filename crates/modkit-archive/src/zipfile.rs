use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::trace;

use modkit_util::errors::ModkitError;

use crate::relocated;

/// Extract a zip archive into `dest`, filtering by `source_prefix`.
pub(crate) fn unpack(path: &Path, dest: &Path, source_prefix: &str) -> miette::Result<usize> {
    let file = fs::File::open(path).map_err(ModkitError::Io)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| ModkitError::Generic {
        message: format!("Failed to open zip '{}': {e}", path.display()),
    })?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| ModkitError::Generic {
            message: format!("Zip entry error in '{}': {e}", path.display()),
        })?;

        let name = entry
            .enclosed_name()
            .ok_or_else(|| ModkitError::Generic {
                message: format!("Archive entry '{}' escapes the destination", entry.name()),
            })?;

        let Some(rel) = relocated(&name, source_prefix)? else {
            continue;
        };
        let out_path = dest.join(rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(ModkitError::Io)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(ModkitError::Io)?;
        }
        let mut buf = Vec::new();
        entry
            .read_to_end(&mut buf)
            .map_err(|e| ModkitError::Generic {
                message: format!("Failed to read zip entry '{}': {e}", entry.name()),
            })?;
        fs::write(&out_path, &buf).map_err(ModkitError::Io)?;
        trace!(path = %out_path.display(), "extracted");
        written += 1;

        // Preserve executable bit on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode))
                    .map_err(ModkitError::Io)?;
            }
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, content) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn unpacks_all_entries_without_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = tmp.path().join("mod.zip");
        write_zip(
            &zip_path,
            &[("readme.txt", "hello"), ("Data/plugin.esp", "bytes")],
        );

        let dest = tmp.path().join("out");
        let written = unpack(&zip_path, &dest, "").unwrap();

        assert_eq!(written, 2);
        assert_eq!(fs::read_to_string(dest.join("readme.txt")).unwrap(), "hello");
        assert!(dest.join("Data/plugin.esp").is_file());
    }

    #[test]
    fn prefix_filters_and_strips() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = tmp.path().join("mod.zip");
        write_zip(
            &zip_path,
            &[
                ("readme.txt", "skip me"),
                ("Data/plugin.esp", "keep"),
                ("Data/textures/rock.dds", "keep"),
            ],
        );

        let dest = tmp.path().join("out");
        let written = unpack(&zip_path, &dest, "Data").unwrap();

        assert_eq!(written, 2);
        assert!(!dest.join("readme.txt").exists());
        assert!(dest.join("plugin.esp").is_file());
        assert!(dest.join("textures/rock.dds").is_file());
    }
}
