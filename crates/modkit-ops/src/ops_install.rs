//! Operation: resolve, download, and unpack every dependency's release
//! archives into the game directory.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use modkit_archive::Archive;
use modkit_core::manifest::Manifest;
use modkit_core::repo::Repo;
use modkit_core::PROJECT_MANIFEST;
use modkit_github::{download, GitHubClient};
use modkit_resolver::Resolver;
use modkit_semver::OperatorSyntax;
use modkit_util::errors::ModkitError;
use modkit_util::fs::{ensure_dir, sanitize_name};
use modkit_util::hash::sha256_file;
use modkit_util::progress::{spinner, status, status_info, status_warn};

/// Options for `modkit install`.
pub struct InstallOptions {
    /// Game directory archives are unpacked into.
    pub game_dir: PathBuf,
    /// Report cache hits and skipped dependencies.
    pub verbose: bool,
}

/// Per-run installation counters, reported in the final status line.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub mods: u32,
    pub downloaded: u32,
    pub cached: u32,
    pub files_written: usize,
}

/// Install the project's full dependency set.
///
/// Archives are cached under `.modkit/archives/` in the project root, keyed
/// by repo name, release tag, and asset name; a cached archive whose sha256
/// sidecar still matches is not downloaded again.
pub async fn install(
    project_root: &Path,
    client: &GitHubClient,
    opts: &InstallOptions,
) -> miette::Result<InstallReport> {
    let manifest = Manifest::from_path(&project_root.join(PROJECT_MANIFEST))?;
    let syntax = OperatorSyntax::default_syntax();

    let sp = spinner("Resolving dependencies...");
    let resolver = Resolver::new(client, syntax);
    let set = resolver.resolve(&manifest).await?;
    sp.finish_and_clear();

    let cache_dir = project_root.join(".modkit").join("archives");
    ensure_dir(&cache_dir).map_err(ModkitError::Io)?;

    let mut report = InstallReport::default();
    for (repo, resolved) in set.iter() {
        let Some(dep) = &resolved.manifest else {
            continue;
        };
        if dep.files.is_empty() {
            if opts.verbose {
                status_warn("Skipping", &format!("{repo}: release has no files"));
            }
            continue;
        }
        report.mods += 1;

        let tag = dep
            .version
            .clone()
            .unwrap_or_else(|| resolved.constraint.to_string());

        for file in &dep.files {
            let archive_path = cached_archive_path(&cache_dir, repo, &tag, &file.name);

            if cache_is_valid(&archive_path) {
                debug!(path = %archive_path.display(), "archive cached");
                if opts.verbose {
                    status_info("Cached", &format!("{repo} {}", file.name));
                }
                report.cached += 1;
            } else {
                let url = client.asset_url(repo, &tag, &file.name);
                status("Downloading", &format!("{repo} {}", file.name));
                let found =
                    download::download_to_path(client.http(), &url, &archive_path, &file.name)
                        .await?;
                if !found {
                    return Err(ModkitError::MissingAsset {
                        repo: repo.to_string(),
                        version: tag.clone(),
                        asset: file.name.clone(),
                    }
                    .into());
                }
                write_sidecar(&archive_path)?;
                report.downloaded += 1;
            }

            let dest = destination_dir(&opts.game_dir, file.destination.as_deref())?;
            ensure_dir(&dest).map_err(ModkitError::Io)?;
            status("Unpacking", &format!("{} into {}", file.name, dest.display()));
            report.files_written += Archive::new(&archive_path)
                .unpack(&dest, file.source.as_deref().unwrap_or(""))?;
        }
    }

    status(
        "Installed",
        &format!(
            "{} mods, {} files ({} archives downloaded, {} cached)",
            report.mods, report.files_written, report.downloaded, report.cached
        ),
    );
    Ok(report)
}

/// Cache location of a release archive.
///
/// The repo name and release tag are baked into the file name so releases
/// of different mods (or versions) never collide.
fn cached_archive_path(cache_dir: &Path, repo: &Repo, tag: &str, asset: &str) -> PathBuf {
    cache_dir.join(sanitize_name(&format!("{}-{tag}-{asset}", repo.name())))
}

/// Whether a cached archive exists and still matches its sha256 sidecar.
fn cache_is_valid(archive_path: &Path) -> bool {
    if !archive_path.is_file() {
        return false;
    }
    let sidecar = sidecar_path(archive_path);
    let Ok(expected) = std::fs::read_to_string(&sidecar) else {
        return false;
    };
    match sha256_file(archive_path) {
        Ok(actual) => actual == expected.trim(),
        Err(_) => false,
    }
}

fn sidecar_path(archive_path: &Path) -> PathBuf {
    let mut name = archive_path.as_os_str().to_os_string();
    name.push(".sha256");
    PathBuf::from(name)
}

fn write_sidecar(archive_path: &Path) -> miette::Result<()> {
    let digest = sha256_file(archive_path).map_err(ModkitError::Io)?;
    std::fs::write(sidecar_path(archive_path), digest).map_err(|e| ModkitError::Io(e).into())
}

/// Resolve a manifest-declared destination against the game directory,
/// rejecting absolute paths and `..` components.
fn destination_dir(game_dir: &Path, destination: Option<&str>) -> miette::Result<PathBuf> {
    let Some(destination) = destination.filter(|d| !d.is_empty()) else {
        return Ok(game_dir.to_path_buf());
    };

    let rel = Path::new(destination);
    for component in rel.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => {
                return Err(ModkitError::Generic {
                    message: format!("Destination '{destination}' escapes the game directory"),
                }
                .into())
            }
        }
    }
    Ok(game_dir.join(rel))
}
