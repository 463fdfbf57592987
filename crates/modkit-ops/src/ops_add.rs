//! Operation: add a mod and its transitive dependencies to Modkit.toml.

use std::path::Path;

use modkit_core::manifest::Manifest;
use modkit_core::repo::Repo;
use modkit_core::PROJECT_MANIFEST;
use modkit_resolver::{DependencySet, ManifestSource, Resolver};
use modkit_semver::{OperatorSyntax, Version};
use modkit_util::progress::status;

/// Options for `modkit add`.
pub struct AddOptions {
    pub repo: Repo,
    /// Concrete version constraint, e.g. `v1.2.0` or `>=v1.0.0`. The CLI
    /// resolves `latest` to a concrete release tag before calling in here.
    pub constraint: String,
}

/// Add a dependency to the project manifest.
///
/// The new repo's full dependency closure is resolved against the
/// dependencies already declared in the manifest; every repo in the
/// resulting set is written back, so the manifest always lists the
/// flattened dependency set. On any resolution error the manifest is left
/// untouched.
pub async fn add<S: ManifestSource>(
    project_root: &Path,
    source: &S,
    opts: &AddOptions,
) -> miette::Result<()> {
    let manifest_path = project_root.join(PROJECT_MANIFEST);
    let mut manifest = Manifest::from_path(&manifest_path)?;
    let syntax = OperatorSyntax::default_syntax();

    let mut set = DependencySet::new();
    for (repo, constraint) in &manifest.dependencies {
        set.seed(repo.clone(), Version::parse(constraint, syntax));
    }

    let resolver = Resolver::new(source, syntax);
    resolver
        .resolve_repo(&mut set, opts.repo.clone(), &opts.constraint)
        .await?;

    for (repo, resolved) in set.iter() {
        manifest
            .dependencies
            .insert(repo.clone(), resolved.constraint.constraint_string(syntax));
    }
    manifest.write_to(&manifest_path)?;

    status("Added", &format!("{} {}", opts.repo, opts.constraint));
    Ok(())
}
