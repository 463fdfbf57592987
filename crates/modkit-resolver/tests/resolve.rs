use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use modkit_core::manifest::Manifest;
use modkit_core::repo::Repo;
use modkit_resolver::{DependencySet, ManifestSource, Resolver};
use modkit_semver::{OperatorSyntax, Version};
use modkit_util::errors::ModkitError;

/// In-memory manifest registry counting fetches per repo.
struct FakeSource {
    manifests: HashMap<Repo, Manifest>,
    fetches: AtomicUsize,
}

impl FakeSource {
    fn new(manifests: Vec<Manifest>) -> Self {
        let manifests = manifests
            .into_iter()
            .map(|m| (m.repo.clone().unwrap(), m))
            .collect();
        Self {
            manifests,
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl ManifestSource for FakeSource {
    async fn fetch(&self, repo: &Repo, _constraint: &Version) -> miette::Result<Manifest> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.manifests
            .get(repo)
            .cloned()
            .ok_or_else(|| {
                ModkitError::ManifestNotFound {
                    repo: repo.to_string(),
                    version: "latest".to_string(),
                }
                .into()
            })
    }
}

fn mod_manifest(repo: &str, deps: &[(&str, &str)]) -> Manifest {
    let mut manifest = Manifest::new();
    manifest.repo = Some(Repo::new(repo));
    manifest.version = Some("v1.0.0".to_string());
    for (dep, constraint) in deps {
        manifest
            .dependencies
            .insert(Repo::new(*dep), constraint.to_string());
    }
    manifest
}

#[tokio::test]
async fn resolves_transitive_closure() {
    let root = mod_manifest("game/root", &[("mods/a", ">=v1.0.0"), ("mods/b", "v2.0.0")]);
    let source = FakeSource::new(vec![
        mod_manifest("mods/a", &[("mods/c", "v1.2.3")]),
        mod_manifest("mods/b", &[]),
        mod_manifest("mods/c", &[]),
    ]);
    let syntax = OperatorSyntax::default_syntax();

    let set = Resolver::new(&source, syntax).resolve(&root).await.unwrap();

    assert_eq!(set.len(), 3);
    assert!(set.contains(&Repo::new("mods/a")));
    assert!(set.contains(&Repo::new("mods/b")));
    assert!(set.contains(&Repo::new("mods/c")));
    assert_eq!(source.fetch_count(), 3, "each repo fetched exactly once");
}

#[tokio::test]
async fn shared_dependency_is_fetched_once() {
    let root = mod_manifest("game/root", &[("mods/a", "v1.0.0"), ("mods/b", "v1.0.0")]);
    let source = FakeSource::new(vec![
        mod_manifest("mods/a", &[("mods/shared", ">=v1.0.0")]),
        mod_manifest("mods/b", &[("mods/shared", ">=v1.0.0")]),
        mod_manifest("mods/shared", &[]),
    ]);
    let syntax = OperatorSyntax::default_syntax();

    let set = Resolver::new(&source, syntax).resolve(&root).await.unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!(source.fetch_count(), 3);
}

#[tokio::test]
async fn dependency_cycle_terminates() {
    let root = mod_manifest("game/root", &[("mods/a", "v1.0.0")]);
    let source = FakeSource::new(vec![
        mod_manifest("mods/a", &[("mods/b", "v1.0.0")]),
        mod_manifest("mods/b", &[("mods/a", "v1.0.0")]),
    ]);
    let syntax = OperatorSyntax::default_syntax();

    let set = Resolver::new(&source, syntax).resolve(&root).await.unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn compatible_repeat_constraint_keeps_first_pin() {
    // a pins shared at exactly v2.0.0; b only needs >=v1.0.0, which the
    // pinned version satisfies.
    let root = mod_manifest("game/root", &[("mods/a", "v1.0.0"), ("mods/b", "v1.0.0")]);
    let source = FakeSource::new(vec![
        mod_manifest("mods/a", &[("mods/shared", "v2.0.0")]),
        mod_manifest("mods/b", &[("mods/shared", ">=v1.0.0")]),
        mod_manifest("mods/shared", &[]),
    ]);
    let syntax = OperatorSyntax::default_syntax();

    let set = Resolver::new(&source, syntax).resolve(&root).await.unwrap();

    let pinned = set.get(&Repo::new("mods/shared")).unwrap();
    assert_eq!(pinned.constraint.to_string(), "v2.0.0");
}

#[tokio::test]
async fn incompatible_constraints_report_conflict() {
    let root = mod_manifest("game/root", &[("mods/a", "v1.0.0"), ("mods/b", "v1.0.0")]);
    let source = FakeSource::new(vec![
        mod_manifest("mods/a", &[("mods/shared", "v1.0.0")]),
        mod_manifest("mods/b", &[("mods/shared", ">=v2.0.0")]),
        mod_manifest("mods/shared", &[]),
    ]);
    let syntax = OperatorSyntax::default_syntax();

    let err = Resolver::new(&source, syntax)
        .resolve(&root)
        .await
        .unwrap_err();

    let message = format!("{err}");
    assert!(message.contains("mods/shared"), "{message}");
    assert!(message.contains("v1.0.0"), "{message}");
    assert!(message.contains(">=v2.0.0"), "{message}");
}

#[tokio::test]
async fn seeded_entries_are_not_fetched() {
    let source = FakeSource::new(vec![mod_manifest(
        "mods/new",
        &[("mods/existing", ">=v1.0.0")],
    )]);
    let syntax = OperatorSyntax::default_syntax();

    let mut set = DependencySet::new();
    set.seed(Repo::new("mods/existing"), Version::parse("v1.5.0", syntax));

    Resolver::new(&source, syntax)
        .resolve_repo(&mut set, Repo::new("mods/new"), "v1.0.0")
        .await
        .unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(source.fetch_count(), 1, "only mods/new should be fetched");
    assert!(set.get(&Repo::new("mods/existing")).unwrap().manifest.is_none());
}

#[tokio::test]
async fn seeded_entry_conflicts_with_new_requirement() {
    let source = FakeSource::new(vec![mod_manifest(
        "mods/new",
        &[("mods/existing", ">=v3.0.0")],
    )]);
    let syntax = OperatorSyntax::default_syntax();

    let mut set = DependencySet::new();
    set.seed(Repo::new("mods/existing"), Version::parse("v1.5.0", syntax));

    let err = Resolver::new(&source, syntax)
        .resolve_repo(&mut set, Repo::new("mods/new"), "v1.0.0")
        .await
        .unwrap_err();

    assert!(format!("{err}").contains("mods/existing"));
}

#[tokio::test]
async fn missing_manifest_aborts_resolution() {
    let root = mod_manifest("game/root", &[("mods/ghost", "v1.0.0")]);
    let source = FakeSource::new(vec![]);
    let syntax = OperatorSyntax::default_syntax();

    let err = Resolver::new(&source, syntax)
        .resolve(&root)
        .await
        .unwrap_err();

    assert!(format!("{err}").contains("mods/ghost"));
}
