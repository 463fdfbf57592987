use std::collections::BTreeMap;

use modkit_core::manifest::Manifest;
use modkit_core::repo::Repo;
use modkit_semver::{OperatorSyntax, Version};
use tracing::debug;

use crate::conflict::VersionConflict;
use crate::source::ManifestSource;

/// A repo pinned during resolution.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// The first constraint discovered for this repo. Canonical for the
    /// rest of the resolution.
    pub constraint: Version,
    /// The manifest fetched for the pinned release. `None` for entries
    /// seeded from an already-installed project, which are trusted as-is
    /// and never fetched.
    pub manifest: Option<Manifest>,
}

/// Flat outcome of a resolution: every transitive dependency, pinned once.
///
/// Keyed by repo so two mods depending on the same repo share one entry.
/// Iteration order is the repo sort order, which keeps downstream output
/// (manifest rewrites, install plans) deterministic.
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    entries: BTreeMap<Repo, Resolved>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-pin a repo at a constraint without fetching its manifest.
    ///
    /// Used to seed the set with a project's existing dependencies so a
    /// later [`Resolver::resolve_repo`] call checks new discoveries against
    /// them instead of re-fetching.
    pub fn seed(&mut self, repo: Repo, constraint: Version) {
        self.entries.entry(repo).or_insert(Resolved {
            constraint,
            manifest: None,
        });
    }

    pub fn get(&self, repo: &Repo) -> Option<&Resolved> {
        self.entries.get(repo)
    }

    pub fn contains(&self, repo: &Repo) -> bool {
        self.entries.contains_key(repo)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Repo, &Resolved)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One pending fetch on the resolution worklist.
struct WorkItem {
    repo: Repo,
    constraint: Version,
    /// The raw constraint string as written in the declaring manifest,
    /// kept for conflict reporting.
    requested: String,
}

/// Depth-first dependency resolver.
///
/// Generic over its [`ManifestSource`] so the engine can run against the
/// GitHub client in production and an in-memory map in tests.
pub struct Resolver<'a, S> {
    source: &'a S,
    syntax: &'a OperatorSyntax,
}

impl<'a, S: ManifestSource> Resolver<'a, S> {
    pub fn new(source: &'a S, syntax: &'a OperatorSyntax) -> Self {
        Self { source, syntax }
    }

    /// Resolve the full transitive dependency set of `root`.
    ///
    /// The root manifest itself is not entered into the set; only its
    /// dependencies and their closures are.
    pub async fn resolve(&self, root: &Manifest) -> miette::Result<DependencySet> {
        let mut set = DependencySet::new();
        let work = self.pending(root);
        self.run(&mut set, work).await?;
        Ok(set)
    }

    /// Resolve one repo and its closure into an existing set.
    ///
    /// Entries already in `set` (seeded or previously resolved) act as
    /// canonical pins: anything the new closure requires must be
    /// compatible with them.
    pub async fn resolve_repo(
        &self,
        set: &mut DependencySet,
        repo: Repo,
        constraint: &str,
    ) -> miette::Result<()> {
        let work = vec![WorkItem {
            repo,
            constraint: Version::parse(constraint, self.syntax),
            requested: constraint.to_string(),
        }];
        self.run(set, work).await
    }

    async fn run(&self, set: &mut DependencySet, mut work: Vec<WorkItem>) -> miette::Result<()> {
        while let Some(item) = work.pop() {
            if let Some(existing) = set.entries.get(&item.repo) {
                // First discovery wins; the pinned version only has to
                // satisfy every later constraint on the same repo.
                if item.constraint.satisfies(&existing.constraint) {
                    debug!(repo = %item.repo, "already pinned, constraint compatible");
                    continue;
                }
                return Err(VersionConflict {
                    repo: item.repo.to_string(),
                    existing: existing.constraint.constraint_string(self.syntax),
                    requested: item.requested,
                }
                .into_miette());
            }

            debug!(repo = %item.repo, constraint = %item.constraint, "resolving");
            let manifest = self.source.fetch(&item.repo, &item.constraint).await?;
            let mut children = self.pending(&manifest);
            set.entries.insert(
                item.repo,
                Resolved {
                    constraint: item.constraint,
                    manifest: Some(manifest),
                },
            );
            work.append(&mut children);
        }
        Ok(())
    }

    /// Worklist entries for a manifest's declared dependencies, reversed so
    /// popping processes them in declaration (sorted) order.
    fn pending(&self, manifest: &Manifest) -> Vec<WorkItem> {
        manifest
            .dependencies
            .iter()
            .rev()
            .map(|(repo, constraint)| WorkItem {
                repo: repo.clone(),
                constraint: Version::parse(constraint, self.syntax),
                requested: constraint.clone(),
            })
            .collect()
    }
}

impl VersionConflict {
    fn into_miette(self) -> miette::Report {
        modkit_util::errors::ModkitError::from(self).into()
    }
}
