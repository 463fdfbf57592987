use modkit_core::manifest::Manifest;
use modkit_core::repo::Repo;
use modkit_semver::Version;

/// Capability to fetch the manifest a repo publishes for a release matching
/// a version constraint.
///
/// This is the resolver's only seam to the outside world. The production
/// implementation downloads release assets from GitHub; tests substitute an
/// in-memory map. A fetch error (not found, network, parse) aborts the
/// entire resolution call.
pub trait ManifestSource {
    /// Fetch the manifest for `repo` at the release named by `constraint`.
    ///
    /// The returned manifest must have its own dependency mapping ready for
    /// recursive resolution.
    fn fetch(
        &self,
        repo: &Repo,
        constraint: &Version,
    ) -> impl std::future::Future<Output = miette::Result<Manifest>>;
}
