//! GitHub REST API client for listing releases and fetching manifests.

use reqwest::Client;
use tracing::debug;

use modkit_core::manifest::Manifest;
use modkit_core::repo::Repo;
use modkit_core::MANIFEST_NAME;
use modkit_resolver::ManifestSource;
use modkit_semver::Version;
use modkit_util::errors::ModkitError;

use crate::download;
use crate::release::Release;

/// Default GitHub REST API base.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Default base for release asset downloads.
pub const GITHUB_DOWNLOAD_URL: &str = "https://github.com";

/// Client for the GitHub releases API.
///
/// Base URLs are overridable so tests and self-hosted GitHub instances can
/// point elsewhere.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: String,
    download_base: String,
}

impl GitHubClient {
    pub fn new() -> miette::Result<Self> {
        Ok(Self {
            http: download::build_client()?,
            api_base: GITHUB_API_URL.to_string(),
            download_base: GITHUB_DOWNLOAD_URL.to_string(),
        })
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_download_base(mut self, base: &str) -> Self {
        self.download_base = base.trim_end_matches('/').to_string();
        self
    }

    /// The underlying HTTP client, shared with the download helpers.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// URL of the release listing endpoint for a repo.
    pub fn releases_url(&self, repo: &Repo) -> String {
        format!("{}/repos/{}/releases", self.api_base, repo)
    }

    /// Direct download URL for a named asset of a tagged release.
    pub fn asset_url(&self, repo: &Repo, tag: &str, asset: &str) -> String {
        format!(
            "{}/{}/releases/download/{}/{}",
            self.download_base, repo, tag, asset
        )
    }

    /// List all releases of a repo, newest first (GitHub API order).
    pub async fn releases(&self, repo: &Repo) -> miette::Result<Vec<Release>> {
        let url = self.releases_url(repo);
        debug!(%url, "listing releases");
        let body = download::download_bytes(&self.http, &url)
            .await?
            .ok_or_else(|| ModkitError::Network {
                message: format!("Repository '{repo}' not found"),
            })?;

        serde_json::from_slice(&body).map_err(|e| {
            ModkitError::Network {
                message: format!("Invalid release listing from {url}: {e}"),
            }
            .into()
        })
    }

    /// Find the release whose tag parses to the same version as `version`.
    pub async fn release_by_version(
        &self,
        repo: &Repo,
        version: &Version,
    ) -> miette::Result<Release> {
        let releases = self.releases(repo).await?;
        releases
            .into_iter()
            .find(|r| Version::parse_default(&r.tag_name) == *version)
            .ok_or_else(|| {
                ModkitError::ManifestNotFound {
                    repo: repo.to_string(),
                    version: version.to_string(),
                }
                .into()
            })
    }

    /// Fetch the manifest of the newest release that publishes one.
    ///
    /// Releases without a manifest asset are skipped, so a repo can mix
    /// modkit releases with plain ones.
    pub async fn latest_manifest(&self, repo: &Repo) -> miette::Result<Manifest> {
        let releases = self.releases(repo).await?;
        let release = releases
            .iter()
            .find(|r| r.manifest_asset().is_some())
            .ok_or_else(|| ModkitError::ManifestNotFound {
                repo: repo.to_string(),
                version: "latest".to_string(),
            })?;
        self.manifest_from_release(repo, release).await
    }

    /// Download and parse the manifest asset of a specific release.
    ///
    /// The parsed manifest is stamped with the repo and the release tag so
    /// downstream consumers do not depend on the asset's own (optional)
    /// `repo`/`version` fields.
    pub async fn manifest_from_release(
        &self,
        repo: &Repo,
        release: &Release,
    ) -> miette::Result<Manifest> {
        let asset = release
            .manifest_asset()
            .ok_or_else(|| ModkitError::MissingAsset {
                repo: repo.to_string(),
                version: release.tag_name.clone(),
                asset: MANIFEST_NAME.to_string(),
            })?;

        let body = download::download_bytes(&self.http, &asset.browser_download_url)
            .await?
            .ok_or_else(|| ModkitError::MissingAsset {
                repo: repo.to_string(),
                version: release.tag_name.clone(),
                asset: MANIFEST_NAME.to_string(),
            })?;

        let text = String::from_utf8_lossy(&body);
        let mut manifest = Manifest::parse(&text)?;
        manifest.repo = Some(repo.clone());
        manifest.version = Some(release.tag_name.clone());
        Ok(manifest)
    }
}

impl ManifestSource for GitHubClient {
    async fn fetch(&self, repo: &Repo, constraint: &Version) -> miette::Result<Manifest> {
        let release = self.release_by_version(repo, constraint).await?;
        self.manifest_from_release(repo, &release).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GitHubClient {
        GitHubClient::new().unwrap()
    }

    #[test]
    fn releases_url_format() {
        let url = client().releases_url(&Repo::new("afloesch/megamod"));
        assert_eq!(url, "https://api.github.com/repos/afloesch/megamod/releases");
    }

    #[test]
    fn asset_url_format() {
        let url = client().asset_url(&Repo::new("afloesch/megamod"), "v1.2.0", "megamod.zip");
        assert_eq!(
            url,
            "https://github.com/afloesch/megamod/releases/download/v1.2.0/megamod.zip"
        );
    }

    #[test]
    fn base_overrides_strip_trailing_slash() {
        let c = client()
            .with_api_base("http://localhost:8080/")
            .with_download_base("http://localhost:8080/dl/");
        assert_eq!(
            c.releases_url(&Repo::new("a/b")),
            "http://localhost:8080/repos/a/b/releases"
        );
        assert_eq!(
            c.asset_url(&Repo::new("a/b"), "v1.0.0", "x.zip"),
            "http://localhost:8080/dl/a/b/releases/download/v1.0.0/x.zip"
        );
    }
}
