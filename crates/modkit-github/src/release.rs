//! GitHub release and asset payloads, as returned by the REST API.

use serde::Deserialize;

use modkit_core::MANIFEST_NAME;

/// One GitHub release, reduced to the fields modkit consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Git tag the release was cut from, e.g. `v1.2.0`.
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub size: u64,
}

impl Release {
    /// Find an asset by exact file name.
    pub fn asset(&self, name: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|a| a.name == name)
    }

    /// The manifest asset of this release, if it publishes one.
    pub fn manifest_asset(&self) -> Option<&ReleaseAsset> {
        self.asset(MANIFEST_NAME)
    }
}
