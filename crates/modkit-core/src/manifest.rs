use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use modkit_semver::{OperatorSyntax, Version};
use modkit_util::errors::ModkitError;

use crate::repo::Repo;

/// The manifest document published with every mod release.
///
/// A manifest names the mod, its owning repo and release version, the game
/// it targets, its direct dependencies (repo → version constraint), and the
/// release archives to install. Manifests are accepted in TOML or JSON and
/// always written back as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Mod name. Defaults to the repo name when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short description of the mod.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Content license.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// The GitHub repository hosting this mod's releases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<Repo>,

    /// The mod's own release version (semantic version string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Content age rating. Unspecified is assumed safe for all ages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<AgeRating>,

    /// The game this mod targets. Optional, but required for game
    /// compatibility checks between mods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,

    /// Direct dependencies: repo → version constraint string.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<Repo, String>,

    /// Release archives bundled with this mod.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<ReleaseFile>,
}

/// The game a mod release supports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    /// Game executable file name, including extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    /// Supported game version constraint. Empty is equivalent to
    /// `>=v0.0.0` and matches all game versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Content age rating descriptors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgeRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esrb: Option<EsrbRating>,
}

/// ESRB age rating codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EsrbRating {
    #[serde(rename = "E")]
    Everyone,
    #[serde(rename = "E10+")]
    Everyone10,
    #[serde(rename = "T")]
    Teen,
    #[serde(rename = "M")]
    Mature,
    #[serde(rename = "AO")]
    AdultsOnly,
}

/// An archived file bundled with a mod release, hosted as a release asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseFile {
    /// Release asset file name.
    pub name: String,

    /// Path to the mod content inside the archive. Default is the archive
    /// root; when set, the prefix is stripped during extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Install folder relative to the game directory. Default is the game
    /// directory root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse manifest content, trying TOML first and JSON second.
    ///
    /// An overall failure reports both underlying errors, since the caller
    /// cannot know which syntax the author intended.
    pub fn parse(data: &str) -> miette::Result<Self> {
        let toml_err = match toml::from_str::<Manifest>(data) {
            Ok(manifest) => return Ok(manifest),
            Err(e) => e,
        };
        let json_err = match serde_json::from_str::<Manifest>(data) {
            Ok(manifest) => return Ok(manifest),
            Err(e) => e,
        };
        Err(ModkitError::Manifest {
            message: format!("not valid TOML ({toml_err}) nor JSON ({json_err})"),
        }
        .into())
    }

    /// Load and parse a manifest file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ModkitError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    /// Serialize to the deterministic TOML encoding.
    ///
    /// Dependency entries are emitted in `BTreeMap` key order, so repeated
    /// serialization of the same manifest is byte-identical.
    pub fn to_toml_string(&self) -> miette::Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ModkitError::Manifest {
                message: format!("Failed to serialize manifest: {e}"),
            }
            .into()
        })
    }

    /// Write the manifest to the file system at the given path.
    pub fn write_to(&self, path: &Path) -> miette::Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ModkitError::Io(e).into())
    }

    /// The manifest's own version, parsed under `syntax`.
    ///
    /// A missing or invalid version yields the zero version, consistent
    /// with the parser's degrade policy.
    pub fn parsed_version(&self, syntax: &OperatorSyntax) -> Version {
        self.version
            .as_deref()
            .map(|s| Version::parse(s, syntax))
            .unwrap_or_default()
    }

    /// Display name: explicit name, else the repo name, else "unknown".
    pub fn display_name(&self) -> &str {
        if let Some(ref name) = self.name {
            return name;
        }
        self.repo.as_ref().map_or("unknown", |r| r.name())
    }
}
