use serde::{Deserialize, Serialize};

/// A GitHub repository identifier in `owner/name` form.
///
/// Identity is exact string equality; this is the key under which a
/// dependency is recorded. The string is kept opaque — no normalization
/// or case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Repo(String);

impl Repo {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The repo owner (the part before the first `/`).
    pub fn owner(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }

    /// The repository name (the part after the first `/`), or the whole
    /// string when no `/` is present.
    pub fn name(&self) -> &str {
        match self.0.split_once('/') {
            Some((_, name)) => name,
            None => &self.0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Repo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Repo {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
