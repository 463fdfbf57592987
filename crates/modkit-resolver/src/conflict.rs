//! Version conflict detail produced when two constraints on the same
//! dependency are mutually incompatible.

use std::fmt;

use modkit_util::errors::ModkitError;

/// Two constraints on the same repo that cannot both hold.
///
/// `existing` is the first-discovered (canonical) constraint; `requested`
/// is the later discovery that failed the compatibility check.
#[derive(Debug, Clone)]
pub struct VersionConflict {
    pub repo: String,
    pub existing: String,
    pub requested: String,
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' is incompatible with '{}'",
            self.repo, self.existing, self.requested
        )
    }
}

impl From<VersionConflict> for ModkitError {
    fn from(c: VersionConflict) -> Self {
        ModkitError::VersionConflict {
            repo: c.repo,
            existing: c.existing,
            requested: c.requested,
        }
    }
}
