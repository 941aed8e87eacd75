//! Version enumeration contract.
//!
//! Release logic discovers already-released versions by listing the changes
//! directory. This crate only fixes the shape of that capability; the scan
//! and the sort live with the release engine.

use crate::config::Config;
use crate::error::Result;
use crate::fs::DirLister;
use semver::Version;

/// Returns all released versions of a project.
///
/// Implementations must return exactly the versions discoverable through
/// `lister`, sorted by semantic-version precedence (not lexicographically).
pub trait VersionEnumerator {
    fn versions(&self, lister: &dyn DirLister, config: &Config) -> Result<Vec<Version>>;
}

/// Plain functions and closures satisfy the contract directly.
impl<F> VersionEnumerator for F
where
    F: Fn(&dyn DirLister, &Config) -> Result<Vec<Version>>,
{
    fn versions(&self, lister: &dyn DirLister, config: &Config) -> Result<Vec<Version>> {
        self(lister, config)
    }
}
