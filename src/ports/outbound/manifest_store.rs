use crate::shared::Result;
use std::path::Path;

/// ManifestStore port for swapping Podfile variants on disk
pub trait ManifestStore {
    fn exists(&self, path: &Path) -> bool;

    /// Renames `from` to `to`, replacing `to` if it exists
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// Removes `path`; a missing file is not an error
    fn remove(&self, path: &Path) -> Result<()>;
}
