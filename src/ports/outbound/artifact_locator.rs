use std::path::Path;

/// ArtifactLocator port for finding built frameworks
pub trait ArtifactLocator {
    /// Whether `<prebuilt_dir>/<rel_path>` holds a built framework
    fn has_artifact(&self, prebuilt_dir: &Path, rel_path: &str) -> bool;
}
