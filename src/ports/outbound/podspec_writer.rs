use crate::pod_builder::domain::PodSpecDocument;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// PodspecWriter port for persisting synthetic podspecs
pub trait PodspecWriter {
    /// Writes `document` as `<dir>/<stem>.podspec.json`
    ///
    /// # Returns
    /// The path that was written
    fn write_podspec(&self, dir: &Path, stem: &str, document: &PodSpecDocument)
        -> Result<PathBuf>;
}
