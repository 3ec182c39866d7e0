use crate::ports::outbound::ManifestStore;
use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// FileSystemManifestStore adapter for swapping Podfile variants
pub struct FileSystemManifestStore;

impl FileSystemManifestStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemManifestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestStore for FileSystemManifestStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).map_err(|e| {
            PodBuilderError::FileWriteError {
                path: to.to_path_buf(),
                details: format!("Failed to move {}: {}", from.display(), e),
            }
            .into()
        })
    }

    fn remove(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PodBuilderError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Failed to remove file: {}", e),
            }
            .into()),
        }
    }
}
