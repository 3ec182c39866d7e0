use crate::pod_builder::domain::PodSpecDocument;
use crate::ports::outbound::{ArtifactLocator, PodspecWriter};
use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemPodspecWriter adapter for the prebuilt folder
///
/// Writes synthetic podspecs through a temp file in the target directory
/// and renames it into place, so a reader never sees a half-written file.
/// Also answers whether a built framework is present.
pub struct FileSystemPodspecWriter;

impl FileSystemPodspecWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: impl ToString) -> PodBuilderError {
        PodBuilderError::FileWriteError {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
    }
}

impl Default for FileSystemPodspecWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PodspecWriter for FileSystemPodspecWriter {
    fn write_podspec(
        &self,
        dir: &Path,
        stem: &str,
        document: &PodSpecDocument,
    ) -> Result<PathBuf> {
        let target = dir.join(format!("{}.podspec.json", stem));

        if let Ok(metadata) = fs::symlink_metadata(&target) {
            if metadata.is_symlink() {
                return Err(Self::write_error(
                    &target,
                    "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
                )
                .into());
            }
        }

        fs::create_dir_all(dir).map_err(|e| Self::write_error(dir, e))?;

        let json = document
            .to_json()
            .map_err(|e| Self::write_error(&target, e))?;

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| Self::write_error(&target, e))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.write_all(b"\n"))
            .map_err(|e| Self::write_error(&target, e))?;
        temp.persist(&target)
            .map_err(|e| Self::write_error(&target, e.error))?;

        Ok(target)
    }
}

impl ArtifactLocator for FileSystemPodspecWriter {
    fn has_artifact(&self, prebuilt_dir: &Path, rel_path: &str) -> bool {
        prebuilt_dir.join(rel_path).exists()
    }
}
