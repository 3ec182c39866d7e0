use crate::pod_builder::domain::Specification;
use crate::ports::outbound::SpecReader;
use crate::shared::error::PodBuilderError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

const PODSPEC_SUFFIX: &str = ".podspec.json";

/// FileSystemSpecReader adapter for reading `*.podspec.json` files
///
/// Only the top level of the directory is scanned; files are read in
/// file-name order so item order is reproducible.
pub struct FileSystemSpecReader;

impl FileSystemSpecReader {
    pub fn new() -> Self {
        Self
    }

    fn podspec_paths(&self, specs_dir: &Path) -> Result<Vec<PathBuf>> {
        if !specs_dir.is_dir() {
            return Err(PodBuilderError::InvalidProjectPath {
                path: specs_dir.to_path_buf(),
                reason: "Specs directory does not exist or is not a directory".to_string(),
            }
            .into());
        }

        let entries = fs::read_dir(specs_dir).map_err(|e| PodBuilderError::FileReadError {
            path: specs_dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PodBuilderError::FileReadError {
                path: specs_dir.to_path_buf(),
                details: e.to_string(),
            })?;
            let path = entry.path();
            let is_podspec = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(PODSPEC_SUFFIX));
            if is_podspec {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn read_specification(&self, path: &Path) -> Result<Specification> {
        let content = read_regular_file(path, "podspec").map_err(|e| {
            PodBuilderError::SpecParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        Specification::from_json(&content).map_err(|e| {
            PodBuilderError::SpecParseError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}

impl Default for FileSystemSpecReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecReader for FileSystemSpecReader {
    fn read_specifications(&self, specs_dir: &Path) -> Result<Vec<Specification>> {
        self.podspec_paths(specs_dir)?
            .iter()
            .map(|path| self.read_specification(path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_podspecs_in_file_name_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("SnapKit.podspec.json"),
            r#"{ "name": "SnapKit", "version": "5.6.0" }"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("Alamofire.podspec.json"),
            r#"{ "name": "Alamofire", "version": "5.8.1" }"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("README.md"), "not a podspec").unwrap();

        let specs = FileSystemSpecReader::new()
            .read_specifications(temp_dir.path())
            .unwrap();

        let names: Vec<&str> = specs.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Alamofire", "SnapKit"]);
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Broken.podspec.json"), "{ not json").unwrap();

        let err = FileSystemSpecReader::new()
            .read_specifications(temp_dir.path())
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Failed to parse podspec"));
        assert!(message.contains("Broken.podspec.json"));
    }

    #[test]
    fn test_missing_directory() {
        let err = FileSystemSpecReader::new()
            .read_specifications(Path::new("/nonexistent/specs"))
            .unwrap_err();
        assert!(err.to_string().contains("Specs directory does not exist"));
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let specs = FileSystemSpecReader::default()
            .read_specifications(temp_dir.path())
            .unwrap();
        assert!(specs.is_empty());
    }
}
