use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Folder (and podspec namespace) prebuilt pods are published under
pub const DEFAULT_PREBUILT_FOLDER: &str = "PodBuilder";

/// Settings that steer item queries and manifest generation.
///
/// Passed explicitly to every operation that needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct PrebuildConfig {
    /// Pods treated as already prebuilt, by root or full name
    pub skip_pods: BTreeSet<String>,
    /// Subspecs that get their own artifact instead of sharing the root's
    pub subspecs_to_split: BTreeSet<String>,
    /// Attribute overrides per pod name, applied onto the root podspec
    pub spec_overrides: BTreeMap<String, BTreeMap<String, Value>>,
    /// Directory holding the Podfile, backups and the prebuilt folder
    pub base_path: PathBuf,
    /// Directory of the app project the Podfile belongs to
    pub project_path: PathBuf,
    pub prebuilt_folder: String,
}

impl PrebuildConfig {
    pub fn new(base_path: PathBuf, project_path: PathBuf) -> Self {
        Self {
            skip_pods: BTreeSet::new(),
            subspecs_to_split: BTreeSet::new(),
            spec_overrides: BTreeMap::new(),
            base_path,
            project_path,
            prebuilt_folder: DEFAULT_PREBUILT_FOLDER.to_string(),
        }
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip_pods.contains(name)
    }

    pub fn is_split(&self, name: &str) -> bool {
        self.subspecs_to_split.contains(name)
    }

    /// Directory synthetic podspecs and binaries are written to
    pub fn prebuilt_dir(&self) -> PathBuf {
        self.base_path.join(&self.prebuilt_folder)
    }

    /// Path of a file (e.g. `Podfile`, `Podfile.restore`) inside the base path
    pub fn base_file(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }
}

impl Default for PrebuildConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("."), PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = PrebuildConfig::new(PathBuf::from("/repo"), PathBuf::from("/repo/App"));
        assert_eq!(config.prebuilt_folder, "PodBuilder");
        assert!(config.skip_pods.is_empty());
        assert_eq!(config.prebuilt_dir(), PathBuf::from("/repo/PodBuilder"));
        assert_eq!(config.base_file("Podfile"), PathBuf::from("/repo/Podfile"));
    }

    #[test]
    fn test_skip_and_split_lookups() {
        let mut config = PrebuildConfig::default();
        config.skip_pods.insert("Crashlytics".to_string());
        config.subspecs_to_split.insert("Firebase/Analytics".to_string());

        assert!(config.is_skipped("Crashlytics"));
        assert!(!config.is_skipped("Firebase"));
        assert!(config.is_split("Firebase/Analytics"));
        assert!(!config.is_split("Firebase"));
    }
}
