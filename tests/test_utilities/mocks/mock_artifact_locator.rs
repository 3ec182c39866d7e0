use pod_prebuild::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Mock ArtifactLocator that knows a fixed set of framework paths
#[derive(Default)]
pub struct MockArtifactLocator {
    artifacts: HashSet<String>,
}

impl MockArtifactLocator {
    pub fn new(artifacts: &[&str]) -> Self {
        Self {
            artifacts: artifacts.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl ArtifactLocator for MockArtifactLocator {
    fn has_artifact(&self, _prebuilt_dir: &Path, rel_path: &str) -> bool {
        self.artifacts.contains(rel_path)
    }
}
