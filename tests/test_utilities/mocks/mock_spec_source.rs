use pod_prebuild::prelude::*;
use std::collections::HashMap;

/// Mock SpecSource with a fixed version table
#[derive(Default)]
pub struct MockSpecSource {
    versions: HashMap<String, Vec<String>>,
}

impl MockSpecSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, root_name: &str, versions: &[&str]) -> Self {
        self.versions.insert(
            root_name.to_string(),
            versions.iter().map(|v| v.to_string()).collect(),
        );
        self
    }
}

impl SpecSource for MockSpecSource {
    fn versions(&self, root_name: &str) -> Option<Vec<String>> {
        self.versions.get(root_name).cloned()
    }
}
