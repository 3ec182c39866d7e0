use pod_prebuild::prelude::*;
use std::path::Path;

/// Mock SpecReader returning podspecs parsed from in-memory JSON
pub struct MockSpecReader {
    pub podspecs: Vec<String>,
    pub should_fail: bool,
}

impl MockSpecReader {
    pub fn new(podspecs: &[&str]) -> Self {
        Self {
            podspecs: podspecs.iter().map(|json| json.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            podspecs: Vec::new(),
            should_fail: true,
        }
    }
}

impl SpecReader for MockSpecReader {
    fn read_specifications(&self, _specs_dir: &Path) -> Result<Vec<Specification>> {
        if self.should_fail {
            anyhow::bail!("Mock podspec read failure");
        }
        self.podspecs
            .iter()
            .map(|json| Specification::from_json(json))
            .collect()
    }
}
