use pod_prebuild::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock PodspecWriter that keeps written documents in memory
#[derive(Default, Clone)]
pub struct MockPodspecWriter {
    pub written: Arc<Mutex<Vec<(String, PodSpecDocument)>>>,
}

impl MockPodspecWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written_stems(&self) -> Vec<String> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .map(|(stem, _)| stem.clone())
            .collect()
    }

    pub fn document(&self, stem: &str) -> Option<PodSpecDocument> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .find(|(written, _)| written == stem)
            .map(|(_, document)| document.clone())
    }
}

impl PodspecWriter for MockPodspecWriter {
    fn write_podspec(
        &self,
        dir: &Path,
        stem: &str,
        document: &PodSpecDocument,
    ) -> Result<PathBuf> {
        self.written
            .lock()
            .unwrap()
            .push((stem.to_string(), document.clone()));
        Ok(dir.join(format!("{}.podspec.json", stem)))
    }
}
