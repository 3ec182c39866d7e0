use pod_prebuild::prelude::*;
use pod_prebuild::shared::error::PodBuilderError;
use super::MockManifestStore;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock CommandRunner that records commands and can observe a manifest store
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    pub commands: Arc<Mutex<Vec<(String, PathBuf)>>>,
    /// Podfile contents seen while each command ran
    pub observed_podfiles: Arc<Mutex<Vec<Option<String>>>>,
    observe: Option<(MockManifestStore, PathBuf)>,
    should_fail: bool,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Records the content of `podfile` in `store` whenever a command runs
    pub fn observing(mut self, store: MockManifestStore, podfile: PathBuf) -> Self {
        self.observe = Some((store, podfile));
        self
    }

    pub fn recorded_commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .map(|(command, _)| command.clone())
            .collect()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &str, working_dir: &Path) -> Result<()> {
        self.commands
            .lock()
            .unwrap()
            .push((command.to_string(), working_dir.to_path_buf()));

        if let Some((store, podfile)) = &self.observe {
            self.observed_podfiles
                .lock()
                .unwrap()
                .push(store.content(podfile));
        }

        if self.should_fail {
            return Err(PodBuilderError::CommandFailed {
                command: command.to_string(),
                details: "exited with status 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
