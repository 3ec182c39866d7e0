use crate::shared::Result;
use std::path::Path;

/// CommandRunner port for running shell commands
pub trait CommandRunner {
    /// Runs `command` through the shell inside `working_dir`
    ///
    /// # Errors
    /// Returns an error if the command cannot be started or exits unsuccessfully
    fn run(&self, command: &str, working_dir: &Path) -> Result<()>;
}
