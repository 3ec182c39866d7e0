use crate::ports::outbound::CommandRunner;
use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use std::path::Path;
use std::process::{Command, Stdio};

/// ShellCommandRunner adapter running commands through `sh -c`
///
/// Output is inherited, so `pod install` and git progress reach the user
/// directly. Only the exit status is inspected.
pub struct ShellCommandRunner {
    shell: String,
}

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }

    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str, working_dir: &Path) -> Result<()> {
        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| PodBuilderError::CommandFailed {
                command: command.to_string(),
                details: format!("Failed to start {}: {}", self.shell, e),
            })?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with status {} in {}", code, working_dir.display()),
                None => format!("terminated by signal in {}", working_dir.display()),
            };
            return Err(PodBuilderError::CommandFailed {
                command: command.to_string(),
                details,
            }
            .into());
        }

        Ok(())
    }
}
