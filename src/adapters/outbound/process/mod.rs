/// Process adapters for running external commands
mod shell_runner;

pub use shell_runner::ShellCommandRunner;
