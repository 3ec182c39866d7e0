use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a failed build apart from
/// bad arguments or an internal failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The external build command exited with a non-zero status
    BuildFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (spec parsing, file I/O, configuration, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::BuildFailed => write!(f, "Build Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for pod prebuilding.
#[derive(Debug, Error)]
pub enum PodBuilderError {
    #[error("Invalid specification '{name}': {reason}\n\n💡 Hint: Every root podspec must declare a name and a version")]
    InvalidSpecification { name: String, reason: String },

    #[error("Failed to parse podspec: {path}\nDetails: {details}\n\n💡 Hint: Only JSON podspecs (*.podspec.json) are supported; convert with `pod ipc spec`")]
    SpecParseError { path: PathBuf, details: String },

    #[error("Invalid attribute override for '{name}': {details}\n\n💡 Hint: Check the spec_overrides section of your configuration")]
    InvalidOverride { name: String, details: String },

    #[error("Unsafe checkout pin for '{name}': {field} '{value}'\n\n💡 Hint: Tags, commits and branches may only contain letters, digits and . _ - / + @")]
    UnsafeCheckoutPin {
        name: String,
        field: String,
        value: String,
    },

    #[error("Malformed subspec hierarchy below '{name}': {reason}")]
    MalformedHierarchy { name: String, reason: String },

    #[error("Pod not found: {name}\n\n💡 Hint: Make sure the podspec for '{name}' is present in the specs directory")]
    PodNotFound { name: String },

    #[error("Manifest file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Command failed: `{command}`\nDetails: {details}")]
    CommandFailed { command: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },
}
