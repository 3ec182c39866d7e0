mod cli;

use cli::{Args, CheckoutArgs, Command, PlanArgs};
use pod_prebuild::adapters::outbound::console::StderrProgressReporter;
use pod_prebuild::adapters::outbound::filesystem::{
    FileSystemManifestStore, FileSystemPodspecWriter, FileSystemSpecReader, FileSystemWriter,
    LocalSpecRepository, StdoutPresenter,
};
use pod_prebuild::adapters::outbound::process::ShellCommandRunner;
use pod_prebuild::application::dto::{
    CheckoutRequest, PlanRequest, PrebuildSettings, RestoreRequest,
};
use pod_prebuild::application::use_cases::{
    CheckoutPodUseCase, PlanPrebuildUseCase, RestoreAllUseCase,
};
use pod_prebuild::config::{discover_config, load_config_from_path};
use pod_prebuild::ports::outbound::{NoSpecSource, OutputPresenter, SpecSource};
use pod_prebuild::shared::error::{ExitCode, PodBuilderError};
use pod_prebuild::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Default podspec directory, relative to the base path
const DEFAULT_SPECS_DIR: &str = "Specs";

fn main() {
    match run() {
        Ok(()) => process::exit(ExitCode::Success.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<PodBuilderError>() {
        Some(PodBuilderError::CommandFailed { .. }) => ExitCode::BuildFailed,
        _ => ExitCode::ApplicationError,
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let settings = load_settings(args.config.as_deref(), &project_path)?;

    match args.command {
        Command::Plan(plan_args) => run_plan(plan_args, &settings),
        Command::RestoreAll => run_restore_all(&settings),
        Command::Checkout(checkout_args) => run_checkout(checkout_args, &settings),
    }
}

/// Explicit `--config` wins; otherwise the file is looked up in the project directory
fn load_settings(config_path: Option<&Path>, project_path: &Path) -> Result<PrebuildSettings> {
    let (config, config_dir) = match config_path {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            (load_config_from_path(path)?, dir.to_path_buf())
        }
        None => (
            discover_config(project_path)?.unwrap_or_default(),
            project_path.to_path_buf(),
        ),
    };

    config.into_prebuild_config(&config_dir)
}

fn specs_dir(specs: Option<PathBuf>, settings: &PrebuildSettings) -> PathBuf {
    specs.unwrap_or_else(|| settings.prebuild.base_path.join(DEFAULT_SPECS_DIR))
}

fn run_plan(args: PlanArgs, settings: &PrebuildSettings) -> Result<()> {
    let request = PlanRequest {
        specs_dir: specs_dir(args.specs, settings),
        requested: args.pods,
        include_version: !args.no_version,
        write_podspecs: args.write,
    };

    let spec_source: Box<dyn SpecSource> = match args.spec_repo {
        Some(repo) => Box::new(LocalSpecRepository::new(repo)),
        None => Box::new(NoSpecSource),
    };

    let use_case = PlanPrebuildUseCase::new(
        FileSystemSpecReader::new(),
        spec_source,
        FileSystemPodspecWriter::new(),
        FileSystemPodspecWriter::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(request, settings)?;

    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&response.render())
}

fn run_restore_all(settings: &PrebuildSettings) -> Result<()> {
    let use_case = RestoreAllUseCase::new(
        FileSystemManifestStore::new(),
        ShellCommandRunner::new(),
        StderrProgressReporter::new(),
    );
    use_case.execute(
        RestoreRequest::new(settings.build_command.clone()),
        &settings.prebuild,
    )
}

fn run_checkout(args: CheckoutArgs, settings: &PrebuildSettings) -> Result<()> {
    let use_case = CheckoutPodUseCase::new(
        FileSystemSpecReader::new(),
        ShellCommandRunner::new(),
        StderrProgressReporter::new(),
    );
    let request = CheckoutRequest::new(args.pod, specs_dir(args.specs, settings), args.dir);
    use_case.execute(request, settings)?;
    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PodBuilderError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| PodBuilderError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(PodBuilderError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(PodBuilderError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let err = validate_project_path(Path::new("/nonexistent/ios/project")).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Podfile");
        fs::write(&file_path, "platform :ios, '13.0'").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[test]
    fn test_exit_code_for_command_failure() {
        let build: anyhow::Error = PodBuilderError::CommandFailed {
            command: "pod install".to_string(),
            details: "exited with status 1".to_string(),
        }
        .into();
        assert_eq!(exit_code_for(&build), ExitCode::BuildFailed);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), ExitCode::ApplicationError);
    }

    #[test]
    fn test_load_settings_from_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pb.yml");
        fs::write(&config_path, "base_path: ios\nbuild_command: make pods\n").unwrap();

        let settings = load_settings(Some(&config_path), Path::new(".")).unwrap();
        assert_eq!(settings.prebuild.base_path, temp_dir.path().join("ios"));
        assert_eq!(settings.build_command, "make pods");
    }

    #[test]
    fn test_load_settings_without_config() {
        let temp_dir = TempDir::new().unwrap();
        let settings = load_settings(None, temp_dir.path()).unwrap();
        assert_eq!(settings.prebuild.base_path, temp_dir.path());
        assert_eq!(
            specs_dir(None, &settings),
            temp_dir.path().join(DEFAULT_SPECS_DIR)
        );
    }
}
