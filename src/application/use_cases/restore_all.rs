use crate::application::dto::RestoreRequest;
use crate::pod_builder::domain::PrebuildConfig;
use crate::ports::outbound::{CommandRunner, ManifestStore, ProgressReporter};
use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

const PODFILE: &str = "Podfile";
const PODFILE_RESTORE: &str = "Podfile.restore";
const PODFILE_STASH: &str = "Podfile.tmp2";

/// RestoreAllUseCase - rebuilds the workspace from the restore Podfile
///
/// The prebuilt `Podfile` is stashed, `Podfile.restore` takes its place
/// while the build command runs, and afterwards both files are moved back.
/// Moving back happens whether or not the build succeeded.
///
/// # Type Parameters
/// * `MS` - ManifestStore implementation
/// * `CR` - CommandRunner implementation
/// * `PR` - ProgressReporter implementation
pub struct RestoreAllUseCase<MS, CR, PR> {
    manifest_store: MS,
    command_runner: CR,
    progress_reporter: PR,
}

struct ManifestPaths {
    podfile: PathBuf,
    restore: PathBuf,
    stash: PathBuf,
}

impl<MS, CR, PR> RestoreAllUseCase<MS, CR, PR>
where
    MS: ManifestStore,
    CR: CommandRunner,
    PR: ProgressReporter,
{
    pub fn new(manifest_store: MS, command_runner: CR, progress_reporter: PR) -> Self {
        Self {
            manifest_store,
            command_runner,
            progress_reporter,
        }
    }

    /// # Errors
    /// - either Podfile variant is missing
    /// - the build command fails (reported even if moving back also failed)
    /// - moving the files back fails
    pub fn execute(&self, request: RestoreRequest, config: &PrebuildConfig) -> Result<()> {
        let paths = ManifestPaths {
            podfile: config.base_file(PODFILE),
            restore: config.base_file(PODFILE_RESTORE),
            stash: config.base_file(PODFILE_STASH),
        };

        self.ensure_exists(
            &paths.restore,
            "Run a prebuild first: it saves the source-form Podfile as Podfile.restore",
        )?;
        self.ensure_exists(
            &paths.podfile,
            "Run restore-all from the directory holding the Podfile, or pass --path",
        )?;

        self.progress_reporter.report("🔄 Swapping in Podfile.restore");
        self.manifest_store.rename(&paths.podfile, &paths.stash)?;
        if let Err(e) = self.manifest_store.rename(&paths.restore, &paths.podfile) {
            if let Err(rollback) = self.manifest_store.rename(&paths.stash, &paths.podfile) {
                self.progress_reporter.report_error(&format!(
                    "❌ Failed to put the Podfile back: {:#}",
                    rollback
                ));
            }
            return Err(e);
        }

        self.progress_reporter
            .report(&format!("🔨 Running `{}`", request.build_command));
        let build_result = self
            .command_runner
            .run(&request.build_command, &config.base_path);

        let restore_result = self.put_back(&paths);

        match (build_result, restore_result) {
            (Err(build_error), Err(restore_error)) => {
                self.progress_reporter.report_error(&format!(
                    "❌ Failed to put the Podfile back: {:#}",
                    restore_error
                ));
                Err(build_error)
            }
            (Err(build_error), Ok(())) => Err(build_error),
            (Ok(()), Err(restore_error)) => Err(restore_error),
            (Ok(()), Ok(())) => {
                self.progress_reporter
                    .report_completion("✅ Restore complete, prebuilt Podfile is back in place");
                Ok(())
            }
        }
    }

    fn ensure_exists(&self, path: &Path, suggestion: &str) -> Result<()> {
        if self.manifest_store.exists(path) {
            return Ok(());
        }
        Err(PodBuilderError::ManifestNotFound {
            path: path.to_path_buf(),
            suggestion: suggestion.to_string(),
        }
        .into())
    }

    /// The restore Podfile goes back to `Podfile.restore`, the stashed one to `Podfile`
    fn put_back(&self, paths: &ManifestPaths) -> Result<()> {
        self.manifest_store.remove(&paths.restore)?;
        self.manifest_store.rename(&paths.podfile, &paths.restore)?;
        self.manifest_store.rename(&paths.stash, &paths.podfile)
    }
}
