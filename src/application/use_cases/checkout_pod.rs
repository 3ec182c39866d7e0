use super::load_items;
use crate::application::dto::{CheckoutRequest, CheckoutResponse, PrebuildSettings};
use crate::ports::outbound::{CommandRunner, NoSpecSource, ProgressReporter, SpecReader};
use crate::shared::error::PodBuilderError;
use crate::shared::Result;

/// CheckoutPodUseCase - hard-resets a pod's git checkout to its pinned revision
///
/// # Type Parameters
/// * `SR` - SpecReader implementation
/// * `CR` - CommandRunner implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckoutPodUseCase<SR, CR, PR> {
    spec_reader: SR,
    command_runner: CR,
    progress_reporter: PR,
}

impl<SR, CR, PR> CheckoutPodUseCase<SR, CR, PR>
where
    SR: SpecReader,
    CR: CommandRunner,
    PR: ProgressReporter,
{
    pub fn new(spec_reader: SR, command_runner: CR, progress_reporter: PR) -> Self {
        Self {
            spec_reader,
            command_runner,
            progress_reporter,
        }
    }

    /// Runs the checkout command of `request.pod` inside `request.working_dir`.
    ///
    /// A pod without tag, commit or branch leaves the working tree untouched
    /// and yields a response without command.
    pub fn execute(
        &self,
        request: CheckoutRequest,
        settings: &PrebuildSettings,
    ) -> Result<CheckoutResponse> {
        if !request.working_dir.is_dir() {
            return Err(PodBuilderError::InvalidProjectPath {
                path: request.working_dir.clone(),
                reason: "Checkout directory does not exist or is not a directory".to_string(),
            }
            .into());
        }

        let items = load_items(
            &self.spec_reader,
            &NoSpecSource,
            &self.progress_reporter,
            &request.specs_dir,
            settings,
        )?;

        let item = items
            .get(&request.pod)
            .ok_or_else(|| PodBuilderError::PodNotFound {
                name: request.pod.clone(),
            })?;

        let Some(command) = item.checked_git_hard_checkout()? else {
            self.progress_reporter.report(&format!(
                "ℹ️  {} pins no tag, commit or branch; leaving {} as is",
                item.name(),
                request.working_dir.display()
            ));
            return Ok(CheckoutResponse { command: None });
        };

        self.progress_reporter.report(&format!("🔀 Running `{}`", command));
        self.command_runner.run(&command, &request.working_dir)?;
        self.progress_reporter
            .report_completion(&format!("✅ {} checked out", item.name()));

        Ok(CheckoutResponse {
            command: Some(command),
        })
    }
}
