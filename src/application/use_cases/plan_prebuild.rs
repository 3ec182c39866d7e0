use super::load_items;
use crate::application::dto::{PlanRequest, PlanResponse, PrebuildSettings};
use crate::pod_builder::services::{EntryKind, PrebuildPlan, PrebuildPlanner};
use crate::ports::outbound::{
    ArtifactLocator, PodspecWriter, ProgressReporter, SpecReader, SpecSource,
};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// PlanPrebuildUseCase - decides the Podfile form of every requested pod
///
/// # Type Parameters
/// * `SR` - SpecReader implementation
/// * `SS` - SpecSource implementation
/// * `PW` - PodspecWriter implementation
/// * `AL` - ArtifactLocator implementation
/// * `PR` - ProgressReporter implementation
pub struct PlanPrebuildUseCase<SR, SS, PW, AL, PR> {
    spec_reader: SR,
    spec_source: SS,
    podspec_writer: PW,
    artifact_locator: AL,
    progress_reporter: PR,
}

impl<SR, SS, PW, AL, PR> PlanPrebuildUseCase<SR, SS, PW, AL, PR>
where
    SR: SpecReader,
    SS: SpecSource,
    PW: PodspecWriter,
    AL: ArtifactLocator,
    PR: ProgressReporter,
{
    pub fn new(
        spec_reader: SR,
        spec_source: SS,
        podspec_writer: PW,
        artifact_locator: AL,
        progress_reporter: PR,
    ) -> Self {
        Self {
            spec_reader,
            spec_source,
            podspec_writer,
            artifact_locator,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: PlanRequest, settings: &PrebuildSettings) -> Result<PlanResponse> {
        let items = load_items(
            &self.spec_reader,
            &self.spec_source,
            &self.progress_reporter,
            &request.specs_dir,
            settings,
        )?;

        let config = &settings.prebuild;
        let prebuilt_dir = config.prebuilt_dir();
        let plan = PrebuildPlanner::plan(
            &items,
            config,
            &request.requested,
            request.include_version,
            |item| {
                self.artifact_locator
                    .has_artifact(&prebuilt_dir, &item.prebuilt_rel_path(config))
            },
        )?;

        self.report_plan(&plan);

        let written_podspecs = if request.write_podspecs {
            self.write_podspecs(&plan, &prebuilt_dir)?
        } else {
            Vec::new()
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Planned {} entr{}, {} prebuilt",
            plan.entries.len(),
            if plan.entries.len() == 1 { "y" } else { "ies" },
            plan.prebuilt_count()
        ));

        Ok(PlanResponse::new(plan, items.len(), written_podspecs))
    }

    fn report_plan(&self, plan: &PrebuildPlan) {
        let mut missing = Vec::new();
        for entry in &plan.entries {
            match (&entry.already_prebuilt, entry.kind) {
                (Some(reason), _) => self.progress_reporter.report(&format!(
                    "   ℹ️  {} is kept as is: {}",
                    entry.name, reason
                )),
                (None, EntryKind::Source) => missing.push(entry.name.as_str()),
                (None, EntryKind::Prebuilt) => {}
            }
        }

        if !missing.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No prebuilt framework for {} pod(s): {}",
                missing.len(),
                missing.join(", ")
            ));
        }
    }

    fn write_podspecs(&self, plan: &PrebuildPlan, prebuilt_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for (stem, document) in &plan.podspecs {
            let path = self
                .podspec_writer
                .write_podspec(prebuilt_dir, stem, document)?;
            self.progress_reporter
                .report(&format!("📝 Wrote {}", path.display()));
            written.push(path);
        }
        Ok(written)
    }
}
