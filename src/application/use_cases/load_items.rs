use crate::application::dto::PrebuildSettings;
use crate::pod_builder::domain::{PodfileItem, PodfileItems, SpecCatalog};
use crate::pod_builder::services::SpecOverlay;
use crate::ports::outbound::{ProgressReporter, SpecReader, SpecSource};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// Reads the podspecs in `specs_dir` and turns them into items.
///
/// Steps, in order:
/// 1. configured overrides are applied to each podspec (and mirrored into
///    a copy of the checkout options)
/// 2. a catalog of every node is built; `spec_source` adds known versions
/// 3. one item per node is built against that catalog
pub fn load_items<SR, SS, PR>(
    spec_reader: &SR,
    spec_source: &SS,
    progress_reporter: &PR,
    specs_dir: &Path,
    settings: &PrebuildSettings,
) -> Result<PodfileItems>
where
    SR: SpecReader,
    SS: SpecSource,
    PR: ProgressReporter,
{
    progress_reporter.report(&format!(
        "📖 Reading podspecs from: {}",
        specs_dir.display()
    ));

    let mut specs = spec_reader.read_specifications(specs_dir)?;
    if specs.is_empty() {
        progress_reporter.report_error(&format!(
            "⚠️  Warning: No *.podspec.json files found in {}",
            specs_dir.display()
        ));
        return Ok(PodfileItems::default());
    }

    let mut checkout_options = settings.checkout_options.clone();
    let mut overridden = 0;
    for spec in &mut specs {
        let name = spec.name().to_string();
        overridden += SpecOverlay::apply(spec, &mut checkout_options, &settings.prebuild)
            .with_context(|| format!("Failed to apply overrides to '{}'", name))?;
    }
    if overridden > 0 {
        progress_reporter.report(&format!("🔧 Applied {} override set(s)", overridden));
    }

    let mut catalog = SpecCatalog::from_specifications(&specs)?;
    for spec in &specs {
        if let Some(versions) = spec_source.versions(spec.name()) {
            catalog = catalog.with_versions(spec.name(), versions);
        }
    }

    let total = specs.len();
    let mut items = Vec::new();
    for (index, spec) in specs.iter().enumerate() {
        progress_reporter.report_progress(index + 1, total, Some(spec.name()));
        for node in spec.nodes()? {
            items.push(PodfileItem::new(&node, &catalog, &checkout_options)?);
        }
    }

    let items = PodfileItems::new(items);
    progress_reporter.report(&format!(
        "✅ Built {} item(s) from {} podspec(s)",
        items.len(),
        total
    ));
    Ok(items)
}
