use crate::pod_builder::services::PrebuildPlan;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::PathBuf;

/// PlanRequest - request DTO for the plan use case
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Directory holding the `*.podspec.json` files
    pub specs_dir: PathBuf,
    /// Pods to plan; empty means every root pod plus split subspecs
    pub requested: Vec<String>,
    /// Whether entries carry version or source pins
    pub include_version: bool,
    /// Whether synthetic podspecs are written to the prebuilt folder
    pub write_podspecs: bool,
}

impl PlanRequest {
    pub fn new(specs_dir: PathBuf) -> Self {
        Self {
            specs_dir,
            requested: Vec::new(),
            include_version: true,
            write_podspecs: false,
        }
    }
}

/// PlanResponse - what the plan use case produced
#[derive(Debug, Clone)]
pub struct PlanResponse {
    pub plan: PrebuildPlan,
    /// Number of items built from the podspecs
    pub item_count: usize,
    /// Synthetic podspecs written to disk (empty unless requested)
    pub written_podspecs: Vec<PathBuf>,
    pub generated_at: DateTime<Utc>,
}

impl PlanResponse {
    pub fn new(plan: PrebuildPlan, item_count: usize, written_podspecs: Vec<PathBuf>) -> Self {
        Self {
            plan,
            item_count,
            written_podspecs,
            generated_at: Utc::now(),
        }
    }

    /// Podfile snippet: a header comment followed by one entry per line
    pub fn render(&self) -> String {
        let mut output = format!(
            "# Generated by {} {} at {}\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        for entry in &self.plan.entries {
            output.push_str(&entry.line);
            output.push('\n');
        }
        output
    }
}
