use super::specification::BuildSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `source` of a synthetic podspec; fields are omitted when the item has no such pin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// JSON podspec describing the prebuilt form of a pod, subspecs nested by short name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodSpecDocument {
    pub name: String,
    pub module_name: String,
    pub source: SourceDocument,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_version: Option<String>,
    pub static_framework: bool,
    pub frameworks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weak_frameworks: Vec<String>,
    pub libraries: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vendored_frameworks: Vec<String>,
    pub xcconfig: BuildSettings,
    /// Dependency name to version constraints; constraints are always empty
    pub dependencies: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subspecs: Vec<PodSpecDocument>,
}

impl PodSpecDocument {
    /// Number of nodes in the document, itself included
    pub fn node_count(&self) -> usize {
        1 + self.subspecs.iter().map(PodSpecDocument::node_count).sum::<usize>()
    }

    /// Pretty JSON in the shape `pod ipc spec` produces
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
