use super::PodspecEmitter;
use crate::pod_builder::domain::{PodSpecDocument, PodfileItem, PodfileItems, PrebuildConfig};
use crate::pod_builder::policies::{PrebuiltPolicy, PrebuiltReason};
use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// Form a pod takes in the generated Podfile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Compiled from source (or consumed as shipped)
    Source,
    /// Consumed through a synthetic podspec pointing at a built framework
    Prebuilt,
}

/// One Podfile line and why it has that form
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedEntry {
    pub name: String,
    pub kind: EntryKind,
    pub line: String,
    /// Set when the pod already ships binaries and is kept in source form
    pub already_prebuilt: Option<PrebuiltReason>,
}

/// Result of planning: Podfile lines plus the synthetic podspecs they need,
/// keyed by podspec file stem
#[derive(Debug, Clone, Default)]
pub struct PrebuildPlan {
    pub entries: Vec<PlannedEntry>,
    pub podspecs: BTreeMap<String, PodSpecDocument>,
}

impl PrebuildPlan {
    pub fn prebuilt_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Prebuilt)
            .count()
    }

    /// Podfile lines joined with newlines
    pub fn podfile_lines(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// PrebuildPlanner routes each requested pod to its source or prebuilt Podfile form.
///
/// - pods that already ship binaries (see [`PrebuiltPolicy`]) keep their source entry
/// - pods whose built framework exists get a prebuilt entry and a synthetic podspec
/// - everything else keeps its source entry
pub struct PrebuildPlanner;

impl PrebuildPlanner {
    /// Plans entries for `requested` pod names; an empty list means every root
    /// pod plus every subspec configured to be split.
    ///
    /// `has_artifact` reports whether the built framework for an item exists.
    pub fn plan<F>(
        items: &PodfileItems,
        config: &PrebuildConfig,
        requested: &[String],
        include_version: bool,
        has_artifact: F,
    ) -> Result<PrebuildPlan>
    where
        F: Fn(&PodfileItem) -> bool,
    {
        let targets = Self::targets(items, config, requested)?;
        let mut plan = PrebuildPlan::default();

        for item in targets {
            if let Some(reason) = PrebuiltPolicy::reason(item, config) {
                plan.entries.push(PlannedEntry {
                    name: item.name().to_string(),
                    kind: EntryKind::Source,
                    line: item.entry(include_version, true),
                    already_prebuilt: Some(reason),
                });
                continue;
            }

            if !has_artifact(item) {
                plan.entries.push(PlannedEntry {
                    name: item.name().to_string(),
                    kind: EntryKind::Source,
                    line: item.entry(include_version, true),
                    already_prebuilt: None,
                });
                continue;
            }

            let owner = Self::artifact_owner(item, items, config);
            let stem = owner.podspec_name();
            if !plan.podspecs.contains_key(&stem) {
                let document = PodspecEmitter::pod_specification(owner, items, config)?;
                plan.podspecs.insert(stem, document);
            }

            plan.entries.push(PlannedEntry {
                name: item.name().to_string(),
                kind: EntryKind::Prebuilt,
                line: item.prebuilt_entry(config, true)?,
                already_prebuilt: None,
            });
        }

        Ok(plan)
    }

    fn targets<'a>(
        items: &'a PodfileItems,
        config: &PrebuildConfig,
        requested: &[String],
    ) -> Result<Vec<&'a PodfileItem>> {
        if requested.is_empty() {
            return Ok(items
                .iter()
                .filter(|item| !item.is_subspec() || config.is_split(item.name()))
                .collect());
        }

        requested
            .iter()
            .map(|name| {
                items.get(name).ok_or_else(|| {
                    PodBuilderError::PodNotFound { name: name.clone() }.into()
                })
            })
            .collect()
    }

    /// Item whose podspec describes the artifact: the split subspec itself,
    /// otherwise the root pod
    fn artifact_owner<'a>(
        item: &'a PodfileItem,
        items: &'a PodfileItems,
        config: &PrebuildConfig,
    ) -> &'a PodfileItem {
        if config.is_split(item.name()) {
            return item;
        }
        items.get(item.root_name()).unwrap_or(item)
    }
}
