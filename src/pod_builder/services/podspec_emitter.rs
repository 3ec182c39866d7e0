use crate::pod_builder::domain::{
    PodSpecDocument, PodfileItem, PodfileItems, PrebuildConfig, SourceDocument,
};
use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use std::collections::HashSet;

/// PodspecEmitter rebuilds a podspec document for the prebuilt form of an item.
///
/// Subspec items of the emitted item become nested subspecs, so the document
/// mirrors the original hierarchy. Pure logic, no I/O.
pub struct PodspecEmitter;

impl PodspecEmitter {
    /// Nesting limit; podspecs never go deeper than root -> subspec in practice
    const MAX_DEPTH: usize = 8;

    /// Emits the document for `item` and, recursively, for its subspecs in `items`.
    ///
    /// The top-level document is named after [`PodfileItem::podspec_name`];
    /// nested ones use the short subspec name.
    ///
    /// # Errors
    /// Returns [`PodBuilderError::MalformedHierarchy`] when the subspec relation
    /// loops back or nests deeper than [`Self::MAX_DEPTH`].
    pub fn pod_specification(
        item: &PodfileItem,
        items: &PodfileItems,
        config: &PrebuildConfig,
    ) -> Result<PodSpecDocument> {
        let mut visited = HashSet::new();
        let mut document = Self::emit_node(item, items, config, &mut visited, 0)?;
        document.name = item.podspec_name();
        Ok(document)
    }

    fn emit_node(
        item: &PodfileItem,
        items: &PodfileItems,
        config: &PrebuildConfig,
        visited: &mut HashSet<String>,
        depth: usize,
    ) -> Result<PodSpecDocument> {
        if depth > Self::MAX_DEPTH {
            return Err(PodBuilderError::MalformedHierarchy {
                name: item.name().to_string(),
                reason: format!("nesting deeper than {} levels", Self::MAX_DEPTH),
            }
            .into());
        }
        if !visited.insert(item.name().to_string()) {
            return Err(PodBuilderError::MalformedHierarchy {
                name: item.name().to_string(),
                reason: "the subspec relation contains a cycle".to_string(),
            }
            .into());
        }

        // only the node that owns an artifact vendors it
        let owns_artifact = !item.is_subspec() || config.is_split(item.name()) || depth == 0;
        let vendored_frameworks = if owns_artifact {
            vec![item.prebuilt_rel_path(config)]
        } else {
            Vec::new()
        };

        let mut document = PodSpecDocument {
            name: short_name(item.name()).to_string(),
            module_name: item.module_name().to_string(),
            source: SourceDocument {
                git: item.repo().map(str::to_string),
                tag: item.tag().map(str::to_string),
                commit: item.commit().map(str::to_string),
            },
            version: item.version().to_string(),
            swift_version: item.swift_version().map(str::to_string),
            static_framework: item.is_static(),
            frameworks: item.frameworks().to_vec(),
            weak_frameworks: item.weak_frameworks().to_vec(),
            libraries: item.libraries().to_vec(),
            vendored_frameworks,
            xcconfig: item.xcconfig().clone(),
            dependencies: item
                .dependency_names()
                .iter()
                .map(|name| (name.clone(), Vec::new()))
                .collect(),
            subspecs: Vec::new(),
        };

        for child in items.subspecs_of(item.name()) {
            let child_document = Self::emit_node(child, items, config, visited, depth + 1)?;
            document.subspecs.push(child_document);
        }

        Ok(document)
    }
}

fn short_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
