use crate::pod_builder::domain::{PodfileItem, PrebuildConfig};
use std::fmt;
use std::path::Path;

/// Why an item counts as prebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrebuiltReason {
    /// Root or full name is on the skip list
    SkipListed,
    /// A vendored item is named `<module_name>.framework`
    VendoredModuleFramework,
    /// No `source_files` key anywhere, but vendored items exist
    VendoredOnly,
}

impl fmt::Display for PrebuiltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrebuiltReason::SkipListed => write!(f, "skip-listed"),
            PrebuiltReason::VendoredModuleFramework => write!(f, "vendors its module framework"),
            PrebuiltReason::VendoredOnly => write!(f, "vendored binaries only"),
        }
    }
}

/// PrebuiltPolicy decides whether a pod already ships a binary.
///
/// The checks run in a fixed order and the first hit wins. This is a heuristic
/// over declared metadata: the actual source files are never inspected, so a
/// podspec whose metadata is incomplete can be misclassified either way.
pub struct PrebuiltPolicy;

impl PrebuiltPolicy {
    pub fn is_prebuilt(item: &PodfileItem, config: &PrebuildConfig) -> bool {
        Self::reason(item, config).is_some()
    }

    pub fn reason(item: &PodfileItem, config: &PrebuildConfig) -> Option<PrebuiltReason> {
        // skip-listed pods are routed like prebuilt ones
        if config.is_skipped(item.root_name()) || config.is_skipped(item.name()) {
            return Some(PrebuiltReason::SkipListed);
        }

        let module_framework = format!("{}.framework", item.module_name());
        let ships_module = item.vendored_items().iter().any(|vendored| {
            Path::new(vendored)
                .file_name()
                .is_some_and(|file_name| file_name == module_framework.as_str())
        });
        if ships_module {
            return Some(PrebuiltReason::VendoredModuleFramework);
        }

        if !item.has_source_files_key() && !item.vendored_items().is_empty() {
            return Some(PrebuiltReason::VendoredOnly);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pod_builder::domain::{CheckoutOptions, SpecCatalog, Specification};

    fn build_item(json: &str) -> PodfileItem {
        let spec = Specification::from_json(json).unwrap();
        let nodes = spec.nodes().unwrap();
        let catalog = SpecCatalog::new(nodes.iter());
        PodfileItem::new(&nodes[0], &catalog, &CheckoutOptions::new()).unwrap()
    }

    #[test]
    fn test_module_framework_wins_over_source_files() {
        let item = build_item(
            r#"{ "name": "SomeModule", "version": "1.0", "source_files": "Sources/**/*.swift",
                 "vendored_frameworks": "Frameworks/SomeModule.framework" }"#,
        );
        assert!(PrebuiltPolicy::is_prebuilt(&item, &PrebuildConfig::default()));
        assert_eq!(
            PrebuiltPolicy::reason(&item, &PrebuildConfig::default()),
            Some(PrebuiltReason::VendoredModuleFramework)
        );
    }

    #[test]
    fn test_vendored_only() {
        let item = build_item(
            r#"{ "name": "Fabric", "version": "1.10", "vendored_frameworks": "Fabric.xcframework" }"#,
        );
        assert_eq!(
            PrebuiltPolicy::reason(&item, &PrebuildConfig::default()),
            Some(PrebuiltReason::VendoredOnly)
        );
    }

    #[test]
    fn test_source_pod_is_not_prebuilt() {
        let item = build_item(
            r#"{ "name": "Alamofire", "version": "5.8.1", "source_files": "Source/*.swift",
                 "vendored_libraries": "libextra.a" }"#,
        );
        assert!(!PrebuiltPolicy::is_prebuilt(&item, &PrebuildConfig::default()));

        let bare = build_item(r#"{ "name": "Empty", "version": "1.0" }"#);
        assert!(!PrebuiltPolicy::is_prebuilt(&bare, &PrebuildConfig::default()));
    }

    #[test]
    fn test_skip_list_wins() {
        let item = build_item(r#"{ "name": "Alamofire", "version": "5.8.1", "source_files": "S/*.swift" }"#);
        let mut config = PrebuildConfig::default();
        config.skip_pods.insert("Alamofire".to_string());
        assert_eq!(
            PrebuiltPolicy::reason(&item, &config),
            Some(PrebuiltReason::SkipListed)
        );
    }
}
