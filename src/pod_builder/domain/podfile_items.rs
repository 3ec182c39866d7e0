use super::checkout::CheckoutOptions;
use super::podfile_entry::parse_marker;
use super::podfile_item::PodfileItem;
use super::prebuild_config::PrebuildConfig;
use super::specification::{root_name_of, SpecCatalog, Specification};
use crate::shared::Result;
use std::collections::{BTreeMap, HashMap};

/// PodfileItems aggregate: every item of one build/restore cycle.
///
/// Name and root-name indexes are built once, so subspec lookups don't
/// re-split names on every query.
#[derive(Debug, Clone, Default)]
pub struct PodfileItems {
    items: Vec<PodfileItem>,
    by_name: HashMap<String, usize>,
    subspecs_by_root: HashMap<String, Vec<usize>>,
}

impl PodfileItems {
    pub fn new(items: Vec<PodfileItem>) -> Self {
        let mut by_name = HashMap::new();
        let mut subspecs_by_root: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, item) in items.iter().enumerate() {
            by_name.entry(item.name().to_string()).or_insert(index);
            if item.is_subspec() {
                subspecs_by_root
                    .entry(item.root_name().to_string())
                    .or_default()
                    .push(index);
            }
        }

        Self {
            items,
            by_name,
            subspecs_by_root,
        }
    }

    /// Builds one item per node of every specification
    pub fn from_specifications(
        specs: &[Specification],
        catalog: &SpecCatalog,
        checkout_options: &CheckoutOptions,
    ) -> Result<Self> {
        let mut items = Vec::new();
        for spec in specs {
            for node in spec.nodes()? {
                items.push(PodfileItem::new(&node, catalog, checkout_options)?);
            }
        }
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[PodfileItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &PodfileItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PodfileItem> {
        self.by_name.get(name).map(|&index| &self.items[index])
    }

    /// Item named by the `# pb<name>` marker of a Podfile line
    pub fn find_by_marker(&self, line: &str) -> Option<&PodfileItem> {
        parse_marker(line).and_then(|name| self.get(name))
    }

    /// Items `item` depends on, in collection order
    pub fn dependencies_of(&self, item: &PodfileItem) -> Vec<&PodfileItem> {
        item.dependencies(&self.items)
    }

    /// Subspec items whose root is `root_name`
    pub fn subspecs_of(&self, root_name: &str) -> Vec<&PodfileItem> {
        self.subspecs_by_root
            .get(root_name)
            .map(|indexes| indexes.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    /// Items sharing a root pod with `name` (the root itself included)
    pub fn with_common_root(&self, name: &str) -> Vec<&PodfileItem> {
        let root_name = root_name_of(name);
        self.items
            .iter()
            .filter(|item| item.root_name() == root_name)
            .collect()
    }

    /// Root items, i.e. everything that isn't a subspec
    pub fn roots(&self) -> Vec<&PodfileItem> {
        self.items.iter().filter(|item| !item.is_subspec()).collect()
    }

    /// Items grouped by root name
    pub fn group_by_root(&self) -> BTreeMap<&str, Vec<&PodfileItem>> {
        let mut groups: BTreeMap<&str, Vec<&PodfileItem>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.root_name()).or_default().push(item);
        }
        groups
    }

    /// Items that already ship a binary (or are skip-listed)
    pub fn prebuilt(&self, config: &PrebuildConfig) -> Vec<&PodfileItem> {
        self.items
            .iter()
            .filter(|item| item.is_prebuilt(config))
            .collect()
    }

    /// Items that have to be compiled from source
    pub fn source_built(&self, config: &PrebuildConfig) -> Vec<&PodfileItem> {
        self.items
            .iter()
            .filter(|item| !item.is_prebuilt(config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn collection() -> PodfileItems {
        let specs = vec![
            Specification::from_json(
                r#"{
                    "name": "Firebase", "version": "10.0.0",
                    "subspecs": [
                        { "name": "Core", "source_files": "Core/*.m" },
                        { "name": "Analytics", "dependencies": { "Firebase/Core": [], "GoogleUtilities": [] },
                          "vendored_frameworks": "FirebaseAnalytics.framework" }
                    ]
                }"#,
            )
            .unwrap(),
            Specification::from_json(
                r#"{ "name": "GoogleUtilities", "version": "7.11.0", "source_files": "GU/*.m" }"#,
            )
            .unwrap(),
        ];
        let catalog = SpecCatalog::from_specifications(&specs).unwrap();
        PodfileItems::from_specifications(&specs, &catalog, &CheckoutOptions::new()).unwrap()
    }

    #[test]
    fn test_from_specifications_builds_every_node() {
        let items = collection();
        assert_eq!(items.len(), 4);
        assert!(items.get("Firebase/Analytics").is_some());
        assert!(items.get("Missing").is_none());
    }

    #[test]
    fn test_dependencies_of_returns_exact_subset() {
        let items = collection();
        let analytics = items.get("Firebase/Analytics").unwrap();
        let names: BTreeSet<&str> = items
            .dependencies_of(analytics)
            .into_iter()
            .map(|item| item.name())
            .collect();
        assert_eq!(names, BTreeSet::from(["Firebase/Core", "GoogleUtilities"]));

        let utilities = items.get("GoogleUtilities").unwrap();
        assert!(items.dependencies_of(utilities).is_empty());
    }

    #[test]
    fn test_dependencies_independent_of_order() {
        let items = collection();
        let mut reversed: Vec<PodfileItem> = items.items().to_vec();
        reversed.reverse();
        let analytics = items.get("Firebase/Analytics").unwrap();

        let forward: BTreeSet<&str> = analytics
            .dependencies(items.items())
            .into_iter()
            .map(|i| i.name())
            .collect();
        let backward: BTreeSet<&str> = analytics
            .dependencies(&reversed)
            .into_iter()
            .map(|i| i.name())
            .collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_subspecs_of() {
        let items = collection();
        let names: Vec<&str> = items
            .subspecs_of("Firebase")
            .into_iter()
            .map(|i| i.name())
            .collect();
        assert_eq!(names, vec!["Firebase/Core", "Firebase/Analytics"]);
        assert!(items.subspecs_of("GoogleUtilities").is_empty());
    }

    #[test]
    fn test_group_by_root_and_roots() {
        let items = collection();
        let groups = items.group_by_root();
        assert_eq!(groups["Firebase"].len(), 3);
        assert_eq!(groups["GoogleUtilities"].len(), 1);
        assert_eq!(items.roots().len(), 2);
        assert_eq!(items.with_common_root("Firebase/Core").len(), 3);
    }

    #[test]
    fn test_prebuilt_and_source_partition() {
        let items = collection();
        let config = PrebuildConfig::default();

        let prebuilt: Vec<&str> = items.prebuilt(&config).iter().map(|i| i.name()).collect();
        // Analytics: vendored items and no source_files anywhere in its chain
        assert_eq!(prebuilt, vec!["Firebase/Analytics"]);
        assert_eq!(items.source_built(&config).len(), 3);
    }

    #[test]
    fn test_find_by_marker() {
        let items = collection();
        let found = items.find_by_marker("pod 'GoogleUtilities', '=7.11.0' # pb<GoogleUtilities>");
        assert_eq!(found.map(|i| i.name()), Some("GoogleUtilities"));
        assert!(items.find_by_marker("pod 'GoogleUtilities'").is_none());
    }
}
