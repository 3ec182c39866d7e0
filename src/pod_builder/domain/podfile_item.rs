use super::checkout::{find_override, CheckoutOptions};
use super::prebuild_config::PrebuildConfig;
use super::specification::{BuildSettings, SpecAttributes, SpecCatalog, SpecNode, StringList};
use crate::pod_builder::policies::PrebuiltPolicy;
use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::fmt;

/// Build configuration used when a podspec doesn't ask for one
pub const DEFAULT_BUILD_CONFIGURATION: &str = "release";

/// `pod_target_xcconfig` key a podspec can use to pick its build configuration
const PREBUILD_CONFIGURATION_KEY: &str = "prebuild_configuration";

/// One resolved pod (root or subspec) and everything downstream steps need to know about it.
///
/// Built once per podspec node with [`PodfileItem::new`]. Only the source path,
/// linkage lists, external flag and build configuration may be patched afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PodfileItem {
    name: String,
    root_name: String,
    module_name: String,
    is_external: bool,
    repo: Option<String>,
    tag: Option<String>,
    commit: Option<String>,
    branch: Option<String>,
    path: Option<String>,
    version: String,
    available_versions: Vec<String>,
    swift_version: Option<String>,
    is_static: bool,
    xcconfig: BuildSettings,
    build_configuration: String,
    has_source_files_key: bool,
    frameworks: Vec<String>,
    weak_frameworks: Vec<String>,
    libraries: Vec<String>,
    vendored_items: Vec<String>,
    dependency_names: BTreeSet<String>,
}

impl PodfileItem {
    /// Builds the item for `node`.
    ///
    /// `catalog` limits dependency names to pods in the current graph and may
    /// supply the versions known for the root pod. `checkout_options` entries
    /// (full name first, then root name) replace the podspec's own source.
    ///
    /// # Errors
    /// Fails when the root podspec has no name or no version.
    pub fn new(
        node: &SpecNode<'_>,
        catalog: &SpecCatalog,
        checkout_options: &CheckoutOptions,
    ) -> Result<Self> {
        let root = node.root();
        let spec = node.attributes();

        let name = node.name().to_string();
        let root_name = node.root_name().to_string();

        let version = root.version.clone().ok_or_else(|| {
            PodBuilderError::InvalidSpecification {
                name: name.clone(),
                reason: "the root specification has no version".to_string(),
            }
        })?;

        let (is_external, repo, tag, commit, branch, path) =
            match find_override(checkout_options, &name, &root_name) {
                Some(pin) => (
                    true,
                    pin.git.clone(),
                    pin.tag.clone(),
                    pin.commit.clone(),
                    pin.branch.clone(),
                    pin.path.clone(),
                ),
                None => {
                    let source = root.source.clone().unwrap_or_default();
                    (false, source.git, source.tag, source.commit, None, None)
                }
            };

        let vendored_items = collect_vendored_items(node);

        let frameworks = concat_lists([
            &spec.framework,
            &spec.frameworks,
            &root.framework,
            &root.frameworks,
        ]);
        let weak_frameworks = concat_lists([
            &spec.weak_framework,
            &spec.weak_frameworks,
            &root.weak_framework,
            &root.weak_frameworks,
        ]);
        let libraries = concat_lists([
            &spec.library,
            &spec.libraries,
            &root.library,
            &root.libraries,
        ]);

        let available_versions = catalog
            .versions_of(&root_name)
            .map(|versions| versions.to_vec())
            .unwrap_or_else(|| vec![version.clone()]);

        let module_name = root
            .module_name
            .clone()
            .unwrap_or_else(|| c99ext_identifier(&root_name));

        let build_configuration = root
            .pod_target_xcconfig
            .as_ref()
            .and_then(|settings| settings.get(PREBUILD_CONFIGURATION_KEY))
            .map(String::as_str)
            .unwrap_or(DEFAULT_BUILD_CONFIGURATION)
            .to_lowercase();

        Ok(Self {
            module_name,
            is_external,
            repo,
            tag,
            commit,
            branch,
            path,
            version,
            available_versions,
            swift_version: root.resolved_swift_version(),
            is_static: root.static_framework.unwrap_or(false),
            xcconfig: root.xcconfig.clone().unwrap_or_default(),
            build_configuration,
            has_source_files_key: root.has_source_files_key() || spec.has_source_files_key(),
            frameworks,
            weak_frameworks,
            libraries,
            vendored_items,
            dependency_names: catalog.recursive_dep_names(node),
            name,
            root_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn is_external(&self) -> bool {
        self.is_external
    }

    pub fn repo(&self) -> Option<&str> {
        self.repo.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn available_versions(&self) -> &[String] {
        &self.available_versions
    }

    pub fn swift_version(&self) -> Option<&str> {
        self.swift_version.as_deref()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn xcconfig(&self) -> &BuildSettings {
        &self.xcconfig
    }

    pub fn build_configuration(&self) -> &str {
        &self.build_configuration
    }

    pub fn has_source_files_key(&self) -> bool {
        self.has_source_files_key
    }

    pub fn frameworks(&self) -> &[String] {
        &self.frameworks
    }

    pub fn weak_frameworks(&self) -> &[String] {
        &self.weak_frameworks
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn vendored_items(&self) -> &[String] {
        &self.vendored_items
    }

    pub fn dependency_names(&self) -> &BTreeSet<String> {
        &self.dependency_names
    }

    pub fn set_path(&mut self, path: Option<String>) {
        self.path = path;
    }

    pub fn set_external(&mut self, is_external: bool) {
        self.is_external = is_external;
    }

    /// Replaces the build configuration; the value is stored lower-cased
    pub fn set_build_configuration(&mut self, configuration: &str) {
        self.build_configuration = configuration.to_lowercase();
    }

    pub fn set_frameworks(&mut self, frameworks: Vec<String>) {
        self.frameworks = frameworks;
    }

    pub fn set_weak_frameworks(&mut self, weak_frameworks: Vec<String>) {
        self.weak_frameworks = weak_frameworks;
    }

    pub fn set_libraries(&mut self, libraries: Vec<String>) {
        self.libraries = libraries;
    }

    pub fn set_vendored_items(&mut self, vendored_items: Vec<String>) {
        self.vendored_items = vendored_items;
    }

    pub fn is_subspec(&self) -> bool {
        self.root_name != self.name
    }

    /// Whether the pod already ships a binary. See [`PrebuiltPolicy`] for the heuristic.
    pub fn is_prebuilt(&self, config: &PrebuildConfig) -> bool {
        PrebuiltPolicy::is_prebuilt(self, config)
    }

    /// Items from `candidates` whose name is one of this item's dependency names
    pub fn dependencies<'a>(&self, candidates: &'a [PodfileItem]) -> Vec<&'a PodfileItem> {
        candidates
            .iter()
            .filter(|item| self.dependency_names.contains(&item.name))
            .collect()
    }

    /// True if `other_name` is a subspec of this (root) item
    pub fn has_subspec(&self, other_name: &str) -> bool {
        if self.is_subspec() {
            return false;
        }
        super::specification::root_name_of(other_name) == self.name
    }

    /// True if `other_name` belongs to the same root pod
    pub fn has_common_spec(&self, other_name: &str) -> bool {
        super::specification::root_name_of(other_name) == self.root_name
    }

    /// One-line summary for diagnostics
    pub fn inspect(&self) -> String {
        let pinned = self.tag.as_deref().or(self.commit.as_deref()).unwrap_or("");
        let deps: Vec<&str> = self.dependency_names.iter().map(String::as_str).collect();
        format!(
            "{} repo={} pinned={} is_static={} deps=[{}]",
            self.name,
            self.repo.as_deref().unwrap_or(""),
            pinned,
            self.is_static,
            deps.join(", ")
        )
    }
}

impl fmt::Display for PodfileItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Vendored frameworks and libraries from the root and the node, then from every
/// available platform's table of each. Sources add up; none replaces another.
fn collect_vendored_items(node: &SpecNode<'_>) -> Vec<String> {
    let root = node.root();
    let spec = node.attributes();
    let platforms = node.available_platforms();

    let mut items: Vec<String> = Vec::new();
    items.extend(root.vendored().cloned());
    items.extend(spec.vendored().cloned());

    let tables: [&SpecAttributes; 2] = [root, spec];
    for attrs in tables {
        for platform in &platforms {
            items.extend(attrs.platform_vendored(platform).into_iter().cloned());
        }
    }

    items.retain(|item| !item.is_empty());
    items
}

fn concat_lists(lists: [&Option<StringList>; 4]) -> Vec<String> {
    lists
        .into_iter()
        .flatten()
        .flat_map(|list| list.as_slice().iter().cloned())
        .filter(|item| !item.is_empty())
        .collect()
}

/// CocoaPods' default module name: non-alphanumerics become `_`, and a leading
/// digit gets a `_` prefix
fn c99ext_identifier(name: &str) -> String {
    let mut identifier: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }
    identifier
}
