use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Platform names CocoaPods understands, in the order they are scanned
pub const KNOWN_PLATFORMS: [&str; 5] = ["ios", "osx", "tvos", "watchos", "visionos"];

/// Build-setting table (`xcconfig`, `pod_target_xcconfig`)
pub type BuildSettings = BTreeMap<String, String>;

/// A string attribute that podspecs accept either as `"UIKit"` or `["UIKit", "Foundation"]`.
///
/// `null` entries inside a list are dropped while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OneOrMany", into = "Vec<String>")]
pub struct StringList(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<Option<String>>),
}

impl From<OneOrMany> for StringList {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(s) => StringList(vec![s]),
            OneOrMany::Many(items) => StringList(items.into_iter().flatten().collect()),
        }
    }
}

impl From<StringList> for Vec<String> {
    fn from(value: StringList) -> Self {
        value.0
    }
}

impl StringList {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// `source` attribute of a podspec
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Per-platform attribute table (`"ios": { ... }`).
///
/// Only the vendored keys and dependencies are read; everything else is carried
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, StringList>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendored_frameworks: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendored_framework: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendored_libraries: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendored_library: Option<StringList>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PlatformAttributes {
    fn vendored(&self) -> impl Iterator<Item = &String> {
        [
            &self.vendored_frameworks,
            &self.vendored_framework,
            &self.vendored_libraries,
            &self.vendored_library,
        ]
        .into_iter()
        .flatten()
        .flat_map(|list| list.as_slice())
    }
}

/// Attribute table of one podspec node (root or subspec), as found in `*.podspec.json`.
///
/// Keys the tool reads are typed; unknown keys land in `extra` so that overrides
/// and re-serialization keep them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_versions: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<BTreeMap<String, Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, StringList>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_framework: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xcconfig: Option<BuildSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_target_xcconfig: Option<BuildSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_files: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frameworks: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weak_framework: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weak_frameworks: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libraries: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendored_frameworks: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendored_framework: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendored_libraries: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendored_library: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<PlatformAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osx: Option<PlatformAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvos: Option<PlatformAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchos: Option<PlatformAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visionos: Option<PlatformAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_subspecs: Option<StringList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_subspec: Option<StringList>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subspecs: Vec<SpecAttributes>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SpecAttributes {
    /// Nested attribute table for a platform name, if the podspec declares one
    pub fn platform(&self, name: &str) -> Option<&PlatformAttributes> {
        match name {
            "ios" => self.ios.as_ref(),
            "osx" | "macos" => self.osx.as_ref(),
            "tvos" => self.tvos.as_ref(),
            "watchos" => self.watchos.as_ref(),
            "visionos" => self.visionos.as_ref(),
            _ => None,
        }
    }

    /// Top-level vendored frameworks and libraries, in key order
    pub fn vendored(&self) -> impl Iterator<Item = &String> {
        [
            &self.vendored_frameworks,
            &self.vendored_framework,
            &self.vendored_libraries,
            &self.vendored_library,
        ]
        .into_iter()
        .flatten()
        .flat_map(|list| list.as_slice())
    }

    /// Vendored items declared inside the `platform` table
    pub fn platform_vendored(&self, platform: &str) -> Vec<&String> {
        self.platform(platform)
            .map(|attrs| attrs.vendored().collect())
            .unwrap_or_default()
    }

    pub fn has_source_files_key(&self) -> bool {
        self.source_files.is_some()
    }

    /// Highest declared Swift version; `swift_version` wins over `swift_versions`
    pub fn resolved_swift_version(&self) -> Option<String> {
        if let Some(version) = &self.swift_version {
            return Some(version.clone());
        }
        self.swift_versions
            .as_ref()
            .and_then(|list| list.as_slice().iter().max_by_key(|v| version_sort_key(v)))
            .cloned()
    }

    /// Dependency names declared at top level plus those inside the tables of
    /// `platforms`
    fn declared_dependency_names<'s>(
        &'s self,
        platforms: &'s [String],
    ) -> impl Iterator<Item = &'s String> + 's {
        let scoped = platforms
            .iter()
            .filter_map(move |platform| self.platform(platform))
            .flat_map(|attrs| attrs.dependencies.iter().flat_map(|deps| deps.keys()));
        self.dependencies
            .iter()
            .flat_map(|deps| deps.keys())
            .chain(scoped)
    }

    /// Short names listed in `default_subspecs` (or `default_subspec`)
    fn default_subspec_names(&self) -> Vec<&String> {
        [&self.default_subspecs, &self.default_subspec]
            .into_iter()
            .flatten()
            .flat_map(|list| list.as_slice())
            .collect()
    }
}

/// A root podspec with its subspec tree
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    attributes: SpecAttributes,
}

impl Specification {
    pub fn new(attributes: SpecAttributes) -> Self {
        Self { attributes }
    }

    /// Parses the content of a `*.podspec.json` file
    pub fn from_json(content: &str) -> Result<Self> {
        let attributes: SpecAttributes = serde_json::from_str(content)?;
        Ok(Self::new(attributes))
    }

    /// Root name, or an empty string for a podspec without one
    pub fn name(&self) -> &str {
        self.attributes.name.as_deref().unwrap_or_default()
    }

    pub fn attributes(&self) -> &SpecAttributes {
        &self.attributes
    }

    /// Writes `overrides` over the root attribute table.
    ///
    /// The merge goes through JSON so that any key can be overridden, typed or not.
    pub fn apply_root_overrides(&mut self, overrides: &BTreeMap<String, Value>) -> Result<()> {
        let mut raw = serde_json::to_value(&self.attributes)?;
        if let Value::Object(table) = &mut raw {
            for (key, value) in overrides {
                table.insert(key.clone(), value.clone());
            }
        }
        self.attributes =
            serde_json::from_value(raw).map_err(|e| PodBuilderError::InvalidOverride {
                name: self.name().to_string(),
                details: e.to_string(),
            })?;
        Ok(())
    }

    /// Flattens the tree into nodes, root first, subspecs depth-first.
    pub fn nodes(&self) -> Result<Vec<SpecNode<'_>>> {
        let root_name = self.attributes.name.clone().ok_or_else(|| {
            PodBuilderError::InvalidSpecification {
                name: "<unnamed>".to_string(),
                reason: "the root specification has no name".to_string(),
            }
        })?;

        let mut nodes = Vec::new();
        collect_nodes(root_name, vec![&self.attributes], &mut nodes)?;
        Ok(nodes)
    }
}

fn collect_nodes<'a>(
    name: String,
    chain: Vec<&'a SpecAttributes>,
    out: &mut Vec<SpecNode<'a>>,
) -> Result<()> {
    let current = chain[chain.len() - 1];
    let node = SpecNode {
        name: name.clone(),
        chain: chain.clone(),
    };
    out.push(node);

    for subspec in &current.subspecs {
        let short_name = subspec.name.as_deref().ok_or_else(|| {
            PodBuilderError::InvalidSpecification {
                name: name.clone(),
                reason: "a subspec has no name".to_string(),
            }
        })?;
        let mut child_chain = chain.clone();
        child_chain.push(subspec);
        collect_nodes(format!("{}/{}", name, short_name), child_chain, out)?;
    }
    Ok(())
}

/// Borrowed view of one podspec node: its full name plus the attribute tables
/// from the root down to the node itself.
#[derive(Debug, Clone)]
pub struct SpecNode<'a> {
    name: String,
    chain: Vec<&'a SpecAttributes>,
}

impl<'a> SpecNode<'a> {
    /// Full name, e.g. `Foo/Bar`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_name(&self) -> &str {
        root_name_of(&self.name)
    }

    pub fn is_subspec(&self) -> bool {
        self.chain.len() > 1
    }

    pub fn root(&self) -> &'a SpecAttributes {
        self.chain[0]
    }

    pub fn attributes(&self) -> &'a SpecAttributes {
        self.chain[self.chain.len() - 1]
    }

    /// Platforms the node is available on.
    ///
    /// The nearest declaration (node, then its parents) wins; a podspec that
    /// declares no platforms is available everywhere.
    pub fn available_platforms(&self) -> Vec<String> {
        self.chain
            .iter()
            .rev()
            .find_map(|attrs| attrs.platforms.as_ref())
            .map(|platforms| platforms.keys().cloned().collect())
            .unwrap_or_else(|| KNOWN_PLATFORMS.iter().map(|p| p.to_string()).collect())
    }

    /// Dependencies declared by the node and inherited from its parents,
    /// including the platform tables of every platform the node is available on
    pub fn declared_dependencies(&self) -> BTreeSet<String> {
        let platforms = self.available_platforms();
        self.chain
            .iter()
            .flat_map(|attrs| attrs.declared_dependency_names(&platforms))
            .filter(|dep| dep.as_str() != self.name)
            .cloned()
            .collect()
    }

    /// Full names of the subspecs that depending on this node pulls in: the
    /// default subspecs when declared, otherwise every direct subspec
    pub fn subspec_dependencies(&self) -> BTreeSet<String> {
        let attrs = self.attributes();
        let defaults = attrs.default_subspec_names();
        let short_names: Vec<&str> = if defaults.is_empty() {
            attrs
                .subspecs
                .iter()
                .filter_map(|subspec| subspec.name.as_deref())
                .collect()
        } else {
            defaults.into_iter().map(String::as_str).collect()
        };

        short_names
            .into_iter()
            .map(|short_name| format!("{}/{}", self.name, short_name))
            .collect()
    }
}

/// Root segment of a pod name (`Foo/Bar` -> `Foo`)
pub fn root_name_of(name: &str) -> &str {
    name.split('/').next().unwrap_or(name)
}

/// Every node known to the current run, with the dependencies it brings along
/// (its declared ones plus its default subspecs) and, optionally, the versions
/// a spec repository offers per root pod.
#[derive(Debug, Clone, Default)]
pub struct SpecCatalog {
    dependencies: BTreeMap<String, BTreeSet<String>>,
    versions: BTreeMap<String, Vec<String>>,
}

impl SpecCatalog {
    pub fn new<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a SpecNode<'a>>,
    {
        let dependencies = nodes
            .into_iter()
            .map(|node| {
                let mut dependencies = node.declared_dependencies();
                dependencies.extend(node.subspec_dependencies());
                (node.name().to_string(), dependencies)
            })
            .collect();
        Self {
            dependencies,
            versions: BTreeMap::new(),
        }
    }

    /// Builds a catalog over every node of every specification
    pub fn from_specifications(specs: &[Specification]) -> Result<Self> {
        let mut nodes = Vec::new();
        for spec in specs {
            nodes.extend(spec.nodes()?);
        }
        Ok(Self::new(nodes.iter()))
    }

    /// Registers the versions a spec repository knows for `root_name`
    pub fn with_versions(mut self, root_name: &str, versions: Vec<String>) -> Self {
        self.versions
            .insert(root_name.to_string(), sorted_versions(versions));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.dependencies.keys()
    }

    pub fn versions_of(&self, root_name: &str) -> Option<&[String]> {
        self.versions.get(root_name).map(|v| v.as_slice())
    }

    /// Transitive dependency names of `node`, restricted to names in the catalog.
    ///
    /// A dependency on a pod also reaches its default subspecs (or all of
    /// them). Names the catalog doesn't know are dropped and not expanded
    /// further.
    pub fn recursive_dep_names(&self, node: &SpecNode<'_>) -> BTreeSet<String> {
        let mut result = BTreeSet::new();
        let mut pending: Vec<String> = node.declared_dependencies().into_iter().collect();

        while let Some(name) = pending.pop() {
            if name == node.name() || !self.contains(&name) {
                continue;
            }
            if result.insert(name.clone()) {
                if let Some(next) = self.dependencies.get(&name) {
                    pending.extend(next.iter().cloned());
                }
            }
        }
        result
    }
}

/// Sorts version strings ascending; unparseable versions sort first, by text
pub fn sorted_versions(mut versions: Vec<String>) -> Vec<String> {
    versions.sort_by_key(|v| version_sort_key(v));
    versions.dedup();
    versions
}

fn version_sort_key(version: &str) -> (Option<semver::Version>, String) {
    (parse_lenient(version), version.to_string())
}

/// Parses CocoaPods-style versions (`1`, `1.2`, `1.2.3-beta.1`) as semver
fn parse_lenient(version: &str) -> Option<semver::Version> {
    if let Ok(parsed) = semver::Version::parse(version) {
        return Some(parsed);
    }
    let (core, pre) = match version.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (version, None),
    };
    let mut parts: Vec<&str> = core.split('.').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }
    while parts.len() < 3 {
        parts.push("0");
    }
    let padded = match pre {
        Some(pre) => format!("{}-{}", parts.join("."), pre),
        None => parts.join("."),
    };
    semver::Version::parse(&padded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALAMOFIRE: &str = r#"{
        "name": "Alamofire",
        "version": "5.8.1",
        "source": { "git": "https://github.com/Alamofire/Alamofire.git", "tag": "5.8.1" },
        "platforms": { "ios": "10.0", "osx": "10.12" },
        "swift_versions": ["5.5", "5.7", "5.10"],
        "frameworks": "CFNetwork",
        "source_files": "Source/*.swift",
        "homepage": "https://github.com/Alamofire/Alamofire"
    }"#;

    const FIREBASE: &str = r#"{
        "name": "Firebase",
        "version": "10.0.0",
        "dependencies": { "Nanopb": [] },
        "subspecs": [
            { "name": "Core", "dependencies": { "FirebaseCore": ["~> 10.0"] } },
            { "name": "Analytics", "dependencies": { "Firebase/Core": [] },
              "ios": { "vendored_frameworks": ["Analytics.xcframework", null] } }
        ]
    }"#;

    #[test]
    fn test_from_json_typed_fields() {
        let spec = Specification::from_json(ALAMOFIRE).unwrap();
        let attrs = spec.attributes();

        assert_eq!(spec.name(), "Alamofire");
        assert_eq!(attrs.version.as_deref(), Some("5.8.1"));
        assert_eq!(
            attrs.frameworks.as_ref().unwrap().as_slice(),
            &["CFNetwork".to_string()]
        );
        assert!(attrs.has_source_files_key());
        assert!(attrs.extra.contains_key("homepage"));
    }

    #[test]
    fn test_resolved_swift_version_picks_highest() {
        let spec = Specification::from_json(ALAMOFIRE).unwrap();
        assert_eq!(
            spec.attributes().resolved_swift_version().as_deref(),
            Some("5.10")
        );
    }

    #[test]
    fn test_nodes_flatten_subspecs() {
        let spec = Specification::from_json(FIREBASE).unwrap();
        let nodes = spec.nodes().unwrap();
        let names: Vec<&str> = nodes.iter().map(|n| n.name()).collect();

        assert_eq!(names, vec!["Firebase", "Firebase/Core", "Firebase/Analytics"]);
        assert!(!nodes[0].is_subspec());
        assert!(nodes[1].is_subspec());
        assert_eq!(nodes[2].root_name(), "Firebase");
    }

    #[test]
    fn test_nodes_without_root_name_fails() {
        let spec = Specification::from_json(r#"{ "version": "1.0" }"#).unwrap();
        assert!(spec.nodes().is_err());
    }

    #[test]
    fn test_platform_vendored_drops_nulls() {
        let spec = Specification::from_json(FIREBASE).unwrap();
        let nodes = spec.nodes().unwrap();
        let analytics = nodes[2].attributes();

        assert_eq!(analytics.platform_vendored("ios"), vec!["Analytics.xcframework"]);
        assert!(analytics.platform_vendored("osx").is_empty());
    }

    #[test]
    fn test_available_platforms_default_to_all() {
        let spec = Specification::from_json(FIREBASE).unwrap();
        let nodes = spec.nodes().unwrap();
        assert_eq!(nodes[1].available_platforms().len(), KNOWN_PLATFORMS.len());

        let spec = Specification::from_json(ALAMOFIRE).unwrap();
        let nodes = spec.nodes().unwrap();
        assert_eq!(nodes[0].available_platforms(), vec!["ios", "osx"]);
    }

    #[test]
    fn test_subspec_inherits_parent_dependencies() {
        let spec = Specification::from_json(FIREBASE).unwrap();
        let nodes = spec.nodes().unwrap();
        let core_deps = nodes[1].declared_dependencies();

        assert!(core_deps.contains("Nanopb"));
        assert!(core_deps.contains("FirebaseCore"));
    }

    #[test]
    fn test_recursive_dep_names_restricted_to_catalog() {
        let spec = Specification::from_json(FIREBASE).unwrap();
        let nodes = spec.nodes().unwrap();
        let catalog = SpecCatalog::new(nodes.iter());

        // Nanopb and FirebaseCore are outside the graph
        let deps = catalog.recursive_dep_names(&nodes[2]);
        assert_eq!(deps, BTreeSet::from(["Firebase/Core".to_string()]));
    }

    #[test]
    fn test_recursive_dep_names_follows_chain() {
        let a = Specification::from_json(
            r#"{ "name": "A", "version": "1", "dependencies": { "B": [] } }"#,
        )
        .unwrap();
        let b = Specification::from_json(
            r#"{ "name": "B", "version": "1", "dependencies": { "C": [], "A": [] } }"#,
        )
        .unwrap();
        let c = Specification::from_json(r#"{ "name": "C", "version": "1" }"#).unwrap();
        let specs = vec![a, b, c];
        let catalog = SpecCatalog::from_specifications(&specs).unwrap();
        let nodes = specs[0].nodes().unwrap();

        let deps = catalog.recursive_dep_names(&nodes[0]);
        assert_eq!(deps, BTreeSet::from(["B".to_string(), "C".to_string()]));
    }

    #[test]
    fn test_platform_dependencies_are_declared() {
        let app = Specification::from_json(
            r#"{ "name": "App", "version": "1.0", "platforms": { "ios": "12.0" },
                 "ios": { "dependencies": { "Helper": [] } },
                 "osx": { "dependencies": { "MacOnly": [] } } }"#,
        )
        .unwrap();
        let helper = Specification::from_json(r#"{ "name": "Helper", "version": "2.0" }"#).unwrap();
        let mac_only = Specification::from_json(r#"{ "name": "MacOnly", "version": "1.0" }"#).unwrap();
        let specs = vec![app, helper, mac_only];
        let catalog = SpecCatalog::from_specifications(&specs).unwrap();
        let nodes = specs[0].nodes().unwrap();

        // osx is not among the declared platforms
        assert_eq!(
            nodes[0].declared_dependencies(),
            BTreeSet::from(["Helper".to_string()])
        );
        assert_eq!(
            catalog.recursive_dep_names(&nodes[0]),
            BTreeSet::from(["Helper".to_string()])
        );
    }

    #[test]
    fn test_platform_dependencies_of_parent_reach_subspec() {
        let spec = Specification::from_json(
            r#"{ "name": "Kit", "version": "1.0",
                 "tvos": { "dependencies": { "TVHelper": [] } },
                 "subspecs": [ { "name": "UI" } ] }"#,
        )
        .unwrap();
        let nodes = spec.nodes().unwrap();

        // no platforms declared: every platform table counts
        assert!(nodes[1].declared_dependencies().contains("TVHelper"));
    }

    #[test]
    fn test_dependency_on_pod_pulls_in_default_subspecs() {
        let app = Specification::from_json(
            r#"{ "name": "App", "version": "1.0", "dependencies": { "Kit": [] } }"#,
        )
        .unwrap();
        let kit = Specification::from_json(
            r#"{ "name": "Kit", "version": "1.0", "default_subspecs": "Core",
                 "subspecs": [
                    { "name": "Core", "dependencies": { "Logger": [] } },
                    { "name": "Extras", "dependencies": { "Charts": [] } } ] }"#,
        )
        .unwrap();
        let logger = Specification::from_json(r#"{ "name": "Logger", "version": "1.0" }"#).unwrap();
        let charts = Specification::from_json(r#"{ "name": "Charts", "version": "1.0" }"#).unwrap();
        let specs = vec![app, kit, logger, charts];
        let catalog = SpecCatalog::from_specifications(&specs).unwrap();
        let nodes = specs[0].nodes().unwrap();

        assert_eq!(
            catalog.recursive_dep_names(&nodes[0]),
            BTreeSet::from([
                "Kit".to_string(),
                "Kit/Core".to_string(),
                "Logger".to_string()
            ])
        );
    }

    #[test]
    fn test_dependency_on_pod_without_defaults_pulls_in_all_subspecs() {
        let app = Specification::from_json(
            r#"{ "name": "App", "version": "1.0", "dependencies": { "Kit": [] } }"#,
        )
        .unwrap();
        let kit = Specification::from_json(
            r#"{ "name": "Kit", "version": "1.0",
                 "subspecs": [
                    { "name": "Core" },
                    { "name": "Extras", "dependencies": { "Charts": [] } } ] }"#,
        )
        .unwrap();
        let charts = Specification::from_json(r#"{ "name": "Charts", "version": "1.0" }"#).unwrap();
        let specs = vec![app, kit, charts];
        let catalog = SpecCatalog::from_specifications(&specs).unwrap();

        let kit_nodes = specs[1].nodes().unwrap();
        assert_eq!(
            kit_nodes[0].subspec_dependencies(),
            BTreeSet::from(["Kit/Core".to_string(), "Kit/Extras".to_string()])
        );
        // a pod's own subspecs are nested, not dependencies
        assert!(catalog.recursive_dep_names(&kit_nodes[0]).is_empty());

        let app_nodes = specs[0].nodes().unwrap();
        assert_eq!(
            catalog.recursive_dep_names(&app_nodes[0]),
            BTreeSet::from([
                "Charts".to_string(),
                "Kit".to_string(),
                "Kit/Core".to_string(),
                "Kit/Extras".to_string()
            ])
        );
    }

    #[test]
    fn test_apply_root_overrides_typed_and_untyped() {
        let mut spec = Specification::from_json(ALAMOFIRE).unwrap();
        let overrides = BTreeMap::from([
            ("static_framework".to_string(), Value::Bool(true)),
            ("requires_arc".to_string(), Value::Bool(false)),
        ]);

        spec.apply_root_overrides(&overrides).unwrap();

        assert_eq!(spec.attributes().static_framework, Some(true));
        assert_eq!(
            spec.attributes().extra.get("requires_arc"),
            Some(&Value::Bool(false))
        );
        assert_eq!(spec.attributes().version.as_deref(), Some("5.8.1"));
    }

    #[test]
    fn test_apply_root_overrides_rejects_bad_type() {
        let mut spec = Specification::from_json(ALAMOFIRE).unwrap();
        let overrides = BTreeMap::from([(
            "static_framework".to_string(),
            Value::String("yes".to_string()),
        )]);

        let err = spec.apply_root_overrides(&overrides).unwrap_err();
        assert!(err.to_string().contains("Invalid attribute override"));
    }

    #[test]
    fn test_sorted_versions() {
        let versions = sorted_versions(vec![
            "1.10.0".to_string(),
            "1.2".to_string(),
            "1.9.1".to_string(),
            "2.0.0-beta.1".to_string(),
            "2.0.0".to_string(),
        ]);
        assert_eq!(versions, vec!["1.2", "1.9.1", "1.10.0", "2.0.0-beta.1", "2.0.0"]);
    }

    #[test]
    fn test_root_name_of() {
        assert_eq!(root_name_of("Foo/Bar"), "Foo");
        assert_eq!(root_name_of("Foo"), "Foo");
    }
}
