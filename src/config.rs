//! Configuration file support for pod-prebuild.
//!
//! Provides YAML-based configuration through `podbuilder.config.yml` files,
//! including data structures, file loading, validation and conversion into
//! the settings the use cases consume.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::application::dto::{PrebuildSettings, DEFAULT_BUILD_COMMAND};
use crate::pod_builder::domain::prebuild_config::DEFAULT_PREBUILT_FOLDER;
use crate::pod_builder::domain::{CheckoutOptions, PrebuildConfig};
use crate::shared::paths::relative_path;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "podbuilder.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Directory holding the Podfile; relative to the config file
    pub base_path: Option<PathBuf>,
    /// App project directory; relative to the config file, defaults to `base_path`
    pub project_path: Option<PathBuf>,
    pub prebuilt_folder: Option<String>,
    pub skip_pods: Option<Vec<String>>,
    pub subspecs_to_split: Option<Vec<String>>,
    /// Pod name to attribute overrides (a mapping per pod)
    pub spec_overrides: Option<BTreeMap<String, serde_yaml_ng::Value>>,
    pub checkout_options: Option<CheckoutOptions>,
    pub build_command: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Converts the file into use-case settings; relative paths are resolved
    /// against `config_dir`
    pub fn into_prebuild_config(self, config_dir: &Path) -> Result<PrebuildSettings> {
        let base_path = resolve(config_dir, self.base_path);
        let project_path = match self.project_path {
            Some(path) => config_dir.join(path),
            None => base_path.clone(),
        };

        relative_path(&project_path, &base_path).context(
            "Invalid config: base_path must be reachable from project_path\n\n\
             💡 Hint: Use paths below the config file's directory, or absolute paths.",
        )?;

        let mut prebuild = PrebuildConfig::new(base_path, project_path);
        prebuild.prebuilt_folder = self
            .prebuilt_folder
            .unwrap_or_else(|| DEFAULT_PREBUILT_FOLDER.to_string());
        prebuild.skip_pods = self.skip_pods.unwrap_or_default().into_iter().collect();
        prebuild.subspecs_to_split = self
            .subspecs_to_split
            .unwrap_or_default()
            .into_iter()
            .collect::<BTreeSet<_>>();

        for (name, overrides) in self.spec_overrides.unwrap_or_default() {
            let json = serde_json::to_value(&overrides)
                .with_context(|| format!("Invalid config: spec_overrides.{} cannot be converted", name))?;
            let serde_json::Value::Object(map) = json else {
                bail!("Invalid config: spec_overrides.{} must be a mapping", name);
            };
            prebuild
                .spec_overrides
                .insert(name, map.into_iter().collect());
        }

        let mut settings =
            PrebuildSettings::new(prebuild, self.checkout_options.unwrap_or_default());
        if let Some(command) = self.build_command {
            settings.build_command = command;
        }
        Ok(settings)
    }
}

fn resolve(config_dir: &Path, path: Option<PathBuf>) -> PathBuf {
    match path {
        Some(path) => config_dir.join(path),
        None => config_dir.to_path_buf(),
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, names) in [
        ("skip_pods", &config.skip_pods),
        ("subspecs_to_split", &config.subspecs_to_split),
    ] {
        for (i, name) in names.iter().flatten().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: {}[{}] must not be empty.\n\n\
                     💡 Hint: Use full pod names such as \"Firebase\" or \"Firebase/Core\".",
                    field,
                    i
                );
            }
        }
    }

    if let Some(ref overrides) = config.spec_overrides {
        for (name, value) in overrides {
            if !value.is_mapping() {
                bail!(
                    "Invalid config: spec_overrides.{} must be a mapping.\n\n\
                     💡 Hint: List podspec attributes below the pod name, e.g. `module_name: Foo`.",
                    name
                );
            }
        }
    }

    if let Some(ref prebuilt_folder) = config.prebuilt_folder {
        if prebuilt_folder.trim().is_empty() || prebuilt_folder.contains('/') {
            bail!(
                "Invalid config: prebuilt_folder must be a single, non-empty folder name.\n\n\
                 💡 Hint: The default is \"{}\".",
                DEFAULT_PREBUILT_FOLDER
            );
        }
    }

    if let Some(ref command) = config.build_command {
        if command.trim().is_empty() {
            bail!(
                "Invalid config: build_command must not be empty.\n\n\
                 💡 Hint: Remove the field to use \"{}\".",
                DEFAULT_BUILD_COMMAND
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
