use super::podfile_item::PodfileItem;
use super::prebuild_config::PrebuildConfig;
use crate::shared::error::PodBuilderError;
use crate::shared::paths::relative_path;
use crate::shared::Result;

const MARKER_PREFIX: &str = "# pb<";

/// Prefix of every command returned by [`PodfileItem::git_hard_checkout`]
pub const GIT_HARD_CHECKOUT_PREFIX: &str = "git fetch --all --tags --prune; git reset --hard";

/// Trailing comment that lets a later pass map a Podfile line back to its pod
pub fn marker(name: &str) -> String {
    format!("{}{}>", MARKER_PREFIX, name)
}

/// Extracts the pod name from a line ending in a `# pb<name>` marker
pub fn parse_marker(line: &str) -> Option<&str> {
    let start = line.rfind(MARKER_PREFIX)? + MARKER_PREFIX.len();
    let rest = &line[start..];
    let end = rest.find('>')?;
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

/// Body of a single-quoted Ruby string literal
fn ruby_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// True for refs that can be passed to `sh -c` unquoted
fn is_shell_safe_ref(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/' | '+' | '@'))
}

impl PodfileItem {
    /// Podfile line for the source form of the pod.
    ///
    /// Without `include_version` only `pod '<name>'` is returned. External pods
    /// get `:path` alone when a local path is set, otherwise every remote pin
    /// that is set (`:git`, `:tag`, `:commit`, `:branch`). Registry pods get an
    /// exact `'=<version>'` pin.
    pub fn entry(&self, include_version: bool, include_marker: bool) -> String {
        let mut entry = format!("pod '{}'", ruby_quoted(self.name()));

        if !include_version {
            return entry;
        }

        if self.is_external() {
            if let Some(path) = self.path() {
                entry.push_str(&format!(", :path => '{}'", ruby_quoted(path)));
            } else {
                let pins = [
                    ("git", self.repo()),
                    ("tag", self.tag()),
                    ("commit", self.commit()),
                    ("branch", self.branch()),
                ];
                for (key, value) in pins {
                    if let Some(value) = value {
                        entry.push_str(&format!(", :{} => '{}'", key, ruby_quoted(value)));
                    }
                }
            }
        } else {
            entry.push_str(&format!(", '={}'", ruby_quoted(self.version())));
        }

        if include_marker {
            entry.push(' ');
            entry.push_str(&marker(self.name()));
        }

        entry
    }

    /// Podfile line pointing at the synthetic podspec of the prebuilt artifact.
    ///
    /// # Errors
    /// Fails when `base_path` cannot be expressed relative to `project_path`.
    pub fn prebuilt_entry(&self, config: &PrebuildConfig, include_marker: bool) -> Result<String> {
        let relative = relative_path(&config.project_path, &config.base_path)?;
        let spec_name = if config.is_split(self.name()) {
            self.podspec_name()
        } else {
            self.root_name().to_string()
        };

        let mut entry = format!(
            "pod '{}/{}', :path => '{}'",
            ruby_quoted(&config.prebuilt_folder),
            ruby_quoted(&spec_name),
            ruby_quoted(&relative.to_string_lossy())
        );

        if include_marker {
            entry.push(' ');
            entry.push_str(&marker(self.name()));
        }

        Ok(entry)
    }

    /// File-safe name: `Foo/Bar` becomes `Foo_Bar`
    pub fn podspec_name(&self) -> String {
        self.name().replace('/', "_")
    }

    /// Location of the built framework, relative to the prebuilt folder
    pub fn prebuilt_rel_path(&self, config: &PrebuildConfig) -> String {
        if self.is_subspec() && config.is_split(self.name()) {
            format!("{}/{}.framework", self.name(), self.module_name())
        } else {
            format!("{}.framework", self.module_name())
        }
    }

    /// Shell command that hard-resets a checkout to the pinned tag, commit or
    /// branch (first one set wins). `None` means leave the working tree alone.
    ///
    /// The ref is not quoted; see [`Self::checked_git_hard_checkout`] before
    /// handing the command to a shell.
    pub fn git_hard_checkout(&self) -> Option<String> {
        let (field, value) = self.checkout_pin()?;
        let target = match field {
            "tag" => format!("tags/{}", value),
            "branch" => format!("origin/{}", value),
            _ => value.to_string(),
        };
        Some(format!("{} {}", GIT_HARD_CHECKOUT_PREFIX, target))
    }

    /// [`Self::git_hard_checkout`], refusing pins with characters a shell
    /// would interpret
    pub fn checked_git_hard_checkout(&self) -> Result<Option<String>> {
        let Some((field, value)) = self.checkout_pin() else {
            return Ok(None);
        };
        if !is_shell_safe_ref(value) {
            return Err(PodBuilderError::UnsafeCheckoutPin {
                name: self.name().to_string(),
                field: field.to_string(),
                value: value.to_string(),
            }
            .into());
        }
        Ok(self.git_hard_checkout())
    }

    fn checkout_pin(&self) -> Option<(&'static str, &str)> {
        if let Some(tag) = self.tag() {
            Some(("tag", tag))
        } else if let Some(commit) = self.commit() {
            Some(("commit", commit))
        } else {
            self.branch().map(|branch| ("branch", branch))
        }
    }
}
