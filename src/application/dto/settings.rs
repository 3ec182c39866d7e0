use crate::pod_builder::domain::{CheckoutOptions, PrebuildConfig};

/// Command `restore-all` rebuilds the workspace with
pub const DEFAULT_BUILD_COMMAND: &str = "pod install";

/// Everything a use case needs from the configuration file
#[derive(Debug, Clone)]
pub struct PrebuildSettings {
    pub prebuild: PrebuildConfig,
    pub checkout_options: CheckoutOptions,
    pub build_command: String,
}

impl PrebuildSettings {
    pub fn new(prebuild: PrebuildConfig, checkout_options: CheckoutOptions) -> Self {
        Self {
            prebuild,
            checkout_options,
            build_command: DEFAULT_BUILD_COMMAND.to_string(),
        }
    }
}

impl Default for PrebuildSettings {
    fn default() -> Self {
        Self::new(PrebuildConfig::default(), CheckoutOptions::new())
    }
}
