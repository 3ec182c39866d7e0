use crate::pod_builder::domain::{CheckoutOptions, PrebuildConfig, Specification};
use anyhow::Context;
use crate::shared::Result;

/// SpecOverlay applies the configured attribute overrides to a podspec.
///
/// Overrides are looked up by the name of every node in the tree and are
/// always written onto the root attribute table. When the checkout options hold
/// an entry for that node name, the same keys are mirrored into it.
///
/// Run it once per specification, before any [`PodfileItem`] is built from it:
/// items copy attribute values at construction time.
///
/// [`PodfileItem`]: crate::pod_builder::domain::PodfileItem
pub struct SpecOverlay;

impl SpecOverlay {
    /// Returns the number of override sets that were applied
    pub fn apply(
        spec: &mut Specification,
        checkout_options: &mut CheckoutOptions,
        config: &PrebuildConfig,
    ) -> Result<usize> {
        let names: Vec<String> = spec
            .nodes()?
            .iter()
            .map(|node| node.name().to_string())
            .collect();

        let mut applied = 0;
        for name in names {
            let Some(overrides) = config.spec_overrides.get(&name) else {
                continue;
            };

            spec.apply_root_overrides(overrides)?;
            if let Some(entry) = checkout_options.get_mut(&name) {
                for (key, value) in overrides {
                    entry.set(key, value).with_context(|| {
                        format!("Failed to mirror overrides of '{}' into checkout_options", name)
                    })?;
                }
            }
            applied += 1;
        }

        Ok(applied)
    }
}
