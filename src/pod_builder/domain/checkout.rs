use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// User pin that replaces a pod's own `source` (Podfile `:git`/`:tag`/`:path` options)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Keys mirrored from spec overrides that have no typed slot
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CheckoutOverride {
    /// Stores `value` under `key`, using the typed slot when there is one.
    ///
    /// Numbers and booleans are stored as their text (`10` pins tag `"10"`);
    /// `null` clears the pin.
    ///
    /// # Errors
    /// Returns [`PodBuilderError::InvalidOverride`] for a list or mapping under a
    /// typed key.
    pub fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        let slot = match key {
            "git" => &mut self.git,
            "tag" => &mut self.tag,
            "commit" => &mut self.commit,
            "branch" => &mut self.branch,
            "path" => &mut self.path,
            _ => {
                self.extra.insert(key.to_string(), value.clone());
                return Ok(());
            }
        };

        *slot = match value {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
            Value::Array(_) | Value::Object(_) => {
                return Err(PodBuilderError::InvalidOverride {
                    name: key.to_string(),
                    details: format!("expected a single value, found {}", value),
                }
                .into());
            }
        };
        Ok(())
    }
}

/// Checkout overrides keyed by full pod name or root name
pub type CheckoutOptions = BTreeMap<String, CheckoutOverride>;

/// Looks up the override for a pod: exact name first, then its root name
pub fn find_override<'a>(
    options: &'a CheckoutOptions,
    name: &str,
    root_name: &str,
) -> Option<&'a CheckoutOverride> {
    options.get(name).or_else(|| options.get(root_name))
}
