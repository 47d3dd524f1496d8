//! Environment data models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A Postman environment export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Variables in declaration order.
    pub values: Vec<EnvironmentValue>,
}

/// One variable of an environment export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentValue {
    pub key: String,

    #[serde(default)]
    pub value: Value,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Environment {
    /// Collects enabled values into a map. Later duplicates win.
    ///
    /// Non-string scalars use their JSON text; `null` values are dropped.
    pub fn variables(&self) -> HashMap<String, String> {
        self.values
            .iter()
            .filter(|entry| entry.enabled)
            .filter_map(|entry| {
                scalar_text(&entry.value).map(|value| (entry.key.clone(), value))
            })
            .collect()
    }
}

/// Renders a JSON scalar as text; `None` for `null`.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
