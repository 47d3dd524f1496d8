//! Conversion options schema.
//!
//! This module defines the options accepted by a conversion and their
//! validation logic.

use crate::converter::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Options controlling a conversion.
///
/// Every field is optional in serialized form and falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Environment variables.
    ///
    /// They shadow collection variables and are shadowed by folder, item and
    /// URL variables. Defaults to empty.
    #[serde(default)]
    pub environments: HashMap<String, String>,

    /// Base URL replacing protocol, host and port of every structured
    /// request URL.
    ///
    /// Must be an absolute URL with a host. Raw string URLs are not
    /// affected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Seed for synthesized values of unresolved variables.
    ///
    /// When set, conversions of the same document produce identical output.
    /// Defaults to an entropy-seeded generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ConvertOptions {
    /// Validates the options.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all options are valid, or [`ConvertError::InvalidBaseUrl`].
    pub fn validate(&self) -> Result<(), ConvertError> {
        self.parsed_base_url().map(|_| ())
    }

    /// Returns the parsed base URL, if one is configured.
    pub fn parsed_base_url(&self) -> Result<Option<url::Url>, ConvertError> {
        let raw = match self.base_url.as_deref() {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match url::Url::parse(raw.trim()) {
            Ok(parsed) if parsed.host_str().is_some() => Ok(Some(parsed)),
            _ => Err(ConvertError::InvalidBaseUrl(raw.to_string())),
        }
    }

    /// Adds one environment variable.
    pub fn with_environment(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environments.insert(key.into(), value.into());
        self
    }

    /// Adds environment variables, overriding existing keys.
    pub fn with_environments<I, K, V>(mut self, environments: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.environments.extend(
            environments
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
