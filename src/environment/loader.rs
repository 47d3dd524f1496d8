//! Environment file loader.
//!
//! This module reads environment variables for a conversion from a Postman
//! environment export or from a plain JSON object of name/value pairs.

use super::models::{scalar_text, Environment};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Errors that can occur during environment loading
#[derive(Debug, Clone, PartialEq)]
pub enum EnvError {
    /// Failed to parse JSON content
    ParseError(String),

    /// Invalid format or structure in the environment document
    InvalidFormat(String),

    /// IO error occurred while reading file
    IoError(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::ParseError(msg) => write!(f, "Failed to parse environment file: {}", msg),
            EnvError::InvalidFormat(msg) => write!(f, "Invalid environment format: {}", msg),
            EnvError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for EnvError {}

impl From<io::Error> for EnvError {
    fn from(err: io::Error) -> Self {
        EnvError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for EnvError {
    fn from(err: serde_json::Error) -> Self {
        EnvError::ParseError(err.to_string())
    }
}

/// Parses environment variables from JSON text.
///
/// Two shapes are accepted:
///
/// - a Postman environment export, `{"values": [{"key", "value", "enabled"}]}`,
///   where disabled values are skipped;
/// - a plain object mapping names to scalar values.
///
/// # Examples
///
/// ```
/// use postman2har::environment::parse_environment;
///
/// let vars = parse_environment(r#"{"values": [{"key": "host", "value": "localhost"}]}"#).unwrap();
/// assert_eq!(vars["host"], "localhost");
///
/// let vars = parse_environment(r#"{"token": "abc", "retries": 3}"#).unwrap();
/// assert_eq!(vars["retries"], "3");
/// ```
pub fn parse_environment(json: &str) -> Result<HashMap<String, String>, EnvError> {
    let document: Value = serde_json::from_str(json)?;

    let object = match &document {
        Value::Object(object) => object,
        _ => {
            return Err(EnvError::InvalidFormat(
                "root must be a JSON object".to_string(),
            ))
        }
    };

    let is_export = matches!(object.get("values"), Some(Value::Array(_)));
    if is_export {
        let environment: Environment = serde_json::from_value(document)?;
        log::debug!(
            "loaded environment {:?} with {} values",
            environment.name,
            environment.values.len()
        );
        return Ok(environment.variables());
    }

    object
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Object(_) | Value::Array(_) => Some(Err(EnvError::InvalidFormat(format!(
                "value of '{}' must be a string, number or boolean",
                key
            )))),
            other => scalar_text(other).map(|text| Ok((key.clone(), text))),
        })
        .collect()
}

/// Reads and parses an environment file.
pub fn load_environment_file(path: &Path) -> Result<HashMap<String, String>, EnvError> {
    let content = fs::read_to_string(path)?;
    parse_environment(&content)
}
