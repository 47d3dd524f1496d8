//! Conversion error types.
//!
//! This module defines the errors a conversion can fail with. Every error is
//! fatal for the whole conversion: no partial output is produced.

use crate::validator::ValidationError;
use std::fmt;

/// Errors that can occur while converting a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The document failed validation before traversal started.
    Invalid(ValidationError),

    /// The collection text could not be parsed.
    Parse(String),

    /// A request has no HTTP method.
    ///
    /// Contains the name of the item declaring the request, if any.
    MissingMethod { item: Option<String> },

    /// A request has no URL.
    MissingUrl { item: Option<String> },

    /// A structured URL has no host.
    MissingHost,

    /// A body declares a mode that cannot be encoded.
    UnsupportedBodyMode(String),

    /// An auth option names a destination other than `header` or `query`.
    UnsupportedTokenDestination(String),

    /// The configured base URL is not an absolute URL with a host.
    InvalidBaseUrl(String),
}

impl ConvertError {
    fn item_suffix(item: &Option<String>) -> String {
        item.as_ref()
            .map(|name| format!(" (item '{}')", name))
            .unwrap_or_default()
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Invalid(err) => write!(f, "Invalid collection: {}", err),
            ConvertError::Parse(msg) => write!(f, "Failed to parse collection: {}", msg),
            ConvertError::MissingMethod { item } => {
                write!(f, "Method is not defined{}", Self::item_suffix(item))
            }
            ConvertError::MissingUrl { item } => {
                write!(f, "URL is not defined{}", Self::item_suffix(item))
            }
            ConvertError::MissingHost => write!(f, "Host is not defined"),
            ConvertError::UnsupportedBodyMode(mode) => {
                write!(f, "Body mode '{}' is not supported", mode)
            }
            ConvertError::UnsupportedTokenDestination(target) => write!(
                f,
                "Unsupported token destination '{}'. Expected 'header' or 'query'",
                target
            ),
            ConvertError::InvalidBaseUrl(url) => write!(
                f,
                "Invalid base URL '{}'. It must be an absolute URL with a host",
                url
            ),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ConvertError {
    fn from(err: ValidationError) -> Self {
        ConvertError::Invalid(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConvertError::MissingMethod {
                item: Some("Get user".to_string())
            }
            .to_string(),
            "Method is not defined (item 'Get user')"
        );
        assert_eq!(
            ConvertError::MissingMethod { item: None }.to_string(),
            "Method is not defined"
        );
        assert_eq!(ConvertError::MissingHost.to_string(), "Host is not defined");
        assert_eq!(
            ConvertError::UnsupportedBodyMode("binary".to_string()).to_string(),
            "Body mode 'binary' is not supported"
        );
        assert!(ConvertError::UnsupportedTokenDestination("cookie".to_string())
            .to_string()
            .contains("'cookie'"));
    }

    #[test]
    fn test_from_validation_error() {
        let err: ConvertError = ValidationError::MissingSchema.into();
        assert_eq!(err, ConvertError::Invalid(ValidationError::MissingSchema));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Invalid collection:"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConvertError = json_err.into();
        assert!(matches!(err, ConvertError::Parse(_)));
    }
}
