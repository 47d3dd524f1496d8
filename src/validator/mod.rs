//! Collection validation.
//!
//! Only the document envelope is checked: the `info` section must exist,
//! its schema tag must name a supported collection format and a declared
//! version must not be older than the minimum supported one. Request shapes
//! are checked later, while converting.

use crate::models::Collection;
use semver::Version;
use std::fmt;

/// Schema URLs accepted by the converter.
pub const ALLOWED_SCHEMAS: &[&str] = &[
    "https://schema.getpostman.com/json/collection/v2.0.0/collection.json",
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json",
];

/// Oldest collection version accepted.
pub const MIN_ALLOWED_VERSION: Version = Version::new(2, 0, 0);

/// Errors raised for documents the converter refuses to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The `info` section is missing.
    MissingInfo,
    /// The `info.schema` tag is missing.
    MissingSchema,
    /// The schema tag names an unsupported format.
    UnsupportedSchema(String),
    /// The declared version is older than supported or not a version.
    UnsupportedVersion(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingInfo => {
                write!(f, "\"info\" section is missed in the collection")
            }
            ValidationError::MissingSchema => {
                write!(f, "\"info.schema\" is not defined in the collection")
            }
            ValidationError::UnsupportedSchema(schema) => write!(
                f,
                "Unsupported collection schema '{}'. Only Postman v2.0.0 and v2.1.0 collections are supported; convert older collections to v2 and try again",
                schema
            ),
            ValidationError::UnsupportedVersion(version) => write!(
                f,
                "Unsupported collection version '{}'. Postman v1 collections are not supported; convert it to v2 and try again",
                version
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks a collection before conversion.
pub trait Validator {
    fn verify(&self, collection: &Collection) -> Result<(), ValidationError>;
}

/// Validator enforcing [`ALLOWED_SCHEMAS`] and [`MIN_ALLOWED_VERSION`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValidator;

impl Validator for DefaultValidator {
    fn verify(&self, collection: &Collection) -> Result<(), ValidationError> {
        let info = collection
            .info
            .as_ref()
            .ok_or(ValidationError::MissingInfo)?;

        if let Some(version) = &info.version {
            let text = version.to_text();
            if !is_supported_version(&text) {
                return Err(ValidationError::UnsupportedVersion(text));
            }
        }

        let schema = info
            .schema
            .as_deref()
            .map(str::trim)
            .filter(|schema| !schema.is_empty())
            .ok_or(ValidationError::MissingSchema)?;

        if !ALLOWED_SCHEMAS.contains(&schema) {
            return Err(ValidationError::UnsupportedSchema(schema.to_string()));
        }

        Ok(())
    }
}

/// Checks `version` against [`MIN_ALLOWED_VERSION`].
///
/// The version must be valid semver. A prerelease of the minimum version
/// sorts before it.
fn is_supported_version(version: &str) -> bool {
    match Version::parse(version.trim()) {
        Ok(version) => version >= MIN_ALLOWED_VERSION,
        Err(err) => {
            log::debug!("rejecting collection version {:?}: {}", version, err);
            false
        }
    }
}
