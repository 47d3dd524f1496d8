//! Postman collection to HAR converter
//!
//! This crate converts a Postman collection (v2.0 / v2.1) into a flat list of
//! fully-resolved HAR request records, ready to be replayed by API testing
//! and tooling pipelines.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: Collection input structures and HAR output records
//! - **validator**: Schema and version checks run before conversion
//! - **variables**: Scoped variable lookup and template substitution
//! - **url_builder**: Request URL assembly and normalization
//! - **auth**: Credential injection for the supported auth schemes
//! - **body**: Request body encoding for every body mode
//! - **converter**: Tree traversal producing the HAR requests
//! - **config**: Conversion options
//! - **environment**: Environment files feeding the conversion options
//!
//! # Conversion
//!
//! Conversion walks the collection depth-first:
//! 1. The collection is validated (schema tag and version)
//! 2. Every folder pushes its variables onto the scope chain
//! 3. Every request gets its URL built and normalized
//! 4. Headers, query string and body are resolved against the scope
//! 5. The effective auth (own or inherited) is injected last
//!
//! Unresolved `{{name}}` and `:name` references are replaced with
//! synthesized sample values, so the output never carries template markers.
//!
//! # Usage
//!
//! ```
//! use postman2har::{convert_str, ConvertOptions};
//!
//! let json = r#"{
//!     "info": {
//!         "name": "Users",
//!         "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
//!     },
//!     "variable": [{ "key": "id", "value": "42" }],
//!     "item": [{
//!         "name": "Get user",
//!         "request": {
//!             "method": "GET",
//!             "url": {
//!                 "protocol": "https",
//!                 "host": ["api", "example", "com"],
//!                 "path": ["users", ":id"],
//!                 "query": [{ "key": "limit", "value": "10" }]
//!             }
//!         }
//!     }]
//! }"#;
//!
//! let requests = convert_str(json, &ConvertOptions::default()).unwrap();
//! assert_eq!(requests[0].url, "https://api.example.com/users/42?limit=10");
//! assert_eq!(requests[0].query_string[0].name, "limit");
//! ```

pub mod auth;
pub mod body;
pub mod config;
pub mod converter;
pub mod environment;
pub mod models;
pub mod url_builder;
pub mod validator;
pub mod variables;

pub use config::ConvertOptions;
pub use converter::{ConvertError, Converter, DefaultConverter};
pub use models::{Collection, HarRequest};
pub use validator::{DefaultValidator, ValidationError, Validator};

/// Converts a parsed collection with the default validator.
///
/// # Arguments
///
/// * `collection` - The collection to convert
/// * `options` - Conversion options
///
/// # Returns
///
/// The HAR requests in document order, or the first error encountered.
pub fn convert(
    collection: &Collection,
    options: &ConvertOptions,
) -> Result<Vec<HarRequest>, ConvertError> {
    DefaultConverter::new(options.clone()).convert(collection)
}

/// Parses a collection from JSON text and converts it.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] for malformed JSON, or any error of
/// [`convert`].
pub fn convert_str(json: &str, options: &ConvertOptions) -> Result<Vec<HarRequest>, ConvertError> {
    let collection = Collection::from_json(json)?;
    convert(&collection, options)
}
