//! Configuration for conversions.
//!
//! This module provides loading and validation of [`ConvertOptions`] from a
//! JSON value, merged with defaults.

pub mod schema;

pub use schema::ConvertOptions;

use crate::converter::ConvertError;
use serde_json::Value;

/// Loads conversion options from a JSON value.
///
/// Unknown fields are ignored. Options that cannot be deserialized are
/// reported with a warning and replaced by the defaults.
///
/// # Arguments
///
/// * `options_json` - Optional JSON object with camelCase option names
///
/// # Returns
///
/// `Ok(ConvertOptions)` with the loaded options, or `Err` if validation fails.
///
/// # Example
///
/// ```
/// use postman2har::config::load_options;
/// use serde_json::json;
///
/// let options = load_options(Some(json!({
///     "environments": { "host": "example.com" },
///     "seed": 1
/// })))
/// .unwrap();
///
/// assert_eq!(options.seed, Some(1));
/// ```
pub fn load_options(options_json: Option<Value>) -> Result<ConvertOptions, ConvertError> {
    let options = match options_json {
        Some(value) => match serde_json::from_value::<ConvertOptions>(value) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("Failed to parse conversion options: {}. Using defaults.", e);
                ConvertOptions::default()
            }
        },
        None => ConvertOptions::default(),
    };

    options.validate()?;
    Ok(options)
}
