//! API key authentication.

use super::TokenDestination;
use crate::models::HarRequest;

/// Places `key: value` on the request, replacing existing entries named
/// `key` (case-insensitive) in the chosen destination.
pub fn apply(request: &mut HarRequest, key: &str, value: &str, destination: TokenDestination) {
    if key.is_empty() {
        log::warn!("apikey auth without a key name; request left unchanged");
        return;
    }

    match destination {
        TokenDestination::Header => {
            request.remove_header(key);
            request.add_header(key, value);
        }
        TokenDestination::Query => {
            request.remove_query_param(key);
            request.add_query_param(key, value);
        }
    }
}
