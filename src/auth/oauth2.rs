//! OAuth 2.0 access token injection.
//!
//! Only the token obtained beforehand is injected; no grant flow is run.
//! MAC tokens are left alone since they need request signing.

use super::{TokenDestination, AUTHORIZATION};
use crate::models::HarRequest;

/// Query parameter carrying the token when sent in the query string.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Header prefix used when none is configured.
pub const DEFAULT_HEADER_PREFIX: &str = "Bearer ";

/// Applies an access token to `request`.
///
/// Does nothing without a token or for `mac` tokens. Otherwise removes any
/// existing `Authorization` header and `access_token` query entry before
/// adding the token to `destination`.
pub fn apply(
    request: &mut HarRequest,
    access_token: Option<&str>,
    token_type: Option<&str>,
    header_prefix: Option<&str>,
    destination: TokenDestination,
) {
    let token = match access_token.filter(|token| !token.is_empty()) {
        Some(token) => token,
        None => return,
    };
    if token_type == Some("mac") {
        log::debug!("skipping MAC access token for {}", request.url);
        return;
    }

    request.remove_header(AUTHORIZATION);
    request.remove_query_param(ACCESS_TOKEN_PARAM);

    match destination {
        TokenDestination::Query => request.add_query_param(ACCESS_TOKEN_PARAM, token),
        TokenDestination::Header => {
            let prefix = header_prefix
                .filter(|prefix| !prefix.is_empty())
                .unwrap_or(DEFAULT_HEADER_PREFIX);
            request.add_header(AUTHORIZATION, format!("{} {}", prefix.trim(), token));
        }
    }
}
