//! Bearer token authentication implementation.
//!
//! This module formats Bearer token authentication headers according to
//! RFC 6750.

const BEARER_PREFIX: &str = "Bearer";

/// Formats a token into a Bearer authentication header value.
///
/// A literal `Bearer` prefix already present in the token is dropped, so the
/// scheme name is never doubled.
///
/// # Examples
///
/// ```
/// use postman2har::auth::bearer::bearer_token;
///
/// assert_eq!(bearer_token("abc123xyz"), "Bearer abc123xyz");
/// assert_eq!(bearer_token("Bearer abc123xyz"), "Bearer abc123xyz");
/// ```
pub fn bearer_token(token: &str) -> String {
    let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token).trim();
    format!("{} {}", BEARER_PREFIX, token)
}
