//! Request authentication module.
//!
//! This module injects credentials described by a collection auth
//! descriptor into a converted request. Supported schemes are API keys,
//! HTTP Basic, Bearer tokens and OAuth 2.0 access tokens. Option values are
//! resolved through the template substitution engine before use.

pub mod apikey;
pub mod basic;
pub mod bearer;
pub mod oauth2;

use crate::converter::ConvertError;
use crate::models::{HarRequest, RequestAuth};
use crate::variables::VariableParser;
use std::collections::HashMap;

/// Name of the header carrying credentials.
pub const AUTHORIZATION: &str = "Authorization";

/// Where a token is placed on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenDestination {
    /// Appended to the request headers.
    #[default]
    Header,
    /// Appended to the query string.
    Query,
}

impl TokenDestination {
    /// Parses a destination option; `None` selects the header.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedTokenDestination`] for anything
    /// other than `header` or `query`.
    pub fn parse(value: Option<&str>) -> Result<Self, ConvertError> {
        match value.map(str::trim) {
            None | Some("") | Some("header") => Ok(TokenDestination::Header),
            Some("query") => Ok(TokenDestination::Query),
            Some(other) => Err(ConvertError::UnsupportedTokenDestination(other.to_string())),
        }
    }
}

/// Authentication scheme resolved from an auth descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// API key sent as a named header or query parameter.
    ApiKey {
        key: String,
        value: String,
        destination: TokenDestination,
    },
    /// HTTP Basic authentication (RFC 7617)
    Basic { username: String, password: String },
    /// Bearer token authentication (RFC 6750)
    Bearer { token: String },
    /// OAuth 2.0 access token.
    OAuth2 {
        access_token: Option<String>,
        token_type: Option<String>,
        header_prefix: Option<String>,
        destination: TokenDestination,
    },
    /// Explicitly no authentication.
    NoAuth,
    /// A scheme the converter does not inject.
    Unsupported(String),
}

impl AuthScheme {
    /// Resolves the scheme of `auth`, substituting every option value.
    ///
    /// Returns `Ok(None)` when the descriptor has no parameter list for its
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedTokenDestination`] when a token
    /// destination option names neither `header` nor `query`.
    pub fn resolve(
        auth: &RequestAuth,
        parser: &dyn VariableParser,
    ) -> Result<Option<Self>, ConvertError> {
        let params = match auth.parameters() {
            Some(params) => params,
            None => return Ok(None),
        };

        let options: HashMap<String, String> = params
            .into_iter()
            .map(|(key, value)| {
                let value = parser.parse(&value);
                (key, value)
            })
            .collect();
        let option = |name: &str| options.get(name).cloned();

        let scheme = match auth.kind.as_str() {
            "apikey" => AuthScheme::ApiKey {
                key: option("key").unwrap_or_default(),
                value: option("value").unwrap_or_default(),
                destination: TokenDestination::parse(
                    options
                        .get("addTokenTo")
                        .or_else(|| options.get("in"))
                        .map(String::as_str),
                )?,
            },
            "basic" => AuthScheme::Basic {
                username: option("username").unwrap_or_default(),
                password: option("password").unwrap_or_default(),
            },
            "bearer" => AuthScheme::Bearer {
                token: option("token").unwrap_or_default(),
            },
            "oauth2" => AuthScheme::OAuth2 {
                access_token: option("accessToken"),
                token_type: option("tokenType"),
                header_prefix: option("headerPrefix"),
                destination: TokenDestination::parse(
                    options.get("addTokenTo").map(String::as_str),
                )?,
            },
            "noauth" => AuthScheme::NoAuth,
            other => AuthScheme::Unsupported(other.to_string()),
        };

        Ok(Some(scheme))
    }

    /// Applies the scheme to `request`.
    pub fn apply(&self, request: &mut HarRequest) {
        match self {
            AuthScheme::ApiKey {
                key,
                value,
                destination,
            } => apikey::apply(request, key, value, *destination),
            AuthScheme::Basic { username, password } => {
                update_auth_header(request, basic::basic_auth(username, password))
            }
            AuthScheme::Bearer { token } => {
                update_auth_header(request, bearer::bearer_token(token))
            }
            AuthScheme::OAuth2 {
                access_token,
                token_type,
                header_prefix,
                destination,
            } => oauth2::apply(
                request,
                access_token.as_deref(),
                token_type.as_deref(),
                header_prefix.as_deref(),
                *destination,
            ),
            AuthScheme::NoAuth => {}
            AuthScheme::Unsupported(kind) => {
                log::warn!("auth type '{}' is not supported; request left unchanged", kind)
            }
        }
    }
}

/// Injects the credentials described by `auth` into `request`.
///
/// # Arguments
///
/// * `request` - The converted request to mutate
/// * `auth` - The effective auth descriptor of the request
/// * `parser` - Template parser resolving option values
///
/// # Returns
///
/// `Ok(())` when the credentials were injected or nothing had to be done,
/// or a `ConvertError` for an invalid token destination.
///
/// # Examples
///
/// ```
/// use postman2har::auth::inject;
/// use postman2har::models::{HarRequest, RequestAuth, Variable};
/// use postman2har::variables::{EnvVariableParser, RandomSampler, Scope};
///
/// let scope = Scope::empty();
/// let sampler = RandomSampler::new();
/// let parser = EnvVariableParser::new(&scope, &sampler);
///
/// let auth = RequestAuth::new("bearer", vec![Variable::new("token", "Bearer abc")]);
/// let mut request = HarRequest::new("GET", "https://example.com");
/// inject(&mut request, &auth, &parser).unwrap();
///
/// assert_eq!(request.header("Authorization"), Some("Bearer abc"));
/// ```
pub fn inject(
    request: &mut HarRequest,
    auth: &RequestAuth,
    parser: &dyn VariableParser,
) -> Result<(), ConvertError> {
    if let Some(scheme) = AuthScheme::resolve(auth, parser)? {
        log::trace!("injecting '{}' auth into {}", auth.kind, request.url);
        scheme.apply(request);
    }
    Ok(())
}

/// Replaces every `Authorization` header with a single new one.
fn update_auth_header(request: &mut HarRequest, value: String) {
    request.remove_header(AUTHORIZATION);
    request.add_header(AUTHORIZATION, value);
}
