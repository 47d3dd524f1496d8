//! Query string extraction from a resolved URL.

use crate::models::HarQueryParam;
use url::form_urlencoded;

/// Parses the query component of `url` into HAR query parameters.
///
/// Pairs keep their order and repeated names are kept as separate
/// entries. The fragment is ignored.
///
/// # Examples
///
/// ```
/// use postman2har::converter::query::query_string;
///
/// let params = query_string("https://example.com/?a=1&b=x%20y#top");
/// assert_eq!(params.len(), 2);
/// assert_eq!(params[1].value, "x y");
/// ```
pub fn query_string(url: &str) -> Vec<HarQueryParam> {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let query = match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None => return Vec::new(),
    };

    form_urlencoded::parse(query.as_bytes())
        .map(|(name, value)| HarQueryParam {
            name: name.into_owned(),
            value: value.into_owned(),
        })
        .collect()
}
