//! Media type helpers for request bodies.

use std::path::Path;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";
pub const APPLICATION_XML: &str = "application/xml";
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub const TEXT_HTML: &str = "text/html";
pub const TEXT_PLAIN: &str = "text/plain";

/// Maps the declared language of a raw body to its media type.
///
/// Unknown or missing languages are sent as plain text.
///
/// # Examples
///
/// ```
/// use postman2har::body::mime::raw_mime_type;
///
/// assert_eq!(raw_mime_type(Some("json")), "application/json");
/// assert_eq!(raw_mime_type(Some("graphql")), "text/plain");
/// assert_eq!(raw_mime_type(None), "text/plain");
/// ```
pub fn raw_mime_type(language: Option<&str>) -> &'static str {
    match language.map(str::trim) {
        Some("json") => APPLICATION_JSON,
        Some("javascript") | Some("js") => APPLICATION_JAVASCRIPT,
        Some("html") => TEXT_HTML,
        Some("xml") => APPLICATION_XML,
        _ => TEXT_PLAIN,
    }
}

/// Returns the final component of a source path, accepting both `/` and
/// `\` separators.
pub fn file_name(path: &str) -> Option<String> {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Infers a media type from the extension of `path`.
pub fn guess_content_type(path: &str) -> Option<String> {
    mime_guess::from_path(Path::new(path))
        .first()
        .map(|mime| mime.essence_str().to_string())
}
