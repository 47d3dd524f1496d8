//! URL normalization.
//!
//! Turns an assembled URL string into its canonical form: a default
//! protocol is added when none is present, redundant slashes are collapsed,
//! the path is percent-encoded, the host is cleaned up and a bare root path
//! is dropped. Normalizing an already normalized URL returns it unchanged.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

/// Protocol assumed when a URL carries none.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Characters percent-encoded in paths.
const PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters percent-encoded in query strings.
const QUERY_SET: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>');

/// Characters percent-encoded in fragments.
const FRAGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Scheme used to parse the authority of a protocol-relative URL. It has no
/// default port, so an explicit port is always kept.
const PLACEHOLDER_SCHEME: &str = "authority";

/// Bytes whose escapes are kept when decoding a path.
const RESERVED: &[u8] = b";/?:@&=+$,#%";

static SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z][a-zA-Z\d+\-.]*)://").expect("Failed to compile scheme regex")
});

static RELATIVE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.*/").expect("Failed to compile relative path regex"));

static SLASH_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/{2,}").expect("Failed to compile slash regex"));

/// A scheme embedded in a path, e.g. `/redirect/https://...`.
static EMBEDDED_SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-z][a-z\d+\-.]{1,50}:$").expect("Failed to compile embedded scheme regex")
});

/// Normalizes a URL string.
///
/// # Examples
///
/// ```
/// use postman2har::url_builder::normalize_url;
///
/// assert_eq!(normalize_url("example.com//a//b/"), "https://example.com/a/b");
/// assert_eq!(normalize_url("https://example.com./"), "https://example.com");
/// assert_eq!(normalize_url("https://example.com/a b?q=1 2"), "https://example.com/a%20b?q=1%202");
/// ```
pub fn normalize_url(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    let text = if needs_default_protocol(input) {
        format!("{}://{}", DEFAULT_PROTOCOL, input)
    } else {
        input.to_string()
    };

    let (rest, fragment) = match text.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (text.as_str(), None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query)),
        None => (rest, None),
    };
    let fragment = fragment.filter(|fragment| !fragment.is_empty());
    let query = query.filter(|query| !query.is_empty());

    let (prefix, authority, path) = split_authority(rest);

    let mut output = prefix;
    let has_authority = authority.is_some();
    if let Some((scheme, authority)) = authority {
        output.push_str(&normalize_authority(authority, scheme.as_deref()));
    }

    let mut path = normalize_path(path);
    if has_authority && path.is_empty() {
        path.push('/');
    }
    if path == "/" && has_authority && query.is_none() && fragment.is_none() {
        path.clear();
    }
    output.push_str(&path);

    if let Some(query) = query {
        output.push('?');
        output.push_str(&utf8_percent_encode(query, QUERY_SET).to_string());
    }
    if let Some(fragment) = fragment {
        output.push('#');
        output.push_str(&utf8_percent_encode(fragment, FRAGMENT_SET).to_string());
    }

    output
}

/// Checks whether `url` lacks a scheme and is not relative.
fn needs_default_protocol(url: &str) -> bool {
    !SCHEME_REGEX.is_match(url) && !url.starts_with("//") && !RELATIVE_REGEX.is_match(url)
}

/// Splits the part before `?` into the serialized prefix, the authority and
/// the path.
///
/// The authority comes with its lowercased scheme, if any.
fn split_authority(rest: &str) -> (String, Option<(Option<String>, &str)>, &str) {
    let (prefix, scheme, after) = if let Some(caps) = SCHEME_REGEX.captures(rest) {
        let scheme = caps[1].to_ascii_lowercase();
        let end = caps.get(0).map_or(0, |m| m.end());
        (format!("{}://", scheme), Some(scheme), &rest[end..])
    } else if let Some(after) = rest.strip_prefix("//") {
        ("//".to_string(), None, after)
    } else {
        return (String::new(), None, rest);
    };

    let split = after.find('/').unwrap_or(after.len());
    let (authority, path) = after.split_at(split);
    (prefix, Some((scheme, authority)), path)
}

/// Lowercases the host, strips one trailing dot and drops the scheme's
/// default port.
///
/// The authority is parsed with [`url::Url`]; one that does not parse is
/// kept verbatim.
fn normalize_authority(authority: &str, scheme: Option<&str>) -> String {
    if authority.is_empty() {
        return String::new();
    }

    let probe = format!("{}://{}/", scheme.unwrap_or(PLACEHOLDER_SCHEME), authority);
    let parsed = match url::Url::parse(&probe) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::trace!("keeping unparsable authority {:?}: {}", authority, err);
            return authority.to_string();
        }
    };

    let mut output = String::with_capacity(authority.len());
    if !parsed.username().is_empty() || parsed.password().is_some() {
        output.push_str(parsed.username());
        if let Some(password) = parsed.password() {
            output.push(':');
            output.push_str(password);
        }
        output.push('@');
    }

    // Hosts of non-special schemes come back with their original case.
    let mut host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
    if host.len() > 1 && host.ends_with('.') {
        host.pop();
    }
    output.push_str(&host);

    if let Some(port) = parsed.port() {
        output.push(':');
        output.push_str(&port.to_string());
    }
    output
}

/// Collapses slash runs, strips one trailing slash and re-encodes the path.
fn normalize_path(path: &str) -> String {
    let mut path = collapse_slashes(path);
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }

    let decoded = match decode_path(&path) {
        Some(decoded) => decoded,
        None => {
            log::trace!("keeping undecodable path {:?}", path);
            path
        }
    };

    utf8_percent_encode(&decoded, PATH_SET).to_string()
}

/// Replaces every run of two or more slashes with one, unless the run
/// follows an embedded `scheme:`.
fn collapse_slashes(path: &str) -> String {
    let mut output = String::with_capacity(path.len());
    let mut last = 0;

    for run in SLASH_RUN_REGEX.find_iter(path) {
        output.push_str(&path[last..run.start()]);
        if EMBEDDED_SCHEME_REGEX.is_match(&path[..run.start()]) {
            output.push_str(run.as_str());
        } else {
            output.push('/');
        }
        last = run.end();
    }
    output.push_str(&path[last..]);
    output
}

/// Decodes percent escapes, keeping escapes of reserved characters.
///
/// Returns `None` for malformed escapes or when the decoded bytes are not
/// valid UTF-8.
fn decode_path(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        let byte = bytes[index];
        if byte != b'%' {
            output.push(byte);
            index += 1;
            continue;
        }

        let escape = bytes.get(index..index + 3)?;
        let hex = escape.get(1..)?;
        if !hex.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        let decoded = u8::from_str_radix(std::str::from_utf8(hex).ok()?, 16).ok()?;
        if RESERVED.contains(&decoded) {
            output.extend_from_slice(escape);
        } else {
            output.push(decoded);
        }
        index += 3;
    }

    String::from_utf8(output).ok()
}
