//! Request data models.
//!
//! This module defines the request payload of a collection item: method,
//! URL (plain or structured), headers, body and auth descriptors.

use super::collection::{is_false, value_text, Description, Variable};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashMap;

/// A request as authored in the collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method; absence is reported when the request is converted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<RequestUrl>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Headers>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<RequestAuth>,
}

/// Request URL, either raw text or its structured decomposition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestUrl {
    Raw(String),
    Structured(Url),
}

impl From<&str> for RequestUrl {
    fn from(url: &str) -> Self {
        RequestUrl::Raw(url.to_string())
    }
}

/// Structured URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Url {
    /// Original URL text as written by the author. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Host>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<UrlPath>,

    /// Port, accepted as a string or a number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Value>,

    #[serde(default)]
    pub query: Vec<QueryParam>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Inline basic credentials rendered as `user[:password]@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<UrlAuth>,

    /// Variables scoped to this URL only.
    #[serde(default)]
    pub variable: Vec<Variable>,
}

impl Url {
    /// Returns the port as text, if any.
    pub fn port_text(&self) -> Option<Cow<'_, str>> {
        self.port
            .as_ref()
            .and_then(value_text)
            .filter(|port| !port.is_empty())
    }
}

/// Host as a single name or as a list of labels joined by `.`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Host {
    Name(String),
    Labels(Vec<String>),
}

/// Path as a single string or as a list of segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlPath {
    Text(String),
    Segments(Vec<PathSegment>),
}

/// A single path segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Text(String),
    Object {
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
}

impl PathSegment {
    /// Returns the raw segment text, possibly a `:name` placeholder.
    pub fn text(&self) -> &str {
        match self {
            PathSegment::Text(text) => text,
            PathSegment::Object { value, .. } => value.as_deref().unwrap_or_default(),
        }
    }
}

/// A query parameter of a structured URL or an urlencoded body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl QueryParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            disabled: false,
        }
    }
}

/// Inline URL credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAuth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Request headers, either as pairs or as a newline-separated block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Headers {
    List(Vec<Header>),
    Text(String),
}

/// A single header pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// Request body as authored; `mode` selects which payload field applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urlencoded: Option<UrlEncoded>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formdata: Option<Vec<FormParam>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphql: Option<GraphqlBody>,

    /// Mode-specific options, e.g. `{"raw": {"language": "json"}}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, BodyOptions>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
}

impl RequestBody {
    /// Returns the declared language of a raw body, if any.
    pub fn raw_language(&self) -> Option<&str> {
        self.options
            .as_ref()?
            .get("raw")?
            .language
            .as_deref()
    }
}

/// Per-mode body options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Urlencoded payload, structured or already encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlEncoded {
    Params(Vec<QueryParam>),
    Encoded(String),
}

/// A multipart form entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// `text` or `file`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(
        default,
        rename = "contentType",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_type: Option<String>,

    /// Source path(s) of a file entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<FileSrc>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

/// File source path, single or multiple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileSrc {
    Single(String),
    Multiple(Vec<String>),
}

impl FileSrc {
    /// Returns the path that names the uploaded file: the single path, or
    /// the last one of a list.
    pub fn primary(&self) -> Option<&str> {
        match self {
            FileSrc::Single(path) => Some(path.as_str()),
            FileSrc::Multiple(paths) => paths.last().map(String::as_str),
        }
    }
}

/// Binary body source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileSource {
    Path(String),
    Details {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
}

/// GraphQL payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphqlBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Variables as a JSON object or as JSON text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

/// Auth descriptor: `{ "type": "bearer", "bearer": [ ... ] }`.
///
/// Parameters live under a key equal to the type name, as a key/value list
/// or, in older exports, as a plain object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestAuth {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl RequestAuth {
    /// Creates a descriptor with a key/value parameter list.
    pub fn new(kind: impl Into<String>, params: Vec<Variable>) -> Self {
        let kind = kind.into();
        let mut map = Map::new();
        let list = params
            .into_iter()
            .map(|param| serde_json::to_value(param).unwrap_or(Value::Null))
            .collect();
        map.insert(kind.clone(), Value::Array(list));
        Self { kind, params: map }
    }

    /// Returns the parameters declared for the current type.
    ///
    /// `None` when no parameter list exists under the type key.
    pub fn parameters(&self) -> Option<Vec<(String, String)>> {
        match self.params.get(&self.kind)? {
            Value::Array(entries) => Some(
                entries
                    .iter()
                    .filter_map(|entry| {
                        let key = entry.get("key")?.as_str()?;
                        let value = entry.get("value").and_then(value_text)?;
                        Some((key.to_string(), value.into_owned()))
                    })
                    .collect(),
            ),
            Value::Object(entries) => Some(
                entries
                    .iter()
                    .filter_map(|(key, value)| {
                        value_text(value).map(|value| (key.clone(), value.into_owned()))
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}
