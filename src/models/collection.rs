//! Collection tree data models.
//!
//! This module defines the input document: the collection root, its folders
//! (item groups), leaf items and the variables scoped at every level.

use super::request::{Request, RequestAuth, RequestUrl};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Marker stored by some exporters in place of a real variable value.
///
/// A variable carrying it is treated exactly like one without a value.
pub const UNRESOLVED_SENTINEL: &str = "schema type not provided";

/// Root document of a Postman collection.
///
/// The collection behaves like a top-level folder: it owns the item tree,
/// the outermost variable list and an optional auth descriptor inherited by
/// every request that declares none.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    /// Metadata section carrying the schema tag and version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    /// Top-level folders and requests in document order.
    #[serde(default)]
    pub item: Vec<Node>,

    /// Collection-level variables.
    #[serde(default)]
    pub variable: Vec<Variable>,

    /// Collection-level auth, inherited by requests without their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<RequestAuth>,
}

impl Collection {
    /// Parses a collection from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The `info` section of a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    /// Schema URL identifying the collection format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Human readable collection name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional semantic version of the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

/// Collection version, either a plain string or a structured triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Version {
    /// Version given as text, e.g. `"2.1.0"`.
    Text(String),
    /// Version given as separate components.
    Parts {
        major: u64,
        minor: u64,
        patch: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        identifier: Option<String>,
    },
}

impl Version {
    /// Renders the version as `major.minor.patch[-identifier]` text.
    pub fn to_text(&self) -> String {
        match self {
            Version::Text(text) => text.clone(),
            Version::Parts {
                major,
                minor,
                patch,
                identifier,
            } => match identifier.as_deref().filter(|id| !id.is_empty()) {
                Some(id) => format!("{}.{}.{}-{}", major, minor, patch, id),
                None => format!("{}.{}.{}", major, minor, patch),
            },
        }
    }
}

/// A node of the collection tree.
///
/// A node is a group exactly when it carries an `item` array; everything
/// else is a leaf. The distinction is made once, at parse time, and a
/// malformed group or leaf is an error rather than a fallback to the other
/// shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A folder with nested children.
    Group(ItemGroup),
    /// A leaf item, usually carrying a request.
    Leaf(Item),
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let object = value
            .as_object()
            .ok_or_else(|| D::Error::custom("collection item must be an object"))?;

        let is_group = object.get("item").map_or(false, Value::is_array);
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        let node = if is_group {
            serde_json::from_value(value).map(Node::Group)
        } else {
            serde_json::from_value(value).map(Node::Leaf)
        };

        node.map_err(|err| match name {
            Some(name) => D::Error::custom(format!("in item '{}': {}", name, err)),
            None => D::Error::custom(err),
        })
    }
}

/// A folder grouping items and nested folders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Children in traversal and output order.
    pub item: Vec<Node>,

    /// Variables visible to every descendant of this folder.
    #[serde(default)]
    pub variable: Vec<Variable>,

    /// Folder auth, inherited by descendants without their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<RequestAuth>,
}

/// A leaf node of the collection tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The request described by this item, if any.
    ///
    /// A bare string is accepted as the URL of a `GET` request.
    #[serde(
        default,
        deserialize_with = "deserialize_request",
        skip_serializing_if = "Option::is_none"
    )]
    pub request: Option<Request>,

    /// Variables visible only to this item's request.
    #[serde(default)]
    pub variable: Vec<Variable>,
}

/// A named template variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Any JSON scalar; absent or `null` means unresolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Declared kind used to synthesize a value when unresolved.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl Variable {
    /// Creates a variable with a string value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(Value::String(value.into())),
            kind: None,
            disabled: false,
        }
    }

    /// Creates a variable without a value but with a declared type.
    pub fn typed(key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: None,
            kind: Some(kind.into()),
            disabled: false,
        }
    }

    /// Returns the value as text, or `None` when the variable is unresolved.
    ///
    /// A missing value, JSON `null` and the exporter sentinel all count as
    /// unresolved.
    pub fn resolved_value(&self) -> Option<Cow<'_, str>> {
        let text = value_text(self.value.as_ref()?)?;
        if text == UNRESOLVED_SENTINEL {
            None
        } else {
            Some(text)
        }
    }
}

/// Free-form description, either plain text or a content object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Content {
        content: String,
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
}

impl Description {
    /// Returns the description text.
    pub fn text(&self) -> &str {
        match self {
            Description::Text(text) => text,
            Description::Content { content, .. } => content,
        }
    }
}

fn deserialize_request<'de, D>(deserializer: D) -> Result<Option<Request>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(url) => Ok(Some(Request {
            method: Some("GET".to_string()),
            url: Some(RequestUrl::Raw(url)),
            ..Request::default()
        })),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(D::Error::custom),
    }
}

/// Renders a JSON value as the text a template would see.
///
/// Strings are borrowed verbatim, other scalars use their JSON text and
/// `null` yields `None`.
pub(crate) fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

pub(crate) fn is_false(flag: &bool) -> bool {
    !*flag
}
