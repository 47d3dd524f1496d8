//! HAR request records.
//!
//! This module defines the output of a conversion: one HAR-style request
//! record per leaf request of the collection.

use serde::{Deserialize, Serialize};

/// HTTP version reported on every record.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Sentinel used for `headersSize` and `bodySize`: the size is unknown.
pub const UNKNOWN_SIZE: i64 = -1;

/// A fully-resolved HAR request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarRequest {
    /// Absolute, normalized request URL.
    pub url: String,

    /// Uppercased HTTP method.
    pub method: String,

    pub headers: Vec<HarHeader>,

    /// Query parameters parsed from `url`.
    pub query_string: Vec<HarQueryParam>,

    /// Always empty; collections carry no cookie jar.
    pub cookies: Vec<HarCookie>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<PostData>,

    pub headers_size: i64,

    pub body_size: i64,

    pub http_version: String,
}

impl HarRequest {
    /// Creates a record with no headers, query parameters or body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            headers: Vec::new(),
            query_string: Vec::new(),
            cookies: Vec::new(),
            post_data: None,
            headers_size: UNKNOWN_SIZE,
            body_size: UNKNOWN_SIZE,
            http_version: HTTP_VERSION.to_string(),
        }
    }

    /// Appends a header.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push(HarHeader::new(name, value));
    }

    /// Removes every header whose name matches `name` case-insensitively.
    pub fn remove_header(&mut self, name: &str) {
        self.headers
            .retain(|header| !header.name.eq_ignore_ascii_case(name));
    }

    /// Gets the first header value matching `name` case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
            .map(|header| header.value.as_str())
    }

    /// Appends a query parameter.
    pub fn add_query_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.query_string.push(HarQueryParam {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Removes every query parameter whose name matches `name`
    /// case-insensitively.
    pub fn remove_query_param(&mut self, name: &str) {
        self.query_string
            .retain(|param| !param.name.eq_ignore_ascii_case(name));
    }
}

/// A request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarHeader {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl HarHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comment: None,
        }
    }
}

/// A query string parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarQueryParam {
    pub name: String,
    pub value: String,
}

/// A cookie. Never produced, present for format completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarCookie {
    pub name: String,
    pub value: String,
}

/// Encoded request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub mime_type: String,

    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<PostParam>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PostData {
    pub fn new(mime_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            text: text.into(),
            params: None,
            comment: None,
        }
    }

    pub fn with_params(mut self, params: Vec<PostParam>) -> Self {
        self.params = Some(params);
        self
    }
}

/// A form or urlencoded body parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostParam {
    pub name: String,

    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl PostParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            file_name: None,
            content_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_har_request_new_defaults() {
        let request = HarRequest::new("GET", "https://example.com");
        assert_eq!(request.headers_size, -1);
        assert_eq!(request.body_size, -1);
        assert_eq!(request.http_version, "HTTP/1.1");
        assert!(request.cookies.is_empty());
        assert!(request.post_data.is_none());
    }

    #[test]
    fn test_remove_header_case_insensitive() {
        let mut request = HarRequest::new("GET", "https://example.com");
        request.add_header("authorization", "Basic old");
        request.add_header("Accept", "*/*");
        request.add_header("AUTHORIZATION", "Bearer older");

        request.remove_header("Authorization");

        assert_eq!(request.headers, vec![HarHeader::new("Accept", "*/*")]);
        assert_eq!(request.header("accept"), Some("*/*"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn test_remove_query_param_case_insensitive() {
        let mut request = HarRequest::new("GET", "https://example.com");
        request.add_query_param("Access_Token", "a");
        request.add_query_param("page", "1");

        request.remove_query_param("access_token");

        assert_eq!(request.query_string.len(), 1);
        assert_eq!(request.query_string[0].name, "page");
    }

    #[test]
    fn test_serialization_shape() {
        let mut request = HarRequest::new("POST", "https://example.com/a?b=1");
        request.add_query_param("b", "1");
        request.post_data = Some(
            PostData::new("application/x-www-form-urlencoded", "a=5")
                .with_params(vec![PostParam::new("a", "5")]),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://example.com/a?b=1",
                "method": "POST",
                "headers": [],
                "queryString": [{ "name": "b", "value": "1" }],
                "cookies": [],
                "postData": {
                    "mimeType": "application/x-www-form-urlencoded",
                    "text": "a=5",
                    "params": [{ "name": "a", "value": "5" }]
                },
                "headersSize": -1,
                "bodySize": -1,
                "httpVersion": "HTTP/1.1"
            })
        );
    }
}
