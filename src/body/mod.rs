//! Request body encoding.
//!
//! This module maps the body authoring modes of a collection request onto a
//! single HAR `postData` record: a media type, the serialized text and, for
//! form modes, the structured parameter list.

pub mod mime;

use crate::converter::ConvertError;
use crate::models::{
    FileSource, FormParam, GraphqlBody, PostData, PostParam, QueryParam, RequestBody, UrlEncoded,
};
use crate::variables::VariableParser;
use serde_json::{json, Map, Value};
use url::form_urlencoded;

/// Body authoring modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    Raw,
    UrlEncoded,
    FormData,
    File,
    GraphQl,
}

impl BodyMode {
    /// Parses a `mode` discriminant.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedBodyMode`] for unknown modes.
    pub fn parse(mode: &str) -> Result<Self, ConvertError> {
        match mode {
            "raw" => Ok(BodyMode::Raw),
            "urlencoded" => Ok(BodyMode::UrlEncoded),
            "formdata" => Ok(BodyMode::FormData),
            "file" => Ok(BodyMode::File),
            "graphql" => Ok(BodyMode::GraphQl),
            other => Err(ConvertError::UnsupportedBodyMode(other.to_string())),
        }
    }
}

/// Encodes a request body into HAR post data.
///
/// Returns `Ok(None)` for a body that declares no mode. Missing payload
/// fields encode as empty payloads of the declared mode.
///
/// # Arguments
///
/// * `body` - The body as authored in the collection
/// * `parser` - Template parser used for substituted fields
///
/// # Examples
///
/// ```
/// use postman2har::body::encode;
/// use postman2har::models::RequestBody;
/// use postman2har::variables::{EnvVariableParser, RandomSampler, Scope};
///
/// let scope = Scope::empty();
/// let sampler = RandomSampler::new();
/// let parser = EnvVariableParser::new(&scope, &sampler);
///
/// let body = RequestBody {
///     mode: Some("raw".to_string()),
///     raw: Some("hello".to_string()),
///     ..RequestBody::default()
/// };
///
/// let post_data = encode(&body, &parser).unwrap().unwrap();
/// assert_eq!(post_data.mime_type, "text/plain");
/// assert_eq!(post_data.text, "hello");
/// ```
pub fn encode(
    body: &RequestBody,
    parser: &dyn VariableParser,
) -> Result<Option<PostData>, ConvertError> {
    let mode = match body.mode.as_deref() {
        Some(mode) => BodyMode::parse(mode)?,
        None => return Ok(None),
    };

    let mut post_data = match mode {
        BodyMode::Raw => encode_raw(body, parser),
        BodyMode::UrlEncoded => encode_urlencoded(body.urlencoded.as_ref(), parser),
        BodyMode::FormData => encode_formdata(body.formdata.as_deref().unwrap_or_default(), parser),
        BodyMode::File => encode_file(body.file.as_ref()),
        BodyMode::GraphQl => encode_graphql(body.graphql.as_ref(), parser),
    };

    post_data.comment = body
        .description
        .as_ref()
        .map(|description| description.text().to_string());

    Ok(Some(post_data))
}

fn encode_raw(body: &RequestBody, parser: &dyn VariableParser) -> PostData {
    let text = body
        .raw
        .as_deref()
        .map(|raw| parser.parse(raw))
        .unwrap_or_default();
    PostData::new(mime::raw_mime_type(body.raw_language()), text)
}

fn encode_urlencoded(urlencoded: Option<&UrlEncoded>, parser: &dyn VariableParser) -> PostData {
    match urlencoded {
        Some(UrlEncoded::Params(params)) => {
            let params: Vec<PostParam> = params
                .iter()
                .filter(|param| !param.disabled)
                .map(|param| substituted_pair(param, parser))
                .collect();

            let text = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter().map(|param| (&param.name, &param.value)))
                .finish();

            PostData::new(mime::FORM_URLENCODED, text).with_params(params)
        }
        Some(UrlEncoded::Encoded(text)) => {
            let params = form_urlencoded::parse(text.as_bytes())
                .map(|(name, value)| PostParam::new(name, value))
                .collect();
            PostData::new(mime::FORM_URLENCODED, text.clone()).with_params(params)
        }
        None => PostData::new(mime::FORM_URLENCODED, "").with_params(Vec::new()),
    }
}

fn substituted_pair(param: &QueryParam, parser: &dyn VariableParser) -> PostParam {
    PostParam::new(
        parser.parse(param.key.as_deref().unwrap_or_default()),
        parser.parse(param.value.as_deref().unwrap_or_default()),
    )
}

fn encode_formdata(entries: &[FormParam], parser: &dyn VariableParser) -> PostData {
    let params = entries
        .iter()
        .filter(|entry| !entry.disabled)
        .map(|entry| form_param(entry, parser))
        .collect();
    PostData::new(mime::MULTIPART_FORM_DATA, "").with_params(params)
}

fn form_param(entry: &FormParam, parser: &dyn VariableParser) -> PostParam {
    let mut param = PostParam::new(
        entry.key.clone().unwrap_or_default(),
        parser.parse(entry.value.as_deref().unwrap_or_default()),
    );

    let source = entry.src.as_ref().and_then(|src| src.primary());
    param.file_name = source.and_then(mime::file_name);
    param.content_type = entry
        .content_type
        .clone()
        .filter(|content_type| !content_type.is_empty())
        .or_else(|| source.and_then(mime::guess_content_type));

    param
}

fn encode_file(file: Option<&FileSource>) -> PostData {
    let text = match file {
        Some(FileSource::Path(path)) => path.clone(),
        Some(FileSource::Details { src, content }) => content
            .clone()
            .or_else(|| src.clone())
            .unwrap_or_default(),
        None => String::new(),
    };
    PostData::new(mime::APPLICATION_OCTET_STREAM, text)
}

fn encode_graphql(graphql: Option<&GraphqlBody>, parser: &dyn VariableParser) -> PostData {
    let query = graphql
        .and_then(|graphql| graphql.query.clone())
        .unwrap_or_default();
    let variables = graphql
        .and_then(|graphql| graphql.variables.as_ref())
        .map(|variables| graphql_variables(variables, parser))
        .unwrap_or_else(|| Value::Object(Map::new()));

    let text = json!({ "query": query, "variables": variables }).to_string();
    PostData::new(mime::APPLICATION_JSON, text)
}

/// Substitutes GraphQL variables given as JSON text or as a JSON value.
///
/// Text that is not valid JSON after substitution is kept as a string.
fn graphql_variables(variables: &Value, parser: &dyn VariableParser) -> Value {
    match variables {
        Value::String(text) if text.trim().is_empty() => Value::Object(Map::new()),
        Value::String(text) => {
            let substituted = parser.parse(text);
            serde_json::from_str(&substituted).unwrap_or(Value::String(substituted))
        }
        Value::Null => Value::Object(Map::new()),
        other => substitute_value(other, parser),
    }
}

/// Substitutes every string nested in `value`.
fn substitute_value(value: &Value, parser: &dyn VariableParser) -> Value {
    match value {
        Value::String(text) => Value::String(parser.parse(text)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| substitute_value(item, parser))
                .collect(),
        ),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), substitute_value(item, parser)))
                .collect(),
        ),
        other => other.clone(),
    }
}
