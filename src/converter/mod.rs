//! Collection to HAR conversion.
//!
//! This module walks the collection tree depth-first, accumulating variable
//! scopes and inherited auth on the way down, and converts every leaf
//! request into a [`HarRequest`]. Output order is document order.

pub mod error;
pub mod headers;
pub mod query;

pub use error::ConvertError;

use crate::auth;
use crate::body;
use crate::config::ConvertOptions;
use crate::models::{Collection, HarRequest, Item, Node, Request, RequestAuth, Variable};
use crate::url_builder::UrlBuilder;
use crate::validator::{DefaultValidator, Validator};
use crate::variables::{DefaultVariableParserFactory, RandomSampler, Scope, VariableParserFactory};
use std::collections::HashMap;

/// Converts a collection into HAR requests.
pub trait Converter {
    fn convert(&self, collection: &Collection) -> Result<Vec<HarRequest>, ConvertError>;
}

/// Converter validating with `V` before traversal.
///
/// # Examples
///
/// ```
/// use postman2har::config::ConvertOptions;
/// use postman2har::converter::{Converter, DefaultConverter};
/// use postman2har::models::Collection;
///
/// let collection = Collection::from_json(r#"{
///     "info": {
///         "name": "Demo",
///         "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
///     },
///     "item": [{ "name": "Ping", "request": { "method": "get", "url": "https://example.com/ping" } }]
/// }"#).unwrap();
///
/// let requests = DefaultConverter::new(ConvertOptions::default()).convert(&collection).unwrap();
/// assert_eq!(requests[0].method, "GET");
/// assert_eq!(requests[0].url, "https://example.com/ping");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultConverter<V = DefaultValidator> {
    validator: V,
    options: ConvertOptions,
}

impl DefaultConverter<DefaultValidator> {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            validator: DefaultValidator,
            options,
        }
    }
}

impl<V: Validator> DefaultConverter<V> {
    /// Creates a converter using a custom validator.
    pub fn with_validator(validator: V, options: ConvertOptions) -> Self {
        Self { validator, options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }
}

impl<V: Validator> Converter for DefaultConverter<V> {
    fn convert(&self, collection: &Collection) -> Result<Vec<HarRequest>, ConvertError> {
        self.validator.verify(collection)?;
        let base_url = self.options.parsed_base_url()?;

        let sampler = RandomSampler::from_option(self.options.seed);
        let factory = DefaultVariableParserFactory::new(&sampler);
        let traversal = Traversal {
            factory: &factory,
            urls: UrlBuilder::new(&factory).with_base_url(base_url.as_ref()),
        };

        let environment = environment_variables(&self.options.environments);
        let collection_scope = Scope::root(&collection.variable);
        let scope = collection_scope.nest(&environment);

        let mut requests = Vec::new();
        traversal.visit(
            &collection.item,
            &scope,
            collection.auth.as_ref(),
            &mut requests,
        )?;

        log::debug!(
            "converted {} requests from collection {:?}",
            requests.len(),
            collection.info.as_ref().and_then(|info| info.name.as_deref())
        );
        Ok(requests)
    }
}

/// Turns the environment map into variables, ordered by key.
fn environment_variables(environments: &HashMap<String, String>) -> Vec<Variable> {
    let mut variables: Vec<Variable> = environments
        .iter()
        .map(|(key, value)| Variable::new(key.as_str(), value.as_str()))
        .collect();
    variables.sort_by(|a, b| a.key.cmp(&b.key));
    variables
}

/// Per-conversion traversal state.
struct Traversal<'a> {
    factory: &'a dyn VariableParserFactory,
    urls: UrlBuilder<'a>,
}

impl Traversal<'_> {
    fn visit(
        &self,
        nodes: &[Node],
        scope: &Scope<'_>,
        inherited_auth: Option<&RequestAuth>,
        requests: &mut Vec<HarRequest>,
    ) -> Result<(), ConvertError> {
        for node in nodes {
            match node {
                Node::Group(group) => {
                    log::trace!("entering folder {:?}", group.name);
                    let scope = scope.nest(&group.variable);
                    let auth = group.auth.as_ref().or(inherited_auth);
                    self.visit(&group.item, &scope, auth, requests)?;
                }
                Node::Leaf(item) => {
                    if let Some(request) = &item.request {
                        let scope = scope.nest(&item.variable);
                        requests.push(self.convert_request(item, request, &scope, inherited_auth)?);
                    }
                }
            }
        }
        Ok(())
    }

    fn convert_request(
        &self,
        item: &Item,
        request: &Request,
        scope: &Scope<'_>,
        inherited_auth: Option<&RequestAuth>,
    ) -> Result<HarRequest, ConvertError> {
        let method = request
            .method
            .as_deref()
            .map(str::trim)
            .filter(|method| !method.is_empty())
            .ok_or_else(|| ConvertError::MissingMethod {
                item: item.name.clone(),
            })?
            .to_uppercase();

        let url = request.url.as_ref().ok_or_else(|| ConvertError::MissingUrl {
            item: item.name.clone(),
        })?;
        let url = self.urls.build(url, scope)?;

        let parser = self.factory.create_env_parser(scope);

        let mut har = HarRequest::new(method, url);
        har.headers = headers::convert_headers(request.header.as_ref(), parser.as_ref());
        har.query_string = query::query_string(&har.url);
        har.post_data = match &request.body {
            Some(body) => body::encode(body, parser.as_ref())?,
            None => None,
        };

        if let Some(auth) = request.auth.as_ref().or(inherited_auth) {
            auth::inject(&mut har, auth, parser.as_ref())?;
        }

        log::debug!("converted {:?}: {} {}", item.name, har.method, har.url);
        Ok(har)
    }
}
