//! Variable parser factory.
//!
//! Converters never build parsers directly: they ask a factory for the
//! generic template parser or the path-segment parser over a given scope.
//! The default factory wires both to one shared [`Sampler`].

use super::path::PathVariableParser;
use super::sample::Sampler;
use super::substitution::EnvVariableParser;
use super::{Scope, VariableParser};

/// Produces the two parser specializations for a scope.
pub trait VariableParserFactory {
    /// Parser for `{{name}}` markers embedded in arbitrary text.
    fn create_env_parser<'a>(&'a self, scope: &'a Scope<'a>) -> Box<dyn VariableParser + 'a>;

    /// Parser for `:name` URL path segments.
    fn create_path_parser<'a>(&'a self, scope: &'a Scope<'a>) -> Box<dyn VariableParser + 'a>;
}

/// Factory creating [`EnvVariableParser`] and [`PathVariableParser`].
pub struct DefaultVariableParserFactory<'s> {
    sampler: &'s dyn Sampler,
}

impl<'s> DefaultVariableParserFactory<'s> {
    pub fn new(sampler: &'s dyn Sampler) -> Self {
        Self { sampler }
    }
}

impl VariableParserFactory for DefaultVariableParserFactory<'_> {
    fn create_env_parser<'a>(&'a self, scope: &'a Scope<'a>) -> Box<dyn VariableParser + 'a> {
        Box::new(EnvVariableParser::new(scope, self.sampler))
    }

    fn create_path_parser<'a>(&'a self, scope: &'a Scope<'a>) -> Box<dyn VariableParser + 'a> {
        Box::new(PathVariableParser::new(scope, self.sampler))
    }
}
