//! Variables module.
//!
//! This module provides variable resolution for collection requests: scoped
//! lookup, `{{name}}` template substitution, `:name` path placeholders and
//! synthesized fallbacks for unresolved references.

pub mod factory;
pub mod path;
pub mod sample;
pub mod scope;
pub mod substitution;

pub use factory::{DefaultVariableParserFactory, VariableParserFactory};
pub use path::PathVariableParser;
pub use sample::{RandomSampler, SampleKind, Sampler};
pub use scope::Scope;
pub use substitution::{
    contains_marker, substitute_variables, EnvVariableParser, MAX_SUBSTITUTION_PASSES,
};

use crate::models::Variable;

/// Resolves variable references of one syntax within text.
pub trait VariableParser {
    /// Finds the closest variable named `key`.
    fn find(&self, key: &str) -> Option<&Variable>;

    /// Returns `value` with every recognized reference resolved.
    fn parse(&self, value: &str) -> String;
}
