//! Path-segment placeholder resolution.
//!
//! Inside URL path segments a variable is written as a whole segment with a
//! leading colon (`:id`). A bare `:` and segments without the prefix pass
//! through unchanged.

use super::sample::{SampleKind, Sampler};
use super::{Scope, VariableParser};
use crate::models::Variable;

/// Prefix identifying a path variable segment.
const PATH_VARIABLE_PREFIX: char = ':';

/// Resolves `:name` path segments against a scope.
pub struct PathVariableParser<'a> {
    scope: &'a Scope<'a>,
    sampler: &'a dyn Sampler,
}

impl<'a> PathVariableParser<'a> {
    pub fn new(scope: &'a Scope<'a>, sampler: &'a dyn Sampler) -> Self {
        Self { scope, sampler }
    }
}

impl VariableParser for PathVariableParser<'_> {
    fn find(&self, key: &str) -> Option<&Variable> {
        self.scope.find(key)
    }

    fn parse(&self, value: &str) -> String {
        let name = match value.strip_prefix(PATH_VARIABLE_PREFIX) {
            Some(name) if !name.is_empty() => name,
            _ => return value.to_string(),
        };

        let variable = self.find(name);
        match variable.and_then(Variable::resolved_value) {
            Some(resolved) => resolved.into_owned(),
            None => {
                let sampled = self.sampler.sample(SampleKind::for_variable(variable));
                log::trace!("synthesized path value {:?} for {:?}", sampled, value);
                sampled
            }
        }
    }
}
