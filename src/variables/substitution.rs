//! Template substitution engine.
//!
//! This module replaces `{{name}}` markers in arbitrary text (headers,
//! bodies, credentials, whole URLs) with values looked up in a [`Scope`].
//! A resolved value may itself contain markers, so the text is re-scanned
//! after every full pass until no marker remains or the pass ceiling is
//! reached. The ceiling bounds self-referencing definitions without an
//! explicit cycle check.

use super::sample::{SampleKind, Sampler};
use super::{Scope, VariableParser};
use crate::models::Variable;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Maximum number of full substitution passes over a single string.
pub const MAX_SUBSTITUTION_PASSES: usize = 30;

/// Cached regex for `{{name}}` markers whose name contains no braces.
static VARIABLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]*?)\}\}").expect("Failed to compile variable regex"));

/// Resolves `{{name}}` markers against a scope.
pub struct EnvVariableParser<'a> {
    scope: &'a Scope<'a>,
    sampler: &'a dyn Sampler,
}

impl<'a> EnvVariableParser<'a> {
    pub fn new(scope: &'a Scope<'a>, sampler: &'a dyn Sampler) -> Self {
        Self { scope, sampler }
    }

    /// Resolves a single marker name.
    ///
    /// A variable with a usable value is substituted verbatim; anything else
    /// yields a synthesized value typed after the variable, if one exists.
    fn replace(&self, name: &str) -> String {
        let variable = self.scope.find(name);
        match variable.and_then(Variable::resolved_value) {
            Some(value) => value.into_owned(),
            None => {
                let value = self.sampler.sample(SampleKind::for_variable(variable));
                log::trace!("synthesized value {:?} for variable {:?}", value, name);
                value
            }
        }
    }
}

impl VariableParser for EnvVariableParser<'_> {
    fn find(&self, key: &str) -> Option<&Variable> {
        self.scope.find(key)
    }

    fn parse(&self, value: &str) -> String {
        // Fast path: nothing to substitute
        if !value.contains("{{") {
            return value.to_string();
        }

        let re = &*VARIABLE_REGEX;
        let mut text = value.to_string();

        for _ in 0..MAX_SUBSTITUTION_PASSES {
            if !re.is_match(&text) {
                break;
            }
            text = re
                .replace_all(&text, |caps: &Captures<'_>| self.replace(&caps[1]))
                .into_owned();
        }

        text
    }
}

/// Substitutes every `{{name}}` marker in `text` using `scope`.
///
/// Convenience wrapper around [`EnvVariableParser`].
///
/// # Examples
///
/// ```
/// use postman2har::models::Variable;
/// use postman2har::variables::{substitute_variables, RandomSampler, Scope};
///
/// let vars = vec![Variable::new("baseUrl", "https://api.example.com")];
/// let scope = Scope::root(&vars);
/// let sampler = RandomSampler::new();
///
/// let result = substitute_variables("GET {{baseUrl}}/users", &scope, &sampler);
/// assert_eq!(result, "GET https://api.example.com/users");
/// ```
pub fn substitute_variables(text: &str, scope: &Scope<'_>, sampler: &dyn Sampler) -> String {
    EnvVariableParser::new(scope, sampler).parse(text)
}

/// Checks whether `text` still contains a `{{name}}` marker.
pub fn contains_marker(text: &str) -> bool {
    VARIABLE_REGEX.is_match(text)
}
