//! Variable scopes.
//!
//! A scope is the ordered set of variables visible at a node of the
//! collection tree. Scopes are immutable and chained: descending into a
//! node creates a child scope whose own variables are consulted before the
//! parent's, so the closest declaration shadows outer ones.

use crate::models::Variable;

/// An immutable, closest-first chain of variable lists.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    variables: &'a [Variable],
    parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    /// Creates an outermost scope over `variables`.
    pub fn root(variables: &'a [Variable]) -> Self {
        Self {
            variables,
            parent: None,
        }
    }

    /// Creates a scope with no variables at all.
    pub fn empty() -> Scope<'static> {
        Scope {
            variables: &[],
            parent: None,
        }
    }

    /// Creates a child scope whose `variables` shadow everything in `self`.
    pub fn nest<'b>(&'b self, variables: &'b [Variable]) -> Scope<'b> {
        Scope {
            variables,
            parent: Some(self),
        }
    }

    /// Finds the closest enabled variable named `key`.
    pub fn find(&self, key: &str) -> Option<&'a Variable> {
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some(variable) = scope
                .variables
                .iter()
                .find(|variable| !variable.disabled && variable.key.as_deref() == Some(key))
            {
                return Some(variable);
            }
            current = scope.parent;
        }
        None
    }
}
