use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::Values;

/// Per-field validation messages produced by the last validator run.
///
/// An entry of `None` (or an empty message) means the field is valid; only
/// entries with a non-empty message count as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Errors(IndexMap<String, Option<String>>);

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.set(name, message);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.0.insert(name.into(), Some(message.into()));
    }

    /// The message for `name`, if the entry is truthy.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(Option::as_deref)
            .filter(|message| !message.is_empty())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn has_errors(&self) -> bool {
        self.iter().next().is_some()
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Truthy entries only, in the order the validator produced them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|(name, message)| {
            message
                .as_deref()
                .filter(|message| !message.is_empty())
                .map(|message| (name.as_str(), message))
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for Errors {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, message)| (name.into(), message))
                .collect(),
        )
    }
}

/// A total function from the full set of values to per-field messages.
pub trait Validate {
    fn validate(&self, values: &Values) -> Errors;
}

impl<F> Validate for F
where
    F: Fn(&Values) -> Errors,
{
    fn validate(&self, values: &Values) -> Errors {
        self(values)
    }
}

/// Validator that accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoValidation;

impl Validate for NoValidation {
    fn validate(&self, _values: &Values) -> Errors {
        Errors::new()
    }
}

/// Builds a validator that flags every listed field whose value is falsy.
pub fn required<I, K, M>(fields: I) -> impl Validate
where
    I: IntoIterator<Item = (K, M)>,
    K: Into<String>,
    M: Into<String>,
{
    let fields: Vec<(String, String)> = fields
        .into_iter()
        .map(|(name, message)| (name.into(), message.into()))
        .collect();
    move |values: &Values| {
        let mut errors = Errors::new();
        for (name, message) in &fields {
            if !values.is_truthy(name) {
                errors.set(name.clone(), message.clone());
            }
        }
        errors
    }
}
