//! Per-field violations reported by the constraint engine.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single field that failed one constraint tag.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("Key: '{namespace}' Error:Field validation for '{field}' failed on the '{tag}' tag")]
pub struct FieldError {
    namespace: String,
    field: String,
    tag: String,
}

impl FieldError {
    pub fn new(
        namespace: impl Into<String>,
        field: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            field: field.into(),
            tag: tag.into(),
        }
    }

    /// Full namespace, starting with the type qualifier (`Signup.address.city`).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// External name of the failing field itself.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The failing constraint tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Namespace with the leading type qualifier stripped (`address.city`).
    pub fn path(&self) -> &str {
        match self.namespace.find('.') {
            Some(index) => &self.namespace[index + 1..],
            None => &self.namespace,
        }
    }
}

/// Ordered set of field violations from one engine pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
