//! Caller-supplied adjustments applied to a failed validation error.

use http::StatusCode;
use serde_json::Value;

/// An adjustment applied after the fixed failed-validation defaults.
///
/// The error identity can never be changed through an annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Additional human-readable prefix, layered beneath the fixed label.
    Prefix(String),

    /// Status classification override.
    Status(StatusCode),

    /// Field entry merged over derived fields.
    Field(String, Value),

    /// Arbitrary metadata entry.
    Metadata(String, Value),
}

impl Annotation {
    /// Layer `prefix` beneath the existing prefixes.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    /// Override the status classification.
    pub fn status(status: StatusCode) -> Self {
        Self::Status(status)
    }

    /// Set a field entry, replacing any derived one.
    pub fn field(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Field(name.into(), value.into())
    }

    /// Attach a metadata entry outside the field map.
    pub fn metadata(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Metadata(key.into(), value.into())
    }
}
