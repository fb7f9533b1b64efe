//! The failed validation error envelope.
//!
//! Every validation failure, whether reported by the constraint engine or by
//! a value validating itself, is normalized into [`FailedValidation`]: one
//! identity (`failed-validation`), one status (`400 Bad Request`), one
//! human-readable prefix, and a field map suitable for API responses.
//!
//! Building is idempotent with respect to identity: wrapping an error that
//! already is a `FailedValidation` only applies the caller's annotations.

pub mod annotation;
pub mod error;
pub mod fields;
pub mod macros;
pub mod stack;

pub use annotation::Annotation;
pub use error::{
    error_id, is_failed_validation, BoxError, ErrorId, FailedValidation, DEFAULT_PREFIX,
    FAILED_VALIDATION,
};
pub use fields::{fold_fields, Fields, FIELDS_KEY};
pub use stack::StackTrace;
