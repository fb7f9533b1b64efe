//! Vetted: validation funneled into a single failed-validation error
//!
//! Vetted validates values two ways and reports every failure through one
//! error kind, [`FailedValidation`], carrying a fixed identity, a
//! `400 Bad Request` status, a human-readable message, the caller's location
//! and a field-to-violation map.
//!
//! # Core Concepts
//!
//! - **Constraints**: Structs declare comma-separated constraint tags per field
//!   and are checked by a tag-driven [`Engine`]
//! - **Self-validation**: Types expose [`SimpleValidator`] and/or [`Validator`]
//!   and are checked by [`validate`]
//! - **Envelope**: Failures from both paths become a [`FailedValidation`];
//!   wrapping one again never changes its identity
//!
//! # Example
//!
//! ```rust
//! use regex_lite::Regex;
//! use vetted::{constrained_struct, must_register_validator, regex_validator, validate_struct};
//!
//! must_register_validator("custom-validator", regex_validator(&Regex::new("valid").unwrap()));
//!
//! constrained_struct! {
//!     #[derive(Default)]
//!     #[allow(non_snake_case)]
//!     struct ValidatableStruct {
//!         first: String => [alias = "first", validate = "required"],
//!         Second: String => [validate = "custom-validator"],
//!     }
//! }
//!
//! let err = validate_struct(&ValidatableStruct::default()).unwrap_err();
//! assert_eq!(err.status(), http::StatusCode::BAD_REQUEST);
//! assert_eq!(err.fields()["first"], "required");
//! assert_eq!(err.fields()["Second"], "custom-validator");
//!
//! let ok = ValidatableStruct {
//!     first: "required".into(),
//!     Second: "valid".into(),
//! };
//! assert!(validate_struct(&ok).is_ok());
//! ```

pub mod dispatch;
pub mod engine;
pub mod envelope;

// Re-export commonly used types
pub use dispatch::{
    is_validatable, must_validate, validate, SimpleValidator, Validatable, Validator,
};
pub use engine::{
    configure, must_register_validator, must_validate_struct, regex_validator,
    register_validator, resolve_field_name, set_tag_name_func, validate_struct, Constrained,
    Engine, EngineBuilder, FieldDescriptor, FieldError, FieldValue, IntoFieldValue,
    RegistrationError, ValidationErrors,
};
pub use envelope::{
    error_id, is_failed_validation, Annotation, BoxError, ErrorId, FailedValidation, Fields,
    FAILED_VALIDATION,
};
