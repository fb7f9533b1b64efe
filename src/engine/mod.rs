//! Tag-driven constraint checking.
//!
//! Values describe their fields through [`Constrained`]; the [`Engine`]
//! checks each field's comma-separated constraint tags against a registry of
//! named predicates and accumulates every violation with Stillwater's
//! `Validation`, so a single pass reports all failing fields.
//!
//! # Example
//!
//! ```rust
//! use vetted::{constrained_struct, Engine};
//!
//! constrained_struct! {
//!     #[derive(Default)]
//!     struct Contact {
//!         email: String => [alias = "email", validate = "required"],
//!         phone: Option<String> => [validate = "required"],
//!     }
//! }
//!
//! let errors = Engine::new().validate(&Contact::default()).unwrap_err();
//! let paths: Vec<_> = errors.iter().map(|e| e.path()).collect();
//! assert_eq!(paths, vec!["email", "phone"]);
//! ```

pub mod builder;
pub mod field;
pub mod global;
pub mod macros;
pub mod naming;
pub mod regex;
pub mod registry;
pub mod violations;

pub use builder::EngineBuilder;
pub use field::{Constrained, FieldDescriptor, FieldValue, IntoFieldValue};
pub use global::{
    configure, must_register_validator, must_validate_struct, register_validator, replace,
    set_tag_name_func, validate_struct,
};
pub use naming::{resolve_field_name, TagNameFunc};
pub use regex::regex_validator;
pub use registry::{Engine, Predicate, RegistrationError, OMIT_EMPTY, REQUIRED};
pub use violations::{FieldError, ValidationErrors};
