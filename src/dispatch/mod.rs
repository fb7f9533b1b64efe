//! Self-validation dispatch.
//!
//! A value opts into validating itself through two independent capabilities:
//! [`SimpleValidator`] (a cheap boolean gate) and [`Validator`] (a detailed
//! check returning an error). [`validate`] probes both through the
//! [`Validatable`] query trait on every call and funnels any failure into a
//! [`FailedValidation`](crate::FailedValidation).
//!
//! Calling [`validate`] on a value exposing neither capability is a
//! programming error and panics.

pub mod capability;
pub mod macros;
pub mod validate;

pub use capability::{SimpleValidator, Validatable, Validator};
pub use validate::{is_validatable, must_validate, validate};
