//! The process-wide engine and the struct validation entry points.
//!
//! The shared engine is created on first use with the `required` built-in and
//! alias-aware naming. Register custom tags during initialization, before
//! validation traffic starts; registration takes a write lock, so later
//! registration is safe but blocks validation while it runs. Predicates run
//! under the read lock and must not register tags themselves. They must not
//! call [`validate_struct`] either: taking the read lock again while a writer
//! waits deadlocks. Nest constrained structs as fields instead.

use super::field::{Constrained, FieldDescriptor, FieldValue};
use super::registry::{Engine, RegistrationError};
use crate::envelope::{Annotation, FailedValidation};
use parking_lot::RwLock;
use std::sync::OnceLock;
use tracing::error;

static ENGINE: OnceLock<RwLock<Engine>> = OnceLock::new();

fn shared() -> &'static RwLock<Engine> {
    ENGINE.get_or_init(|| RwLock::new(Engine::new()))
}

/// Validate `value` against the shared engine.
///
/// The error's location is the caller's.
///
/// # Example
///
/// ```
/// use vetted::{constrained_struct, validate_struct};
///
/// constrained_struct! {
///     struct Credentials {
///         user: String => [alias = "user", validate = "required"],
///     }
/// }
///
/// assert!(validate_struct(&Credentials { user: "ada".into() }).is_ok());
///
/// let err = validate_struct(&Credentials { user: String::new() }).unwrap_err();
/// assert_eq!(err.fields()["user"], "required");
/// ```
#[track_caller]
pub fn validate_struct<T: Constrained>(value: &T) -> Result<(), FailedValidation> {
    let outcome = shared().read().validate(value);
    match outcome {
        Ok(()) => Ok(()),
        Err(errors) => Err(FailedValidation::wrap(
            errors,
            std::iter::empty::<Annotation>(),
        )),
    }
}

/// Like [`validate_struct`], but panics with the [`FailedValidation`] as payload.
#[track_caller]
pub fn must_validate_struct<T: Constrained>(value: &T) {
    if let Err(err) = validate_struct(value) {
        err.raise()
    }
}

/// Register a named predicate on the shared engine.
pub fn register_validator<F>(tag: &str, predicate: F) -> Result<(), RegistrationError>
where
    F: Fn(&FieldValue<'_>) -> bool + Send + Sync + 'static,
{
    shared().write().register_validation(tag, predicate)
}

/// Like [`register_validator`], but panics on a rejected tag.
#[track_caller]
pub fn must_register_validator<F>(tag: &str, predicate: F)
where
    F: Fn(&FieldValue<'_>) -> bool + Send + Sync + 'static,
{
    if let Err(err) = register_validator(tag, predicate) {
        error!(tag, "{err}");
        panic!("{err}");
    }
}

/// Replace the shared engine's naming function.
pub fn set_tag_name_func<F>(naming: F)
where
    F: Fn(&FieldDescriptor) -> String + Send + Sync + 'static,
{
    shared().write().set_tag_name_func(naming);
}

/// Run `apply` with exclusive access to the shared engine.
pub fn configure<R>(apply: impl FnOnce(&mut Engine) -> R) -> R {
    apply(&mut shared().write())
}

/// Install `engine` as the shared engine, returning the previous one.
pub fn replace(engine: Engine) -> Engine {
    std::mem::replace(&mut *shared().write(), engine)
}
