//! The constraint engine: tag registry, naming function and the checking pass.

use super::field::{Constrained, FieldDescriptor, FieldValue};
use super::naming::{resolve_field_name, TagNameFunc};
use super::violations::{FieldError, ValidationErrors};
use std::collections::HashMap;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::debug;

/// Named predicate over a field value.
pub type Predicate = Arc<dyn Fn(&FieldValue<'_>) -> bool + Send + Sync>;

type FieldCheck = Validation<(), NonEmptyVec<FieldError>>;

/// Tag that skips the remaining tags of a field when its value is zero.
pub const OMIT_EMPTY: &str = "omitempty";

/// Built-in tag failing on zero values.
pub const REQUIRED: &str = "required";

const RESERVED_TAGS: &[&str] = &[OMIT_EMPTY, "-"];
const RESTRICTED_CHARS: &[char] = &[',', '|', '='];

/// Errors that can occur when registering a validation tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("validation tag must not be empty")]
    EmptyTag,

    #[error("validation tag '{0}' is reserved")]
    ReservedTag(String),

    #[error("validation tag '{tag}' contains restricted character '{character}'")]
    RestrictedCharacter { tag: String, character: char },
}

/// Tag-driven constraint engine.
///
/// Each field's tags are checked in declaration order and the first failing
/// tag is reported. Violations accumulate across all fields, depth-first
/// through nested values.
///
/// # Example
///
/// ```rust
/// use vetted::{constrained_struct, Engine};
///
/// constrained_struct! {
///     #[derive(Default)]
///     struct Login {
///         user: String => [alias = "user", validate = "required"],
///         pin: u32 => [validate = "omitempty,even"],
///     }
/// }
///
/// let mut engine = Engine::new();
/// engine
///     .register_validation("even", |value| {
///         matches!(value, vetted::FieldValue::UInt(n) if n % 2 == 0)
///     })
///     .unwrap();
///
/// let errors = engine.validate(&Login::default()).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.iter().next().unwrap().path(), "user");
/// ```
pub struct Engine {
    validations: HashMap<String, Predicate>,
    tag_name: TagNameFunc,
}

impl Engine {
    /// Engine with the `required` built-in and alias-aware naming.
    pub fn new() -> Self {
        let mut validations: HashMap<String, Predicate> = HashMap::new();
        validations.insert(REQUIRED.to_string(), Arc::new(required));

        Self {
            validations,
            tag_name: Arc::new(resolve_field_name),
        }
    }

    pub fn builder() -> super::builder::EngineBuilder {
        super::builder::EngineBuilder::new()
    }

    /// Register a named predicate, replacing any previous one for the tag.
    pub fn register_validation<F>(
        &mut self,
        tag: &str,
        predicate: F,
    ) -> Result<(), RegistrationError>
    where
        F: Fn(&FieldValue<'_>) -> bool + Send + Sync + 'static,
    {
        self.register_predicate(tag, Arc::new(predicate))
    }

    pub(crate) fn register_predicate(
        &mut self,
        tag: &str,
        predicate: Predicate,
    ) -> Result<(), RegistrationError> {
        check_tag(tag)?;
        let replaced = self
            .validations
            .insert(tag.to_string(), predicate)
            .is_some();
        debug!(tag, replaced, "registered validation tag");
        Ok(())
    }

    /// Replace the function used to name fields in violations.
    pub fn set_tag_name_func<F>(&mut self, naming: F)
    where
        F: Fn(&FieldDescriptor) -> String + Send + Sync + 'static,
    {
        self.tag_name = Arc::new(naming);
    }

    pub(crate) fn set_tag_name(&mut self, naming: TagNameFunc) {
        self.tag_name = naming;
    }

    pub fn has_validation(&self, tag: &str) -> bool {
        self.validations.contains_key(tag)
    }

    /// External name of a field under the current naming function.
    pub fn field_name(&self, field: &FieldDescriptor) -> String {
        (self.tag_name)(field)
    }

    /// Check every field of `value`.
    ///
    /// # Panics
    ///
    /// Panics when a field carries a tag that was never registered.
    pub fn validate(&self, value: &dyn Constrained) -> Result<(), ValidationErrors> {
        match self.check_struct(value, value.type_name()) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                let errors: ValidationErrors = errors.iter().cloned().collect();
                debug!(
                    type_name = value.type_name(),
                    violations = errors.len(),
                    "value failed constraint validation"
                );
                Err(errors)
            }
        }
    }

    fn check_struct(&self, value: &dyn Constrained, namespace: &str) -> FieldCheck {
        let checks: Vec<FieldCheck> = value
            .fields()
            .into_iter()
            .map(|(descriptor, field_value)| {
                let name = self.field_name(&descriptor);
                let namespace = format!("{namespace}.{name}");
                self.check_field(&descriptor, &field_value, name, namespace)
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    fn check_field(
        &self,
        descriptor: &FieldDescriptor,
        value: &FieldValue<'_>,
        name: String,
        namespace: String,
    ) -> FieldCheck {
        for tag in descriptor.constraints() {
            if tag == OMIT_EMPTY {
                if value.is_zero() {
                    return Validation::success(());
                }
                continue;
            }

            let Some(predicate) = self.validations.get(tag) else {
                panic!(
                    "undefined validation function '{tag}' on field '{}'",
                    descriptor.ident()
                );
            };

            if !predicate(value) {
                return Validation::fail(FieldError::new(namespace, name, tag));
            }
        }

        match value {
            FieldValue::Nested(inner) => self.check_struct(*inner, &namespace),
            _ => Validation::success(()),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn required(value: &FieldValue<'_>) -> bool {
    !value.is_zero()
}

fn check_tag(tag: &str) -> Result<(), RegistrationError> {
    if tag.is_empty() {
        return Err(RegistrationError::EmptyTag);
    }
    if RESERVED_TAGS.contains(&tag) {
        return Err(RegistrationError::ReservedTag(tag.to_string()));
    }
    if let Some(character) = tag.chars().find(|c| RESTRICTED_CHARS.contains(c)) {
        return Err(RegistrationError::RestrictedCharacter {
            tag: tag.to_string(),
            character,
        });
    }
    Ok(())
}
