//! Builder API for configuring a constraint engine.

use super::field::{FieldDescriptor, FieldValue};
use super::naming::TagNameFunc;
use super::registry::{Engine, Predicate, RegistrationError};
use std::sync::Arc;

/// Builder for creating a configured [`Engine`].
///
/// # Example
///
/// ```rust
/// use vetted::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .register("lowercase", |value| {
///         value.as_str().is_some_and(|s| s.chars().all(|c| !c.is_uppercase()))
///     })
///     .tag_name_func(|field| field.ident().to_string())
///     .build()
///     .unwrap();
///
/// assert!(engine.has_validation("lowercase"));
/// assert!(engine.has_validation("required"));
/// ```
pub struct EngineBuilder {
    tag_name: Option<TagNameFunc>,
    validations: Vec<(String, Predicate)>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            tag_name: None,
            validations: Vec::new(),
        }
    }

    /// Override the naming function (defaults to alias-aware naming)
    pub fn tag_name_func<F>(mut self, naming: F) -> Self
    where
        F: Fn(&FieldDescriptor) -> String + Send + Sync + 'static,
    {
        self.tag_name = Some(Arc::new(naming));
        self
    }

    /// Add a named predicate
    pub fn register<F>(mut self, tag: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FieldValue<'_>) -> bool + Send + Sync + 'static,
    {
        self.validations.push((tag.into(), Arc::new(predicate)));
        self
    }

    /// Build the engine, failing on the first rejected tag
    pub fn build(self) -> Result<Engine, RegistrationError> {
        let mut engine = Engine::new();
        if let Some(naming) = self.tag_name {
            engine.set_tag_name(naming);
        }
        for (tag, predicate) in self.validations {
            engine.register_predicate(&tag, predicate)?;
        }
        Ok(engine)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
