//! Folding engine violations into the field map.

use crate::engine::ValidationErrors;
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;

/// Field name to violation map carried by a failed validation error.
pub type Fields = BTreeMap<String, Value>;

/// Metadata key under which the field map is exposed.
pub const FIELDS_KEY: &str = "fields";

/// Fold violations into a field map, in order; later duplicates win.
pub fn fold_fields(errors: &ValidationErrors) -> Fields {
    let mut fields = Fields::new();
    for error in errors {
        fields.insert(error.path().to_string(), Value::from(error.tag()));
    }
    fields
}

/// First violation set found in `err` or its source chain.
pub(crate) fn find_validation_errors<'a>(
    err: &'a (dyn Error + 'static),
) -> Option<&'a ValidationErrors> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(errors) = err.downcast_ref::<ValidationErrors>() {
            return Some(errors);
        }
        current = err.source();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FieldError;
    use serde_json::json;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("request rejected")]
    struct Rejected(#[source] ValidationErrors);

    #[test]
    fn fold_maps_path_to_tag() {
        let errors: ValidationErrors = vec![
            FieldError::new("Signup.first", "first", "required"),
            FieldError::new("Signup.address.city", "city", "required"),
        ]
        .into();

        let fields = fold_fields(&errors);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["first"], json!("required"));
        assert_eq!(fields["address.city"], json!("required"));
    }

    #[test]
    fn fold_keeps_last_duplicate() {
        let errors: ValidationErrors = vec![
            FieldError::new("S.code", "code", "required"),
            FieldError::new("S.code", "code", "digits"),
        ]
        .into();

        assert_eq!(fold_fields(&errors)["code"], json!("digits"));
    }

    #[test]
    fn violations_are_found_through_source_chain() {
        let errors: ValidationErrors = vec![FieldError::new("S.a", "a", "required")].into();
        let rejected = Rejected(errors.clone());

        assert_eq!(find_validation_errors(&rejected), Some(&errors));
        assert_eq!(find_validation_errors(&std::fmt::Error), None);
    }
}
