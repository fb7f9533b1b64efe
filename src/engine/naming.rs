//! External field naming for violation reports.

use super::field::FieldDescriptor;
use std::sync::Arc;

/// Function mapping a field descriptor to the name used in violation reports.
pub type TagNameFunc = Arc<dyn Fn(&FieldDescriptor) -> String + Send + Sync>;

/// Alias segment meaning "not serialized"; never used as a name.
const SKIP_ALIAS: &str = "-";

/// Resolve the external name of a field.
///
/// Prefers the first segment of the declared serialization alias, falling
/// back to the raw identifier when the alias is absent, empty or `-`.
///
/// # Example
///
/// ```rust
/// use vetted::{resolve_field_name, FieldDescriptor};
///
/// let aliased = FieldDescriptor::new("First").alias("first,omitempty");
/// let skipped = FieldDescriptor::new("Second").alias("-");
///
/// assert_eq!(resolve_field_name(&aliased), "first");
/// assert_eq!(resolve_field_name(&skipped), "Second");
/// ```
pub fn resolve_field_name(field: &FieldDescriptor) -> String {
    match field
        .alias_option()
        .and_then(|option| option.split(',').next())
    {
        Some(name) if !name.is_empty() && name != SKIP_ALIAS => name.to_string(),
        _ => field.ident().to_string(),
    }
}
