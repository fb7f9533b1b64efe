//! Regular-expression backed predicates.

use super::field::FieldValue;
use regex_lite::Regex;

/// Adapt a pattern into a predicate matching whole string values.
///
/// The predicate is true iff the field is a string and the entire string
/// matches `pattern`. Non-string values never match. Verbose patterns
/// (`(?x)`) ending in a `#` comment are anchored too.
///
/// # Panics
///
/// Panics if `pattern` cannot be anchored to the whole string. A pattern
/// that compiled on its own always can.
///
/// # Example
///
/// ```rust
/// use regex_lite::Regex;
/// use vetted::{regex_validator, IntoFieldValue};
///
/// let is_valid = regex_validator(&Regex::new("valid").unwrap());
///
/// assert!(is_valid(&"valid".field_value()));
/// assert!(!is_valid(&"invalid".field_value()));
/// assert!(!is_valid(&7_i32.field_value()));
/// ```
pub fn regex_validator(
    pattern: &Regex,
) -> impl Fn(&FieldValue<'_>) -> bool + Send + Sync + 'static {
    let anchored = anchor(pattern);

    move |value: &FieldValue<'_>| value.as_str().is_some_and(|s| anchored.is_match(s))
}

fn anchor(pattern: &Regex) -> Regex {
    let source = pattern.as_str();
    match Regex::new(&format!("^(?:{source})$")) {
        Ok(anchored) => anchored,
        // A trailing verbose-mode comment runs to the end of the line.
        Err(_) => match Regex::new(&format!("^(?:{source}\n)$")) {
            Ok(anchored) => anchored,
            Err(err) => panic!("cannot anchor pattern '{source}': {err}"),
        },
    }
}
