//! Formatting shorthand for building failed validation errors.

/// Build a [`FailedValidation`](crate::FailedValidation) from a format string.
///
/// The error has no fields and no annotations; its location is the macro
/// invocation.
///
/// # Example
///
/// ```
/// use vetted::failed_validation;
///
/// let limit = 3;
/// let err = failed_validation!("at most {} items allowed", limit);
///
/// assert_eq!(err.to_string(), "failed validation: at most 3 items allowed");
/// assert!(err.fields().is_empty());
/// ```
#[macro_export]
macro_rules! failed_validation {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::FailedValidation::new(
            ::std::format!($fmt $(, $arg)*),
            $crate::Fields::new(),
            ::std::iter::empty::<$crate::Annotation>(),
        )
    };
}
