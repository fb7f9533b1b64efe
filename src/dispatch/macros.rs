//! Macros for opting types into self-validation.

/// Implement [`Validatable`](crate::Validatable) for a type.
///
/// `simple` exposes the type's [`SimpleValidator`](crate::SimpleValidator)
/// impl, `detailed` its [`Validator`](crate::Validator) impl. With neither,
/// the type is explicitly not validatable.
///
/// # Example
///
/// ```
/// use vetted::{validatable, validate, BoxError, SimpleValidator, Validator};
///
/// struct Range {
///     low: u32,
///     high: u32,
/// }
///
/// impl SimpleValidator for Range {
///     fn valid(&self) -> bool {
///         self.high != 0
///     }
/// }
///
/// impl Validator for Range {
///     fn validate(&self) -> Result<(), BoxError> {
///         if self.low > self.high {
///             return Err(format!("low {} exceeds high {}", self.low, self.high).into());
///         }
///         Ok(())
///     }
/// }
///
/// validatable!(Range: simple, detailed);
///
/// let err = validate(&Range { low: 5, high: 2 }).unwrap_err();
/// assert_eq!(err.to_string(), "failed validation: low 5 exceeds high 2");
/// ```
#[macro_export]
macro_rules! validatable {
    ($ty:ty : simple, detailed) => {
        impl $crate::Validatable for $ty {
            fn as_simple_validator(&self) -> ::std::option::Option<&dyn $crate::SimpleValidator> {
                ::std::option::Option::Some(self)
            }

            fn as_validator(&self) -> ::std::option::Option<&dyn $crate::Validator> {
                ::std::option::Option::Some(self)
            }
        }
    };
    ($ty:ty : simple) => {
        impl $crate::Validatable for $ty {
            fn as_simple_validator(&self) -> ::std::option::Option<&dyn $crate::SimpleValidator> {
                ::std::option::Option::Some(self)
            }
        }
    };
    ($ty:ty : detailed) => {
        impl $crate::Validatable for $ty {
            fn as_validator(&self) -> ::std::option::Option<&dyn $crate::Validator> {
                ::std::option::Option::Some(self)
            }
        }
    };
    ($ty:ty) => {
        impl $crate::Validatable for $ty {}
    };
}
