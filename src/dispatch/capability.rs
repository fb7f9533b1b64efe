//! Self-validation capabilities and the query trait used to probe them.

use crate::envelope::BoxError;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can report whether it is valid.
pub trait SimpleValidator {
    /// True iff the value is valid.
    fn valid(&self) -> bool;
}

/// A value that can validate itself with a descriptive error.
pub trait Validator {
    /// Describe why the value is invalid, if it is.
    fn validate(&self) -> Result<(), BoxError>;
}

/// Optional-capability query for self-validating values.
///
/// Both methods default to `None`; a type opts into a capability by
/// returning itself. The [`validatable!`](crate::validatable) macro writes
/// these impls.
///
/// # Example
///
/// ```rust
/// use vetted::{is_validatable, validatable, SimpleValidator, Validatable};
///
/// struct Port(u16);
///
/// impl SimpleValidator for Port {
///     fn valid(&self) -> bool {
///         self.0 != 0
///     }
/// }
///
/// validatable!(Port: simple);
///
/// assert!(is_validatable(&Port(8080)));
/// assert!(Port(0).as_simple_validator().is_some());
/// assert!(Port(0).as_validator().is_none());
/// ```
pub trait Validatable {
    /// The simple check, when the type offers one.
    fn as_simple_validator(&self) -> Option<&dyn SimpleValidator> {
        None
    }

    /// The detailed check, when the type offers one.
    fn as_validator(&self) -> Option<&dyn Validator> {
        None
    }
}

macro_rules! forward_validatable {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Validatable + ?Sized> Validatable for $wrapper<T> {
                fn as_simple_validator(&self) -> Option<&dyn SimpleValidator> {
                    (**self).as_simple_validator()
                }

                fn as_validator(&self) -> Option<&dyn Validator> {
                    (**self).as_validator()
                }
            }
        )*
    };
}

forward_validatable!(Box, Rc, Arc);

impl<T: Validatable + ?Sized> Validatable for &T {
    fn as_simple_validator(&self) -> Option<&dyn SimpleValidator> {
        (**self).as_simple_validator()
    }

    fn as_validator(&self) -> Option<&dyn Validator> {
        (**self).as_validator()
    }
}

// Plain data never validates itself.
macro_rules! inert_validatable {
    ($($ty:ty),*) => {
        $(impl Validatable for $ty {})*
    };
}

inert_validatable!(
    (), str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64
);
