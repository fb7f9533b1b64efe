//! Macros for declaring constrained structs.

/// Declare a struct and implement [`Constrained`](crate::Constrained) and
/// [`IntoFieldValue`](crate::IntoFieldValue) for it.
///
/// Each field may carry `=> [alias = "...", validate = "..."]`. `alias` is the
/// serialization alias option string used for naming, `validate` the
/// comma-separated constraint tags. Fields whose type is itself a constrained
/// struct are checked recursively.
///
/// # Example
///
/// ```
/// use vetted::{constrained_struct, validate_struct};
///
/// constrained_struct! {
///     #[derive(Debug, Default)]
///     pub struct Signup {
///         pub first_name: String => [alias = "firstName", validate = "required"],
///         pub age: u32,
///     }
/// }
///
/// let err = validate_struct(&Signup::default()).unwrap_err();
/// assert_eq!(err.fields()["firstName"], "required");
/// ```
#[macro_export]
macro_rules! constrained_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
                $(=> [$($key:ident = $value:literal),* $(,)?])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Constrained for $name {
            fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            fn fields(&self) -> ::std::vec::Vec<($crate::FieldDescriptor, $crate::FieldValue<'_>)> {
                ::std::vec![
                    $(
                        (
                            $crate::FieldDescriptor::new(stringify!($field))
                                $($(.$key($value))*)?,
                            $crate::IntoFieldValue::field_value(&self.$field),
                        )
                    ),*
                ]
            }
        }

        impl $crate::IntoFieldValue for $name {
            fn field_value(&self) -> $crate::FieldValue<'_> {
                $crate::FieldValue::Nested(self)
            }
        }
    };
}
