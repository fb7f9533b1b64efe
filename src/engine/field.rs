//! Field descriptors and the runtime values the engine checks.
//!
//! A type opts into declarative validation by implementing [`Constrained`],
//! usually through the [`constrained_struct!`](crate::constrained_struct) macro.
//! Each field is reported as a static [`FieldDescriptor`] (identifier,
//! serialization alias, constraint tags) paired with a borrowed [`FieldValue`].

use std::fmt;

/// Static description of one struct field.
///
/// `alias` is an option string in the usual serialization-tag shape
/// (`"name,omitempty"`); only the first segment is a name.
/// `constraints` is a comma separated list of constraint tags.
///
/// # Example
///
/// ```rust
/// use vetted::FieldDescriptor;
///
/// let field = FieldDescriptor::new("first_name")
///     .alias("firstName,omitempty")
///     .validate("required");
///
/// assert_eq!(field.ident(), "first_name");
/// assert_eq!(field.alias_option(), Some("firstName,omitempty"));
/// assert_eq!(field.constraints().collect::<Vec<_>>(), vec!["required"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    ident: &'static str,
    alias: Option<&'static str>,
    constraints: &'static str,
}

impl FieldDescriptor {
    /// Describe a field by its raw identifier, with no alias and no constraints.
    pub const fn new(ident: &'static str) -> Self {
        Self {
            ident,
            alias: None,
            constraints: "",
        }
    }

    /// Set the serialization alias option string.
    pub const fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Set the constraint tag list.
    pub const fn validate(mut self, constraints: &'static str) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn ident(&self) -> &'static str {
        self.ident
    }

    pub fn alias_option(&self) -> Option<&'static str> {
        self.alias
    }

    /// Iterate the constraint tags in declaration order, skipping blanks.
    pub fn constraints(&self) -> impl Iterator<Item = &'static str> {
        self.constraints
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// Borrowed view of a field's runtime value.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// An absent optional value.
    Missing,
    /// A nested value whose own fields are checked recursively.
    Nested(&'a dyn Constrained),
}

impl<'a> FieldValue<'a> {
    /// Whether the value is the zero value of its kind.
    ///
    /// Nested values are never zero; an absent nested value is [`FieldValue::Missing`].
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Int(n) => *n == 0,
            Self::UInt(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Bool(b) => !*b,
            Self::Missing => true,
            Self::Nested(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(*s),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Missing => f.write_str("Missing"),
            Self::Nested(inner) => f.debug_tuple("Nested").field(&inner.type_name()).finish(),
        }
    }
}

/// A value that describes its fields to the constraint engine.
pub trait Constrained {
    /// Type qualifier used as the first namespace segment.
    fn type_name(&self) -> &'static str;

    /// Field descriptors paired with their current values, in declaration order.
    fn fields(&self) -> Vec<(FieldDescriptor, FieldValue<'_>)>;
}

/// Conversion of a field into the engine's value view.
pub trait IntoFieldValue {
    fn field_value(&self) -> FieldValue<'_>;
}

impl IntoFieldValue for str {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl IntoFieldValue for String {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl IntoFieldValue for bool {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Option<T> {
    fn field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.field_value(),
            None => FieldValue::Missing,
        }
    }
}

impl<T: IntoFieldValue + ?Sized> IntoFieldValue for &T {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: IntoFieldValue + ?Sized> IntoFieldValue for Box<T> {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

macro_rules! impl_numeric_field_value {
    ($variant:ident as $repr:ty: $($ty:ty),*) => {
        $(
            impl IntoFieldValue for $ty {
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(*self as $repr)
                }
            }
        )*
    };
}

impl_numeric_field_value!(Int as i64: i8, i16, i32, i64, isize);
impl_numeric_field_value!(UInt as u64: u8, u16, u32, u64, usize);
impl_numeric_field_value!(Float as f64: f32, f64);
