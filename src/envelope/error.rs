//! The failed validation error.

use super::annotation::Annotation;
use super::fields::{find_validation_errors, fold_fields, Fields, FIELDS_KEY};
use super::stack::StackTrace;
use http::StatusCode;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::panic::Location;
use tracing::{debug, error};

/// Boxed, thread-safe error as accepted by [`FailedValidation::wrap`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Identity token of an error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorId(&'static str);

impl ErrorId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Identity of every failed validation error.
pub const FAILED_VALIDATION: ErrorId = ErrorId::new("failed-validation");

/// Fixed human-readable label, always the outermost prefix.
pub const DEFAULT_PREFIX: &str = "failed validation";

/// The single error kind every validation failure is normalized into.
///
/// Carries the `failed-validation` identity, a `400 Bad Request` status,
/// the `failed validation` prefix, a field map, the caller's location and an
/// optional wrapped source error.
///
/// # Example
///
/// ```rust
/// use http::StatusCode;
/// use serde_json::json;
/// use vetted::{Annotation, FailedValidation, Fields};
///
/// let fields = Fields::from([("email".to_string(), json!("required"))]);
/// let err = FailedValidation::new("missing email", fields, [Annotation::prefix("signup")]);
///
/// assert_eq!(err.to_string(), "failed validation: signup: missing email");
/// assert_eq!(err.status(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.fields()["email"], "required");
/// ```
#[derive(Debug)]
pub struct FailedValidation {
    status: StatusCode,
    prefixes: Vec<String>,
    message: String,
    fields: Fields,
    metadata: Fields,
    trace: StackTrace,
    source: Option<BoxError>,
}

impl FailedValidation {
    /// Build a new error from a message and explicit fields.
    ///
    /// The location recorded is the caller's.
    #[track_caller]
    pub fn new<I>(message: impl Into<String>, fields: Fields, annotations: I) -> Self
    where
        I: IntoIterator<Item = Annotation>,
    {
        let mut err = Self::with_defaults(message.into(), fields, None, StackTrace::capture());
        err.apply(annotations);
        debug!(
            id = %FAILED_VALIDATION,
            fields = err.fields.len(),
            location = %err.trace.location(),
            "built failed validation error"
        );
        err
    }

    /// Wrap an arbitrary error as a failed validation error.
    ///
    /// An error that already is a `FailedValidation` is returned as-is with
    /// only `annotations` applied. Any other error becomes the source; when a
    /// [`ValidationErrors`](crate::ValidationErrors) is found in its source
    /// chain, its violations are folded into the field map.
    #[track_caller]
    pub fn wrap<E, I>(err: E, annotations: I) -> Self
    where
        E: Into<BoxError>,
        I: IntoIterator<Item = Annotation>,
    {
        let err: BoxError = err.into();
        match err.downcast::<FailedValidation>() {
            Ok(existing) => {
                let mut existing = *existing;
                existing.apply(annotations);
                existing
            }
            Err(cause) => {
                let message = cause.to_string();
                let fields = find_validation_errors(&*cause)
                    .map(fold_fields)
                    .unwrap_or_default();
                let mut err =
                    Self::with_defaults(message, fields, Some(cause), StackTrace::capture());
                err.apply(annotations);
                debug!(
                    id = %FAILED_VALIDATION,
                    fields = err.fields.len(),
                    location = %err.trace.location(),
                    "wrapped error as failed validation"
                );
                err
            }
        }
    }

    fn with_defaults(
        message: String,
        fields: Fields,
        source: Option<BoxError>,
        trace: StackTrace,
    ) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            prefixes: vec![DEFAULT_PREFIX.to_string()],
            message,
            fields,
            metadata: Fields::new(),
            trace,
            source,
        }
    }

    fn apply<I>(&mut self, annotations: I)
    where
        I: IntoIterator<Item = Annotation>,
    {
        for annotation in annotations {
            match annotation {
                Annotation::Prefix(prefix) => self.prefixes.push(prefix),
                Annotation::Status(status) => self.status = status,
                Annotation::Field(name, value) => {
                    self.fields.insert(name, value);
                }
                Annotation::Metadata(key, value) => {
                    self.metadata.insert(key, value);
                }
            }
        }
    }

    /// Always [`FAILED_VALIDATION`].
    pub fn id(&self) -> ErrorId {
        FAILED_VALIDATION
    }

    /// `400 Bad Request` unless overridden by an annotation.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Prefixes from outermost to innermost.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// The message without prefixes.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field key to violated tag.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// All metadata, with the field map under [`FIELDS_KEY`].
    pub fn metadata(&self) -> Map<String, Value> {
        let mut metadata: Map<String, Value> = self.metadata.clone().into_iter().collect();
        metadata.insert(
            FIELDS_KEY.to_string(),
            Value::Object(self.fields.clone().into_iter().collect()),
        );
        metadata
    }

    /// Call site and backtrace captured at construction.
    pub fn stack_trace(&self) -> &StackTrace {
        &self.trace
    }

    /// Where the error was first built or wrapped.
    pub fn location(&self) -> &'static Location<'static> {
        self.trace.location()
    }

    /// Captured only when `RUST_BACKTRACE` enables it.
    pub fn backtrace(&self) -> &Backtrace {
        self.trace.backtrace()
    }

    /// Abort with this error as the panic payload.
    #[track_caller]
    pub fn raise(self) -> ! {
        error!(
            id = %FAILED_VALIDATION,
            status = self.status.as_u16(),
            location = %self.trace.location(),
            "{}",
            self
        );
        std::panic::panic_any(self)
    }
}

impl fmt::Display for FailedValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prefix in &self.prefixes {
            write!(f, "{prefix}: ")?;
        }
        f.write_str(&self.message)
    }
}

impl Error for FailedValidation {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(source) => {
                let source: &(dyn Error + 'static) = &**source;
                Some(source)
            }
            None => None,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    id: ErrorId,
    status: u16,
    message: String,
    fields: &'a Fields,
    #[serde(skip_serializing_if = "is_empty")]
    metadata: &'a Fields,
}

fn is_empty(map: &&Fields) -> bool {
    map.is_empty()
}

impl Serialize for FailedValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorBody {
            id: FAILED_VALIDATION,
            status: self.status.as_u16(),
            message: self.to_string(),
            fields: &self.fields,
            metadata: &self.metadata,
        }
        .serialize(serializer)
    }
}

/// Identity of `err` when it is a failed validation error.
pub fn error_id(err: &(dyn Error + 'static)) -> Option<ErrorId> {
    err.downcast_ref::<FailedValidation>()
        .map(FailedValidation::id)
}

/// True iff `err` itself is a failed validation error.
pub fn is_failed_validation(err: &(dyn Error + 'static)) -> bool {
    error_id(err) == Some(FAILED_VALIDATION)
}
