//! Dispatch over self-validation capabilities.

use super::capability::Validatable;
use crate::envelope::{Annotation, FailedValidation, Fields};
use tracing::error;

const NOT_VALIDATABLE: &str = "value must implement SimpleValidator or Validator";

/// True iff `value` exposes at least one self-validation capability.
pub fn is_validatable<T: Validatable + ?Sized>(value: &T) -> bool {
    value.as_simple_validator().is_some() || value.as_validator().is_some()
}

/// Run the self-validation capabilities `value` exposes.
///
/// The simple check runs first; when it reports invalid, the error message
/// is `invalid` and the detailed check is not run. A detailed check error is
/// wrapped into a [`FailedValidation`].
///
/// # Panics
///
/// Panics when `value` exposes neither capability; check with
/// [`is_validatable`] first when the type is not known to opt in.
#[track_caller]
pub fn validate<T: Validatable + ?Sized>(value: &T) -> Result<(), FailedValidation> {
    let simple = value.as_simple_validator();
    let detailed = value.as_validator();

    if simple.is_none() && detailed.is_none() {
        error!("{NOT_VALIDATABLE}");
        panic!("{NOT_VALIDATABLE}");
    }

    if let Some(simple) = simple {
        if !simple.valid() {
            return Err(FailedValidation::new(
                "invalid",
                Fields::new(),
                std::iter::empty::<Annotation>(),
            ));
        }
    }

    if let Some(detailed) = detailed {
        if let Err(err) = detailed.validate() {
            return Err(FailedValidation::wrap(err, std::iter::empty::<Annotation>()));
        }
    }

    Ok(())
}

/// Like [`validate`], but panics with the [`FailedValidation`] as payload.
#[track_caller]
pub fn must_validate<T: Validatable + ?Sized>(value: &T) {
    if let Err(err) = validate(value) {
        err.raise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::capability::{SimpleValidator, Validator};
    use crate::envelope::{BoxError, FAILED_VALIDATION};
    use crate::validatable;
    use http::StatusCode;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[derive(Default)]
    struct MockValidator {
        valid: bool,
        err: Option<&'static str>,
        simple_called: Cell<bool>,
        detailed_called: Cell<bool>,
    }

    impl MockValidator {
        fn new(valid: bool, err: Option<&'static str>) -> Self {
            Self {
                valid,
                err,
                ..Self::default()
            }
        }
    }

    impl SimpleValidator for MockValidator {
        fn valid(&self) -> bool {
            self.simple_called.set(true);
            self.valid
        }
    }

    impl Validator for MockValidator {
        fn validate(&self) -> Result<(), BoxError> {
            self.detailed_called.set(true);
            match self.err {
                Some(message) => Err(message.into()),
                None => Ok(()),
            }
        }
    }

    validatable!(MockValidator: simple, detailed);

    struct DetailedOnly;

    impl Validator for DetailedOnly {
        fn validate(&self) -> Result<(), BoxError> {
            Ok(())
        }
    }

    validatable!(DetailedOnly: detailed);

    struct SimpleOnly(bool);

    impl SimpleValidator for SimpleOnly {
        fn valid(&self) -> bool {
            self.0
        }
    }

    validatable!(SimpleOnly: simple);

    struct Plain;

    validatable!(Plain);

    #[test]
    fn both_checks_run_when_valid() {
        let v = MockValidator::new(true, None);

        assert!(validate(&v).is_ok());
        assert!(v.simple_called.get());
        assert!(v.detailed_called.get());
    }

    #[test]
    fn must_validate_passes_when_valid() {
        let v = MockValidator::new(true, None);

        must_validate(&v);
        assert!(v.simple_called.get());
        assert!(v.detailed_called.get());
    }

    #[test]
    fn simple_failure_short_circuits() {
        let v = MockValidator::new(false, Some("never seen"));

        let err = validate(&v).unwrap_err();
        assert_eq!(err.message(), "invalid");
        assert!(err.fields().is_empty());
        assert!(v.simple_called.get());
        assert!(!v.detailed_called.get());
    }

    #[test]
    fn detailed_failure_is_wrapped() {
        let v = MockValidator::new(true, Some("test error"));

        let line = line!() + 1;
        let err = validate(&v).unwrap_err();
        assert_eq!(err.to_string(), "failed validation: test error");
        assert_eq!(err.id(), FAILED_VALIDATION);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.location().line(), line);
        assert!(v.simple_called.get());
        assert!(v.detailed_called.get());
    }

    #[test]
    fn detailed_failed_validation_is_not_rewrapped() {
        struct Nested;

        impl Validator for Nested {
            fn validate(&self) -> Result<(), BoxError> {
                Err(FailedValidation::new(
                    "inner",
                    Fields::from([("name".to_string(), "required".into())]),
                    [Annotation::prefix("nested")],
                )
                .into())
            }
        }

        validatable!(Nested: detailed);

        let err = validate(&Nested).unwrap_err();
        assert_eq!(err.to_string(), "failed validation: nested: inner");
        assert_eq!(err.fields()["name"], "required");
    }

    #[test]
    fn must_validate_panics_with_error_payload() {
        let v = MockValidator::new(false, None);

        let payload = catch_unwind(AssertUnwindSafe(|| must_validate(&v))).unwrap_err();
        let err = payload.downcast::<FailedValidation>().unwrap();

        assert_eq!(err.to_string(), "failed validation: invalid");
        assert!(v.simple_called.get());
        assert!(!v.detailed_called.get());
    }

    #[test]
    fn single_capabilities_dispatch() {
        assert!(validate(&DetailedOnly).is_ok());
        assert!(validate(&SimpleOnly(true)).is_ok());
        assert_eq!(validate(&SimpleOnly(false)).unwrap_err().message(), "invalid");
    }

    #[test]
    #[should_panic(expected = "value must implement SimpleValidator or Validator")]
    fn non_validatable_value_panics() {
        let _ = validate(&Plain);
    }

    #[test]
    #[should_panic(expected = "value must implement SimpleValidator or Validator")]
    fn plain_string_panics() {
        let _ = validate("");
    }

    #[test]
    fn validatable_probe() {
        assert!(is_validatable(&DetailedOnly));
        assert!(is_validatable(&SimpleOnly(false)));
        assert!(is_validatable(&Box::new(DetailedOnly)));
        assert!(!is_validatable(&Plain));
        assert!(!is_validatable(""));
        assert!(!is_validatable(&()));
    }
}
