//! End-to-end tests for struct validation and self-validation dispatch.

use http::StatusCode;
use regex_lite::Regex;
use serde_json::{json, Value};
use std::panic::{catch_unwind, AssertUnwindSafe};
use vetted::{
    constrained_struct, is_validatable, must_register_validator, must_validate,
    must_validate_struct, regex_validator, validatable, validate, validate_struct, BoxError,
    FailedValidation, SimpleValidator, Validator, FAILED_VALIDATION,
};

constrained_struct! {
    #[derive(Debug, Default)]
    #[allow(non_snake_case)]
    struct ValidatableStruct {
        first: String => [alias = "first", validate = "required"],
        Second: String => [validate = "custom-validator"],
    }
}

const EXPECTED_MESSAGE: &str = "failed validation: \
    Key: 'ValidatableStruct.first' Error:Field validation for 'first' \
    failed on the 'required' tag\n\
    Key: 'ValidatableStruct.Second' Error:Field validation for 'Second' \
    failed on the 'custom-validator' tag";

fn register_custom_validator() {
    must_register_validator(
        "custom-validator",
        regex_validator(&Regex::new("^valid$").unwrap()),
    );
}

fn valid_struct() -> ValidatableStruct {
    ValidatableStruct {
        first: "required".to_string(),
        Second: "valid".to_string(),
    }
}

#[test]
fn validate_struct_reports_every_field() {
    register_custom_validator();

    let line = line!() + 1;
    let err = validate_struct(&ValidatableStruct::default()).unwrap_err();

    assert_eq!(err.to_string(), EXPECTED_MESSAGE);
    assert_eq!(err.id().to_string(), "failed-validation");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        Value::Object(err.metadata()),
        json!({"fields": {"first": "required", "Second": "custom-validator"}})
    );
    assert!(err.location().file().ends_with("validation_tests.rs"));
    assert_eq!(err.location().line(), line);
}

#[test]
fn validate_struct_accepts_valid_values() {
    register_custom_validator();

    assert!(validate_struct(&valid_struct()).is_ok());
    must_validate_struct(&valid_struct());
}

#[test]
fn mismatched_custom_value_is_reported() {
    register_custom_validator();

    let value = ValidatableStruct {
        first: "required".to_string(),
        Second: "not valid".to_string(),
    };

    let err = validate_struct(&value).unwrap_err();
    assert_eq!(err.fields().len(), 1);
    assert_eq!(err.fields()["Second"], "custom-validator");
}

#[test]
fn must_validate_struct_panics_with_same_message() {
    register_custom_validator();

    let expected = validate_struct(&ValidatableStruct::default())
        .unwrap_err()
        .to_string();

    let payload =
        catch_unwind(|| must_validate_struct(&ValidatableStruct::default())).unwrap_err();
    let raised = payload.downcast::<FailedValidation>().unwrap();

    assert_eq!(raised.to_string(), expected);
    assert_eq!(raised.to_string(), EXPECTED_MESSAGE);
}

#[test]
fn struct_errors_rewrap_without_change() {
    register_custom_validator();

    let err = validate_struct(&ValidatableStruct::default()).unwrap_err();
    let display = err.to_string();
    let fields = err.fields().clone();
    let location = err.location();

    let rewrapped = FailedValidation::wrap(err, []);

    assert_eq!(rewrapped.id(), FAILED_VALIDATION);
    assert_eq!(rewrapped.to_string(), display);
    assert_eq!(rewrapped.fields(), &fields);
    assert_eq!(rewrapped.location(), location);
}

struct Account {
    email: String,
}

impl SimpleValidator for Account {
    fn valid(&self) -> bool {
        !self.email.is_empty()
    }
}

impl Validator for Account {
    fn validate(&self) -> Result<(), BoxError> {
        if !self.email.contains('@') {
            return Err(format!("email '{}' has no domain", self.email).into());
        }
        Ok(())
    }
}

validatable!(Account: simple, detailed);

#[test]
fn self_validation_normalizes_to_failed_validation() {
    let empty = validate(&Account {
        email: String::new(),
    })
    .unwrap_err();
    assert_eq!(empty.to_string(), "failed validation: invalid");
    assert_eq!(empty.id(), FAILED_VALIDATION);

    let malformed = validate(&Account {
        email: "ada".to_string(),
    })
    .unwrap_err();
    assert_eq!(
        malformed.to_string(),
        "failed validation: email 'ada' has no domain"
    );
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    assert!(validate(&Account {
        email: "ada@example.com".to_string(),
    })
    .is_ok());
}

#[test]
fn must_validate_panics_on_invalid_account() {
    let account = Account {
        email: "ada".to_string(),
    };

    let payload = catch_unwind(AssertUnwindSafe(|| must_validate(&account))).unwrap_err();
    let raised = payload.downcast::<FailedValidation>().unwrap();

    assert_eq!(raised.message(), "email 'ada' has no domain");
}

#[test]
fn only_opted_in_types_are_validatable() {
    let account = Account {
        email: String::new(),
    };

    assert!(is_validatable(&account));
    assert!(!is_validatable(&ValidatableStruct::default().first));
    assert!(!is_validatable(&42_u32));
}

#[test]
fn failed_validation_serializes_for_responses() {
    register_custom_validator();

    let err = validate_struct(&ValidatableStruct::default()).unwrap_err();
    let body = serde_json::to_value(&err).unwrap();

    assert_eq!(body["id"], "failed-validation");
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], EXPECTED_MESSAGE);
    assert_eq!(
        body["fields"],
        json!({"first": "required", "Second": "custom-validator"})
    );
}
