//! Reconfiguring the shared engine.
//!
//! Kept in its own test binary: swapping the shared engine would race with
//! tests that rely on the default configuration.

use vetted::engine::replace;
use vetted::{
    constrained_struct, set_tag_name_func, validate_struct, EngineBuilder, FieldDescriptor,
};

constrained_struct! {
    #[derive(Default)]
    struct Profile {
        display_name: String => [alias = "displayName", validate = "required"],
        handle: String => [alias = "handle", validate = "required,lowercase"],
    }
}

#[test]
fn shared_engine_can_be_replaced_and_renamed() {
    let configured = EngineBuilder::new()
        .register("lowercase", |value| {
            value
                .as_str()
                .is_some_and(|s| s.chars().all(|c| !c.is_uppercase()))
        })
        .build()
        .unwrap();
    let previous = replace(configured);
    assert!(!previous.has_validation("lowercase"));

    let profile = Profile {
        display_name: String::new(),
        handle: "Ada".to_string(),
    };

    let err = validate_struct(&profile).unwrap_err();
    assert_eq!(err.fields()["displayName"], "required");
    assert_eq!(err.fields()["handle"], "lowercase");

    set_tag_name_func(|field: &FieldDescriptor| field.ident().to_string());

    let err = validate_struct(&profile).unwrap_err();
    assert_eq!(err.fields()["display_name"], "required");
    assert_eq!(err.fields()["handle"], "lowercase");

    replace(previous);
}
