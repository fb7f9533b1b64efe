//! Struct Validation
//!
//! This example demonstrates tag-driven validation of annotated structs.
//!
//! Key concepts:
//! - Constraint tags declared per field with `constrained_struct!`
//! - Custom tags backed by regular expressions
//! - Every violating field reported in one error
//! - The failed-validation error as an HTTP response body
//!
//! Run with: cargo run --example struct_validation

use regex_lite::Regex;
use vetted::{constrained_struct, must_register_validator, regex_validator, validate_struct};

constrained_struct! {
    #[derive(Default)]
    struct Address {
        city: String => [alias = "city", validate = "required"],
        postcode: String => [alias = "postcode,omitempty", validate = "omitempty,postcode"],
    }
}

constrained_struct! {
    #[derive(Default)]
    struct Signup {
        email: String => [alias = "email", validate = "required,email"],
        nickname: String => [alias = "-", validate = "required"],
        address: Address => [alias = "address"],
    }
}

fn main() {
    println!("=== Struct Validation Example ===\n");

    // Example 1: Registering custom tags
    println!("Example 1: Custom Tags");
    let email = Regex::new(r"[^@\s]+@[^@\s]+\.[a-z]+").unwrap();
    let postcode = Regex::new(r"[0-9]{5}").unwrap();
    must_register_validator("email", regex_validator(&email));
    must_register_validator("postcode", regex_validator(&postcode));
    println!("  Registered 'email' and 'postcode' (whole-string matches)\n");

    // Example 2: A valid value
    println!("Example 2: Valid Signup");
    let signup = Signup {
        email: "ada@example.org".to_string(),
        nickname: "ada".to_string(),
        address: Address {
            city: "London".to_string(),
            postcode: String::new(),
        },
    };
    match validate_struct(&signup) {
        Ok(()) => println!("  Passed (empty postcode skipped by omitempty)\n"),
        Err(err) => println!("  Unexpected failure: {err}\n"),
    }

    // Example 3: Every violation at once
    println!("Example 3: Invalid Signup");
    let signup = Signup {
        email: "not-an-email".to_string(),
        address: Address {
            postcode: "12".to_string(),
            ..Address::default()
        },
        ..Signup::default()
    };
    if let Err(err) = validate_struct(&signup) {
        println!("  Message:\n    {}", err.to_string().replace('\n', "\n    "));
        println!("  Status: {}", err.status());
        println!("  Fields:");
        for (field, tag) in err.fields() {
            println!("    {field} -> {tag}");
        }
        println!("  Raised at: {}\n", err.location());

        // Example 4: Response body
        println!("Example 4: Response Body");
        match serde_json::to_string_pretty(&err) {
            Ok(body) => println!("{body}\n"),
            Err(err) => println!("  Serialization failed: {err}\n"),
        }
    }

    println!("Key Takeaways:");
    println!("- Field keys come from the alias, or the field name when absent or '-'");
    println!("- Nested structs report dotted keys such as 'address.city'");
    println!("- All violations are collected, one per field");

    println!("\n=== Example Complete ===");
}
