//! Self Validation
//!
//! This example demonstrates values that validate themselves.
//!
//! Key concepts:
//! - `SimpleValidator` for a yes/no check
//! - `Validator` for a descriptive error
//! - Opting in with `validatable!`
//! - Simple checks short-circuit detailed ones
//!
//! Run with: cargo run --example self_validation

use vetted::{
    is_validatable, validatable, validate, Annotation, BoxError, FailedValidation, Fields,
    SimpleValidator, Validator,
};

struct Transfer {
    amount: u64,
    currency: String,
}

impl SimpleValidator for Transfer {
    fn valid(&self) -> bool {
        self.amount > 0
    }
}

impl Validator for Transfer {
    fn validate(&self) -> Result<(), BoxError> {
        if self.currency.len() != 3 {
            return Err(FailedValidation::new(
                format!("unknown currency '{}'", self.currency),
                Fields::from([("currency".to_string(), "iso4217".into())]),
                [Annotation::prefix("transfer")],
            )
            .into());
        }
        Ok(())
    }
}

validatable!(Transfer: simple, detailed);

struct Note(String);

validatable!(Note);

fn report(label: &str, transfer: &Transfer) {
    match validate(transfer) {
        Ok(()) => println!("  {label}: valid"),
        Err(err) => println!("  {label}: {err} (fields: {:?})", err.fields()),
    }
}

fn main() {
    println!("=== Self Validation Example ===\n");

    // Example 1: Capability probing
    println!("Example 1: Probing Capabilities");
    let transfer = Transfer {
        amount: 10,
        currency: "EUR".to_string(),
    };
    println!("  Transfer validatable: {}", is_validatable(&transfer));
    println!("  Note validatable: {}", is_validatable(&Note("memo".to_string())));
    println!("  &str validatable: {}\n", is_validatable("memo"));

    // Example 2: Both checks
    println!("Example 2: Dispatch");
    report("valid transfer", &transfer);
    report(
        "zero amount",
        &Transfer {
            amount: 0,
            currency: "nope".to_string(),
        },
    );
    report(
        "bad currency",
        &Transfer {
            amount: 5,
            currency: "euro".to_string(),
        },
    );
    println!();

    println!("Key Takeaways:");
    println!("- A failed simple check yields 'invalid' and skips the detailed check");
    println!("- Detailed errors are wrapped; existing failed validations keep their identity");
    println!("- Values without either capability must not be passed to validate");

    println!("\n=== Example Complete ===");
}
