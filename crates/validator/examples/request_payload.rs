//! Validating an incoming request payload.
//!
//! Run: `RUST_LOG=tollgate_validator=trace cargo run -p tollgate-validator --example request_payload`

use serde_json::{Value, json};
use tollgate_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let v = create_account();

    copy_validation(&v);
    in_place_validation(&v);
    error_reporting(&v);
}

/// Builds the validator for a `POST /accounts` body.
fn create_account() -> ObjectValidator {
    let address = obj(
        schema! {
            "city" => string(StringOptions::new().min(1).max(80)),
            "zip" => or(
                string(StringOptions::new().pattern(r"^\d{5}$").unwrap()),
                number(NumberOptions::new().only_int(OnlyInt::Error).min(0.0).max(99_999.0)),
            ),
        },
        ObjectOptions::new().unknown_properties(UnknownProperties::Error),
    );

    obj(
        schema! {
            "login" => string(StringOptions::new().min(3).max(32).pattern(r"^[a-z][a-z0-9_]*$").unwrap()),
            "age" => number(NumberOptions::new().only_int(OnlyInt::Floor).min(13.0).max(150.0)),
            "newsletter" => boolean(true, true),
            "page_size" => optional(number(NumberOptions::new().min(1.0).max(100.0)), 20.0),
            "nickname" => nullable(string(StringOptions::new().max(32))),
            "addresses" => array(address, ArrayOptions::new().max(3)),
        },
        ObjectOptions::new().unknown_properties(UnknownProperties::OnlyRemove),
    )
}

/// `validate` returns a cleaned copy and leaves the request untouched.
fn copy_validation(v: &ObjectValidator) {
    println!("=== Copy Validation ===\n");

    let request = json!({
        "login": "ada_l",
        "age": "36.9",
        "newsletter": "0",
        "page_size": null,
        "addresses": [{"city": "London", "zip": "12345"}],
        "utm_source": "mail",
    });

    match v.validate(&request) {
        Ok(clean) => println!("clean:    {}", Value::Object(clean)),
        Err(err) => println!("rejected: {err}"),
    }
    println!("original: {request}\n");
}

/// `validate_in_place` rewrites the request itself.
fn in_place_validation(v: &ObjectValidator) {
    println!("=== In-Place Validation ===\n");

    let mut request = json!({
        "login": "grace",
        "age": 85,
        "newsletter": 1,
        "addresses": [{"city": "Arlington", "zip": 22201}],
    });

    match v.validate_in_place(&mut request) {
        Ok(()) => println!("rewritten: {request}\n"),
        Err(err) => println!("rejected:  {err}\n"),
    }
}

/// Every failure names its kind and where it happened.
fn error_reporting(v: &ObjectValidator) {
    println!("=== Error Reporting ===\n");

    let bad = [
        json!("not an object"),
        json!({"login": "Ada"}),
        json!({"login": "ada", "age": "twelve"}),
        json!({"login": "ada", "age": 12}),
        json!({"login": "ada", "addresses": [{"city": "Paris", "zip": "7500"}]}),
        json!({"login": "ada", "addresses": [{"city": "Paris", "country": "FR"}]}),
    ];

    for input in &bad {
        if let Err(err) = v.validate(input) {
            println!("{:<16} {err}", err.code());
        }
    }
}
