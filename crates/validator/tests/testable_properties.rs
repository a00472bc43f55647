//! End-to-end behavior of every validator, one section per documented property.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tollgate_validator::prelude::*;

// ============================================================================
// ABSENT INPUT
// ============================================================================

#[test]
fn absent_input_is_required_everywhere() {
    let absent = Value::Null;

    let kinds = [
        number(NumberOptions::default()).validate(&absent).unwrap_err().kind,
        string(StringOptions::default()).validate(&absent).unwrap_err().kind,
        boolean(false, false).validate(&absent).unwrap_err().kind,
        boolean(true, false).validate(&absent).unwrap_err().kind,
        obj(Schema::new(), ObjectOptions::default())
            .validate(&absent)
            .unwrap_err()
            .kind,
        array(number(NumberOptions::default()), ArrayOptions::default())
            .validate(&absent)
            .unwrap_err()
            .kind,
        or(number(NumberOptions::default()), string(StringOptions::default()))
            .validate(&absent)
            .unwrap_err()
            .kind,
    ];

    assert!(kinds.iter().all(|kind| *kind == ErrorKind::Required));
}

#[test]
fn absent_input_exceptions() {
    assert!(!boolean(false, true).validate(&Value::Null).unwrap());

    let with_default = optional(number(NumberOptions::default()), 7.0);
    assert_eq!(with_default.validate(&Value::Null).unwrap(), Either::Right(7.0));
}

// ============================================================================
// NUMBER
// ============================================================================

#[test]
fn number_floor_with_min_coerces_string() {
    let v = number(NumberOptions::new().only_int(OnlyInt::Floor).min(0.0));
    assert_eq!(v.validate(&json!("3.7")).unwrap(), 3.0);
}

#[test]
fn number_only_int_error_rejects_fraction() {
    let v = number(NumberOptions::new().only_int(OnlyInt::Error));
    assert_eq!(v.validate(&json!(3.5)).unwrap_err().kind, ErrorKind::NonInteger);
}

#[test]
fn number_above_max_is_out_of_range() {
    let v = number(NumberOptions::new().max(10.0));
    assert_eq!(v.validate(&json!(15)).unwrap_err().kind, ErrorKind::OutOfRange);
}

// ============================================================================
// STRING
// ============================================================================

#[test]
fn string_within_bounds_is_returned() {
    let v = string(StringOptions::new().min(2).max(4));
    assert_eq!(v.validate(&json!("ab")).unwrap(), "ab");
}

#[test]
fn string_pattern_mismatch_is_invalid_format() {
    let v = string(StringOptions::new().pattern("^a").unwrap());
    assert_eq!(v.validate(&json!("ba")).unwrap_err().kind, ErrorKind::InvalidFormat);
}

#[test]
fn string_rejects_numbers() {
    let v = string(StringOptions::default());
    assert_eq!(v.validate(&json!(123)).unwrap_err().kind, ErrorKind::WrongType);
}

// ============================================================================
// BOOLEAN LENIENCY
// ============================================================================

#[test]
fn lenient_bool_string_zero_is_false() {
    assert!(!boolean(true, false).validate(&json!("0")).unwrap());
}

#[test]
fn lenient_bool_other_string_is_true() {
    assert!(boolean(true, false).validate(&json!("anything")).unwrap());
}

#[test]
fn strict_bool_rejects_number() {
    let err = boolean(false, false).validate(&json!(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::WrongType);
}

// ============================================================================
// ALTERNATION
// ============================================================================

#[test]
fn or_prefers_first_branch() {
    let v = or(number(NumberOptions::default()), string(StringOptions::default()));
    assert_eq!(v.validate(&json!("5")).unwrap(), Either::Left(5.0));
}

#[test]
fn or_surfaces_second_branch_failure() {
    let v = or(string(StringOptions::new().min(5)), number(NumberOptions::default()));
    let err = v.validate(&json!("ab")).unwrap_err();

    // The first branch failed with OutOfRange; only the second one is seen.
    assert_eq!(err.kind, ErrorKind::WrongType);
    assert_eq!(err.param("expected"), Some("number"));
}

// ============================================================================
// OBJECT
// ============================================================================

fn named(mode: UnknownProperties) -> ObjectValidator {
    obj(
        schema! { "name" => string(StringOptions::default()) },
        ObjectOptions::new().unknown_properties(mode),
    )
}

#[test]
fn object_accepts_unknown_by_default() {
    let out = obj(
        schema! { "name" => string(StringOptions::default()) },
        ObjectOptions::default(),
    )
    .validate(&json!({"name": "x", "extra": 1}))
    .unwrap();
    assert_eq!(Value::Object(out), json!({"name": "x", "extra": 1}));
}

#[test]
fn object_rejects_unknown_in_error_mode() {
    let err = named(UnknownProperties::Error)
        .validate(&json!({"name": "x", "extra": 1}))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownProperty);
    assert!(err.message.contains("extra"));
}

#[test]
fn object_removes_unknown_in_only_remove_mode() {
    let out = named(UnknownProperties::OnlyRemove)
        .validate(&json!({"name": "x", "extra": 1}))
        .unwrap();
    assert_eq!(Value::Object(out), json!({"name": "x"}));
}

/// Known gap: a field declared in the schema but missing from the input is
/// never validated, so the child's "required" check never runs.
#[test]
fn object_does_not_enforce_missing_schema_fields() {
    let v = obj(
        schema! {
            "name" => string(StringOptions::new().min(1)),
            "age" => number(NumberOptions::new().min(18.0)),
        },
        ObjectOptions::new().unknown_properties(UnknownProperties::Error),
    );

    let out = v.validate(&json!({})).unwrap();
    assert!(out.is_empty());

    let out = v.validate(&json!({"name": "x"})).unwrap();
    assert_eq!(Value::Object(out), json!({"name": "x"}));
}

// ============================================================================
// ARRAY
// ============================================================================

#[test]
fn array_size_checked_before_elements() {
    // The elements would fail too; the size failure comes first.
    let v = array(number(NumberOptions::default()), ArrayOptions::new().max(2));
    let err = v.validate(&json!(["a", "b", "c"])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::OutOfRange);
    assert_eq!(err.field, None);
}

#[test]
fn array_elements_are_coerced() {
    let v = array(number(NumberOptions::default()), ArrayOptions::default());
    assert_eq!(v.validate(&json!([1, "2", 3])).unwrap(), vec![1.0, 2.0, 3.0]);
}

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[test]
fn reapplying_to_own_output_is_stable() {
    let n = number(NumberOptions::new().only_int(OnlyInt::Round));
    let first = n.validate(&json!("2.5")).unwrap();
    assert_eq!(n.validate(&json!(first)).unwrap(), first);

    let s = string(StringOptions::new().max(3));
    let first = s.validate(&json!("abc")).unwrap();
    assert_eq!(s.validate(&json!(first)).unwrap(), first);

    let b = boolean(true, false);
    let first = b.validate(&json!("false")).unwrap();
    assert_eq!(b.validate(&json!(first)).unwrap(), first);

    let a = array(number(NumberOptions::default()), ArrayOptions::default());
    let first = a.validate(&json!(["1", 2])).unwrap();
    assert_eq!(a.validate(&json!(first)).unwrap(), first);
}

#[test]
fn object_reapplication_is_a_no_op() {
    let v = obj(
        schema! {
            "count" => number(NumberOptions::new().only_int(OnlyInt::Floor)),
            "on" => boolean(true, false),
        },
        ObjectOptions::new().unknown_properties(UnknownProperties::OnlyRemove),
    );

    let mut input = json!({"count": "4.2", "on": "0", "junk": []});
    v.validate_in_place(&mut input).unwrap();
    let after_first = input.clone();

    v.validate_in_place(&mut input).unwrap();
    assert_eq!(input, after_first);
    assert_eq!(input, json!({"count": 4, "on": false}));
}

#[test]
fn owned_validation_returns_the_input_allocation() {
    let v = obj(
        schema! { "n" => number(NumberOptions::default()) },
        ObjectOptions::default(),
    );

    let input = json!({"n": "1"});
    let Value::Object(map) = &input else {
        unreachable!("literal is an object")
    };
    let before = std::ptr::from_ref(map.get("n").unwrap());

    let out = v.validate_owned(input).unwrap();
    let after = std::ptr::from_ref(out.get("n").unwrap());

    // Same storage, rewritten in place.
    assert_eq!(before, after);
    assert_eq!(out["n"], json!(1));
}
