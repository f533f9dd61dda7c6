#![cfg(test)]

use std::cmp::Ordering;

use super::*;

#[test]
fn test_tag_classification() {
    assert_eq!(Value::from(1.5).tag(), TypeTag::Number);
    assert_eq!(Value::from(7).tag(), TypeTag::Number);
    assert_eq!(Value::from("seven").tag(), TypeTag::Text);
    assert_eq!(Value::from(true).tag(), TypeTag::Boolean);
    assert_eq!(Value::from(vec![Value::from(1)]).tag(), TypeTag::List);
}

#[test]
fn test_homogeneity_derivation() {
    assert_eq!(
        TypeTag::of_all(&[Value::from(1), Value::from(2), Value::from(3)]),
        Some(TypeTag::Number),
        "A uniform sequence should derive its shared tag."
    );
    assert_eq!(
        TypeTag::of_all(&[Value::from(1), Value::from("two")]),
        None,
        "A mixed sequence has no shared tag."
    );
    assert_eq!(
        TypeTag::of_all(&[]),
        None,
        "The empty sequence has no determinable tag."
    );
}

#[test]
fn test_number_compare() {
    let compare = default_compare(TypeTag::Number);
    assert_eq!(compare(&Value::from(1), &Value::from(2)), Ordering::Less);
    assert_eq!(compare(&Value::from(2), &Value::from(2)), Ordering::Equal);
    assert_eq!(
        compare(&Value::from(-1.5), &Value::from(-2.5)),
        Ordering::Greater,
        "Negative fractions should order numerically, not lexically."
    );
    assert_eq!(
        compare(&Value::from(10), &Value::from(9)),
        Ordering::Greater,
        "Multi-digit numbers should order numerically, not lexically."
    );
}

#[test]
fn test_text_compare() {
    let compare = default_compare(TypeTag::Text);
    assert_eq!(compare(&Value::from("apple"), &Value::from("banana")), Ordering::Less);
    assert_eq!(compare(&Value::from("pear"), &Value::from("pear")), Ordering::Equal);
    assert_eq!(compare(&Value::from("b"), &Value::from("ab")), Ordering::Greater);
}

#[test]
fn test_display_compare_fallback() {
    let compare = default_compare(TypeTag::Boolean);
    assert_eq!(
        compare(&Value::from(false), &Value::from(true)),
        Ordering::Less,
        "Booleans should order by rendering: \"false\" < \"true\"."
    );

    let compare = default_compare(TypeTag::List);
    assert_eq!(
        compare(
            &Value::List(vec![Value::from("a")]),
            &Value::List(vec![Value::from("b")]),
        ),
        Ordering::Less
    );
}

#[test]
fn test_display_rendering() {
    assert_eq!(Value::from(1).to_string(), "1");
    assert_eq!(Value::from(2.5).to_string(), "2.5");
    assert_eq!(Value::from("plain").to_string(), "plain");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(
        Value::List(vec![Value::from(1), Value::from("two")]).to_string(),
        "[1, two]"
    );
}
