#![cfg(test)]

use super::*;
use crate::value::{TypeTag, Value};

#[test]
fn test_lifo_order() {
    let mut stack = Stack::new(TypeTag::Number);

    assert_eq!(stack.push(Value::from(1)), Ok(1));
    assert_eq!(stack.push(Value::from(2)), Ok(2));
    assert_eq!(stack.peek(), Some(&Value::from(2)));

    assert_eq!(stack.pop(), Some(Value::from(2)));
    assert_eq!(stack.pop(), Some(Value::from(1)));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_type_guard() {
    let mut stack = Stack::new(TypeTag::Text);
    stack.push(Value::from("a")).unwrap();

    let error = stack.push(Value::from(1)).unwrap_err();
    assert_eq!(error.expected, TypeTag::Text);
    assert_eq!(stack.len(), 1, "A failed push must leave the stack untouched.");
}

#[test]
fn test_bounded_eviction() {
    let mut stack = Stack::bounded(TypeTag::Number, 2);

    stack.push(Value::from(1)).unwrap();
    stack.push(Value::from(2)).unwrap();
    assert_eq!(
        stack.push(Value::from(3)),
        Ok(2),
        "Exceeding the bound displaces rather than fails."
    );

    assert_eq!(
        stack.iter().cloned().collect::<Vec<Value>>(),
        vec![Value::from(1), Value::from(3)],
        "At the bound, the current top is popped before the new value is admitted."
    );
}

#[test]
fn test_set_capacity() {
    let mut stack = Stack::new(TypeTag::Number);
    stack.push(Value::from(1)).unwrap();
    stack.push(Value::from(2)).unwrap();
    stack.push(Value::from(3)).unwrap();

    let error = stack.set_capacity(Some(2)).unwrap_err();
    assert_eq!(error.capacity, 2);
    assert_eq!(error.len, 3);
    assert_eq!(
        stack.capacity(),
        None,
        "A refused shrink must leave the bound unchanged."
    );

    assert_eq!(stack.set_capacity(Some(3)), Ok(()));
    assert_eq!(stack.capacity(), Some(3));

    stack.push(Value::from(4)).unwrap();
    assert_eq!(stack.len(), 3, "The new bound should take effect immediately.");

    assert_eq!(stack.set_capacity(None), Ok(()));
    stack.push(Value::from(5)).unwrap();
    assert_eq!(stack.len(), 4, "Removing the bound should stop eviction.");
}

#[test]
#[should_panic(expected = "capacity bound must be positive")]
fn test_zero_capacity() {
    Stack::bounded(TypeTag::Number, 0);
}
