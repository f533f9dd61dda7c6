#![cfg(test)]

use super::*;
use crate::value::{TypeTag, Value};

#[test]
fn test_fifo_order() {
    let mut queue = Queue::new(TypeTag::Number);

    assert_eq!(queue.enqueue(Value::from(1)), Ok(1));
    assert_eq!(queue.enqueue(Value::from(2)), Ok(2));
    assert_eq!(queue.peek(), Some(&Value::from(1)));

    assert_eq!(queue.dequeue(), Some(Value::from(1)));
    assert_eq!(queue.dequeue(), Some(Value::from(2)));
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
}

#[test]
fn test_type_guard() {
    let mut queue = Queue::new(TypeTag::Boolean);
    queue.enqueue(Value::from(true)).unwrap();

    let error = queue.enqueue(Value::from("true")).unwrap_err();
    assert_eq!(error.expected, TypeTag::Boolean);
    assert_eq!(queue.len(), 1, "A failed enqueue must leave the queue untouched.");
}

#[test]
fn test_bounded_eviction() {
    let mut queue = Queue::bounded(TypeTag::Number, 2);

    queue.enqueue(Value::from(1)).unwrap();
    queue.enqueue(Value::from(2)).unwrap();
    assert_eq!(
        queue.enqueue(Value::from(3)),
        Ok(2),
        "Exceeding the bound displaces rather than fails."
    );

    assert_eq!(
        queue.iter().cloned().collect::<Vec<Value>>(),
        vec![Value::from(2), Value::from(3)],
        "At the bound, the oldest element is dequeued before the new one is admitted."
    );
}

#[test]
fn test_set_capacity() {
    let mut queue = Queue::bounded(TypeTag::Number, 3);
    queue.enqueue(Value::from(1)).unwrap();
    queue.enqueue(Value::from(2)).unwrap();

    let error = queue.set_capacity(Some(1)).unwrap_err();
    assert_eq!(error.capacity, 1);
    assert_eq!(error.len, 2);
    assert_eq!(
        queue.capacity(),
        Some(3),
        "A refused shrink must leave the bound unchanged."
    );

    assert_eq!(queue.set_capacity(Some(2)), Ok(()));
    queue.enqueue(Value::from(3)).unwrap();
    assert_eq!(
        queue.iter().cloned().collect::<Vec<Value>>(),
        vec![Value::from(2), Value::from(3)],
        "The tightened bound should evict on the next admission."
    );
}

#[test]
#[should_panic(expected = "capacity bound must be positive")]
fn test_zero_capacity() {
    Queue::bounded(TypeTag::Number, 0);
}
