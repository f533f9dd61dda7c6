use std::cmp::Ordering;
use std::rc::Rc;

use super::{TypeTag, Value};

/// The shape of an ordering function over values: negative, zero or positive rendered as
/// [`Ordering`].
pub type CompareFn = dyn Fn(&Value, &Value) -> Ordering;

/// A shared, cloneable handle to a comparator.
///
/// Derived containers (slices, filters) keep the comparator of the container they came from, so
/// the handle is reference counted. `Rc` rather than `Arc`: these containers are single-threaded
/// by design.
pub type Compare = Rc<CompareFn>;

/// The default comparator for the given tag: numbers order numerically, text orders
/// lexicographically and everything else orders by its `Display` rendering.
pub fn default_compare(tag: TypeTag) -> Compare {
    match tag {
        TypeTag::Number => Rc::new(number_compare),
        TypeTag::Text => Rc::new(text_compare),
        TypeTag::Boolean | TypeTag::List => Rc::new(display_compare),
    }
}

/// Orders two number values by [`f64::total_cmp`], which unlike raw subtraction stays a total
/// order in the presence of NaN. Non-number operands fall back to [`display_compare`].
pub fn number_compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        _ => display_compare(a, b),
    }
}

/// Orders two text values lexicographically. Non-text operands fall back to [`display_compare`].
pub fn text_compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        _ => display_compare(a, b),
    }
}

/// Orders any two values by their stringified rendering.
pub fn display_compare(a: &Value, b: &Value) -> Ordering {
    a.to_string().cmp(&b.to_string())
}
