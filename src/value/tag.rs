use derive_more::Display;

use super::Value;

/// The semantic type classifier for [`Value`]s, one tag per variant.
///
/// A sequence of values is *homogeneous* iff all of its elements share one tag; the type-checked
/// containers in this crate reject any mutation that would break that property.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Number,
    Text,
    Boolean,
    List,
}

impl TypeTag {
    /// Returns the single tag shared by every value in the sequence, or `None` when the sequence
    /// is mixed or empty. An empty sequence has no determinable tag, and is treated by callers as
    /// vacuously satisfying whichever tag they require.
    ///
    /// # Examples
    /// ```
    /// use typed_collections::value::{TypeTag, Value};
    ///
    /// let numbers = [Value::from(1), Value::from(2)];
    /// assert_eq!(TypeTag::of_all(&numbers), Some(TypeTag::Number));
    ///
    /// let mixed = [Value::from(1), Value::from("two")];
    /// assert_eq!(TypeTag::of_all(&mixed), None);
    /// ```
    pub fn of_all(values: &[Value]) -> Option<TypeTag> {
        let mut tags = values.iter().map(Value::tag);
        let first = tags.next()?;
        tags.all(|tag| tag == first).then_some(first)
    }
}
