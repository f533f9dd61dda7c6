use std::fmt::{self, Debug, Display, Formatter};
use std::slice;
use std::vec;

use crate::typed::TypeMismatch;
use crate::value::{TypeTag, Value};

/// A uniqueness-enforcing container restricted to a single declared element type.
///
/// Uniqueness is judged by native value equality and insertion order is preserved. Membership is
/// a linear scan over a backing vector: the value model carries floats, so elements are
/// deliberately not hashed.
///
/// # Examples
/// ```
/// use typed_collections::typed::TypedSet;
/// use typed_collections::value::{TypeTag, Value};
///
/// let mut set = TypedSet::new(TypeTag::Number);
/// assert!(set.add(Value::from(1))?);
/// assert!(!set.add(Value::from(1))?, "duplicates are refused");
/// assert!(set.add(Value::from("one")).is_err());
/// assert_eq!(set.len(), 1);
/// # Ok::<(), typed_collections::typed::TypeMismatch>(())
/// ```
#[derive(Clone)]
pub struct TypedSet {
    pub(crate) element_type: TypeTag,
    pub(crate) items: Vec<Value>,
}

impl TypedSet {
    /// Creates a new, empty set for elements of the given type.
    pub fn new(element_type: TypeTag) -> TypedSet {
        TypedSet {
            element_type,
            items: Vec::new(),
        }
    }

    /// Creates a set from the given values, which must all carry the declared tag (the check is
    /// all-or-nothing). Duplicates collapse; the first occurrence wins.
    pub fn from_values(element_type: TypeTag, values: Vec<Value>) -> Result<TypedSet, TypeMismatch> {
        TypeMismatch::check_all(element_type, &values)?;

        let mut set = TypedSet {
            element_type,
            items: Vec::with_capacity(values.len()),
        };
        for value in values {
            if !set.items.contains(&value) {
                set.items.push(value);
            }
        }
        Ok(set)
    }

    pub const fn element_type(&self) -> TypeTag {
        self.element_type
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a value, returning whether it was newly inserted.
    pub fn add(&mut self, value: Value) -> Result<bool, TypeMismatch> {
        TypeMismatch::check(self.element_type, &value)?;

        if self.items.contains(&value) {
            Ok(false)
        } else {
            self.items.push(value);
            Ok(true)
        }
    }

    /// Removes a value, returning whether it was present.
    pub fn remove(&mut self, value: &Value) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                true
            },
            None => false,
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.contains(value)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Creates the set of elements in either `self` or `other`. (`self ∪ other`)
    ///
    /// Both sides must declare the same element type; [`TypeMismatch`] otherwise.
    pub fn union(&self, other: &TypedSet) -> Result<TypedSet, TypeMismatch> {
        self.check_same_type(other)?;

        let mut result = self.clone();
        for value in &other.items {
            if !result.items.contains(value) {
                result.items.push(value.clone());
            }
        }
        Ok(result)
    }

    /// Creates the set of elements in both `self` and `other`. (`self ∩ other`)
    pub fn intersection(&self, other: &TypedSet) -> Result<TypedSet, TypeMismatch> {
        self.check_same_type(other)?;

        Ok(TypedSet {
            element_type: self.element_type,
            items: self.items
                .iter()
                .filter(|item| other.contains(item))
                .cloned()
                .collect(),
        })
    }

    /// Creates the set of elements in `self` but not `other`. (`self \ other`)
    pub fn difference(&self, other: &TypedSet) -> Result<TypedSet, TypeMismatch> {
        self.check_same_type(other)?;

        Ok(TypedSet {
            element_type: self.element_type,
            items: self.items
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        })
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &TypedSet) -> bool {
        self.items.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &TypedSet) -> bool {
        other.is_subset(self)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    fn check_same_type(&self, other: &TypedSet) -> Result<(), TypeMismatch> {
        if self.element_type == other.element_type {
            Ok(())
        } else {
            Err(TypeMismatch {
                expected: self.element_type,
                values: other.items.clone(),
            })
        }
    }
}

impl IntoIterator for TypedSet {
    type Item = Value;

    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypedSet {
    type Item = &'a Value;

    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl PartialEq for TypedSet {
    /// Set equality: same element type and the same members, regardless of insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.element_type == other.element_type
            && self.items.len() == other.items.len()
            && self.is_subset(other)
    }
}

impl Debug for TypedSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedSet")
            .field("element_type", &self.element_type)
            .field("contents", &self.items)
            .field("len", &self.items.len())
            .finish()
    }
}

impl Display for TypedSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{{{}}}",
            self.items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
