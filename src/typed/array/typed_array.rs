use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::slice;
use std::vec;

use derive_more::{From, IsVariant, TryInto};

use crate::typed::TypeMismatch;
use crate::value::{TypeTag, Value, default_compare};

/// A resizable array restricted to a single declared element type.
///
/// Every mutating entry point checks incoming values against the declared [`TypeTag`] before
/// touching the contents, raising [`TypeMismatch`] (and mutating nothing) on any offender.
/// Transforms that can change the element shape (`map`, `flat_map`, `flatten`, `concat`)
/// re-derive the result's tag and degrade to a plain value sequence when homogeneity breaks; see
/// [`MapOutcome`].
///
/// # Examples
/// ```
/// use typed_collections::typed::TypedArray;
/// use typed_collections::value::{TypeTag, Value};
///
/// let mut array = TypedArray::new(TypeTag::Number);
/// array.push(Value::from(1))?;
/// array.push(Value::from(2))?;
/// assert!(array.push(Value::from("two")).is_err());
/// assert_eq!(array.len(), 2);
/// # Ok::<(), typed_collections::typed::TypeMismatch>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct TypedArray {
    pub(crate) element_type: TypeTag,
    pub(crate) items: Vec<Value>,
}

impl TypedArray {
    /// Creates a new, empty array for elements of the given type.
    pub fn new(element_type: TypeTag) -> TypedArray {
        TypedArray {
            element_type,
            items: Vec::new(),
        }
    }

    /// Creates an array from the given values, which must all carry the declared tag. The check
    /// is all-or-nothing: on failure no array exists.
    ///
    /// # Examples
    /// ```
    /// use typed_collections::typed::TypedArray;
    /// use typed_collections::value::{TypeTag, Value};
    ///
    /// let array = TypedArray::from_values(
    ///     TypeTag::Text,
    ///     vec![Value::from("a"), Value::from("b")],
    /// )?;
    /// assert_eq!(array.len(), 2);
    ///
    /// let mixed = TypedArray::from_values(TypeTag::Text, vec![Value::from("a"), Value::from(1)]);
    /// assert!(mixed.is_err());
    /// # Ok::<(), typed_collections::typed::TypeMismatch>(())
    /// ```
    pub fn from_values(
        element_type: TypeTag,
        values: Vec<Value>,
    ) -> Result<TypedArray, TypeMismatch> {
        TypeMismatch::check_all(element_type, &values)?;
        Ok(TypedArray {
            element_type,
            items: values,
        })
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

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Appends a value, returning the new length.
    pub fn push(&mut self, value: Value) -> Result<usize, TypeMismatch> {
        TypeMismatch::check(self.element_type, &value)?;
        self.items.push(value);
        Ok(self.items.len())
    }

    /// Appends a whole batch, returning the new length. The batch is validated up front, so a
    /// single offender rejects the lot.
    pub fn push_all(&mut self, values: Vec<Value>) -> Result<usize, TypeMismatch> {
        TypeMismatch::check_all(self.element_type, &values)?;
        self.items.extend(values);
        Ok(self.items.len())
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Prepends a value, returning the new length.
    pub fn unshift(&mut self, value: Value) -> Result<usize, TypeMismatch> {
        TypeMismatch::check(self.element_type, &value)?;
        self.items.insert(0, value);
        Ok(self.items.len())
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Option<Value> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Swaps the element at `index` for `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value, TypeMismatch> {
        TypeMismatch::check(self.element_type, &value)?;
        assert!(
            index < self.items.len(),
            "index {} out of bounds for collection with {} elements",
            index,
            self.items.len()
        );
        Ok(mem::replace(&mut self.items[index], value))
    }

    /// Returns the first index at or after `from` holding a value equal to `target`.
    pub fn index_of(&self, target: &Value, from: Option<usize>) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .skip(from.unwrap_or(0))
            .find(|(_, item)| *item == target)
            .map(|(index, _)| index)
    }

    /// Returns the last index at or after `from` holding a value equal to `target`.
    pub fn last_index_of(&self, target: &Value, from: Option<usize>) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .skip(from.unwrap_or(0))
            .rev()
            .find(|(_, item)| *item == target)
            .map(|(index, _)| index)
    }

    pub fn contains(&self, target: &Value) -> bool {
        self.items.contains(target)
    }

    /// Copies the `[start, end)` sub-range into a new array of the same element type. Bounds
    /// beyond the contents are clamped; `end` defaults to the length.
    pub fn slice(&self, start: usize, end: Option<usize>) -> TypedArray {
        let end = end.unwrap_or(self.items.len()).min(self.items.len());
        let start = start.min(end);
        TypedArray {
            element_type: self.element_type,
            items: self.items[start..end].to_vec(),
        }
    }

    /// Removes `delete_count` elements starting at `start` (clamped; default: to the end),
    /// splicing the replacement batch in at the same position. The replacement is validated
    /// before anything is removed.
    pub fn splice(
        &mut self,
        start: usize,
        delete_count: Option<usize>,
        replacement: Vec<Value>,
    ) -> Result<Vec<Value>, TypeMismatch> {
        TypeMismatch::check_all(self.element_type, &replacement)?;
        let len = self.items.len();
        let start = start.min(len);
        let count = delete_count.unwrap_or(len - start).min(len - start);
        Ok(self.items.splice(start..start + count, replacement).collect())
    }

    /// Concatenates two arrays into a new one, re-deriving the element type of the combined
    /// contents: matching tags stay typed, differing tags degrade to a mixed sequence.
    pub fn concat(&self, other: &TypedArray) -> MapOutcome {
        let mut items = self.items.clone();
        items.extend(other.items.iter().cloned());
        self.derive(items)
    }

    /// Sorts in place under the default comparator for the declared element type.
    pub fn sort(&mut self) {
        let compare = default_compare(self.element_type);
        self.items.sort_by(|a, b| compare(a, b));
    }

    /// Sorts in place under the given comparator.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    pub fn join(&self, separator: &str) -> String {
        self.items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<String>>()
            .join(separator)
    }

    /// Applies `f` to every element and re-derives the element type of the results.
    pub fn map<F>(&self, f: F) -> MapOutcome
    where
        F: FnMut(&Value) -> Value,
    {
        self.derive(self.items.iter().map(f).collect())
    }

    /// Keeps the elements satisfying `predicate`; the result keeps this array's element type.
    pub fn filter<F>(&self, mut predicate: F) -> TypedArray
    where
        F: FnMut(&Value) -> bool,
    {
        TypedArray {
            element_type: self.element_type,
            items: self.items.iter().filter(|item| predicate(item)).cloned().collect(),
        }
    }

    /// Applies `f`, unwraps one level of list nesting from each result, then re-derives the
    /// element type.
    pub fn flat_map<F>(&self, f: F) -> MapOutcome
    where
        F: FnMut(&Value) -> Value,
    {
        self.derive(
            self.items
                .iter()
                .map(f)
                .flat_map(Value::flatten_once)
                .collect(),
        )
    }

    /// Unwraps one level of list nesting and re-derives the element type.
    pub fn flatten(&self) -> MapOutcome {
        self.derive(
            self.items
                .iter()
                .cloned()
                .flat_map(Value::flatten_once)
                .collect(),
        )
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    fn derive(&self, items: Vec<Value>) -> MapOutcome {
        if items.is_empty() {
            // Vacuously homogeneous: keep the source tag.
            return MapOutcome::Typed(TypedArray::new(self.element_type));
        }
        match TypeTag::of_all(&items) {
            Some(tag) => MapOutcome::Typed(TypedArray {
                element_type: tag,
                items,
            }),
            None => MapOutcome::Mixed(items),
        }
    }
}

/// The result of a transform that re-derives its element type: results that stayed homogeneous
/// remain a type-checked array under the discovered tag; mixed results degrade to a plain value
/// sequence.
#[derive(Debug, Clone, PartialEq, From, IsVariant, TryInto)]
pub enum MapOutcome {
    Typed(TypedArray),
    Mixed(Vec<Value>),
}

impl IntoIterator for TypedArray {
    type Item = Value;

    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypedArray {
    type Item = &'a Value;

    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Debug for TypedArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedArray")
            .field("element_type", &self.element_type)
            .field("contents", &self.items)
            .field("len", &self.items.len())
            .finish()
    }
}

impl Display for TypedArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.join(", "))
    }
}
