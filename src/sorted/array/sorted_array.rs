use std::fmt::{self, Debug, Display, Formatter};
use std::slice;
use std::vec;

use derive_more::{From, IsVariant, TryInto};

use crate::typed::TypeMismatch;
use crate::value::{Compare, TypeTag, Value, default_compare};

use super::search::{insertion_point, locate};

/// A type-checked array that maintains ascending comparator order through binary-search
/// insertion.
///
/// Two invariants hold at every observable moment: the contents are sorted non-descending under
/// the comparator, and every element's tag equals the declared element type. The comparator is
/// trusted to be a strict weak ordering over the elements present; an inconsistent comparator
/// produces a wrong order, never a crash.
///
/// Duplicate keys are fully supported. A "tie run" (a maximal span of elements the comparator
/// considers equal) keeps insertion order - new equal keys land after existing ones - and
/// [`index_of`](SortedArray::index_of) / [`last_index_of`](SortedArray::last_index_of) report
/// the true first/last occurrence within a run by walking value-equal neighbours after the
/// binary search lands.
///
/// # Time Complexity
/// For this analysis, `n` is the number of items and `k` the length of the tie run containing
/// the match.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` (per item) | `O(log n)` search + `O(n)` shift |
/// | `index_of` | `O(log n + k)` |
/// | `last_index_of` | `O(log n + k)` |
/// | `contains` | `O(log n + k)` |
/// | `remove_range` | `O(n)` |
/// | `filter` | `O(n)` |
/// | `slice` | `O(n)` |
/// | `set_compare` | `O(n log n)` |
///
/// The `O(k)` refinement walk is a deliberate trade-off: a bounded variant would return *a*
/// matching index faster but change which of several ties is reported.
///
/// # Examples
/// ```
/// use typed_collections::sorted::SortedArray;
/// use typed_collections::value::{TypeTag, Value};
///
/// let mut array = SortedArray::from_values(
///     TypeTag::Number,
///     None,
///     vec![Value::from(5), Value::from(1), Value::from(3)],
/// )?;
/// assert_eq!(
///     array.to_vec(),
///     vec![Value::from(1), Value::from(3), Value::from(5)],
/// );
///
/// array.add(vec![Value::from(2)])?;
/// assert_eq!(array.index_of(&Value::from(2), None), Some(1));
/// # Ok::<(), typed_collections::typed::TypeMismatch>(())
/// ```
#[derive(Clone)]
pub struct SortedArray {
    pub(crate) element_type: TypeTag,
    pub(crate) compare: Compare,
    pub(crate) items: Vec<Value>,
}

impl SortedArray {
    /// Creates a new, empty array ordered by the default comparator for the given type.
    pub fn new(element_type: TypeTag) -> SortedArray {
        SortedArray {
            element_type,
            compare: default_compare(element_type),
            items: Vec::new(),
        }
    }

    /// Creates a new, empty array ordered by the given comparator.
    pub fn with_compare(element_type: TypeTag, compare: Compare) -> SortedArray {
        SortedArray {
            element_type,
            compare,
            items: Vec::new(),
        }
    }

    /// Creates an array from the given values, inserting each through the sorted-insertion path
    /// so that the final order is comparator order regardless of input order. The whole batch is
    /// validated against the declared tag before anything is inserted: on failure no array
    /// exists.
    ///
    /// Passing `None` for the comparator selects the default for `element_type`.
    pub fn from_values(
        element_type: TypeTag,
        compare: Option<Compare>,
        values: Vec<Value>,
    ) -> Result<SortedArray, TypeMismatch> {
        TypeMismatch::check_all(element_type, &values)?;

        let mut array = match compare {
            Some(compare) => SortedArray::with_compare(element_type, compare),
            None => SortedArray::new(element_type),
        };
        for value in values {
            array.insert_sorted(value);
        }
        Ok(array)
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

    /// Inserts each value, in argument order, at its binary-searched position, returning the new
    /// length. Later values in the batch see earlier ones already inserted. The batch is
    /// validated against the declared tag up front, so a single offender rejects the lot and
    /// mutates nothing.
    ///
    /// A value comparing equal to existing elements is inserted after all of them: ties are
    /// FIFO.
    pub fn add(&mut self, values: Vec<Value>) -> Result<usize, TypeMismatch> {
        TypeMismatch::check_all(self.element_type, &values)?;

        for value in values {
            self.insert_sorted(value);
        }
        Ok(self.items.len())
    }

    /// Returns the first index at or after `from` holding a value equal to `target`, or `None`
    /// if there is no exact occurrence.
    ///
    /// The comparator only steers the binary search; the match itself (and the walk to the start
    /// of a duplicate run) uses native value equality.
    pub fn index_of(&self, target: &Value, from: Option<usize>) -> Option<usize> {
        let lo = from.unwrap_or(0).min(self.items.len());
        let hit = locate(&self.items, target, &*self.compare, lo, self.items.len())?;

        let mut index = hit;
        while index > lo && self.items[index - 1] == *target {
            index -= 1;
        }
        (self.items[index] == *target).then_some(index)
    }

    /// Returns the last index at or after `from` holding a value equal to `target`, or `None` if
    /// there is no exact occurrence. The mirror image of [`index_of`](SortedArray::index_of).
    pub fn last_index_of(&self, target: &Value, from: Option<usize>) -> Option<usize> {
        let lo = from.unwrap_or(0).min(self.items.len());
        let hit = locate(&self.items, target, &*self.compare, lo, self.items.len())?;

        let mut index = hit;
        while index + 1 < self.items.len() && self.items[index + 1] == *target {
            index += 1;
        }
        (self.items[index] == *target).then_some(index)
    }

    /// Returns true iff an exact occurrence of `target` exists at or after `from`.
    pub fn contains(&self, target: &Value, from: Option<usize>) -> bool {
        self.index_of(target, from).is_some()
    }

    /// Removes `delete_count` elements (clamped; default: to the end) starting at `start`,
    /// returning them in order. This is the only bulk removal path, and deliberately the only
    /// splice-shaped operation: admitting replacement values here could put arbitrary elements
    /// at arbitrary positions, so the signature simply has no replacement parameter.
    pub fn remove_range(&mut self, start: usize, delete_count: Option<usize>) -> Vec<Value> {
        let len = self.items.len();
        let start = start.min(len);
        let count = delete_count.unwrap_or(len - start).min(len - start);
        self.items.drain(start..start + count).collect()
    }

    /// Keeps the elements satisfying `predicate`. The result keeps this array's element type
    /// and comparator; filtering a sorted sequence leaves it sorted.
    pub fn filter<F>(&self, mut predicate: F) -> SortedArray
    where
        F: FnMut(&Value) -> bool,
    {
        SortedArray {
            element_type: self.element_type,
            compare: self.compare.clone(),
            items: self.items.iter().filter(|item| predicate(item)).cloned().collect(),
        }
    }

    /// Copies the `[start, end)` sub-range into a new array with the same element type and
    /// comparator. Bounds beyond the contents are clamped; `end` defaults to the length.
    pub fn slice(&self, start: usize, end: Option<usize>) -> SortedArray {
        let end = end.unwrap_or(self.items.len()).min(self.items.len());
        let start = start.min(end);
        SortedArray {
            element_type: self.element_type,
            compare: self.compare.clone(),
            items: self.items[start..end].to_vec(),
        }
    }

    /// Replaces the comparator and re-sorts the whole array under it. This trades the amortized
    /// insertion cost away for one wholesale `O(n log n)` pass; the re-sort is stable, so ties
    /// under the new comparator keep their previous relative order.
    pub fn set_compare(&mut self, compare: Compare) {
        self.items.sort_by(|a, b| compare(a, b));
        self.compare = compare;
    }

    /// Applies `f` to every element and re-derives the element type of the results: a still
    /// homogeneous result becomes a new sorted array under the *default* comparator for the
    /// discovered tag (the original comparator is not reusable against a different element
    /// type), while a mixed result degrades to a plain, unordered sequence.
    pub fn map<F>(&self, f: F) -> MapOutcome
    where
        F: FnMut(&Value) -> Value,
    {
        self.derive(self.items.iter().map(f).collect())
    }

    /// Applies `f`, unwraps one level of list nesting from each result, then re-derives the
    /// element type as [`map`](SortedArray::map) does.
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

    /// Unwraps one level of list nesting and re-derives the element type as
    /// [`map`](SortedArray::map) does.
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

    fn insert_sorted(&mut self, value: Value) {
        let at = insertion_point(&self.items, &value, &*self.compare, 0, self.items.len());
        self.items.insert(at, value);
    }

    fn derive(&self, values: Vec<Value>) -> MapOutcome {
        if values.is_empty() {
            // Vacuously homogeneous: keep the source tag.
            return MapOutcome::Sorted(SortedArray::new(self.element_type));
        }
        match TypeTag::of_all(&values) {
            Some(tag) => {
                let mut array = SortedArray::new(tag);
                for value in values {
                    array.insert_sorted(value);
                }
                MapOutcome::Sorted(array)
            },
            None => MapOutcome::Mixed(values),
        }
    }
}

/// The result of a transform that re-derives its element type: results that stayed homogeneous
/// come back as a new sorted array under the discovered tag's default comparator; mixed results
/// degrade to a plain, unordered value sequence.
#[derive(Debug, Clone, PartialEq, From, IsVariant, TryInto)]
pub enum MapOutcome {
    Sorted(SortedArray),
    Mixed(Vec<Value>),
}

impl IntoIterator for SortedArray {
    type Item = Value;

    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortedArray {
    type Item = &'a Value;

    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl PartialEq for SortedArray {
    /// Equality covers the element type and contents; the comparator, being opaque, is not
    /// compared.
    fn eq(&self, other: &Self) -> bool {
        self.element_type == other.element_type && self.items == other.items
    }
}

impl Debug for SortedArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedArray")
            .field("element_type", &self.element_type)
            .field("contents", &self.items)
            .field("len", &self.items.len())
            .finish()
    }
}

impl Display for SortedArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
