use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::value::{TypeTag, Value};

/// A value (or several) arrived at a container declared for a different element type.
///
/// Carries the offending values alongside the expected tag, so the message names exactly what
/// was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMismatch {
    pub expected: TypeTag,
    pub values: Vec<Value>,
}

impl TypeMismatch {
    pub(crate) fn check(expected: TypeTag, value: &Value) -> Result<(), TypeMismatch> {
        if value.tag() == expected {
            Ok(())
        } else {
            Err(TypeMismatch {
                expected,
                values: vec![value.clone()],
            })
        }
    }

    /// Validates a whole batch before anything is applied, collecting every offender rather than
    /// stopping at the first.
    pub(crate) fn check_all(expected: TypeTag, values: &[Value]) -> Result<(), TypeMismatch> {
        let offending: Vec<Value> = values
            .iter()
            .filter(|value| value.tag() != expected)
            .cloned()
            .collect();

        if offending.is_empty() {
            Ok(())
        } else {
            Err(TypeMismatch {
                expected,
                values: offending,
            })
        }
    }
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected elements of type {}, but received {}!",
            self.expected,
            self.values
                .iter()
                .map(|value| format!("{value} ({})", value.tag()))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}

impl Error for TypeMismatch {}

/// A bounded stack or queue was asked to shrink its capacity below its current population.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityViolation {
    pub capacity: usize,
    pub len: usize,
}

impl Display for CapacityViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to lower the capacity bound to {} for a collection holding {} elements!",
            self.capacity, self.len
        )
    }
}

impl Error for CapacityViolation {}

#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum TypeOrCapacityViolation {
    TypeMismatch(TypeMismatch),
    CapacityViolation(CapacityViolation),
}
