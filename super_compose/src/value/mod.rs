//! Dynamically shaped attribute values.
//!
//! Descriptor attributes carry one of four shapes: plain mappings, ordered
//! sequences, scalars and callables. [`Value::shape`] is the single
//! classification used by the merge engine, and [`Value::is_truthy`] decides
//! whether a slot counts as occupied.

mod callable;
mod serde_impl;
mod shape;

use std::num::FpCategory;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Number;

use crate::{ComposeError, ComposeResult};

pub use callable::Callable;
pub use shape::Shape;

/// Insertion-ordered mapping from keys to values.
///
/// Iteration order follows definition order, which the merge engine relies
/// on when it walks a parent's attributes.
pub type Mapping = IndexMap<String, Value>;

/// A single attribute value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absence of a value. Falsy, and serialised as `null`.
    #[default]
    Undefined,
    /// An explicit `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A JSON number.
    Number(Number),
    /// A string.
    String(String),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// A plain key to value mapping.
    Mapping(Mapping),
    /// An opaque function.
    Callable(Callable),
}

impl Value {
    /// Classify the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use super_compose::{Shape, Value};
    ///
    /// assert_eq!(Value::from(vec![Value::from(1)]).shape(), Shape::Sequence);
    /// assert_eq!(Value::Null.shape(), Shape::Scalar);
    /// ```
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Mapping(_) => Shape::Mapping,
            Self::Sequence(_) => Shape::Sequence,
            Self::Callable(_) => Shape::Callable,
            Self::Undefined | Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => {
                Shape::Scalar
            }
        }
    }

    /// Returns `false` for `Undefined`, `Null`, `false`, numeric zero and the
    /// empty string; `true` for everything else, including empty sequences
    /// and empty mappings.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => !is_zero(number),
            Self::String(text) => !text.is_empty(),
            Self::Sequence(_) | Self::Mapping(_) | Self::Callable(_) => true,
        }
    }

    /// Returns `true` when the value is [`Value::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Borrow the inner mapping, if any.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the inner sequence, if any.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the inner string, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the inner callable, if any.
    #[must_use]
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(callable) => Some(callable),
            _ => None,
        }
    }

    /// Render the value as plain JSON.
    ///
    /// `Undefined` becomes `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Callable`] when the value is, or contains, a
    /// callable.
    pub fn to_json(&self) -> ComposeResult<serde_json::Value> {
        Ok(match self {
            Self::Undefined | Self::Null => serde_json::Value::Null,
            Self::Bool(flag) => serde_json::Value::Bool(*flag),
            Self::Number(number) => serde_json::Value::Number(number.clone()),
            Self::String(text) => serde_json::Value::String(text.clone()),
            Self::Sequence(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(Self::to_json)
                    .collect::<ComposeResult<Vec<_>>>()?,
            ),
            Self::Mapping(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| Ok((key.clone(), value.to_json()?)))
                    .collect::<ComposeResult<serde_json::Map<_, _>>>()?,
            ),
            Self::Callable(callable) => {
                return Err(Arc::new(ComposeError::callable(callable.name())));
            }
        })
    }
}

fn is_zero(number: &Number) -> bool {
    number
        .as_f64()
        .is_some_and(|float| float.classify() == FpCategory::Zero)
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(number.into())
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(number.into())
    }
}

impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Self::Number(number.into())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests;
