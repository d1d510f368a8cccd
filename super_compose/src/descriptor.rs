//! Descriptor container.
//!
//! A [`Descriptor`] is a flat, insertion-ordered mapping from attribute names
//! to [`Value`]s. Compose borrows its inputs and always builds a fresh
//! descriptor, so callers keep ownership of the originals.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::value::{Mapping, Value};
use crate::{ARCHIVE_KEY, COMPUTED_KEY, ComposeError, ComposeResult};

/// A component's declared attributes.
///
/// # Examples
///
/// ```
/// use super_compose::{Descriptor, Value};
///
/// let descriptor = Descriptor::new()
///     .with("title", "Child")
///     .with("list", vec![Value::from(1), Value::from(2)]);
/// assert_eq!(descriptor.get("title"), Some(&Value::from("Child")));
/// assert_eq!(descriptor.keys().collect::<Vec<_>>(), ["title", "list"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptor {
    attributes: Mapping,
}

impl Descriptor {
    /// Create an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a descriptor from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::NotAMapping`] when `json` is not an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use super_compose::Descriptor;
    ///
    /// let descriptor = Descriptor::from_json(json!({"title": "Parent"}))?;
    /// assert!(descriptor.contains("title"));
    /// assert!(Descriptor::from_json(json!([1, 2])).is_err());
    /// # Ok::<_, std::sync::Arc<super_compose::ComposeError>>(())
    /// ```
    pub fn from_json(json: serde_json::Value) -> ComposeResult<Self> {
        match Value::from(json) {
            Value::Mapping(attributes) => Ok(Self { attributes }),
            other => Err(Arc::new(ComposeError::NotAMapping {
                found: other.shape(),
            })),
        }
    }

    /// Render the descriptor as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Callable`] when any attribute holds a callable,
    /// including the accessors installed by
    /// [`expose_archive`](crate::expose_archive).
    pub fn to_json(&self) -> ComposeResult<serde_json::Value> {
        self.attributes
            .iter()
            .map(|(key, value)| Ok((key.clone(), value.to_json()?)))
            .collect::<ComposeResult<serde_json::Map<_, _>>>()
            .map(serde_json::Value::Object)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(attribute, value);
        self
    }

    /// Set `attribute`, returning the previous value. New attributes are
    /// appended; existing ones keep their position.
    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(attribute.into(), value.into())
    }

    /// Remove `attribute`, preserving the order of the remaining attributes.
    pub fn remove(&mut self, attribute: &str) -> Option<Value> {
        self.attributes.shift_remove(attribute)
    }

    /// Look up `attribute`.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    /// Look up `attribute` mutably.
    pub fn get_mut(&mut self, attribute: &str) -> Option<&mut Value> {
        self.attributes.get_mut(attribute)
    }

    /// Whether `attribute` is present, whatever its value.
    #[must_use]
    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes.contains_key(attribute)
    }

    /// Attribute names in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Attributes in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the descriptor has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Borrow the underlying mapping.
    #[must_use]
    pub const fn attributes(&self) -> &Mapping {
        &self.attributes
    }

    /// Consume the descriptor, returning the underlying mapping.
    #[must_use]
    pub fn into_attributes(self) -> Mapping {
        self.attributes
    }

    /// The `computed` accessor group, when it is a mapping.
    #[must_use]
    pub fn computed(&self) -> Option<&Mapping> {
        self.get(COMPUTED_KEY).and_then(Value::as_mapping)
    }

    /// Read the archive of shadowed parent values by invoking the `$super`
    /// accessor in the `computed` group.
    ///
    /// Returns `None` until [`expose_archive`](crate::expose_archive) has
    /// installed the accessor.
    #[must_use]
    pub fn super_archive(&self) -> Option<Mapping> {
        let accessor = self.computed()?.get(ARCHIVE_KEY)?.as_callable()?;
        match accessor.invoke() {
            Value::Mapping(archive) => Some(archive),
            _ => None,
        }
    }

    /// The raw `$super` mapping held before exposure.
    #[must_use]
    pub fn raw_archive(&self) -> Option<&Mapping> {
        self.get(ARCHIVE_KEY).and_then(Value::as_mapping)
    }

    /// Remove the raw `$super` key.
    ///
    /// Returns `None` when the key is absent. A present value that is not a
    /// mapping yields an empty archive.
    pub(crate) fn take_archive(&mut self) -> Option<Mapping> {
        match self.remove(ARCHIVE_KEY)? {
            Value::Mapping(archive) => Some(archive),
            other => {
                if other.is_truthy() {
                    warn!(shape = %other.shape(), "discarding non-mapping archive slot");
                }
                Some(Mapping::new())
            }
        }
    }

    /// Slot for `attribute`, inserting [`Value::Undefined`] when absent.
    pub(crate) fn slot_mut(&mut self, attribute: &str) -> &mut Value {
        self.attributes.entry(attribute.to_owned()).or_default()
    }
}

impl From<Mapping> for Descriptor {
    fn from(attributes: Mapping) -> Self {
        Self { attributes }
    }
}

impl<K, V> FromIterator<(K, V)> for Descriptor
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Descriptor {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Callable;
    use serde_json::json;

    #[test]
    fn from_json_rejects_non_objects() {
        let err = Descriptor::from_json(json!("text"))
            .err()
            .unwrap_or_else(|| panic!("scalars are not descriptors"));
        assert!(matches!(
            &*err,
            ComposeError::NotAMapping { found } if found.as_str() == "scalar"
        ));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut descriptor: Descriptor = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        descriptor.remove("a");
        assert_eq!(descriptor.keys().collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn take_archive_distinguishes_absent_from_malformed() {
        let mut absent = Descriptor::new();
        assert!(absent.take_archive().is_none());

        let mut malformed = Descriptor::new().with(ARCHIVE_KEY, "oops");
        assert_eq!(malformed.take_archive(), Some(Mapping::new()));
        assert!(!malformed.contains(ARCHIVE_KEY));
    }

    #[test]
    fn super_archive_requires_an_installed_accessor() {
        let plain = Descriptor::new().with(COMPUTED_KEY, Mapping::new());
        assert!(plain.super_archive().is_none());

        let mut group = Mapping::new();
        group.insert(
            ARCHIVE_KEY.to_owned(),
            Value::from(Callable::accessor(ARCHIVE_KEY, || {
                Value::from(json!({"title": "Parent"}))
            })),
        );
        let exposed = Descriptor::new().with(COMPUTED_KEY, group);
        let archive = exposed
            .super_archive()
            .unwrap_or_else(|| panic!("accessor must yield the archive"));
        assert_eq!(archive.get("title"), Some(&Value::from("Parent")));
    }

    #[test]
    fn serde_round_trip_keeps_definition_order() {
        let parsed: Descriptor = serde_json::from_str(r#"{"zeta": 1, "$super": {"a": [1]}, "alpha": null}"#)
            .unwrap_or_else(|err| panic!("object must parse: {err}"));
        assert_eq!(parsed.keys().collect::<Vec<_>>(), ["zeta", ARCHIVE_KEY, "alpha"]);
        assert_eq!(parsed.get("alpha"), Some(&Value::Null));

        let text = serde_json::to_string(&parsed)
            .unwrap_or_else(|err| panic!("plain data must serialise: {err}"));
        assert_eq!(text, r#"{"zeta":1,"$super":{"a":[1]},"alpha":null}"#);
    }

    #[test]
    fn deserialize_rejects_non_objects() {
        assert!(serde_json::from_str::<Descriptor>("[1, 2]").is_err());
    }

    #[test]
    fn to_json_fails_on_callables() {
        let descriptor = Descriptor::new().with("mounted", Callable::new(|_| Value::Null));
        assert!(descriptor.to_json().is_err());
    }
}
