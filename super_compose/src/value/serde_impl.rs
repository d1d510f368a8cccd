//! `serde` support for [`Value`].
//!
//! Deserialisation accepts any self-describing data and routes it through
//! [`serde_json::Value`]. Serialisation writes plain data and rejects
//! callables.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => number.serialize(serializer),
            Self::String(text) => serializer.serialize_str(text),
            Self::Sequence(items) => items.serialize(serializer),
            Self::Mapping(map) => map.serialize(serializer),
            Self::Callable(callable) => Err(S::Error::custom(format!(
                "callable '{}' cannot be serialised",
                callable.name().unwrap_or("<anonymous>")
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
