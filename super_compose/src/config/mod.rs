//! Merge configuration.
//!
//! [`MergeConfig`] carries what a caller supplies per call, while
//! [`MergeRules`] holds the built-in attribute sets and the gap-fill policy.
//! The built-ins are plain data: tests and hosts inject their own
//! [`MergeRules`] instead of mutating shared state.

mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ComposeResult, ComposeResultExt};

pub use rules::{GapFill, IGNORED_ATTRIBUTES, MergeRules, NAMESPACED_ATTRIBUTES};

/// Per-call merge configuration.
///
/// Deserialises from `{ "ignoredAttributes": [...] }`; every field is
/// optional.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use super_compose::MergeConfig;
///
/// let config = MergeConfig::from_json(&json!({"ignoredAttributes": ["icon"]}));
/// assert!(config.is_ignored("icon"));
///
/// // Malformed configuration falls back to the empty default.
/// assert_eq!(MergeConfig::from_json(&json!(42)), MergeConfig::default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeConfig {
    ignored_attributes: Vec<String>,
}

impl MergeConfig {
    /// Create an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ignored_attributes: Vec::new(),
        }
    }

    /// Add attribute names the caller wants left out of the merge.
    #[must_use]
    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_attributes
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Attribute names the caller excluded.
    #[must_use]
    pub fn ignored_attributes(&self) -> &[String] {
        &self.ignored_attributes
    }

    /// Whether the caller excluded `attribute`.
    #[must_use]
    pub fn is_ignored(&self, attribute: &str) -> bool {
        self.ignored_attributes.iter().any(|name| name == attribute)
    }

    /// Read configuration from JSON, rejecting malformed input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComposeError::Json`] when `json` is not an object of
    /// the expected shape.
    pub fn try_from_json(json: &serde_json::Value) -> ComposeResult<Self> {
        Self::deserialize(json).into_compose()
    }

    /// Read configuration from JSON, falling back to the empty default when
    /// the input is malformed.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Self {
        Self::try_from_json(json).unwrap_or_else(|err| {
            debug!(error = %err, "ignoring malformed merge configuration");
            Self::default()
        })
    }
}
