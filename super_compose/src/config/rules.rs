//! Built-in attribute sets and the gap-fill policy.

use std::sync::LazyLock;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::value::Value;
use crate::{ComposeResult, ComposeResultExt};

/// Attributes that never take part in a merge.
pub const IGNORED_ATTRIBUTES: &[&str] = &["render", "staticRenderFns"];

/// Attributes whose shadowed mapping entries are archived under their own
/// name rather than flattened into the archive root.
pub const NAMESPACED_ATTRIBUTES: &[&str] = &["components", "watch"];

static SHARED_RULES: LazyLock<MergeRules> = LazyLock::new(MergeRules::default);

/// Decides whether a child slot counts as a gap the parent may fill.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum GapFill {
    /// Falsy slots are gaps: absent, undefined, `null`, `false`, zero and
    /// the empty string are all overwritten without archiving.
    #[default]
    Falsy,
    /// Only absent or undefined slots are gaps.
    Absent,
}

impl GapFill {
    /// Whether `slot` may be filled from the parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use super_compose::{GapFill, Value};
    ///
    /// assert!(GapFill::Falsy.is_vacant(Some(&Value::from(0))));
    /// assert!(!GapFill::Absent.is_vacant(Some(&Value::from(0))));
    /// assert!(GapFill::Absent.is_vacant(None));
    /// ```
    #[must_use]
    pub fn is_vacant(self, slot: Option<&Value>) -> bool {
        match (self, slot) {
            (_, None) => true,
            (Self::Falsy, Some(value)) => !value.is_truthy(),
            (Self::Absent, Some(value)) => value.is_undefined(),
        }
    }
}

/// Built-in merge rules.
///
/// The default carries [`IGNORED_ATTRIBUTES`], [`NAMESPACED_ATTRIBUTES`] and
/// [`GapFill::Falsy`].
///
/// # Examples
///
/// ```
/// use super_compose::{GapFill, MergeRules};
///
/// let rules = MergeRules::default()
///     .with_namespaced(["directives"])
///     .with_gap_fill(GapFill::Absent);
/// assert!(rules.is_namespaced("components"));
/// assert!(rules.is_namespaced("directives"));
/// assert!(rules.is_ignored("render"));
/// ```
///
/// Rules can also be loaded from JSON; omitted fields keep their defaults:
///
/// ```
/// use serde_json::json;
/// use super_compose::{GapFill, MergeRules};
///
/// let rules = MergeRules::try_from_json(&json!({"gapFill": "absent"}))?;
/// assert_eq!(rules.gap_fill(), GapFill::Absent);
/// assert!(rules.is_namespaced("watch"));
/// # Ok::<_, std::sync::Arc<super_compose::ComposeError>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeRules {
    ignored: IndexSet<String>,
    namespaced: IndexSet<String>,
    gap_fill: GapFill,
}

impl Default for MergeRules {
    fn default() -> Self {
        Self::empty()
            .with_ignored(IGNORED_ATTRIBUTES.iter().copied())
            .with_namespaced(NAMESPACED_ATTRIBUTES.iter().copied())
    }
}

impl MergeRules {
    /// Rules with no built-in attributes and [`GapFill::Falsy`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ignored: IndexSet::new(),
            namespaced: IndexSet::new(),
            gap_fill: GapFill::default(),
        }
    }

    /// Load rules from JSON such as
    /// `{"ignored": [...], "namespaced": [...], "gapFill": "absent"}`.
    ///
    /// A field that is present replaces the matching default set.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Json`](crate::ComposeError::Json) when `json`
    /// does not describe a rule set.
    pub fn try_from_json(json: &serde_json::Value) -> ComposeResult<Self> {
        Self::deserialize(json).into_compose()
    }

    /// Process-wide default rules, initialised on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED_RULES
    }

    /// Add attributes that never take part in a merge.
    #[must_use]
    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add namespaced attributes.
    #[must_use]
    pub fn with_namespaced<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaced.extend(names.into_iter().map(Into::into));
        self
    }

    /// Replace the gap-fill policy.
    #[must_use]
    pub const fn with_gap_fill(mut self, gap_fill: GapFill) -> Self {
        self.gap_fill = gap_fill;
        self
    }

    /// Whether `attribute` is in the built-in ignore set.
    #[must_use]
    pub fn is_ignored(&self, attribute: &str) -> bool {
        self.ignored.contains(attribute)
    }

    /// Whether `attribute` is namespaced.
    #[must_use]
    pub fn is_namespaced(&self, attribute: &str) -> bool {
        self.namespaced.contains(attribute)
    }

    /// The active gap-fill policy.
    #[must_use]
    pub const fn gap_fill(&self) -> GapFill {
        self.gap_fill
    }

    /// Built-in ignored attributes in insertion order.
    pub fn ignored(&self) -> impl Iterator<Item = &str> {
        self.ignored.iter().map(String::as_str)
    }

    /// Namespaced attributes in insertion order.
    pub fn namespaced(&self) -> impl Iterator<Item = &str> {
        self.namespaced.iter().map(String::as_str)
    }
}
