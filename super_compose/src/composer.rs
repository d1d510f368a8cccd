//! Rule-bearing entry point.

use crate::config::{MergeConfig, MergeRules};
use crate::descriptor::Descriptor;
use crate::expose::expose_merged;
use crate::merge::compose;

/// Composes descriptors under a fixed set of [`MergeRules`].
///
/// [`compose_descriptors`](crate::compose_descriptors) uses the shared
/// default rules; build a `SuperComposer` to inject different built-in sets
/// or a different [`GapFill`](crate::GapFill) policy.
///
/// # Examples
///
/// ```
/// use super_compose::{Descriptor, MergeConfig, MergeRules, SuperComposer, Value};
///
/// let composer = SuperComposer::new(MergeRules::empty().with_namespaced(["methods"]));
/// let child = Descriptor::new().with("methods", Value::from(serde_json::json!({"save": 1})));
/// let parent = Descriptor::new().with("methods", Value::from(serde_json::json!({"save": 2})));
///
/// let merged = composer.compose_descriptors(&child, &parent, &MergeConfig::new());
/// let archive = merged.super_archive().expect("accessor installed");
/// assert_eq!(archive.get("methods"), Some(&Value::from(serde_json::json!({"save": 2}))));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuperComposer {
    rules: MergeRules,
}

impl SuperComposer {
    /// Create a composer using `rules`.
    #[must_use]
    pub const fn new(rules: MergeRules) -> Self {
        Self { rules }
    }

    /// The rules this composer applies.
    #[must_use]
    pub const fn rules(&self) -> &MergeRules {
        &self.rules
    }

    /// Merge without exposing the archive. See [`compose`].
    #[must_use]
    pub fn compose(&self, child: &Descriptor, parent: &Descriptor, config: &MergeConfig) -> Descriptor {
        compose(child, parent, config, &self.rules)
    }

    /// Merge and expose this merge's archive as the `computed.$super`
    /// accessor, replacing any inherited one.
    #[must_use]
    pub fn compose_descriptors(
        &self,
        child: &Descriptor,
        parent: &Descriptor,
        config: &MergeConfig,
    ) -> Descriptor {
        expose_merged(self.compose(child, parent, config))
    }
}

impl From<MergeRules> for SuperComposer {
    fn from(rules: MergeRules) -> Self {
        Self::new(rules)
    }
}
