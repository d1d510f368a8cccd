//! The merge engine.
//!
//! [`compose`] walks the parent's filtered attributes in definition order.
//! Gaps in the child are filled straight from the parent; every other
//! attribute goes through [`populate`], which merges by shape and archives
//! whatever the child shadows under the raw `$super` key.

mod populate;

use tracing::{debug, trace};

use crate::config::{MergeConfig, MergeRules};
use crate::descriptor::Descriptor;
use crate::filter::filter_attributes;

pub use populate::populate;

/// Merge `parent` into a copy of `child`.
///
/// The returned descriptor still carries the raw archive under
/// [`ARCHIVE_KEY`](crate::ARCHIVE_KEY) whenever at least one attribute was
/// populated; pass it to [`expose_archive`](crate::expose_archive) to turn
/// the archive into an accessor. Neither input is modified.
///
/// # Examples
///
/// ```
/// use super_compose::{Descriptor, MergeConfig, MergeRules, Value, compose};
///
/// let child = Descriptor::new().with("title", "Child");
/// let parent = Descriptor::new().with("title", "Parent").with("icon", "star");
/// let merged = compose(&child, &parent, &MergeConfig::new(), MergeRules::shared());
///
/// assert_eq!(merged.get("title"), Some(&Value::from("Child")));
/// assert_eq!(merged.get("icon"), Some(&Value::from("star")));
/// let archive = merged.raw_archive().expect("title was shadowed");
/// assert_eq!(archive.get("title"), Some(&Value::from("Parent")));
/// assert!(!archive.contains_key("icon"));
/// ```
#[must_use]
pub fn compose(
    child: &Descriptor,
    parent: &Descriptor,
    config: &MergeConfig,
    rules: &MergeRules,
) -> Descriptor {
    let mut result = child.clone();
    let attributes = filter_attributes(parent.keys(), config, rules);
    debug!(
        parent = parent.len(),
        merged = attributes.len(),
        "composing descriptors"
    );

    for attribute in attributes {
        let Some(value) = parent.get(attribute) else {
            continue;
        };
        if rules.gap_fill().is_vacant(result.get(attribute)) {
            trace!(attribute, "filled gap from parent");
            result.insert(attribute, value.clone());
            continue;
        }
        populate(&mut result, value, attribute, rules);
    }

    result
}
