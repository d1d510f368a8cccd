//! Attribute filtering.
//!
//! Only the parent's attributes that survive [`filter_attributes`] take part
//! in a merge; everything else is neither copied nor archived.

use tracing::debug;

use crate::config::{MergeConfig, MergeRules};

/// Prefix marking an attribute as private.
pub const PRIVATE_PREFIX: char = '_';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Exclusion {
    Caller,
    BuiltIn,
    Private,
}

fn exclusion(attribute: &str, config: &MergeConfig, rules: &MergeRules) -> Option<Exclusion> {
    if config.is_ignored(attribute) {
        Some(Exclusion::Caller)
    } else if rules.is_ignored(attribute) {
        Some(Exclusion::BuiltIn)
    } else if attribute.starts_with(PRIVATE_PREFIX) {
        Some(Exclusion::Private)
    } else {
        None
    }
}

/// Select the attribute names that participate in a merge.
///
/// A name is dropped when the caller ignores it, when the rules' built-in
/// ignore set contains it, or when it starts with [`PRIVATE_PREFIX`]. Input
/// order is preserved.
///
/// # Examples
///
/// ```
/// use super_compose::{MergeConfig, MergeRules, filter_attributes};
///
/// let config = MergeConfig::new().with_ignored(["icon"]);
/// let kept = filter_attributes(
///     ["title", "icon", "render", "_cache", "list"],
///     &config,
///     MergeRules::shared(),
/// );
/// assert_eq!(kept, ["title", "list"]);
/// ```
#[must_use]
pub fn filter_attributes<'a, I>(names: I, config: &MergeConfig, rules: &MergeRules) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| {
            exclusion(name, config, rules)
                .inspect(|reason| debug!(attribute = *name, ?reason, "attribute excluded from merge"))
                .is_none()
        })
        .collect()
}
