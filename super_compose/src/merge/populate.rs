//! Shape-dispatched merging of a single attribute.

use indexmap::map::Entry;
use tracing::{trace, warn};

use crate::config::{GapFill, MergeRules};
use crate::descriptor::Descriptor;
use crate::value::{Mapping, Value};
use crate::ARCHIVE_KEY;

/// Merge `parent_value` into `result[attribute]`, archiving shadowed parent
/// content under the raw `$super` key.
///
/// The archive is created on first use. Dispatch follows the parent value's
/// shape:
///
/// - mapping over a mapping: child keys win and the parent's values for them
///   are archived; missing or vacant child keys are backfilled from the
///   parent. Nested values are not merged further.
/// - mapping over anything else: every parent entry is archived and the child
///   value is left alone.
/// - sequence: the parent sequence is archived under `attribute`; when the
///   child is a sequence too it becomes parent elements followed by child
///   elements.
/// - scalar or callable: archived under `attribute`; the child value stays.
///
/// Mapping entries are archived under `$super[attribute][key]` when the
/// rules mark `attribute` as namespaced, and under `$super[key]` otherwise.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use super_compose::{Descriptor, MergeRules, Value, populate};
///
/// let mut result = Descriptor::from_json(json!({"list": [1, 2]}))?;
/// populate(&mut result, &Value::from(json!([3, 4])), "list", MergeRules::shared());
///
/// assert_eq!(result.get("list"), Some(&Value::from(json!([3, 4, 1, 2]))));
/// let archive = result.raw_archive().expect("archive created");
/// assert_eq!(archive.get("list"), Some(&Value::from(json!([3, 4]))));
/// # Ok::<_, std::sync::Arc<super_compose::ComposeError>>(())
/// ```
pub fn populate(result: &mut Descriptor, parent_value: &Value, attribute: &str, rules: &MergeRules) {
    let mut archive = result.take_archive().unwrap_or_default();
    let child = result.get_mut(attribute);
    let child_shape = child.as_deref().map(Value::shape);

    match parent_value {
        Value::Mapping(entries) => {
            let namespace = rules.is_namespaced(attribute).then_some(attribute);
            let shadowed: Vec<(&String, &Value)> = match child {
                Some(Value::Mapping(target)) => backfill(target, entries, rules.gap_fill()),
                _ => entries.iter().collect(),
            };
            trace!(
                attribute,
                ?child_shape,
                archived = shadowed.len(),
                namespaced = namespace.is_some(),
                "archived shadowed mapping entries"
            );
            for (key, value) in shadowed {
                archive_entry(&mut archive, namespace, key, value);
            }
        }
        Value::Sequence(items) => {
            if let Some(Value::Sequence(target)) = child {
                let mut merged = items.clone();
                merged.append(target);
                *target = merged;
                trace!(attribute, "concatenated parent and child sequences");
            }
            archive.insert(attribute.to_owned(), Value::Sequence(items.clone()));
        }
        _ => {
            trace!(attribute, shape = %parent_value.shape(), ?child_shape, "archived parent value");
            archive.insert(attribute.to_owned(), parent_value.clone());
        }
    }

    result.insert(ARCHIVE_KEY, archive);
}

/// Fill vacant keys of `target` from `entries` and return the entries the
/// child shadows.
fn backfill<'p>(
    target: &mut Mapping,
    entries: &'p Mapping,
    gap_fill: GapFill,
) -> Vec<(&'p String, &'p Value)> {
    let mut shadowed = Vec::new();
    for (key, value) in entries {
        if gap_fill.is_vacant(target.get(key)) {
            target.insert(key.clone(), value.clone());
        } else {
            shadowed.push((key, value));
        }
    }
    shadowed
}

fn archive_entry(archive: &mut Mapping, namespace: Option<&str>, key: &str, value: &Value) {
    let Some(name) = namespace else {
        archive.insert(key.to_owned(), value.clone());
        return;
    };
    match archive.entry(name.to_owned()) {
        Entry::Occupied(mut slot) => match slot.get_mut() {
            Value::Mapping(nested) => {
                nested.insert(key.to_owned(), value.clone());
            }
            other => {
                if other.is_truthy() {
                    warn!(
                        namespace = name,
                        shape = %other.shape(),
                        "replacing non-mapping archive namespace"
                    );
                }
                *other = nested_archive(key, value);
            }
        },
        Entry::Vacant(slot) => {
            slot.insert(nested_archive(key, value));
        }
    }
}

fn nested_archive(key: &str, value: &Value) -> Value {
    Value::Mapping(Mapping::from([(key.to_owned(), value.clone())]))
}
