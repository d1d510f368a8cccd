//! Exposure of the archive as a derived accessor.

use std::sync::Arc;

use tracing::{trace, warn};

use crate::descriptor::Descriptor;
use crate::value::{Callable, Mapping, Value};
use crate::{ARCHIVE_KEY, COMPUTED_KEY};

/// Move the raw `$super` archive into a zero-argument accessor named
/// `$super` inside the descriptor's `computed` group.
///
/// The archive is captured once; every read of the accessor yields the same
/// captured mapping. Other accessors in the group are kept. A descriptor
/// without a raw archive gets an accessor over an empty mapping, unless the
/// group already holds a `$super` accessor, which is then left intact.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use super_compose::{Descriptor, Value, expose_archive};
///
/// let raw = Descriptor::from_json(json!({
///     "title": "Child",
///     "$super": {"title": "Parent"},
/// }))?;
/// let exposed = expose_archive(raw);
///
/// assert!(!exposed.contains("$super"));
/// let archive = exposed.super_archive().expect("accessor installed");
/// assert_eq!(archive.get("title"), Some(&Value::from("Parent")));
/// # Ok::<_, std::sync::Arc<super_compose::ComposeError>>(())
/// ```
#[must_use]
pub fn expose_archive(mut descriptor: Descriptor) -> Descriptor {
    let archive = match descriptor.take_archive() {
        Some(archive) => archive,
        None if has_accessor(&descriptor) => {
            trace!("archive accessor already installed");
            return descriptor;
        }
        None => Mapping::new(),
    };
    install_archive(descriptor, archive)
}

/// Expose the archive left by a fresh merge.
///
/// Unlike [`expose_archive`], an accessor inherited through the merge is
/// always replaced: a merge that shadowed nothing exposes an empty archive.
pub(crate) fn expose_merged(mut descriptor: Descriptor) -> Descriptor {
    let archive = descriptor.take_archive().unwrap_or_default();
    install_archive(descriptor, archive)
}

fn install_archive(mut descriptor: Descriptor, archive: Mapping) -> Descriptor {
    trace!(entries = archive.len(), "exposing archive");
    install(&mut descriptor, archive_accessor(archive));
    descriptor
}

fn has_accessor(descriptor: &Descriptor) -> bool {
    descriptor
        .computed()
        .is_some_and(|group| group.contains_key(ARCHIVE_KEY))
}

fn archive_accessor(archive: Mapping) -> Callable {
    let captured = Arc::new(Value::Mapping(archive));
    Callable::accessor(ARCHIVE_KEY, move || Value::clone(&captured))
}

fn install(descriptor: &mut Descriptor, accessor: Callable) {
    match descriptor.slot_mut(COMPUTED_KEY) {
        Value::Mapping(group) => {
            group.insert(ARCHIVE_KEY.to_owned(), Value::Callable(accessor));
        }
        other => {
            if other.is_truthy() {
                warn!(shape = %other.shape(), "replacing non-mapping computed group");
            }
            *other = Value::Mapping(Mapping::from([(
                ARCHIVE_KEY.to_owned(),
                Value::Callable(accessor),
            )]));
        }
    }
}
