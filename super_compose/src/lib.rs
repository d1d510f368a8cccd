//! Compose declarative descriptors while keeping what the child overrides.
//!
//! A descriptor is a flat mapping of attribute names to values. Composing a
//! child with a parent fills the child's gaps from the parent and merges
//! attributes both sides define according to the shape of their values.
//! Parent values the child shadows are not dropped: they are archived and
//! exposed on the result through a `$super` accessor in its `computed`
//! group.
//!
//! ```
//! use serde_json::json;
//! use super_compose::{Descriptor, MergeConfig, Value, compose_descriptors};
//!
//! let child = Descriptor::from_json(json!({"title": "Child", "list": [1, 2]}))?;
//! let parent = Descriptor::from_json(json!({"title": "Parent", "icon": "star", "list": [3, 4]}))?;
//!
//! let merged = compose_descriptors(&child, &parent, &MergeConfig::default());
//! assert_eq!(merged.get("title"), Some(&Value::from("Child")));
//! assert_eq!(merged.get("icon"), Some(&Value::from("star")));
//! assert_eq!(merged.get("list"), Some(&Value::from(json!([3, 4, 1, 2]))));
//!
//! let archive = merged.super_archive().expect("accessor installed");
//! assert_eq!(archive.get("title"), Some(&Value::from("Parent")));
//! assert_eq!(archive.get("list"), Some(&Value::from(json!([3, 4]))));
//! # Ok::<_, std::sync::Arc<super_compose::ComposeError>>(())
//! ```
//!
//! Longer chains are built by composing pairwise: the result of one call is
//! a valid parent for the next.

mod composer;
pub mod config;
mod descriptor;
mod error;
mod expose;
mod filter;
mod merge;
mod result_ext;
pub mod value;

use std::sync::Arc;

pub use composer::SuperComposer;
pub use config::{GapFill, MergeConfig, MergeRules};
pub use descriptor::Descriptor;
pub use error::ComposeError;
pub use expose::expose_archive;
pub use filter::{PRIVATE_PREFIX, filter_attributes};
pub use merge::{compose, populate};
pub use result_ext::ComposeResultExt;
pub use value::{Callable, Mapping, Shape, Value};

/// Reserved attribute holding the raw archive between compose and exposure,
/// and the name of the accessor that exposes it afterwards.
pub const ARCHIVE_KEY: &str = "$super";

/// Attribute group that receives the archive accessor.
pub const COMPUTED_KEY: &str = "computed";

/// Result alias used by the JSON conversion helpers.
pub type ComposeResult<T> = Result<T, Arc<ComposeError>>;

/// Compose `child` over `parent` with the shared default rules and expose
/// the archive.
///
/// The result always carries a fresh `computed.$super` accessor over this
/// merge's archive, replacing any accessor inherited from `child` or
/// `parent`.
#[must_use]
pub fn compose_descriptors(child: &Descriptor, parent: &Descriptor, config: &MergeConfig) -> Descriptor {
    expose::expose_merged(compose(child, parent, config, MergeRules::shared()))
}
