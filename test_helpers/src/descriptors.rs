//! Builders and inspectors for descriptors in tests.

use anyhow::{Context, Result, anyhow};
use super_compose::{Descriptor, Value};

/// Builds a descriptor from a JSON object literal.
///
/// # Errors
///
/// Returns an error when `json` is not an object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use test_helpers::descriptors::descriptor;
///
/// let child = descriptor(json!({"title": "Child"}))?;
/// assert!(child.contains("title"));
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn descriptor(json: serde_json::Value) -> Result<Descriptor> {
    Descriptor::from_json(json).map_err(|err| anyhow!(err.to_string()))
}

/// Reads the exposed archive as JSON.
///
/// # Errors
///
/// Returns an error when no `$super` accessor is installed or the archive
/// holds a callable.
pub fn archive_json(merged: &Descriptor) -> Result<serde_json::Value> {
    let archive = merged
        .super_archive()
        .context("merged descriptor has no $super accessor")?;
    Value::Mapping(archive)
        .to_json()
        .map_err(|err| anyhow!(err.to_string()))
}

/// Reads `attribute` from `merged` as JSON.
///
/// # Errors
///
/// Returns an error when the attribute is missing or holds a callable.
pub fn attribute_json(merged: &Descriptor, attribute: &str) -> Result<serde_json::Value> {
    merged
        .get(attribute)
        .with_context(|| format!("attribute {attribute:?} missing from merged descriptor"))?
        .to_json()
        .map_err(|err| anyhow!(err.to_string()))
}
