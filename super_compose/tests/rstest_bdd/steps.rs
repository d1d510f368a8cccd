//! Step definitions for descriptor composition scenarios.

use crate::fixtures::ComposeContext;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use super_compose::{Descriptor, MergeConfig, compose_descriptors, expose_archive};
use test_helpers::descriptors::{archive_json, attribute_json};
use test_helpers::text::{normalize_scalar, parse_names, parse_value};

fn set_attribute(slot: &rstest_bdd::Slot<Descriptor>, attribute: &str, value: &str) {
    let mut descriptor = slot.take().unwrap_or_default();
    descriptor.insert(normalize_scalar(attribute), parse_value(value));
    slot.set(descriptor);
}

fn merged(compose_context: &ComposeContext) -> Result<Descriptor> {
    compose_context
        .merged
        .with_ref(Descriptor::clone)
        .ok_or_else(|| anyhow!("descriptors have not been composed"))
}

#[given("the child sets {attribute} to {value}")]
fn child_sets(compose_context: &ComposeContext, attribute: String, value: String) {
    set_attribute(&compose_context.child, &attribute, &value);
}

#[given("the parent sets {attribute} to {value}")]
fn parent_sets(compose_context: &ComposeContext, attribute: String, value: String) {
    set_attribute(&compose_context.parent, &attribute, &value);
}

#[given("the caller ignores {names}")]
fn caller_ignores(compose_context: &ComposeContext, names: String) -> Result<()> {
    ensure!(
        compose_context.ignored.is_empty(),
        "ignored attributes already initialised"
    );
    compose_context.ignored.set(parse_names(&names));
    Ok(())
}

#[when("the descriptors are composed")]
fn compose(compose_context: &ComposeContext) {
    let child = compose_context.child.take().unwrap_or_default();
    let parent = compose_context.parent.take().unwrap_or_default();
    let config = MergeConfig::new().with_ignored(compose_context.ignored.take().unwrap_or_default());
    compose_context
        .merged
        .set(compose_descriptors(&child, &parent, &config));
}

#[when("the result is exposed a second time")]
fn expose_again(compose_context: &ComposeContext) -> Result<()> {
    let descriptor = compose_context
        .merged
        .take()
        .ok_or_else(|| anyhow!("descriptors have not been composed"))?;
    compose_context.merged.set(expose_archive(descriptor));
    Ok(())
}

#[then("the merged {attribute} is {expected}")]
fn merged_attribute(compose_context: &ComposeContext, attribute: String, expected: String) -> Result<()> {
    let descriptor = merged(compose_context)?;
    let actual = attribute_json(&descriptor, &attribute)?;
    let want = parse_value(&expected)
        .to_json()
        .map_err(|err| anyhow!(err.to_string()))?;
    ensure!(actual == want, "merged {attribute} was {actual}, expected {want}");
    Ok(())
}

#[then("the merged descriptor has no {attribute}")]
fn merged_lacks(compose_context: &ComposeContext, attribute: String) -> Result<()> {
    let descriptor = merged(compose_context)?;
    ensure!(
        !descriptor.contains(&attribute),
        "merged descriptor unexpectedly holds {attribute}"
    );
    let archive = archive_json(&descriptor)?;
    ensure!(
        archive.get(&attribute).is_none(),
        "archive unexpectedly holds {attribute}: {archive}"
    );
    Ok(())
}

#[then("the archive is {expected}")]
fn archive_is(compose_context: &ComposeContext, expected: String) -> Result<()> {
    let descriptor = merged(compose_context)?;
    let actual = archive_json(&descriptor)?;
    let want: serde_json::Value = serde_json::from_str(expected.trim())?;
    ensure!(actual == want, "archive was {actual}, expected {want}");
    Ok(())
}
