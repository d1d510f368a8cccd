//! Shared fixtures for the `rstest-bdd` behavioural scaffolding.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use super_compose::Descriptor;

/// Scenario state shared between composition steps.
#[derive(Debug, Default, ScenarioState)]
pub struct ComposeContext {
    /// Child descriptor assembled by `Given` steps.
    pub child: Slot<Descriptor>,
    /// Parent descriptor assembled by `Given` steps.
    pub parent: Slot<Descriptor>,
    /// Attribute names the caller asked to ignore.
    pub ignored: Slot<Vec<String>>,
    /// Result of the most recent composition.
    pub merged: Slot<Descriptor>,
}

/// Creates a clean composition context for each scenario.
#[fixture]
pub fn compose_context() -> ComposeContext {
    ComposeContext::default()
}
