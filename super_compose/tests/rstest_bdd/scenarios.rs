//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{ComposeContext, compose_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/compose.feature",
    fixtures = [compose_context: ComposeContext]
);
