//! Test helpers shared across crates.
//!
//! This crate provides JSON-literal descriptor builders, archive inspection
//! helpers and the text normalisation used by the behavioural step
//! definitions.

pub mod descriptors;
pub mod text;
