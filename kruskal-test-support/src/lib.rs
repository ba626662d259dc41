//! Shared test utilities used across kruskal crates.
//!
//! Nothing here depends on `kruskal-core`: fixtures are plain data so every
//! crate can turn them into graphs or text input with its own API.

pub mod fixtures;
pub mod property_profile;
pub mod tracing;
