//! Benchmark support crate for the Kruskal engine.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for the classic and traced spanning tree entry points.

pub mod error;
pub mod params;
pub mod source;
