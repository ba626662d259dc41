//! Property-based tests for the Kruskal engine.
//!
//! Generated graphs are checked against a naive sequential oracle and for the
//! structural laws of the classic result and the trace: determinism, stable
//! ordering, acyclicity, weight consistency, cumulative steps, and the skip
//! policy for unregistered endpoints.

mod oracle;
mod properties;
mod strategies;
mod types;
