//! Kruskal core library.
//!
//! Deterministic minimum spanning tree computation over a weighted,
//! undirected graph with named vertices. Edges are visited by ascending
//! weight with input order breaking ties, so both the classic result and the
//! step-by-step [`KruskalTrace`] are reproducible byte for byte.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod edge;
mod error;
mod graph;
mod sort;
mod trace;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    edge::Edge,
    error::{GraphError, GraphErrorCode, Result},
    graph::{KruskalGraph, MinimumSpanningTree},
    sort::sorted_order,
    trace::{KruskalTrace, TraceAction, TraceReason, TraceStep},
};
