//! Naive sequential Kruskal used as a reference in property tests.
//!
//! Sorting is an insertion sort and connectivity is a relabelling transitive
//! closure; both are slow but obviously correct.

use super::types::{EdgeCase, GraphCase};

/// Result of the naive oracle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct OracleResult {
    /// Ids of resolvable edges in processing order.
    pub considered: Vec<String>,
    /// Accepted ids in acceptance order.
    pub accepted: Vec<String>,
    /// Rejected ids in rejection order.
    pub rejected: Vec<String>,
    /// Sum of accepted weights.
    pub cost: i64,
    /// Connected components over all vertices after processing.
    pub components: usize,
}

/// Stable insertion sort by weight.
pub(super) fn stable_by_weight(edges: &[EdgeCase]) -> Vec<&EdgeCase> {
    let mut sorted: Vec<&EdgeCase> = Vec::with_capacity(edges.len());
    for edge in edges {
        let position = sorted
            .iter()
            .rposition(|placed| placed.weight <= edge.weight)
            .map_or(0, |index| index + 1);
        sorted.insert(position, edge);
    }
    sorted
}

/// Runs Kruskal's algorithm naively.
pub(super) fn naive_kruskal(case: &GraphCase) -> OracleResult {
    let mut labels: Vec<usize> = (0..case.vertex_count).collect();
    let mut result = OracleResult::default();

    for edge in stable_by_weight(&case.edges) {
        let (Some(src), Some(dst)) = (case.index_of(&edge.src), case.index_of(&edge.dst)) else {
            continue;
        };
        result.considered.push(edge.id.clone());

        let (from, to) = (labels[dst], labels[src]);
        if from == to {
            result.rejected.push(edge.id.clone());
            continue;
        }
        for label in &mut labels {
            if *label == from {
                *label = to;
            }
        }
        result.accepted.push(edge.id.clone());
        result.cost += edge.weight;
    }

    labels.sort_unstable();
    labels.dedup();
    result.components = labels.len();
    result
}
