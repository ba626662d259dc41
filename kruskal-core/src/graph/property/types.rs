//! Type definitions for engine property tests.

use test_strategy::Arbitrary;

use crate::KruskalGraph;

/// Shape of a generated graph.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight.
    Unique,
    /// Weights drawn from a tiny range, so most edges tie.
    ManyIdentical,
    /// Roughly `1.5n` random edges, self-loops and parallel edges included.
    Sparse,
    /// Several components with no edges between them.
    Disconnected,
    /// A quarter of the edges reference vertices that are never registered.
    UnknownEndpoints,
}

/// One generated edge, in input order.
#[derive(Clone, Debug)]
pub(super) struct EdgeCase {
    pub id: String,
    pub weight: i64,
    pub src: String,
    pub dst: String,
}

/// Generated graph input with the distribution used to build it.
#[derive(Clone, Debug)]
pub(super) struct GraphCase {
    /// Number of registered vertices, named `v0..vN`.
    pub vertex_count: usize,
    /// Edges in input order; ids are unique.
    pub edges: Vec<EdgeCase>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl GraphCase {
    /// Builds the engine input for this case.
    pub(super) fn build(&self) -> KruskalGraph {
        let mut graph = KruskalGraph::new(self.vertex_count, self.edges.len());
        for index in 0..self.vertex_count {
            graph
                .add_vertex(vertex_name(index), index)
                .expect("generated vertex names are unique");
        }
        for edge in &self.edges {
            graph.add_edge(edge.id.clone(), edge.weight, edge.src.clone(), edge.dst.clone());
        }
        graph
    }

    /// Resolves a generated vertex name to its index.
    pub(super) fn index_of(&self, name: &str) -> Option<usize> {
        name.strip_prefix('v')
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|index| *index < self.vertex_count)
    }
}

/// Name of the registered vertex at `index`.
pub(super) fn vertex_name(index: usize) -> String {
    format!("v{index}")
}
