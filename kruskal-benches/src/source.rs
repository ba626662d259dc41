//! Seeded synthetic graphs for the spanning tree benchmarks.
//!
//! Every generated graph contains a spanning path `v0 - v1 - ... - vN`, so it
//! is connected, plus a configurable number of random extra edges per vertex.
//! A small weight range produces many equal weights, which exercises the
//! stable tie-breaking order.

use kruskal_core::KruskalGraph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, named `v0`, `v1`, and so on.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning path.
    pub extra_edges_per_vertex: usize,
    /// Exclusive upper bound of the edge weights.
    pub weight_range: i64,
    /// Seed for the pseudo-random generator.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Number of edges a graph generated from this configuration contains.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.vertex_count
            .saturating_sub(1)
            .saturating_add(self.vertex_count.saturating_mul(self.extra_edges_per_vertex))
    }
}

/// A generated graph with the configuration that produced it.
#[derive(Debug)]
pub struct SyntheticGraph {
    config: SyntheticGraphConfig,
    graph: KruskalGraph,
}

impl SyntheticGraph {
    /// Generates a connected graph described by `config`.
    ///
    /// The same configuration always yields the same graph.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero and
    /// [`BenchSetupError::NonPositiveWeightRange`] when `weight_range` is not
    /// positive.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        if config.weight_range <= 0 {
            return Err(BenchSetupError::NonPositiveWeightRange {
                range: config.weight_range,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut graph = KruskalGraph::new(config.vertex_count, config.edge_count());
        for index in 0..config.vertex_count {
            graph.add_vertex(vertex_name(index), index)?;
        }

        let mut next_id = 0_usize;
        for dst in 1..config.vertex_count {
            let weight = rng.gen_range(0..config.weight_range);
            add_edge(&mut graph, &mut next_id, weight, dst - 1, dst);
        }
        for src in 0..config.vertex_count {
            for _ in 0..config.extra_edges_per_vertex {
                let dst = rng.gen_range(0..config.vertex_count);
                let weight = rng.gen_range(0..config.weight_range);
                add_edge(&mut graph, &mut next_id, weight, src, dst);
            }
        }

        Ok(Self {
            config: config.clone(),
            graph,
        })
    }

    /// Configuration used to generate the graph.
    #[must_use]
    pub const fn config(&self) -> &SyntheticGraphConfig {
        &self.config
    }

    /// The generated graph.
    #[must_use]
    pub const fn graph(&self) -> &KruskalGraph {
        &self.graph
    }
}

fn vertex_name(index: usize) -> String {
    format!("v{index}")
}

fn add_edge(graph: &mut KruskalGraph, next_id: &mut usize, weight: i64, src: usize, dst: usize) {
    graph.add_edge(
        format!("e{next_id}"),
        weight,
        vertex_name(src),
        vertex_name(dst),
    );
    *next_id = next_id.saturating_add(1);
}
