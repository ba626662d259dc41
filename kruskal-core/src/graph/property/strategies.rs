//! Graph generators for engine property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so a failing case can be
//! replayed from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{EdgeCase, GraphCase, WeightDistribution, vertex_name};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 24;

/// Generates graph cases across every [`WeightDistribution`].
pub(super) fn graph_case_strategy() -> impl Strategy<Value = GraphCase> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_case(distribution, &mut rng)
    })
}

/// Generates a case for an explicit distribution.
pub(super) fn generate_case(distribution: WeightDistribution, rng: &mut SmallRng) -> GraphCase {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let edges = match distribution {
        WeightDistribution::Unique => unique_weights(vertex_count, rng),
        WeightDistribution::ManyIdentical => {
            pairwise_edges(vertex_count, 0.4, rng, |r| r.gen_range(1..=3))
        }
        WeightDistribution::Sparse => random_edges(vertex_count, 0.0, rng),
        WeightDistribution::Disconnected => disconnected(vertex_count, rng),
        WeightDistribution::UnknownEndpoints => random_edges(vertex_count, 0.25, rng),
    };
    GraphCase {
        vertex_count,
        edges,
        distribution,
    }
}

fn edge_case(seq: usize, weight: i64, src: String, dst: String) -> EdgeCase {
    EdgeCase {
        id: format!("e{seq}"),
        weight,
        src,
        dst,
    }
}

/// Adds each vertex pair with probability `probability`.
fn pairwise_edges(
    vertex_count: usize,
    probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> Vec<EdgeCase> {
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let edge_weight = weight(rng);
                edges.push(edge_case(
                    edges.len(),
                    edge_weight,
                    vertex_name(left),
                    vertex_name(right),
                ));
            }
        }
    }
    edges
}

fn unique_weights(vertex_count: usize, rng: &mut SmallRng) -> Vec<EdgeCase> {
    let mut edges = pairwise_edges(vertex_count, 0.3, rng, |_| 0);
    let offset = rng.gen_range(-500_i64..500);
    let mut weights: Vec<i64> = (0..edges.len())
        .map(|rank| offset + i64::try_from(rank).unwrap_or(i64::MAX / 2))
        .collect();
    weights.shuffle(rng);
    for (edge, weight) in edges.iter_mut().zip(weights) {
        edge.weight = weight;
    }
    edges
}

/// Random endpoints, so self-loops and parallel edges occur. A share of
/// `ghost_ratio` endpoints name vertices that are never registered.
fn random_edges(vertex_count: usize, ghost_ratio: f64, rng: &mut SmallRng) -> Vec<EdgeCase> {
    let edge_count = vertex_count + vertex_count / 2;
    let endpoint = |rng: &mut SmallRng| {
        if rng.gen_bool(ghost_ratio) {
            format!("ghost{}", rng.gen_range(0..4))
        } else {
            vertex_name(rng.gen_range(0..vertex_count))
        }
    };
    (0..edge_count)
        .map(|seq| {
            let src = endpoint(rng);
            let dst = endpoint(rng);
            edge_case(seq, rng.gen_range(-50..50), src, dst)
        })
        .collect()
}

/// Splits the vertices into up to four groups joined only internally.
fn disconnected(vertex_count: usize, rng: &mut SmallRng) -> Vec<EdgeCase> {
    let groups = rng.gen_range(1..=4_usize).min(vertex_count);
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if left % groups == right % groups && rng.gen_bool(0.6) {
                let weight = rng.gen_range(0..20);
                edges.push(edge_case(
                    edges.len(),
                    weight,
                    vertex_name(left),
                    vertex_name(right),
                ));
            }
        }
    }
    edges
}
