//! Deterministic edge ordering for Kruskal's algorithm.
//!
//! Edges are visited by ascending weight. Equal weights keep their input
//! order, so traces are reproducible byte for byte across runs and builds.

use crate::Edge;

#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;

/// Returns the input positions of `edges` ordered by ascending weight.
///
/// The ordering is stable: two edges with equal weight appear in the same
/// relative order as in `edges`. The input itself is left untouched.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, sorted_order};
///
/// let edges = [
///     Edge::new("heavy", 9, "A", "B"),
///     Edge::new("first", 5, "B", "C"),
///     Edge::new("second", 5, "A", "C"),
/// ];
/// assert_eq!(sorted_order(&edges), vec![1, 2, 0]);
/// ```
#[must_use]
pub fn sorted_order(edges: &[Edge]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    let weight_at = |position: &usize| edges.get(*position).map_or(i64::MAX, Edge::weight);

    // Both sorts are stable merge sorts; input position breaks weight ties.
    #[cfg(feature = "parallel")]
    order.par_sort_by_key(weight_at);
    #[cfg(not(feature = "parallel"))]
    order.sort_by_key(weight_at);

    order
}
