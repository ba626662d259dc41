//! Kruskal minimum spanning tree engine over named vertices.
//!
//! [`KruskalGraph`] owns the vertex-name mapping and the edge list. Each
//! computation orders the edges with [`crate::sorted_order`], starts a fresh
//! [`DisjointSet`] session over the vertex universe, and walks the edges once.
//! Edges whose endpoints are not registered are skipped by both entry points
//! and never appear in any output.

#[cfg(test)]
mod property;

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, instrument, trace};

use crate::{
    DisjointSet, Edge, KruskalTrace,
    error::{GraphError, Result, VertexRef},
    sort::sorted_order,
    trace::{TraceAction, TraceRecorder},
};

/// Classic result of [`KruskalGraph::minimum_spanning_tree`].
///
/// When the registered vertices are not all connected the edges form a
/// minimum spanning forest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MinimumSpanningTree {
    edges: Vec<Edge>,
    total_cost: i64,
    skipped: usize,
}

impl MinimumSpanningTree {
    /// Accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_cost(&self) -> i64 { self.total_cost }

    /// Number of edges ignored because an endpoint was not registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn skipped(&self) -> usize { self.skipped }

    /// Consumes the result, returning the accepted edges and total cost.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge>, i64) {
        (self.edges, self.total_cost)
    }
}

/// Weighted undirected graph with named vertices and Kruskal entry points.
///
/// # Examples
/// ```
/// use kruskal_core::KruskalGraph;
///
/// let mut graph = KruskalGraph::new(3, 3);
/// graph.add_vertex("A", 0)?;
/// graph.add_vertex("B", 1)?;
/// graph.add_vertex("C", 2)?;
/// graph.add_edge("e1", 1, "A", "B");
/// graph.add_edge("e2", 2, "B", "C");
/// graph.add_edge("e3", 3, "A", "C");
///
/// let mst = graph.minimum_spanning_tree();
/// let ids: Vec<&str> = mst.edges().iter().map(|edge| edge.id()).collect();
/// assert_eq!(ids, ["e1", "e2"]);
/// assert_eq!(mst.total_cost(), 3);
///
/// let trace = graph.minimum_spanning_trace();
/// assert_eq!(trace.steps.len(), 3);
/// assert_eq!(trace.rejected_ids(), ["e3"]);
/// assert_eq!(trace.mst_weight, 3);
/// # Ok::<(), kruskal_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct KruskalGraph {
    vertex_count: usize,
    vertices: HashMap<Arc<str>, usize>,
    owners: Vec<Option<Arc<str>>>,
    edges: Vec<Edge>,
}

/// Outcome of resolving one edge during a run.
enum Decision {
    Skipped,
    Decided(TraceAction),
}

impl KruskalGraph {
    /// Creates an empty graph over `vertex_count` vertices.
    ///
    /// `edge_budget` only sizes the edge list up front.
    #[must_use]
    pub fn new(vertex_count: usize, edge_budget: usize) -> Self {
        Self {
            vertex_count,
            vertices: HashMap::with_capacity(vertex_count),
            owners: vec![None; vertex_count],
            edges: Vec::with_capacity(edge_budget),
        }
    }

    /// Registers `name` at `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexIndexOutOfRange`] when `index` is not below
    /// the vertex count, [`GraphError::DuplicateVertex`] when `name` is already
    /// registered, and [`GraphError::DuplicateVertexIndex`] when another name
    /// already owns `index`. The graph is unchanged on error.
    pub fn add_vertex(&mut self, name: impl AsRef<str>, index: usize) -> Result<()> {
        let name = name.as_ref();
        let Some(slot) = self.owners.get_mut(index) else {
            return Err(GraphError::VertexIndexOutOfRange {
                index,
                vertex_count: self.vertex_count,
            });
        };
        if let Some(&existing) = self.vertices.get(name) {
            return Err(GraphError::DuplicateVertex {
                name: Arc::from(name),
                existing,
            });
        }
        if let Some(owner) = slot {
            return Err(GraphError::DuplicateVertexIndex {
                index,
                owner: Arc::clone(owner),
            });
        }

        let name: Arc<str> = Arc::from(name);
        *slot = Some(Arc::clone(&name));
        self.vertices.insert(name, index);
        Ok(())
    }

    /// Appends an edge. Endpoints are resolved when a tree is computed.
    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        weight: i64,
        src: impl Into<String>,
        dst: impl Into<String>,
    ) {
        self.edges.push(Edge::new(id, weight, src, dst));
    }

    /// Returns the index registered for `name`.
    #[must_use]
    pub fn vertex_index(&self, name: &str) -> Option<usize> {
        self.vertices.get(name).copied()
    }

    /// Size of the vertex universe.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Number of registered vertex names.
    #[must_use]
    #[rustfmt::skip]
    pub fn registered_vertices(&self) -> usize { self.vertices.len() }

    /// Edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Number of edges added so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Computes the minimum spanning tree (or forest) with Kruskal's
    /// algorithm.
    ///
    /// Repeated calls re-sort and re-run from scratch and always return the
    /// same result.
    #[must_use]
    #[instrument(
        name = "core.minimum_spanning_tree",
        skip(self),
        fields(vertices = self.vertex_count, edges = self.edges.len()),
    )]
    pub fn minimum_spanning_tree(&self) -> MinimumSpanningTree {
        let mut result = MinimumSpanningTree {
            edges: Vec::with_capacity(self.vertex_count.saturating_sub(1)),
            ..MinimumSpanningTree::default()
        };
        let mut rejected = 0_usize;

        self.run(|edge, decision| match decision {
            Decision::Skipped => result.skipped += 1,
            Decision::Decided(TraceAction::Accept) => {
                result.total_cost = result.total_cost.saturating_add(edge.weight());
                result.edges.push(edge.clone());
            }
            Decision::Decided(TraceAction::Reject) => rejected += 1,
        });

        debug!(
            accepted = result.edges.len(),
            rejected,
            skipped = result.skipped,
            total = result.total_cost,
            "minimum spanning tree computed"
        );
        result
    }

    /// Computes the minimum spanning tree while recording one
    /// [`crate::TraceStep`] per processed edge.
    ///
    /// Steps follow the sorted processing order and carry cumulative state.
    /// Edges with unregistered endpoints produce no step.
    #[must_use]
    #[instrument(
        name = "core.minimum_spanning_trace",
        skip(self),
        fields(vertices = self.vertex_count, edges = self.edges.len()),
    )]
    pub fn minimum_spanning_trace(&self) -> KruskalTrace {
        let mut recorder = TraceRecorder::with_capacity(self.edges.len());
        let mut skipped = 0_usize;

        self.run(|edge, decision| match decision {
            Decision::Skipped => skipped += 1,
            Decision::Decided(action) => recorder.record(edge.id(), edge.weight(), action),
        });

        let trace = recorder.finish();
        debug!(
            accepted = trace.accepted_ids().len(),
            rejected = trace.rejected_ids().len(),
            skipped,
            total = trace.mst_weight,
            "minimum spanning trace computed"
        );
        trace
    }

    /// Walks the edges in sorted order against a fresh disjoint-set session,
    /// reporting each decision to `visit`.
    fn run(&self, mut visit: impl FnMut(&Edge, Decision)) {
        let mut sets = DisjointSet::new(self.vertex_count);

        for position in sorted_order(&self.edges) {
            let Some(edge) = self.edges.get(position) else {
                continue;
            };
            let src = self.vertex_index(edge.src());
            let dst = self.vertex_index(edge.dst());

            let (Some(left), Some(right)) = (src, dst) else {
                debug!(
                    edge_id = edge.id(),
                    src = %VertexRef(edge.src(), src),
                    dst = %VertexRef(edge.dst(), dst),
                    "skipping edge with unregistered endpoint"
                );
                visit(edge, Decision::Skipped);
                continue;
            };

            let action = if sets.union(left, right) {
                TraceAction::Accept
            } else {
                TraceAction::Reject
            };
            trace!(
                edge_id = edge.id(),
                weight = edge.weight(),
                ?action,
                components = sets.component_count(),
                "edge decided"
            );
            visit(edge, Decision::Decided(action));
        }
    }
}
