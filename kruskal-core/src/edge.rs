//! Weighted undirected edges referencing vertices by name.

use serde::{Deserialize, Serialize};

/// An undirected edge as registered on a [`crate::KruskalGraph`].
///
/// Endpoints are vertex names, resolved to indices only when a spanning tree
/// is computed. The `id` is opaque and only used for reporting.
///
/// # Examples
/// ```
/// use kruskal_core::Edge;
///
/// let edge = Edge::new("e1", 4, "A", "B");
/// assert_eq!(edge.id(), "e1");
/// assert_eq!(edge.weight(), 4);
/// assert_eq!((edge.src(), edge.dst()), ("A", "B"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    id: String,
    weight: i64,
    src: String,
    dst: String,
}

impl Edge {
    /// Creates an edge.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        weight: i64,
        src: impl Into<String>,
        dst: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            weight,
            src: src.into(),
            dst: dst.into(),
        }
    }

    /// Returns the reporting identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> &str { &self.id }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> i64 { self.weight }

    /// Returns the source vertex name.
    #[must_use]
    #[rustfmt::skip]
    pub fn src(&self) -> &str { &self.src }

    /// Returns the destination vertex name.
    #[must_use]
    #[rustfmt::skip]
    pub fn dst(&self) -> &str { &self.dst }
}
