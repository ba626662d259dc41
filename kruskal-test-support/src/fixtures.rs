//! Small hand-checked graphs with their expected Kruskal outcomes.

use std::fmt::Write as _;

/// One edge of a [`GraphFixture`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Reporting identifier.
    pub id: &'static str,
    /// Edge weight.
    pub weight: i64,
    /// Source vertex name.
    pub src: &'static str,
    /// Destination vertex name.
    pub dst: &'static str,
}

/// A graph together with the result Kruskal's algorithm must produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphFixture {
    /// Short name used in test case labels.
    pub name: &'static str,
    /// Vertex names; each name's position is its index.
    pub vertices: &'static [&'static str],
    /// Edges in input order.
    pub edges: &'static [EdgeSpec],
    /// Accepted edge ids in acceptance order.
    pub accepted: &'static [&'static str],
    /// Rejected edge ids in rejection order.
    pub rejected: &'static [&'static str],
    /// Total weight of the accepted edges.
    pub cost: i64,
}

const fn edge(id: &'static str, weight: i64, src: &'static str, dst: &'static str) -> EdgeSpec {
    EdgeSpec {
        id,
        weight,
        src,
        dst,
    }
}

/// Three vertices, three edges, the heaviest closes a cycle.
pub const TRIANGLE: GraphFixture = GraphFixture {
    name: "triangle",
    vertices: &["A", "B", "C"],
    edges: &[
        edge("e1", 1, "A", "B"),
        edge("e2", 2, "B", "C"),
        edge("e3", 3, "A", "C"),
    ],
    accepted: &["e1", "e2"],
    rejected: &["e3"],
    cost: 3,
};

/// Two equal-weight edges that must keep their input order.
pub const TIE_PAIR: GraphFixture = GraphFixture {
    name: "tie_pair",
    vertices: &["X", "Y", "Z"],
    edges: &[edge("eA", 5, "X", "Y"), edge("eB", 5, "Y", "Z")],
    accepted: &["eA", "eB"],
    rejected: &[],
    cost: 10,
};

/// Four vertices with two weight-4 ties and three rejections.
pub const DIAMOND: GraphFixture = GraphFixture {
    name: "diamond",
    vertices: &["a", "b", "c", "d"],
    edges: &[
        edge("ab", 1, "a", "b"),
        edge("bc", 3, "b", "c"),
        edge("cd", 4, "c", "d"),
        edge("ac", 2, "a", "c"),
        edge("bd", 5, "b", "d"),
        edge("ad", 4, "a", "d"),
    ],
    accepted: &["ab", "ac", "cd"],
    rejected: &["bc", "ad", "bd"],
    cost: 7,
};

/// Two components; the result is a spanning forest.
pub const DISCONNECTED: GraphFixture = GraphFixture {
    name: "disconnected",
    vertices: &["A", "B", "C", "D"],
    edges: &[edge("e1", 4, "A", "B"), edge("e2", 2, "C", "D")],
    accepted: &["e2", "e1"],
    rejected: &[],
    cost: 6,
};

/// One edge references a vertex that was never registered.
pub const UNKNOWN_ENDPOINT: GraphFixture = GraphFixture {
    name: "unknown_endpoint",
    vertices: &["A", "B"],
    edges: &[edge("e1", 3, "A", "B"), edge("ghost", 1, "A", "Q")],
    accepted: &["e1"],
    rejected: &[],
    cost: 3,
};

/// Negative weights and a self-loop, which is always a cycle.
pub const NEGATIVE_WITH_LOOP: GraphFixture = GraphFixture {
    name: "negative_with_loop",
    vertices: &["P", "Q", "R"],
    edges: &[
        edge("loop", -9, "P", "P"),
        edge("pq", -3, "P", "Q"),
        edge("qr", 0, "Q", "R"),
        edge("pr", -1, "P", "R"),
    ],
    accepted: &["pq", "pr"],
    rejected: &["loop", "qr"],
    cost: -4,
};

/// Every fixture, for table-driven tests.
pub const ALL: &[GraphFixture] = &[
    TRIANGLE,
    TIE_PAIR,
    DIAMOND,
    DISCONNECTED,
    UNKNOWN_ENDPOINT,
    NEGATIVE_WITH_LOOP,
];

impl GraphFixture {
    /// Number of edges whose endpoints are both registered.
    #[must_use]
    pub fn resolvable_edges(&self) -> usize {
        self.edges
            .iter()
            .filter(|edge| self.vertices.contains(&edge.src) && self.vertices.contains(&edge.dst))
            .count()
    }

    /// Renders the fixture in the `V E` text ingestion format.
    ///
    /// # Examples
    /// ```
    /// use kruskal_test_support::fixtures::TIE_PAIR;
    ///
    /// assert_eq!(TIE_PAIR.to_text(), "3 2\nX Y Z\neA X Y 5\neB Y Z 5\n");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = format!("{} {}\n", self.vertices.len(), self.edges.len());
        text.push_str(&self.vertices.join(" "));
        text.push('\n');
        for edge in self.edges {
            // Writing into a String cannot fail.
            let _ = writeln!(text, "{} {} {} {}", edge.id, edge.src, edge.dst, edge.weight);
        }
        text
    }
}
