//! Shared test utilities for `kruskal-core`.

use kruskal_test_support::fixtures::GraphFixture;
use kruskal_test_support::property_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::KruskalGraph;

/// Builds a proptest configuration honouring `KRUSKAL_PBT_CASES`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from a shared fixture, registering vertices by position.
#[must_use]
pub(crate) fn graph_from_fixture(fixture: &GraphFixture) -> KruskalGraph {
    let mut graph = KruskalGraph::new(fixture.vertices.len(), fixture.edges.len());
    for (index, name) in fixture.vertices.iter().enumerate() {
        graph
            .add_vertex(name, index)
            .expect("fixture vertices must be unique");
    }
    for edge in fixture.edges {
        graph.add_edge(edge.id, edge.weight, edge.src, edge.dst);
    }
    graph
}
