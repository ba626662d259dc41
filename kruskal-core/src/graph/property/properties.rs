//! Property runners shared by the proptest and rstest suites.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{TraceAction, TraceReason};

use super::oracle::naive_kruskal;
use super::types::GraphCase;

fn fail(case: &GraphCase, message: impl std::fmt::Display) -> TestCaseError {
    TestCaseError::fail(format!(
        "{message} (distribution={:?}, vertices={}, edges={})",
        case.distribution,
        case.vertex_count,
        case.edges.len(),
    ))
}

fn ensure(case: &GraphCase, condition: bool, message: impl std::fmt::Display) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(fail(case, message))
    }
}

/// Both entry points agree with the naive oracle, and with each other.
pub(super) fn run_oracle_equivalence_property(case: &GraphCase) -> TestCaseResult {
    let graph = case.build();
    let expected = naive_kruskal(case);
    let mst = graph.minimum_spanning_tree();
    let trace = graph.minimum_spanning_trace();

    let accepted: Vec<&str> = mst.edges().iter().map(|edge| edge.id()).collect();
    ensure(
        case,
        accepted == expected.accepted,
        format!("accepted {accepted:?} != oracle {:?}", expected.accepted),
    )?;
    ensure(
        case,
        trace.accepted_ids() == expected.accepted.as_slice(),
        "trace accepted ids differ from oracle",
    )?;
    ensure(
        case,
        trace.rejected_ids() == expected.rejected.as_slice(),
        "trace rejected ids differ from oracle",
    )?;
    ensure(
        case,
        mst.total_cost() == expected.cost && trace.mst_weight == expected.cost,
        format!(
            "cost {} / trace weight {} != oracle {}",
            mst.total_cost(),
            trace.mst_weight,
            expected.cost
        ),
    )
}

/// Considered edges follow a stable ascending-weight order.
pub(super) fn run_stable_order_property(case: &GraphCase) -> TestCaseResult {
    let trace = case.build().minimum_spanning_trace();
    let expected = naive_kruskal(case).considered;
    let considered: Vec<&str> = trace
        .steps
        .iter()
        .map(|step| step.considered_edge_id.as_str())
        .collect();
    ensure(
        case,
        considered == expected,
        format!("processing order {considered:?} != stable order {expected:?}"),
    )
}

/// The accepted edges form a forest with one edge per merged component.
pub(super) fn run_forest_property(case: &GraphCase) -> TestCaseResult {
    let mst = case.build().minimum_spanning_tree();
    let mut labels: Vec<usize> = (0..case.vertex_count).collect();

    for edge in mst.edges() {
        let (Some(src), Some(dst)) = (case.index_of(edge.src()), case.index_of(edge.dst())) else {
            return Err(fail(case, format!("accepted unresolvable edge {}", edge.id())));
        };
        let (from, to) = (labels[dst], labels[src]);
        ensure(case, from != to, format!("edge {} closes a cycle", edge.id()))?;
        for label in &mut labels {
            if *label == from {
                *label = to;
            }
        }
    }

    let components = naive_kruskal(case).components;
    ensure(
        case,
        mst.edges().len() == case.vertex_count - components,
        format!(
            "{} accepted edges for {} vertices in {components} components",
            mst.edges().len(),
            case.vertex_count
        ),
    )
}

/// Every step extends the previous one by exactly the considered edge.
pub(super) fn run_trace_accumulation_property(case: &GraphCase) -> TestCaseResult {
    let graph = case.build();
    let trace = graph.minimum_spanning_trace();
    let weights: HashMap<&str, i64> = graph
        .edges()
        .iter()
        .map(|edge| (edge.id(), edge.weight()))
        .collect();

    let mut accepted: Vec<String> = Vec::new();
    let mut rejected: Vec<String> = Vec::new();
    let mut total = 0_i64;

    for (position, step) in trace.steps.iter().enumerate() {
        let id = step.considered_edge_id.clone();
        match step.action {
            TraceAction::Accept => {
                ensure(case, step.reason == TraceReason::Ok, "accept without ok")?;
                total += weights.get(id.as_str()).copied().unwrap_or_default();
                accepted.push(id);
            }
            TraceAction::Reject => {
                ensure(case, step.reason == TraceReason::Cycle, "reject without cycle")?;
                rejected.push(id);
            }
        }

        ensure(
            case,
            step.mst_edge_ids.len() + step.rejected_edge_ids.len() == position + 1,
            format!("step {} does not account for every prior decision", position + 1),
        )?;
        ensure(
            case,
            step.mst_edge_ids == accepted && step.rejected_edge_ids == rejected,
            format!("step {} lists are not cumulative", position + 1),
        )?;
        ensure(
            case,
            step.total_weight == total,
            format!("step {} total {} != {total}", position + 1, step.total_weight),
        )?;
    }

    ensure(case, trace.mst_weight == total, "final weight mismatch")
}

/// Unregistered endpoints never reach the trace or the classic result.
pub(super) fn run_skip_policy_property(case: &GraphCase) -> TestCaseResult {
    let graph = case.build();
    let unresolvable: Vec<&str> = case
        .edges
        .iter()
        .filter(|edge| case.index_of(&edge.src).is_none() || case.index_of(&edge.dst).is_none())
        .map(|edge| edge.id.as_str())
        .collect();

    let mst = graph.minimum_spanning_tree();
    let trace = graph.minimum_spanning_trace();

    ensure(
        case,
        mst.skipped() == unresolvable.len(),
        format!("skipped {} != {}", mst.skipped(), unresolvable.len()),
    )?;
    ensure(
        case,
        trace.steps.len() == case.edges.len() - unresolvable.len(),
        "trace step count includes skipped edges",
    )?;
    for id in unresolvable {
        let mentioned = trace.steps.iter().any(|step| {
            step.considered_edge_id == id
                || step.mst_edge_ids.iter().any(|other| other == id)
                || step.rejected_edge_ids.iter().any(|other| other == id)
        });
        ensure(case, !mentioned, format!("skipped edge {id} appears in trace"))?;
        ensure(
            case,
            mst.edges().iter().all(|edge| edge.id() != id),
            format!("skipped edge {id} was accepted"),
        )?;
    }
    Ok(())
}

/// Repeated runs on one graph return identical results.
pub(super) fn run_determinism_property(case: &GraphCase) -> TestCaseResult {
    let graph = case.build();
    let mst = graph.minimum_spanning_tree();
    let json = graph
        .minimum_spanning_trace()
        .to_json()
        .map_err(|err| fail(case, err))?;

    for repetition in 0..3 {
        ensure(
            case,
            graph.minimum_spanning_tree() == mst,
            format!("classic result changed on repetition {repetition}"),
        )?;
        let again = graph
            .minimum_spanning_trace()
            .to_json()
            .map_err(|err| fail(case, err))?;
        ensure(
            case,
            again == json,
            format!("trace changed on repetition {repetition}"),
        )?;
    }
    Ok(())
}
