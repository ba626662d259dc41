//! Step-by-step decision trace of a Kruskal run.
//!
//! A [`KruskalTrace`] holds one [`TraceStep`] per processed edge, in the
//! order the edges were considered. Every step carries the cumulative state
//! at that point, so a consumer can replay the run as an animation without
//! keeping its own accumulators.
//!
//! The serialised form is an external contract:
//!
//! ```json
//! {"steps":[{"consideredEdgeId":"e1","action":"accept","reason":"ok",
//!   "totalWeight":1,"mstEdgeIds":["e1"],"rejectedEdgeIds":[]}],"mstWeight":1}
//! ```

use std::io;

use serde::{Deserialize, Serialize};

/// Decision taken for a considered edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceAction {
    /// The edge joined two components and is part of the tree.
    Accept,
    /// The edge would have closed a cycle.
    Reject,
}

/// Why a [`TraceAction`] was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceReason {
    /// Accepted.
    Ok,
    /// Endpoints were already connected.
    Cycle,
}

impl TraceAction {
    /// Returns the reason paired with this action.
    ///
    /// Cycles are the only cause of rejection.
    #[must_use]
    pub const fn reason(self) -> TraceReason {
        match self {
            Self::Accept => TraceReason::Ok,
            Self::Reject => TraceReason::Cycle,
        }
    }
}

/// Snapshot emitted after deciding one edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStep {
    /// Identifier of the edge decided in this step.
    pub considered_edge_id: String,
    /// Whether the edge was accepted.
    pub action: TraceAction,
    /// Reason for the action.
    pub reason: TraceReason,
    /// Weight of the accepted edges so far, this step included.
    pub total_weight: i64,
    /// Identifiers of all accepted edges so far, in acceptance order.
    pub mst_edge_ids: Vec<String>,
    /// Identifiers of all rejected edges so far, in rejection order.
    pub rejected_edge_ids: Vec<String>,
}

/// Full decision trace produced by
/// [`crate::KruskalGraph::minimum_spanning_trace`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KruskalTrace {
    /// Steps in processing order.
    pub steps: Vec<TraceStep>,
    /// Total weight of the resulting tree or forest.
    pub mst_weight: i64,
}

impl KruskalTrace {
    /// Returns `true` when no edge was processed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Identifiers of the accepted edges, taken from the final step.
    #[must_use]
    pub fn accepted_ids(&self) -> &[String] {
        self.steps
            .last()
            .map(|step| step.mst_edge_ids.as_slice())
            .unwrap_or_default()
    }

    /// Identifiers of the rejected edges, taken from the final step.
    #[must_use]
    pub fn rejected_ids(&self) -> &[String] {
        self.steps
            .last()
            .map(|step| step.rejected_edge_ids.as_slice())
            .unwrap_or_default()
    }

    /// Serialises the trace as compact JSON.
    ///
    /// # Errors
    /// Returns [`serde_json::Error`] if serialisation fails.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::KruskalTrace;
    ///
    /// let json = KruskalTrace::default().to_json()?;
    /// assert_eq!(json, r#"{"steps":[],"mstWeight":0}"#);
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialises the trace as indented JSON.
    ///
    /// # Errors
    /// Returns [`serde_json::Error`] if serialisation fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Streams the trace as compact JSON into `writer`.
    ///
    /// # Errors
    /// Returns [`io::Error`] if writing fails.
    pub fn write_json(&self, writer: impl io::Write) -> io::Result<()> {
        serde_json::to_writer(writer, self).map_err(io::Error::from)
    }

    /// Streams the trace as indented JSON into `writer`.
    ///
    /// # Errors
    /// Returns [`io::Error`] if writing fails.
    pub fn write_json_pretty(&self, writer: impl io::Write) -> io::Result<()> {
        serde_json::to_writer_pretty(writer, self).map_err(io::Error::from)
    }
}

/// Accumulates cumulative trace state while edges are decided.
#[derive(Debug, Default)]
pub(crate) struct TraceRecorder {
    steps: Vec<TraceStep>,
    accepted: Vec<String>,
    rejected: Vec<String>,
    total: i64,
}

impl TraceRecorder {
    pub(crate) fn with_capacity(edges: usize) -> Self {
        Self {
            steps: Vec::with_capacity(edges),
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, edge_id: &str, weight: i64, action: TraceAction) {
        match action {
            TraceAction::Accept => {
                self.accepted.push(edge_id.to_owned());
                self.total = self.total.saturating_add(weight);
            }
            TraceAction::Reject => self.rejected.push(edge_id.to_owned()),
        }

        self.steps.push(TraceStep {
            considered_edge_id: edge_id.to_owned(),
            action,
            reason: action.reason(),
            total_weight: self.total,
            mst_edge_ids: self.accepted.clone(),
            rejected_edge_ids: self.rejected.clone(),
        });
    }

    pub(crate) fn finish(self) -> KruskalTrace {
        KruskalTrace {
            steps: self.steps,
            mst_weight: self.total,
        }
    }
}
