//! Benchmark setup error type.
//!
//! Lets setup helpers propagate failures with `?` instead of `.expect()`.

use kruskal_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generated graph rejected a vertex registration.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The weight range could not produce any weight.
    #[error("weight range must be positive, got {range}")]
    NonPositiveWeightRange {
        /// Requested exclusive upper bound.
        range: i64,
    },
}
