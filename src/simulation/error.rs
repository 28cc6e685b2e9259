//! Error type shared by every simulation operation

use thiserror::Error;

/// Failures raised by the simulator and the layers that build its inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Rejected before any step runs: bad time step, empty body set,
    /// dimensionality mismatch, non-finite values, missing stop bound
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A body reached a state where a boundary projection is undefined
    /// (zero-length or non-finite position at clamp time)
    #[error("degenerate state: body {body} at step {step} has no defined boundary projection")]
    DegenerateState { body: usize, step: usize },
}

impl SimError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidInput(msg.into())
    }
}
