use nr_core::FlowId;
use thiserror::Error;

use crate::MalformedReason;

#[derive(Debug, Error)]
pub enum StatsError {
    /// Per-flow and recoverable: the flow is reported as "no data" and the
    /// rest of the aggregation proceeds.
    #[error("flow {flow} is malformed: {reason}")]
    MalformedRecord {
        flow:   FlowId,
        reason: MalformedReason,
    },

    #[error("flow duration {0} s must be positive and finite")]
    InvalidDuration(f64),

    #[error("flow record parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StatsResult<T> = Result<T, StatsError>;
