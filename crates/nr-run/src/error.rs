use nr_plan::PlanError;
use nr_stats::StatsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),

    #[error("statistics failed: {0}")]
    Stats(#[from] StatsError),

    #[error("simulator error: {0}")]
    Simulator(String),
}

pub type RunResult<T> = Result<T, RunError>;
