//! Run observer trait for progress reporting.

use nr_plan::ScenarioPlan;
use nr_stats::{FlowReport, RawFlowRecord};

/// Callbacks invoked by [`ScenarioRunner::run`][crate::ScenarioRunner::run]
/// between stages.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait RunObserver {
    /// Called once the plan is derived, before it is applied.
    fn on_planned(&mut self, _plan: &ScenarioPlan) {}

    /// Called after the simulator finished and its records were collected.
    fn on_run_complete(&mut self, _records: &[RawFlowRecord]) {}

    /// Called with the final report.
    fn on_report(&mut self, _report: &FlowReport) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
