//! `ScenarioRunner` — sequences planning, simulation and aggregation.

use nr_plan::{ScenarioConfig, ScenarioPlan, plan};
use nr_stats::{FlowReport, aggregate};

use crate::{RadioSimulator, RunObserver, RunResult};

/// What one completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub plan:   ScenarioPlan,
    pub report: FlowReport,
}

/// Runs one scenario against one simulator.
///
/// Consumed by [`run`][Self::run]: a simulator is configured and run once.
pub struct ScenarioRunner<S: RadioSimulator> {
    config:    ScenarioConfig,
    simulator: S,
}

impl<S: RadioSimulator> ScenarioRunner<S> {
    pub fn new(config: ScenarioConfig, simulator: S) -> Self {
        Self { config, simulator }
    }

    /// Plan, apply, run, collect and aggregate.
    ///
    /// Planning errors abort before the simulator is touched.  Aggregation
    /// only ever sees the records of a completed run.
    pub fn run<O: RunObserver>(mut self, observer: &mut O) -> RunResult<RunOutcome> {
        let plan = plan(&self.config)?;
        observer.on_planned(&plan);

        self.simulator.apply_plan(&plan)?;
        self.simulator.run(&plan.window)?;

        let records = self.simulator.flow_records()?;
        observer.on_run_complete(&records);

        let report = aggregate(&records, plan.window.duration_secs())?;
        observer.on_report(&report);

        Ok(RunOutcome { plan, report })
    }
}
