//! The boundary to the external radio simulator.

use std::path::Path;

use tracing::{info, warn};

use nr_core::FlowWindow;
use nr_plan::{PortRange, ScenarioPlan};
use nr_stats::{RawFlowRecord, load_records_csv};

use crate::{RunError, RunResult};

/// An engine that can be configured from a plan, run to completion, and then
/// report per-flow counters.
///
/// Implementations own all simulation state.  Callers invoke the three
/// methods in order, once each.
pub trait RadioSimulator {
    /// Configure cells, bands, bearers and attachment from `plan`.
    fn apply_plan(&mut self, plan: &ScenarioPlan) -> RunResult<()>;

    /// Execute the run.  Returns only once the run has completed or aborted.
    fn run(&mut self, window: &FlowWindow) -> RunResult<()>;

    /// Final flow-monitor counters, in observation order.
    fn flow_records(&self) -> RunResult<Vec<RawFlowRecord>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    Planned,
    Finished,
}

/// Replays flow records captured from an earlier simulator run.
///
/// Stage ordering is enforced the same way a live engine would: records are
/// only available after `run`, and `run` only after `apply_plan`.
pub struct ReplaySimulator {
    records: Vec<RawFlowRecord>,
    ports:   Vec<PortRange>,
    stage:   Stage,
}

impl ReplaySimulator {
    pub fn from_records(records: Vec<RawFlowRecord>) -> Self {
        Self { records, ports: Vec::new(), stage: Stage::Idle }
    }

    /// Load the recorded flows from a flow-monitor CSV export.
    pub fn from_csv(path: &Path) -> RunResult<Self> {
        Ok(Self::from_records(load_records_csv(path)?))
    }
}

impl RadioSimulator for ReplaySimulator {
    fn apply_plan(&mut self, plan: &ScenarioPlan) -> RunResult<()> {
        if self.stage != Stage::Idle {
            return Err(RunError::Simulator("plan already applied".into()));
        }
        self.ports = plan.bearers.iter().map(|b| b.ports).collect();
        self.stage = Stage::Planned;
        info!(
            cells = plan.cells.len(),
            terminals = plan.attachment.len(),
            "plan applied"
        );
        Ok(())
    }

    fn run(&mut self, window: &FlowWindow) -> RunResult<()> {
        if self.stage != Stage::Planned {
            return Err(RunError::Simulator("run requested before a plan was applied".into()));
        }
        for r in &self.records {
            if !self.ports.iter().any(|p| p.contains(r.tuple.dst_port)) {
                warn!(flow = r.flow.0, port = r.tuple.dst_port, "flow matches no dedicated bearer");
            }
        }
        self.stage = Stage::Finished;
        info!(
            flows = self.records.len(),
            duration_secs = window.duration_secs(),
            "replayed run complete"
        );
        Ok(())
    }

    fn flow_records(&self) -> RunResult<Vec<RawFlowRecord>> {
        if self.stage != Stage::Finished {
            return Err(RunError::Simulator("flow records read before the run completed".into()));
        }
        Ok(self.records.clone())
    }
}
