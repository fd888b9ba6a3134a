//! `nr-run` — drives one scenario end to end.
//!
//! # Sequence
//!
//! ```text
//! ① Plan      — nr_plan::plan(config); any error aborts before the simulator is touched
//! ② Apply     — RadioSimulator::apply_plan
//! ③ Run       — RadioSimulator::run(window); must complete before ④
//! ④ Collect   — RadioSimulator::flow_records
//! ⑤ Aggregate — nr_stats::aggregate(records, window.duration_secs())
//! ```
//!
//! The radio engine itself is behind [`RadioSimulator`].  [`ReplaySimulator`]
//! stands in for it by replaying flow-monitor output recorded elsewhere.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nr_plan::ScenarioConfig;
//! use nr_run::{NoopObserver, ReplaySimulator, ScenarioRunner};
//!
//! let sim = ReplaySimulator::from_csv(Path::new("flows.csv"))?;
//! let outcome = ScenarioRunner::new(ScenarioConfig::voice(), sim).run(&mut NoopObserver)?;
//! println!("fairness {}", outcome.report.network.fairness_index);
//! ```

pub mod error;
pub mod observer;
pub mod runner;
pub mod simulator;


pub use error::{RunError, RunResult};
pub use observer::{NoopObserver, RunObserver};
pub use runner::{RunOutcome, ScenarioRunner};
pub use simulator::{RadioSimulator, ReplaySimulator};
