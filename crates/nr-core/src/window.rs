//! Traffic observation window.
//!
//! Applications start at `app_start_secs` and everything stops at
//! `sim_time_secs`, so flow throughput is measured over
//!
//!   duration = sim_time_secs - app_start_secs

use serde::{Deserialize, Serialize};

use crate::{NrError, NrResult};

/// Simulated run length and the instant traffic sources switch on.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowWindow {
    /// Total simulated time, seconds.
    pub sim_time_secs: f64,
    /// When client and server applications start, seconds.
    pub app_start_secs: f64,
}

impl Default for FlowWindow {
    fn default() -> Self {
        Self { sim_time_secs: 60.0, app_start_secs: 0.1 }
    }
}

impl FlowWindow {
    /// Build a window, rejecting non-finite values and empty or inverted
    /// intervals.
    pub fn new(sim_time_secs: f64, app_start_secs: f64) -> NrResult<Self> {
        let window = Self { sim_time_secs, app_start_secs };
        window.validate()?;
        Ok(window)
    }

    /// Check that the window has a positive, finite duration.
    pub fn validate(&self) -> NrResult<()> {
        if !self.sim_time_secs.is_finite() || !self.app_start_secs.is_finite() {
            return Err(NrError::Config(format!(
                "flow window must be finite (sim_time={}, app_start={})",
                self.sim_time_secs, self.app_start_secs
            )));
        }
        if self.app_start_secs < 0.0 {
            return Err(NrError::Config(format!(
                "app start {} s is negative",
                self.app_start_secs
            )));
        }
        if self.duration_secs() <= 0.0 {
            return Err(NrError::Config(format!(
                "app start {} s is not before sim end {} s",
                self.app_start_secs, self.sim_time_secs
            )));
        }
        Ok(())
    }

    /// Seconds during which traffic can flow.
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.sim_time_secs - self.app_start_secs
    }
}
