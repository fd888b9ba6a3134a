//! The `ReportWriter` trait implemented by all backend writers.

use crate::{FlowKpiRow, NetworkSummaryRow, OutputResult};

/// Trait implemented by the text, CSV, and SQLite writers.
pub trait ReportWriter {
    /// Write per-flow rows, in the order given.
    fn write_flows(&mut self, rows: &[FlowKpiRow]) -> OutputResult<()>;

    /// Write the network summary.
    fn write_summary(&mut self, row: &NetworkSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
