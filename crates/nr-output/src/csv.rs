//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `flow_kpis.csv`
//! - `network_summary.csv`
//!
//! "No data" KPIs are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{FlowKpiRow, NetworkSummaryRow, OutputResult};
use crate::writer::ReportWriter;

/// Writes the report to two CSV files.
pub struct CsvWriter {
    flows:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut flows = Writer::from_path(dir.join("flow_kpis.csv"))?;
        flows.write_record([
            "flow_id", "src_addr", "src_port", "dst_addr", "dst_port", "protocol",
            "tx_packets", "tx_bytes", "offered_mbps", "rx_packets", "rx_bytes",
            "throughput_mbps", "mean_delay_ms", "loss_rate_percent", "status",
        ])?;

        let mut summary = Writer::from_path(dir.join("network_summary.csv"))?;
        summary.write_record([
            "total_flows", "contributing_flows", "mean_throughput_mbps",
            "mean_delay_ms", "packet_loss_rate_percent", "fairness_index",
        ])?;

        Ok(Self { flows, summary, finished: false })
    }
}

fn opt(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl ReportWriter for CsvWriter {
    fn write_flows(&mut self, rows: &[FlowKpiRow]) -> OutputResult<()> {
        for row in rows {
            self.flows.write_record(&[
                row.flow_id.to_string(),
                row.src_addr.clone(),
                row.src_port.to_string(),
                row.dst_addr.clone(),
                row.dst_port.to_string(),
                row.protocol.clone(),
                row.tx_packets.to_string(),
                row.tx_bytes.to_string(),
                row.offered_mbps.to_string(),
                row.rx_packets.to_string(),
                row.rx_bytes.to_string(),
                opt(row.throughput_mbps),
                opt(row.mean_delay_ms),
                opt(row.loss_rate_percent),
                row.status.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &NetworkSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.total_flows.to_string(),
            row.contributing_flows.to_string(),
            opt(row.mean_throughput_mbps),
            opt(row.mean_delay_ms),
            opt(row.packet_loss_rate_percent),
            row.fairness_index.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flows.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
